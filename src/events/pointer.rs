use crate::dom;
use crate::session::SharedApp;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Primary-button presses on the canvas select parts in the active tool.
pub fn wire_canvas_pointer(app: SharedApp, canvas: web::HtmlCanvasElement) {
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let (x, y) = dom::pointer_canvas_css(&ev, &canvas);
        app.borrow_mut().pick(x, y);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_window_resize(app: SharedApp) {
    let closure = Closure::wrap(Box::new(move || {
        app.borrow().viewport().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
