use crate::dom;
use crate::keymap::{action_for_key, KeyAction};
use crate::overlay;
use crate::session::SharedApp;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    if !app.borrow().is_open() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let Some(document) = dom::window_document() else {
        return;
    };
    let confirm_open = overlay::is_confirm_open(&document);
    let notice_open = overlay::is_notice_open(&document);
    let mut app = app.borrow_mut();
    match action {
        KeyAction::SwitchView(view) => {
            if !confirm_open && !notice_open {
                app.switch_view(view);
            }
        }
        KeyAction::Finish if confirm_open => app.finish_checkout(true),
        KeyAction::Finish if notice_open => app.dismiss_notice(),
        KeyAction::Finish => app.begin_checkout(),
        KeyAction::Dismiss if confirm_open => app.finish_checkout(false),
        KeyAction::Dismiss if notice_open => app.dismiss_notice(),
        KeyAction::Dismiss => app.close_session(),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
