use crate::constants::*;
use crate::dom;
use crate::session::{open_session, SharedApp};
use configurator_core::View;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tool strip, palette grid, finish/close buttons and the dialog buttons.
pub fn wire_panel_controls(document: &web::Document, app: &SharedApp) {
    for view in View::ALL {
        let app = app.clone();
        dom::add_click_listener(document, &format!("{}{}", TOOL_ID_PREFIX, view.id()), move || {
            app.borrow_mut().switch_view(view);
        });
    }
    wire_palette_grid(document, app.clone());

    let a = app.clone();
    dom::add_click_listener(document, FINISH_BUTTON_ID, move || a.borrow_mut().begin_checkout());
    let a = app.clone();
    dom::add_click_listener(document, CLOSE_BUTTON_ID, move || a.borrow_mut().close_session());
    let a = app.clone();
    dom::add_click_listener(document, CONFIRM_OK_ID, move || a.borrow_mut().finish_checkout(true));
    let a = app.clone();
    dom::add_click_listener(document, CONFIRM_CANCEL_ID, move || {
        a.borrow_mut().finish_checkout(false)
    });
    let a = app.clone();
    dom::add_click_listener(document, NOTICE_OK_ID, move || a.borrow_mut().dismiss_notice());
}

// Swatch buttons are rebuilt on every panel render, so clicks are delegated
// to the grid.
fn wire_palette_grid(document: &web::Document, app: SharedApp) {
    let Some(grid) = document.get_element_by_id(PALETTE_GRID_ID) else {
        log::warn!("[dom] missing #{}", PALETTE_GRID_ID);
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(key) = dom::closest_with_attr(ev.target(), SWATCH_ATTR)
            .and_then(|el| el.get_attribute(SWATCH_ATTR))
        else {
            return;
        };
        app.borrow_mut().apply_swatch(&key);
    }) as Box<dyn FnMut(_)>);
    _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Storefront "customize" buttons: any element carrying
/// `data-open-configurator="<product id or name>"`.
pub fn wire_open_buttons(document: &web::Document, app: SharedApp) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(key) = dom::closest_with_attr(ev.target(), OPEN_CONFIGURATOR_ATTR)
            .and_then(|el| el.get_attribute(OPEN_CONFIGURATOR_ATTR))
        else {
            return;
        };
        ev.prevent_default();
        open_session(&app, &key);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
