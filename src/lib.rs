#![cfg(target_arch = "wasm32")]
use configurator_core::ConfiguratorParams;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cart;
mod constants;
mod dom;
mod events;
mod frame;
mod keymap;
mod model;
mod overlay;
mod release;
mod render;
mod session;
mod three;
mod ui;

use constants::{AUTO_OPEN_ATTR, CANVAS_ID};
use session::{App, SharedApp};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("creart-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let auto_open = canvas.get_attribute(AUTO_OPEN_ATTR);
    let viewport = render::Viewport::new(canvas.clone())?;
    let app: SharedApp = Rc::new(RefCell::new(App::new(
        viewport,
        ConfiguratorParams::default(),
    )));
    overlay::hide_configurator(&document);

    events::wire_panel_controls(&document, &app);
    events::wire_open_buttons(&document, app.clone());
    events::wire_canvas_pointer(app.clone(), canvas);
    events::wire_global_keydown(app.clone());
    events::wire_window_resize(app.clone());

    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));
    // Standalone configurator page: the canvas names the product to open.
    if let Some(key) = auto_open {
        session::open_session(&app, &key);
    }

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(app))));
    Ok(())
}

/// Open the configurator from page script, e.g. `openConfigurator("6")`.
#[wasm_bindgen(js_name = openConfigurator)]
pub fn open_configurator(key: &str) {
    APP.with(|slot| match slot.borrow().as_ref() {
        Some(app) => session::open_session(app, key),
        None => log::warn!("[session] configurator not initialised yet"),
    });
}

thread_local! {
    static APP: RefCell<Option<SharedApp>> = const { RefCell::new(None) };
}
