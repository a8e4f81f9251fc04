use crate::constants::*;
use crate::dom;
use configurator_core::{AssetState, Configurator, View};
use web_sys as web;

/// Re-render the side panel from the session state: tool strip, palette,
/// finish button and asset status.
pub fn render_panel(document: &web::Document, configurator: &Configurator) {
    let view = configurator.view();
    let product = configurator.product();
    dom::set_text(
        document,
        PRODUCT_TITLE_ID,
        &format!("{} {}", product.name, product.price_display()),
    );
    render_tools(document, view);
    render_palette(document, configurator);
    dom::set_visible(document, FINISH_BUTTON_ID, view == View::Normal);
    render_status(document, configurator.asset_state());
}

fn render_tools(document: &web::Document, active: View) {
    for view in View::ALL {
        if let Some(el) = document.get_element_by_id(&format!("{}{}", TOOL_ID_PREFIX, view.id())) {
            dom::set_class(&el, ACTIVE_CLASS, view == active);
            _ = el.set_attribute("aria-label", view.label());
            _ = el.set_attribute("title", view.label());
            _ = el.set_attribute("aria-pressed", if view == active { "true" } else { "false" });
        }
    }
}

fn render_palette(document: &web::Document, configurator: &Configurator) {
    let view = configurator.view();
    dom::set_text(document, PALETTE_TITLE_ID, view.title());
    let Some(grid) = document.get_element_by_id(PALETTE_GRID_ID) else {
        return;
    };
    grid.set_inner_html("");
    let palette = configurator.palette();
    dom::set_visible(document, PALETTE_EMPTY_ID, palette.is_none());
    let Some(palette) = palette else {
        return;
    };
    let ledger = configurator.ledger();
    for swatch in palette.swatches() {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        _ = button.set_attribute("type", "button");
        _ = button.set_attribute(SWATCH_ATTR, swatch.name);
        _ = button.set_attribute("title", swatch.alias);
        _ = button.set_attribute("aria-label", swatch.name);
        _ = button.set_attribute(
            "style",
            &format!("background-color:{}", swatch.color()),
        );
        button.set_class_name("swatch");
        dom::set_class(&button, CHOSEN_CLASS, ledger.is_chosen(view, swatch.name));
        _ = grid.append_child(&button);
    }
}

fn render_status(document: &web::Document, asset: &AssetState) {
    let text = match asset {
        AssetState::Loading => "Loading 3D model",
        AssetState::Ready => "",
        AssetState::Failed(_) => "The 3D model could not be loaded",
    };
    dom::set_text(document, STATUS_ID, text);
    dom::set_visible(document, STATUS_ID, !text.is_empty());
}
