use crate::constants::{CART_ADD_EVENT, CART_COUNT_ID};
use crate::dom;
use configurator_core::{Cart, CartError, CartSink, Product};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Page cart: keeps the running [`Cart`] and announces each addition to the
/// storefront with a `cart:add` DOM event carrying the product id.
///
/// Additions are announced from a spawned task. Storefront listeners run
/// after the click handler that approved the purchase has returned, so they
/// may call back into the configurator.
pub struct DomCart {
    cart: Cart,
}

impl DomCart {
    pub fn new() -> Self {
        Self { cart: Cart::new() }
    }
}

impl CartSink for DomCart {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        self.cart.add_to_cart(product)?;
        if let Some(document) = dom::window_document() {
            dom::set_text(
                &document,
                CART_COUNT_ID,
                &self.cart.total_items().to_string(),
            );
        }
        let added = self.cart.take_added();
        spawn_local(async move {
            for product in added {
                if let Err(e) = announce(&product) {
                    log::warn!("[cart] {} not announced: {:?}", product.id, e);
                }
            }
        });
        Ok(())
    }
}

fn announce(product: &Product) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let detail = js_sys::Object::new();
    js_sys::Reflect::set(&detail, &"id".into(), &product.id.into())?;
    js_sys::Reflect::set(&detail, &"name".into(), &product.name.into())?;
    js_sys::Reflect::set(
        &detail,
        &"price".into(),
        &JsValue::from(product.price_cents as f64 / 100.0),
    )?;
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    let event = web::CustomEvent::new_with_event_init_dict(CART_ADD_EVENT, &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}
