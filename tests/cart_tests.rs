// Host-side tests for the cart accumulator.

use configurator_core::*;

fn product(id: &str) -> &'static Product {
    find_product(id).expect("product in catalog")
}

#[test]
fn duplicate_products_bump_quantity() {
    let mut cart = Cart::new();
    assert!(cart.is_empty());
    cart.add_to_cart(product("6")).expect("add");
    cart.add_to_cart(product("6")).expect("add");
    cart.add_to_cart(product("1")).expect("add");

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.quantity_of("6"), 2);
    assert_eq!(cart.quantity_of("1"), 1);
    assert_eq!(cart.quantity_of("3"), 0);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(
        cart.total_cents(),
        2 * product("6").price_cents as u64 + product("1").price_cents as u64
    );
}

#[test]
fn lines_keep_insertion_order() {
    let mut cart = Cart::new();
    for id in ["3", "1", "3", "5"] {
        cart.add_to_cart(product(id)).expect("add");
    }
    let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id).collect();
    assert_eq!(ids, ["3", "1", "5"]);
}

#[test]
fn purchase_lands_in_the_cart() {
    let mut scene = MemoryScene::new();
    scene.add_mesh_with_color("CubeChasis", Rgb::new(0.3, 0.3, 0.3));
    let mut cart = Cart::new();
    for _ in 0..2 {
        let mut cfg = Configurator::open_product("Beato 16", ConfiguratorParams::default())
            .expect("Beato 16 by name");
        cfg.on_asset_loaded(&mut scene);
        cfg.request_purchase().expect("confirmation opens");
        assert_eq!(cfg.resolve_purchase(true, &mut cart), Ok(CheckoutOutcome::Added));
    }
    assert_eq!(cart.quantity_of("6"), 2);
}

#[test]
fn cart_error_message_names_the_product() {
    let err = ConfiguratorError::from(CartError::Rejected {
        id: "6".to_owned(),
        reason: "offline".to_owned(),
    });
    assert_eq!(err.to_string(), "Cart rejected product \"6\": offline");
}

#[test]
fn additions_queue_until_taken() {
    let mut cart = Cart::new();
    assert!(cart.take_added().is_empty());
    for id in ["6", "1", "6"] {
        cart.add_to_cart(product(id)).expect("add");
    }
    let ids: Vec<_> = cart.take_added().iter().map(|p| p.id).collect();
    assert_eq!(ids, ["6", "1", "6"]);
    assert!(cart.take_added().is_empty());
    // Taking the queue leaves the lines alone.
    assert_eq!(cart.quantity_of("6"), 2);
    assert_eq!(cart.total_items(), 3);
}

#[test]
fn approved_purchase_is_queued_after_checkout_returns() {
    let mut scene = MemoryScene::new();
    scene.add_mesh_with_color("CubeChasis", Rgb::new(0.3, 0.3, 0.3));
    let mut cart = Cart::new();
    let mut cfg = Configurator::open_product("6", ConfiguratorParams::default())
        .expect("Beato 16");
    cfg.on_asset_loaded(&mut scene);
    cfg.request_purchase().expect("confirmation opens");
    assert_eq!(cfg.resolve_purchase(true, &mut cart), Ok(CheckoutOutcome::Added));
    assert!(!cfg.is_open());
    let added = cart.take_added();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].id, "6");
}

#[test]
fn cancelled_purchase_queues_nothing() {
    let mut scene = MemoryScene::new();
    scene.add_mesh_with_color("CubeChasis", Rgb::new(0.3, 0.3, 0.3));
    let mut cart = Cart::new();
    let mut cfg = Configurator::open_product("6", ConfiguratorParams::default())
        .expect("Beato 16");
    cfg.on_asset_loaded(&mut scene);
    cfg.request_purchase().expect("confirmation opens");
    assert_eq!(cfg.resolve_purchase(false, &mut cart), Ok(CheckoutOutcome::Cancelled));
    assert!(cart.take_added().is_empty());
}

#[test]
fn results_compose_with_std_result() {
    fn add_twice(cart: &mut Cart, id: &str) -> Result<u32, CartError> {
        cart.add_to_cart(product(id))?;
        cart.add_to_cart(product(id))?;
        Ok(cart.quantity_of(id))
    }
    fn open(key: &str) -> configurator_core::error::Result<Configurator> {
        Configurator::open_product(key, ConfiguratorParams::default())
    }
    let mut cart = Cart::new();
    assert_eq!(add_twice(&mut cart, "3"), Ok(2));
    assert!(open("FADO").is_ok());
    assert!(open("Theremin").is_err());
}
