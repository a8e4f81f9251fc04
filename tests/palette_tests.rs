// Host-side tests for colors, palettes, the ledger and the catalog.

use configurator_core::*;

#[test]
fn hex_parsing_and_formatting() {
    let red: Rgb = "#E52421".parse().expect("valid hex");
    assert_eq!(red.to_hex(), 0xE5_24_21);
    assert_eq!(red.to_string(), "#E52421");
    assert_eq!("#ff007f".parse::<Rgb>().map(|c| c.to_hex()), Ok(0xFF_00_7F));
}

#[test]
fn hex_parsing_rejects_malformed_input() {
    assert!(matches!("E52421".parse::<Rgb>(), Err(ColorParseError::MissingHash(_))));
    assert!(matches!("#E5242".parse::<Rgb>(), Err(ColorParseError::BadLength(_))));
    assert!(matches!("#E524211".parse::<Rgb>(), Err(ColorParseError::BadLength(_))));
    assert!(matches!("#G52421".parse::<Rgb>(), Err(ColorParseError::BadDigit(_))));
}

#[test]
fn average_intensity_is_plain_mean() {
    assert!((Rgb::new(0.9, 0.9, 0.9).average_intensity() - 0.9).abs() < 1e-6);
    assert!((Rgb::new(0.0, 0.3, 0.6).average_intensity() - 0.3).abs() < 1e-6);
}

#[test]
fn palette_lookup_accepts_name_and_alias() {
    let palettes = Palettes::default();
    let buttons = palettes.for_view(View::Buttons).expect("buttons palette");
    assert_eq!(buttons.len(), 10);
    assert_eq!(buttons.get("Rojo").map(|s| s.name), Some("Red"));
    assert_eq!(buttons.get("red").map(|s| s.hex), Some(0xE5_24_21));
    assert_eq!(buttons.get("Azul").map(|s| s.name), Some("Blue"));
    assert_eq!(buttons.get("ROSA").map(|s| s.name), Some("Pink"));
    assert!(buttons.get("Teal").is_none());
    assert!(palettes.for_view(View::Normal).is_none());
}

#[test]
fn palette_keeps_grid_order() {
    let names: Vec<_> = CONTROLLER_SWATCHES.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        [
            "Green", "Yellow", "Blue", "White", "Orange", "Purple", "Red", "Black", "Pink",
            "Gray"
        ]
    );
}

#[test]
fn ledger_summary_and_chosen_markers() {
    let mut ledger = ConfigurationLedger::new(DEFAULT_CHASSIS_SWATCH);
    assert_eq!(
        ledger.summary(),
        ConfigurationSummary {
            chassis_color_name: "Gray".to_owned(),
            customized_button_count: 0,
            customized_knob_count: 0,
        }
    );
    assert!(ledger.is_chosen(View::Chassis, "Gray"));

    ledger.record_chassis("Green");
    ledger.record_button("Boton_01", "Red");
    ledger.record_button("Boton_02", "Red");
    ledger.record_button("Boton_01", "Blue");
    ledger.record_knob("Knob_Base", "Pink");

    let summary = build_summary(&ledger);
    assert_eq!(summary.chassis_color_name, "Green");
    assert_eq!(summary.customized_button_count, 2);
    assert_eq!(summary.customized_knob_count, 1);
    assert!(ledger.is_chosen(View::Buttons, "Red"));
    assert!(ledger.is_chosen(View::Buttons, "Blue"));
    assert!(!ledger.is_chosen(View::Knobs, "Red"));
    assert!(!ledger.is_chosen(View::Normal, "Green"));
    assert_eq!(
        summary.to_string(),
        "Chassis: Green\nCustomized buttons: 2\nCustomized knobs: 1"
    );
}

#[test]
fn confirmation_text_lists_product_and_configuration() {
    let product = find_product("6").expect("Beato 16");
    let summary = ConfigurationLedger::new("Gray").summary();
    let text = confirmation_text(product, &summary);
    assert!(text.starts_with("Product: Beato 16\nPrice: $355.00\n"));
    assert!(text.ends_with("Customized knobs: 0"));
}

#[test]
fn catalog_lookup() {
    assert_eq!(PRODUCTS.len(), 6);
    assert_eq!(lookup_product("6").map(|p| p.name), Some("Beato 16"));
    assert_eq!(lookup_product("beato 16").map(|p| p.id), Some("6"));
    assert_eq!(lookup_product("Beato16").map(|p| p.id), Some("6"));
    assert!(lookup_product("Theremin").is_none());
    let beato = find_product("6").expect("Beato 16");
    assert_eq!(beato.model_path, "models/BEATO16.glb");
    assert_eq!(beato.price_cents, 355_00);
}

#[test]
fn every_product_has_a_model_and_specs() {
    for product in PRODUCTS {
        assert!(product.model_path.starts_with("models/"), "{}", product.name);
        assert!(product.model_path.ends_with(".glb"), "{}", product.name);
        assert!(!product.specs.is_empty(), "{}", product.name);
        assert_eq!(find_product(product.id), Some(product));
    }
    let mixers: Vec<&str> = PRODUCTS
        .iter()
        .filter(|p| p.category == ProductCategory::Mixers)
        .map(|p| p.name)
        .collect();
    assert_eq!(mixers, ["FADO", "Mixo"]);
    assert_eq!(ProductCategory::Mixers.to_string(), "Mixers");
}
