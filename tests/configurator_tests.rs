// Host-side tests for a full configurator session over the in-memory scene.

use configurator_core::*;

#[derive(Default)]
struct RecordingCart {
    added: Vec<&'static str>,
}

impl CartSink for RecordingCart {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        self.added.push(product.name);
        Ok(())
    }
}

#[derive(Default)]
struct FailingCart {
    attempts: usize,
}

impl CartSink for FailingCart {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        self.attempts += 1;
        Err(CartError::Rejected {
            id: product.id.to_owned(),
            reason: "storage full".to_owned(),
        })
    }
}

/// Beato 16 style asset: one chassis, sixteen pads, four knob caps with
/// their light shafts, and LED rings.
fn beato16_scene() -> MemoryScene {
    let dark = Rgb::new(0.1, 0.1, 0.1);
    let light = Rgb::new(0.9, 0.9, 0.9);
    let mut scene = MemoryScene::new();
    scene.add_group("Scene");
    scene.add_mesh_with_color("CubeChasis", Rgb::new(0.4, 0.4, 0.4));
    let pad = scene.add_material(dark);
    for i in 1..=16 {
        scene.add_mesh(&format!("Boton_{:02}", i), pad);
    }
    for i in 1..=4 {
        scene.add_mesh_with_color(&format!("Knob_Base_{}", i), dark);
        scene.add_mesh_with_color(&format!("Knob_Top_{}", i), light);
        scene.add_mesh_with_color(&format!("Aro_{}", i), Rgb::BLACK);
    }
    scene.add_mesh_with_color("Screw", light);
    scene
}

fn open_beato() -> (Configurator, MemoryScene) {
    let mut scene = beato16_scene();
    let mut cfg = Configurator::open_product("6", ConfiguratorParams::default())
        .expect("Beato 16 in catalog");
    assert!(cfg.on_asset_loaded(&mut scene));
    (cfg, scene)
}

fn select_buttons(cfg: &mut Configurator, scene: &mut MemoryScene, n: usize) -> Vec<NodeId> {
    let nodes: Vec<NodeId> = cfg.parts().buttons()[..n].to_vec();
    for node in &nodes {
        assert_eq!(cfg.pointer_down(*node, scene), PointerOutcome::Selected(*node));
    }
    nodes
}

#[test]
fn beato16_end_to_end() {
    let (mut cfg, mut scene) = open_beato();
    assert_eq!(cfg.parts().buttons().len(), 16);
    assert_eq!(cfg.parts().knobs().len(), 4);
    assert_eq!(cfg.parts().rings().len(), 4);

    cfg.set_view(View::Buttons, &mut scene);
    let buttons = select_buttons(&mut cfg, &mut scene, 3);
    assert_eq!(cfg.apply_swatch("Azul", &mut scene), ApplyOutcome::Applied(3));
    let blue = find_swatch("Blue").map(|s| s.color());
    for node in &buttons {
        assert_eq!(scene.color_of(*node), blue);
    }

    cfg.set_view(View::Knobs, &mut scene);
    let knob = cfg.parts().knobs()[0];
    cfg.pointer_down(knob, &mut scene);
    assert_eq!(cfg.apply_swatch("Rosa", &mut scene), ApplyOutcome::Applied(1));

    cfg.set_view(View::Normal, &mut scene);
    let summary = cfg.request_purchase().expect("confirmation opens");
    assert_eq!(
        summary,
        ConfigurationSummary {
            chassis_color_name: "Gray".to_owned(),
            customized_button_count: 3,
            customized_knob_count: 1,
        }
    );

    let mut cart = RecordingCart::default();
    assert_eq!(cfg.resolve_purchase(true, &mut cart), Ok(CheckoutOutcome::Added));
    assert_eq!(cart.added, ["Beato 16"]);
    assert!(!cfg.is_open());
    assert_eq!(cfg.close().id, "6");
}

#[test]
fn apply_recolors_exactly_the_selected_nodes() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    let selected = select_buttons(&mut cfg, &mut scene, 2);
    let untouched: Vec<_> = cfg.parts().buttons()[2..].to_vec();
    let chassis = cfg.parts().chassis()[0];
    let chassis_before = scene.color_of(chassis);

    assert_eq!(cfg.apply_swatch("Rojo", &mut scene), ApplyOutcome::Applied(2));
    for node in &selected {
        assert_eq!(scene.color_of(*node), Some(Rgb::from_hex(0xE5_24_21)));
    }
    for node in &untouched {
        assert_eq!(scene.color_of(*node), find_swatch("Black").map(|s| s.color()));
    }
    assert_eq!(scene.color_of(chassis), chassis_before);

    let ledger = cfg.ledger();
    assert_eq!(ledger.buttons().len(), 2);
    assert!(ledger.buttons().values().all(|s| s == "Red"));
    assert!(ledger.buttons().contains_key("Boton_01"));
    assert!(ledger.buttons().contains_key("Boton_02"));
    // Selection and view are unchanged by applying a color.
    assert_eq!(cfg.view(), View::Buttons);
    assert_eq!(cfg.selection().selected(), selected.as_slice());
}

#[test]
fn apply_keeps_the_installed_finish() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Chassis, &mut scene);
    let chassis = cfg.parts().chassis()[0];
    let finish_before = scene.material_of(chassis).and_then(|m| m.finish);
    assert_eq!(cfg.apply_swatch("Green", &mut scene), ApplyOutcome::Applied(1));
    assert_eq!(scene.material_of(chassis).and_then(|m| m.finish), finish_before);
    assert_eq!(cfg.ledger().chassis(), "Green");
}

#[test]
fn apply_on_empty_selection_changes_nothing() {
    let (mut cfg, mut scene) = open_beato();
    let before = cfg.summary();
    cfg.set_view(View::Knobs, &mut scene);
    assert_eq!(cfg.apply_swatch("Red", &mut scene), ApplyOutcome::EmptySelection);
    assert_eq!(cfg.summary(), before);
    assert_eq!(cfg.summary().to_string(), before.to_string());
}

#[test]
fn apply_for_another_view_is_refused() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    select_buttons(&mut cfg, &mut scene, 1);
    let red = *find_swatch("Red").expect("red swatch");
    assert_eq!(cfg.apply_color(View::Knobs, &red, &mut scene), ApplyOutcome::WrongView);
    assert!(cfg.ledger().buttons().is_empty());

    cfg.set_view(View::Normal, &mut scene);
    assert_eq!(cfg.apply_color(View::Normal, &red, &mut scene), ApplyOutcome::WrongView);
    assert_eq!(cfg.apply_swatch("Red", &mut scene), ApplyOutcome::WrongView);
}

#[test]
fn swatch_missing_from_the_active_palette_is_reported() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    select_buttons(&mut cfg, &mut scene, 1);
    assert_eq!(cfg.apply_swatch("Teal", &mut scene), ApplyOutcome::UnknownSwatch);
    assert_eq!(cfg.apply_swatch("", &mut scene), ApplyOutcome::UnknownSwatch);
    // Aliases still resolve.
    assert_eq!(cfg.apply_swatch("rojo", &mut scene), ApplyOutcome::Applied(1));
    assert_eq!(cfg.ledger().buttons().len(), 1);
}

#[test]
fn unknown_swatch_leaves_the_selection_untouched() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    let picked = select_buttons(&mut cfg, &mut scene, 1);
    let before = scene.color_of(picked[0]);
    assert_eq!(cfg.apply_swatch("Teal", &mut scene), ApplyOutcome::UnknownSwatch);
    assert_eq!(scene.color_of(picked[0]), before);
    assert_eq!(cfg.selection().selected(), picked.as_slice());
    assert!(cfg.ledger().buttons().is_empty());
}

#[test]
fn chassis_tool_colors_the_auto_selected_chassis() {
    let (mut cfg, mut scene) = open_beato();
    assert!(cfg.set_view(View::Chassis, &mut scene));
    let chassis = cfg.parts().chassis()[0];
    assert_eq!(cfg.selection().selected(), &[chassis]);
    assert_eq!(scene.emissive_of(chassis), Some(Rgb::from_hex(HIGHLIGHT_EMISSIVE_HEX)));
    assert_eq!(cfg.apply_swatch("Morado", &mut scene), ApplyOutcome::Applied(1));
    assert_eq!(cfg.summary().chassis_color_name, "Purple");
}

#[test]
fn ledger_is_locked_while_confirmation_is_pending() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    select_buttons(&mut cfg, &mut scene, 1);
    cfg.apply_swatch("Red", &mut scene);
    cfg.set_view(View::Normal, &mut scene);
    assert!(cfg.can_finish());
    assert!(cfg.request_purchase().is_some());
    assert!(cfg.request_purchase().is_none());

    // Tool switching is still allowed, but colors are not.
    cfg.set_view(View::Buttons, &mut scene);
    select_buttons(&mut cfg, &mut scene, 1);
    let ledger_before = cfg.ledger().clone();
    assert_eq!(cfg.apply_swatch("Green", &mut scene), ApplyOutcome::Locked);
    assert_eq!(cfg.ledger(), &ledger_before);

    let mut cart = RecordingCart::default();
    assert_eq!(cfg.resolve_purchase(false, &mut cart), Ok(CheckoutOutcome::Cancelled));
    assert!(cart.added.is_empty());
    assert!(cfg.is_open());
    assert_eq!(cfg.ledger(), &ledger_before);
    assert_eq!(cfg.apply_swatch("Green", &mut scene), ApplyOutcome::Applied(1));
}

#[test]
fn purchase_requires_the_normal_view() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Knobs, &mut scene);
    assert!(!cfg.can_finish());
    assert!(cfg.request_purchase().is_none());
    let mut cart = RecordingCart::default();
    assert_eq!(cfg.resolve_purchase(true, &mut cart), Ok(CheckoutOutcome::NotPending));
    assert!(cart.added.is_empty());
}

#[test]
fn cart_failure_keeps_the_session_open_for_retry() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    select_buttons(&mut cfg, &mut scene, 2);
    cfg.apply_swatch("Yellow", &mut scene);
    cfg.set_view(View::Normal, &mut scene);
    let ledger_before = cfg.ledger().clone();

    cfg.request_purchase();
    let mut failing = FailingCart::default();
    let err = cfg.resolve_purchase(true, &mut failing);
    assert!(matches!(err, Err(ConfiguratorError::Cart(CartError::Rejected { .. }))));
    assert_eq!(failing.attempts, 1);
    assert!(cfg.is_open());
    assert!(!cfg.is_confirmation_pending());
    assert_eq!(cfg.ledger(), &ledger_before);

    let summary = cfg.request_purchase().expect("retry opens confirmation");
    assert_eq!(summary.customized_button_count, 2);
    let mut cart = RecordingCart::default();
    assert_eq!(cfg.resolve_purchase(true, &mut cart), Ok(CheckoutOutcome::Added));
    assert_eq!(cart.added.len(), 1);
}

#[test]
fn closed_session_ignores_interaction() {
    let (mut cfg, mut scene) = open_beato();
    cfg.request_purchase();
    cfg.resolve_purchase(true, &mut Cart::new()).expect("cart accepts");
    assert!(!cfg.set_view(View::Buttons, &mut scene));
    let button = cfg.parts().buttons()[0];
    assert_eq!(cfg.pointer_down(button, &mut scene), PointerOutcome::Ignored);
    assert!(cfg.request_purchase().is_none());
}

#[test]
fn asset_is_classified_once() {
    let (mut cfg, mut scene) = open_beato();
    cfg.set_view(View::Buttons, &mut scene);
    let button = cfg.parts().buttons()[0];
    cfg.pointer_down(button, &mut scene);
    cfg.apply_swatch("Red", &mut scene);

    assert!(!cfg.on_asset_loaded(&mut scene));
    assert_eq!(scene.color_of(button), Some(Rgb::from_hex(0xE5_24_21)));
    assert!(cfg.selection().is_selected(button));
}

#[test]
fn view_switch_before_load_is_honoured_on_load() {
    let mut scene = beato16_scene();
    let mut cfg = Configurator::open(
        *find_product("6").expect("Beato 16"),
        ConfiguratorParams::default(),
    );
    assert!(cfg.asset_state().shows_placeholder());
    assert!(cfg.set_view(View::Chassis, &mut scene));
    assert!(cfg.selection().selected().is_empty());

    cfg.on_asset_loaded(&mut scene);
    assert_eq!(cfg.asset_state(), &AssetState::Ready);
    assert_eq!(cfg.selection().selected(), cfg.parts().chassis());
}

#[test]
fn failed_asset_keeps_placeholder_and_session() {
    let mut cfg = Configurator::open_product("Beato 16", ConfiguratorParams::default())
        .expect("Beato 16 by name");
    cfg.on_asset_failed(ConfiguratorError::AssetLoad {
        path: "models/BEATO16.glb".to_owned(),
        reason: "404".to_owned(),
    });
    assert!(matches!(cfg.asset_state(), AssetState::Failed(_)));
    assert!(cfg.asset_state().shows_placeholder());
    assert!(cfg.is_open());
    assert_eq!(cfg.summary().chassis_color_name, "Gray");
}

#[test]
fn unknown_product_is_an_error() {
    let err = Configurator::open_product("Theremin", ConfiguratorParams::default()).err();
    assert_eq!(err, Some(ConfiguratorError::UnknownProduct("Theremin".to_owned())));
}
