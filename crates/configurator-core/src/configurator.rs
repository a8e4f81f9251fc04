//! One configurator session: the product being customized, its classified
//! parts, the active tool and selection, the color ledger and the checkout
//! handshake.
//!
//! Every method runs synchronously to completion. Methods that touch the
//! rendering engine take the [`SceneGraph`] explicitly; the session never
//! owns it. Interactions that are not legal in the current state are
//! reported as typed outcomes, never as errors.

use std::time::Duration;

use crate::cart::CartSink;
use crate::catalog::{lookup_product, Product};
use crate::classify::PartIndex;
use crate::color::Rgb;
use crate::constants::{CAMERA_TRANSITION_SEC, DEFAULT_CHASSIS_SWATCH, HIGHLIGHT_EMISSIVE_HEX};
use crate::error::{ConfiguratorError, Result};
use crate::ledger::{build_summary, ConfigurationLedger, ConfigurationSummary};
use crate::palette::{Palette, Palettes, Swatch};
use crate::scene::{NodeId, SceneGraph};
use crate::selection::{refresh_highlights, PointerOutcome, SelectionState, View};
use crate::state::CameraRig;

/// Session tuning.
///
/// - `highlight_emissive`: emissive color of selected parts
/// - `camera_transition`: length of the camera move between framings
/// - `default_chassis_swatch`: ledger chassis entry before any choice
/// - `palettes`: swatches offered per tool
#[derive(Clone, Copy, Debug)]
pub struct ConfiguratorParams {
    pub highlight_emissive: Rgb,
    pub camera_transition: Duration,
    pub default_chassis_swatch: &'static str,
    pub palettes: Palettes,
}

impl Default for ConfiguratorParams {
    fn default() -> Self {
        Self {
            highlight_emissive: Rgb::from_hex(HIGHLIGHT_EMISSIVE_HEX),
            camera_transition: Duration::from_secs_f32(CAMERA_TRANSITION_SEC),
            default_chassis_swatch: DEFAULT_CHASSIS_SWATCH,
            palettes: Palettes::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetState {
    Loading,
    Ready,
    Failed(ConfiguratorError),
}

impl AssetState {
    /// Loading and failed assets both render the neutral placeholder.
    pub fn shows_placeholder(&self) -> bool {
        !matches!(self, AssetState::Ready)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Number of nodes recolored.
    Applied(usize),
    /// Requested view is not the active one, or is `Normal`.
    WrongView,
    EmptySelection,
    /// The key names no swatch of the active view's palette.
    UnknownSwatch,
    /// A purchase confirmation is pending, or the session is closed.
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Product handed to the cart; the session is now closed.
    Added,
    /// Confirmation declined; the session stays open.
    Cancelled,
    /// No confirmation was pending.
    NotPending,
}

pub struct Configurator {
    product: Product,
    params: ConfiguratorParams,
    asset: AssetState,
    parts: PartIndex,
    classified: bool,
    selection: SelectionState,
    ledger: ConfigurationLedger,
    camera: CameraRig,
    confirmation_pending: bool,
    open: bool,
}

impl Configurator {
    pub fn open(product: Product, params: ConfiguratorParams) -> Self {
        log::info!("[session] open {} ({})", product.name, product.model_path);
        Self {
            product,
            asset: AssetState::Loading,
            parts: PartIndex::default(),
            classified: false,
            selection: SelectionState::new(),
            ledger: ConfigurationLedger::new(params.default_chassis_swatch),
            camera: CameraRig::new(View::Normal, params.camera_transition),
            confirmation_pending: false,
            open: true,
            params,
        }
    }

    /// Open a session for a catalog product by id or name.
    pub fn open_product(key: &str, params: ConfiguratorParams) -> Result<Self> {
        let product = lookup_product(key)
            .ok_or_else(|| ConfiguratorError::UnknownProduct(key.to_owned()))?;
        Ok(Self::open(*product, params))
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn asset_state(&self) -> &AssetState {
        &self.asset
    }

    pub fn parts(&self) -> &PartIndex {
        &self.parts
    }

    pub fn view(&self) -> View {
        self.selection.view()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn ledger(&self) -> &ConfigurationLedger {
        &self.ledger
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    /// Palette for the active view; `None` in `Normal`.
    pub fn palette(&self) -> Option<&Palette> {
        self.params.palettes.for_view(self.view())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_confirmation_pending(&self) -> bool {
        self.confirmation_pending
    }

    /// "Finish & order" is offered only in the orbit view.
    pub fn can_finish(&self) -> bool {
        self.open && self.view() == View::Normal && !self.confirmation_pending
    }

    /// Classify the freshly loaded asset. Runs once per session; later
    /// notifications return `false` without touching the scene.
    pub fn on_asset_loaded<S: SceneGraph + ?Sized>(&mut self, scene: &mut S) -> bool {
        if self.classified {
            log::debug!("[session] asset already classified; skipping");
            return false;
        }
        self.parts = PartIndex::classify(scene);
        self.classified = true;
        self.asset = AssetState::Ready;
        // A tool may already be active if the user switched views while loading.
        self.selection.reset_for_view(&self.parts);
        refresh_highlights(scene, &self.parts, &self.selection, self.params.highlight_emissive);
        true
    }

    pub fn on_asset_failed(&mut self, error: ConfiguratorError) {
        log::error!("[session] {}", error);
        if !self.classified {
            self.asset = AssetState::Failed(error);
        }
    }

    /// Switch tools: clears selections, applies the chassis auto-select
    /// rule, retargets the camera and refreshes highlights.
    pub fn set_view<S: SceneGraph + ?Sized>(&mut self, view: View, scene: &mut S) -> bool {
        if !self.open || !self.selection.set_view(view, &self.parts) {
            return false;
        }
        log::info!("[view] {}", view.id());
        self.camera.retarget(view);
        refresh_highlights(scene, &self.parts, &self.selection, self.params.highlight_emissive);
        true
    }

    pub fn pointer_down<S: SceneGraph + ?Sized>(
        &mut self,
        node: NodeId,
        scene: &mut S,
    ) -> PointerOutcome {
        if !self.open {
            return PointerOutcome::Ignored;
        }
        let outcome = self.selection.pointer_down(node, &self.parts);
        if outcome != PointerOutcome::Ignored {
            log::debug!("[select] {:?}", outcome);
            refresh_highlights(scene, &self.parts, &self.selection, self.params.highlight_emissive);
        }
        outcome
    }

    /// Recolor every selected node of `view` in place and record the swatch
    /// in the ledger.
    pub fn apply_color<S: SceneGraph + ?Sized>(
        &mut self,
        view: View,
        swatch: &Swatch,
        scene: &mut S,
    ) -> ApplyOutcome {
        if !self.open || self.confirmation_pending {
            return ApplyOutcome::Locked;
        }
        if view != self.view() || !view.is_customizing() {
            return ApplyOutcome::WrongView;
        }
        let selected = self.selection.selected();
        if selected.is_empty() {
            return ApplyOutcome::EmptySelection;
        }
        let color = swatch.color();
        for node in selected {
            scene.set_color(*node, color);
            let name = self.parts.name_of(*node).unwrap_or_default();
            match view {
                View::Chassis => self.ledger.record_chassis(swatch.name),
                View::Buttons => self.ledger.record_button(name, swatch.name),
                View::Knobs => self.ledger.record_knob(name, swatch.name),
                View::Normal => {}
            }
        }
        log::info!("[color] {} x{} -> {}", view.id(), selected.len(), swatch.name);
        ApplyOutcome::Applied(selected.len())
    }

    /// Apply a swatch of the active view's palette by name or alias.
    pub fn apply_swatch<S: SceneGraph + ?Sized>(&mut self, key: &str, scene: &mut S) -> ApplyOutcome {
        let view = self.view();
        let Some(palette) = self.palette() else {
            return ApplyOutcome::WrongView;
        };
        match palette.get(key) {
            Some(swatch) => self.apply_color(view, swatch, scene),
            None => ApplyOutcome::UnknownSwatch,
        }
    }

    pub fn summary(&self) -> ConfigurationSummary {
        build_summary(&self.ledger)
    }

    /// Begin the purchase confirmation. Locks the ledger until
    /// [`Configurator::resolve_purchase`] is called.
    pub fn request_purchase(&mut self) -> Option<ConfigurationSummary> {
        if !self.can_finish() {
            return None;
        }
        self.confirmation_pending = true;
        log::info!("[checkout] confirmation requested for {}", self.product.name);
        Some(self.summary())
    }

    /// Finish the confirmation. On approval the cart receives exactly one
    /// `add_to_cart`; if it fails, the session stays open with the ledger
    /// intact so the user can confirm again.
    pub fn resolve_purchase<C: CartSink + ?Sized>(
        &mut self,
        approved: bool,
        cart: &mut C,
    ) -> Result<CheckoutOutcome> {
        if !self.confirmation_pending {
            return Ok(CheckoutOutcome::NotPending);
        }
        self.confirmation_pending = false;
        if !approved {
            log::info!("[checkout] cancelled");
            return Ok(CheckoutOutcome::Cancelled);
        }
        cart.add_to_cart(&self.product)?;
        log::info!("[checkout] {} added to cart", self.product.name);
        self.open = false;
        Ok(CheckoutOutcome::Added)
    }

    /// Discard the session. Ledger and selections are dropped; the caller
    /// releases the loaded asset.
    pub fn close(self) -> Product {
        log::info!(
            "[session] close {} (purchased: {})",
            self.product.name,
            !self.open
        );
        self.product
    }
}
