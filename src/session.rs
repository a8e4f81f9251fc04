use crate::cart::DomCart;
use crate::dom;
use crate::model::ThreeModel;
use crate::overlay;
use crate::render::Viewport;
use crate::three;
use crate::ui;
use configurator_core::{
    confirmation_text, ApplyOutcome, CheckoutOutcome, Configurator, ConfiguratorError,
    ConfiguratorParams, View,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// An open configurator together with the asset it customizes.
struct Session {
    configurator: Configurator,
    model: ThreeModel,
}

/// Page-level state: the viewport, at most one open session and the cart.
pub struct App {
    viewport: Viewport,
    session: Option<Session>,
    cart: DomCart,
    params: ConfiguratorParams,
    // Bumped on every open and close; asset loads finishing for an older
    // generation are dropped.
    generation: u64,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn new(viewport: Viewport, params: ConfiguratorParams) -> Self {
        Self {
            viewport,
            session: None,
            cart: DomCart::new(),
            params,
            generation: 0,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    fn refresh_panel(&self) {
        if let (Some(document), Some(session)) = (dom::window_document(), self.session.as_ref()) {
            ui::render_panel(&document, &session.configurator);
        }
    }

    /// Start a session for `key` (product id or name) and return the model
    /// path to load along with the session generation.
    fn begin_session(&mut self, key: &str) -> Result<(String, u64), ConfiguratorError> {
        let configurator = Configurator::open_product(key, self.params)?;
        self.close_session();
        self.generation += 1;
        let rig = configurator.camera();
        self.viewport.show_placeholder();
        self.viewport.apply_pose(rig.pose(), rig.orbit_enabled());
        let path = configurator.product().model_path.to_owned();
        self.session = Some(Session {
            configurator,
            model: ThreeModel::empty(),
        });
        if let Some(document) = dom::window_document() {
            overlay::hide_confirm(&document);
            overlay::hide_notice(&document);
            overlay::show_configurator(&document);
        }
        self.viewport.resize();
        self.refresh_panel();
        Ok((path, self.generation))
    }

    fn finish_loading(&mut self, generation: u64, loaded: Result<three::Object3D, ConfiguratorError>) {
        if generation != self.generation {
            log::debug!("[asset] dropping stale load (generation {})", generation);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match loaded {
            Ok(root) => {
                let mut model = ThreeModel::from_root(root);
                if let Some(root) = model.root() {
                    self.viewport.show_model(root);
                }
                session.configurator.on_asset_loaded(&mut model);
                session.model = model;
            }
            // The placeholder stays up.
            Err(e) => session.configurator.on_asset_failed(e),
        }
        self.refresh_panel();
    }

    pub fn switch_view(&mut self, view: View) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.configurator.set_view(view, &mut session.model) {
            self.refresh_panel();
        }
    }

    pub fn apply_swatch(&mut self, key: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.configurator.apply_swatch(key, &mut session.model) {
            ApplyOutcome::Applied(_) => self.refresh_panel(),
            ApplyOutcome::UnknownSwatch => log::warn!("[color] no swatch named {:?}", key),
            outcome => log::debug!("[color] {} not applied: {:?}", key, outcome),
        }
    }

    /// Hand a canvas-relative pointer press to the selection machine.
    pub fn pick(&mut self, x_css: f64, y_css: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.configurator.view().is_customizing() {
            return;
        }
        let Some(node) = self
            .viewport
            .pick(x_css, y_css)
            .and_then(|obj| session.model.node_for(&obj))
        else {
            return;
        };
        session.configurator.pointer_down(node, &mut session.model);
    }

    pub fn begin_checkout(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let Some(summary) = session.configurator.request_purchase() else {
            return;
        };
        let text = confirmation_text(session.configurator.product(), &summary);
        if let Some(document) = dom::window_document() {
            overlay::show_confirm(&document, &text);
        }
    }

    pub fn finish_checkout(&mut self, approved: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.configurator.resolve_purchase(approved, &mut self.cart);
        let name = session.configurator.product().name;
        let Some(document) = dom::window_document() else {
            return;
        };
        overlay::hide_confirm(&document);
        match result {
            Ok(CheckoutOutcome::Added) => {
                overlay::show_notice(&document, &format!("{} was added to your cart.", name));
            }
            Ok(CheckoutOutcome::Cancelled) | Ok(CheckoutOutcome::NotPending) => {}
            Err(e) => {
                log::error!("[checkout] {}", e);
                overlay::show_notice(
                    &document,
                    &format!("{} could not be added to your cart. Please try again.", name),
                );
            }
        }
    }

    /// Dismiss the notice; a session whose purchase went through closes with it.
    pub fn dismiss_notice(&mut self) {
        if let Some(document) = dom::window_document() {
            overlay::hide_notice(&document);
        }
        let purchased = self
            .session
            .as_ref()
            .map(|s| !s.configurator.is_open())
            .unwrap_or(false);
        if purchased {
            self.close_session();
        }
    }

    pub fn close_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.generation += 1;
        session.configurator.close();
        self.viewport.show_placeholder();
        if let Some(document) = dom::window_document() {
            overlay::hide_confirm(&document);
            overlay::hide_notice(&document);
            overlay::hide_configurator(&document);
        }
    }

    /// Per-frame camera update followed by a render.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(session) = self.session.as_mut() {
            let rig = session.configurator.camera_mut();
            if !rig.is_settled() {
                let pose = rig.tick(dt);
                self.viewport.apply_pose(pose, rig.orbit_enabled() && rig.is_settled());
            } else if rig.orbit_enabled() {
                self.viewport.update_controls();
                rig.sync_pose(self.viewport.current_pose());
            }
        }
        self.viewport.render();
    }
}

/// Open the configurator for `key` and load its model in the background.
pub fn open_session(app: &SharedApp, key: &str) {
    let opened = app.borrow_mut().begin_session(key);
    let (path, generation) = match opened {
        Ok(v) => v,
        Err(e) => {
            log::error!("[session] {}", e);
            return;
        }
    };
    let app = app.clone();
    spawn_local(async move {
        let loaded = load_model(&path).await;
        app.borrow_mut().finish_loading(generation, loaded);
    });
}

async fn load_model(path: &str) -> Result<three::Object3D, ConfiguratorError> {
    let failed = |reason: String| ConfiguratorError::AssetLoad {
        path: path.to_owned(),
        reason,
    };
    log::info!("[asset] loading {}", path);
    let gltf = JsFuture::from(three::GLTFLoader::new().load_async(path))
        .await
        .map_err(|e| failed(format!("{:?}", e)))?;
    let scene = js_sys::Reflect::get(&gltf, &"scene".into())
        .map_err(|e| failed(format!("{:?}", e)))?;
    if !scene.is_object() {
        return Err(failed("asset has no scene".to_owned()));
    }
    Ok(scene.unchecked_into::<three::Object3D>())
}
