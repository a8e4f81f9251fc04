use crate::constants::*;
use crate::release::ReleaseList;
use crate::three;
use configurator_core::CameraPose;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// three.js renderer, scene, camera and orbit controls bound to the
/// configurator canvas. Owns the loaded model while it is displayed.
pub struct Viewport {
    canvas: web::HtmlCanvasElement,
    renderer: three::WebGLRenderer,
    scene: three::Scene,
    camera: three::PerspectiveCamera,
    controls: three::OrbitControls,
    raycaster: three::Raycaster,
    placeholder: three::Mesh,
    model: RefCell<Option<three::Object3D>>,
}

impl Viewport {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let renderer = three::WebGLRenderer::new(&three::params(&[
            ("canvas", canvas.clone().into()),
            ("antialias", JsValue::TRUE),
            ("alpha", JsValue::TRUE),
        ]))
        .map_err(|e| anyhow::anyhow!("WebGL renderer: {:?}", e))?;
        _ = js_sys::Reflect::set(&renderer.shadow_map(), &"enabled".into(), &JsValue::TRUE);

        let scene = three::Scene::new();
        add_lights(&scene);

        let camera = three::PerspectiveCamera::new(CAMERA_FOV_DEG, 1.0, CAMERA_NEAR, CAMERA_FAR);
        let controls = three::OrbitControls::new(&camera, &canvas);
        controls.set_enable_damping(true);
        controls.set_damping_factor(ORBIT_DAMPING);
        controls.set_min_distance(ORBIT_MIN_DISTANCE);
        controls.set_max_distance(ORBIT_MAX_DISTANCE);

        let placeholder_material = three::MeshStandardMaterial::new(&three::params(&[
            ("color", JsValue::from(PLACEHOLDER_HEX)),
            ("wireframe", JsValue::TRUE),
        ]));
        let placeholder = three::Mesh::new(
            &three::BoxGeometry::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE),
            &placeholder_material.into(),
        );

        let viewport = Self {
            canvas,
            renderer,
            scene,
            camera,
            controls,
            raycaster: three::Raycaster::new(),
            placeholder,
            model: RefCell::new(None),
        };
        viewport.resize();
        viewport.show_placeholder();
        Ok(viewport)
    }

    /// Match the drawing buffer to the canvas' CSS size.
    pub fn resize(&self) {
        let rect = self.canvas.get_bounding_client_rect();
        let width = rect.width().max(1.0);
        let height = rect.height().max(1.0);
        if let Some(w) = web::window() {
            self.renderer
                .set_pixel_ratio(w.device_pixel_ratio().min(MAX_PIXEL_RATIO));
        }
        self.renderer.set_size(width, height, false);
        self.camera.set_aspect(width / height);
        self.camera.update_projection_matrix();
    }

    pub fn show_placeholder(&self) {
        self.release_model();
        self.scene.add(&self.placeholder);
    }

    /// Swap the placeholder for a freshly loaded model.
    pub fn show_model(&self, root: &three::Object3D) {
        self.release_model();
        self.scene.remove(&self.placeholder);
        root.scale().set_scalar(MODEL_SCALE);
        root.rotation().set_y(MODEL_ROTATION_Y);
        // Center on the origin, then lift.
        let center = three::Box3::new()
            .set_from_object(root)
            .get_center(&three::Vector3::new(0.0, 0.0, 0.0));
        let pos = root.position();
        pos.set(
            pos.x() - center.x(),
            pos.y() - center.y() + MODEL_LIFT_Y,
            pos.z() - center.z(),
        );
        self.scene.add(root);
        *self.model.borrow_mut() = Some(root.clone());
    }

    /// Detach the displayed model, if any, and free its geometries and
    /// materials. The placeholder is never owned here.
    fn release_model(&self) {
        let Some(model) = self.model.borrow_mut().take() else {
            return;
        };
        self.scene.remove(&model);

        type Found = (ReleaseList<three::BufferGeometry>, ReleaseList<three::Material>);
        let found: Rc<RefCell<Found>> = Rc::new(RefCell::new(Default::default()));
        let sink = found.clone();
        let visit = Closure::wrap(Box::new(move |obj: three::Object3D| {
            if !obj.is_mesh().unwrap_or(false) {
                return;
            }
            let mut lists = sink.borrow_mut();
            let (geometries, materials) = &mut *lists;
            let geometry = obj.geometry();
            if geometry.is_object() {
                let geometry = geometry.unchecked_into::<three::BufferGeometry>();
                geometries.push(geometry.uuid(), geometry);
            }
            for material in three::materials_of(&obj) {
                materials.push(material.uuid(), material);
            }
        }) as Box<dyn FnMut(three::Object3D)>);
        model.traverse(&visit);
        drop(visit);

        let (geometries, materials) = found.take();
        log::debug!(
            "[model] releasing {} geometries, {} materials",
            geometries.len(),
            materials.len()
        );
        for geometry in geometries.into_items() {
            geometry.dispose();
        }
        for material in materials.into_items() {
            material.dispose();
        }
    }

    pub fn apply_pose(&self, pose: CameraPose, orbit_enabled: bool) {
        let p = pose.position;
        let t = pose.target;
        self.camera.position().set(p.x as f64, p.y as f64, p.z as f64);
        self.controls.target().set(t.x as f64, t.y as f64, t.z as f64);
        self.controls.set_enabled(orbit_enabled);
        self.controls.update();
    }

    /// Pose as left by the orbit controls.
    pub fn current_pose(&self) -> CameraPose {
        let p = self.camera.position();
        let t = self.controls.target();
        CameraPose {
            position: Vec3::new(p.x() as f32, p.y() as f32, p.z() as f32),
            target: Vec3::new(t.x() as f32, t.y() as f32, t.z() as f32),
        }
    }

    /// Advance orbit damping without moving the camera rig.
    pub fn update_controls(&self) {
        self.controls.update();
    }

    pub fn render(&self) {
        self.renderer.render(&self.scene, &self.camera);
    }

    /// Closest model object under a canvas-relative CSS pixel position.
    pub fn pick(&self, x_css: f64, y_css: f64) -> Option<three::Object3D> {
        let model = self.model.borrow();
        let model = model.as_ref()?;
        let rect = self.canvas.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let ndc = three::Vector2::new(
            (x_css / rect.width()) * 2.0 - 1.0,
            1.0 - (y_css / rect.height()) * 2.0,
        );
        self.raycaster.set_from_camera(&ndc, &self.camera);
        let hit = self.raycaster.intersect_object(model, true).get(0);
        if hit.is_undefined() {
            return None;
        }
        js_sys::Reflect::get(&hit, &"object".into())
            .ok()
            .filter(|o| o.is_object())
            .map(|o| o.unchecked_into::<three::Object3D>())
    }
}

fn add_lights(scene: &three::Scene) {
    let (color, intensity) = AMBIENT_LIGHT;
    scene.add(&three::AmbientLight::new(color, intensity));
    for (i, (color, intensity, [x, y, z])) in DIRECTIONAL_LIGHTS.into_iter().enumerate() {
        let light = three::DirectionalLight::new(color, intensity);
        light.position().set(x, y, z);
        // The key light and the overhead light cast shadows.
        light.set_cast_shadow(i == 0 || i == 3);
        scene.add(&light);
    }
    let (color, intensity, [x, y, z]) = POINT_LIGHT;
    let point = three::PointLight::new(color, intensity);
    point.position().set(x, y, z);
    scene.add(&point);
}
