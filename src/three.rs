//! Bindings to the global `THREE` namespace: three.js core plus the
//! `GLTFLoader` and `OrbitControls` add-ons loaded as classic scripts.
//!
//! Only the surface the configurator drives is declared here.

use configurator_core::{MaterialFinish, Rgb, ShadingModel};
use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    // ---------------- Object graph ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Object3D;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &Object3D) -> String;
    #[wasm_bindgen(method, getter)]
    pub fn uuid(this: &Object3D) -> String;
    #[wasm_bindgen(method, getter, js_name = isMesh)]
    pub fn is_mesh(this: &Object3D) -> Option<bool>;
    #[wasm_bindgen(method, getter)]
    pub fn material(this: &Object3D) -> JsValue;
    #[wasm_bindgen(method, setter)]
    pub fn set_material(this: &Object3D, material: &Material);
    #[wasm_bindgen(method, getter)]
    pub fn geometry(this: &Object3D) -> JsValue;
    #[wasm_bindgen(method, setter, js_name = castShadow)]
    pub fn set_cast_shadow(this: &Object3D, value: bool);
    #[wasm_bindgen(method, setter, js_name = receiveShadow)]
    pub fn set_receive_shadow(this: &Object3D, value: bool);
    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;
    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);
    #[wasm_bindgen(method)]
    pub fn remove(this: &Object3D, child: &Object3D);
    #[wasm_bindgen(method)]
    pub fn traverse(this: &Object3D, callback: &Closure<dyn FnMut(Object3D)>);

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type Scene;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Scene;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type Mesh;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(geometry: &BoxGeometry, material: &Material) -> Mesh;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type BufferGeometry;
    #[wasm_bindgen(method, getter)]
    pub fn uuid(this: &BufferGeometry) -> String;
    #[wasm_bindgen(method)]
    pub fn dispose(this: &BufferGeometry);

    #[wasm_bindgen(js_namespace = THREE, extends = BufferGeometry)]
    #[derive(Clone, Debug)]
    pub type BoxGeometry;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(width: f64, height: f64, depth: f64) -> BoxGeometry;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type AmbientLight;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f64) -> AmbientLight;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type DirectionalLight;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f64) -> DirectionalLight;

    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type PointLight;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f64) -> PointLight;

    // ---------------- Math ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Vector3;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(x: f64, y: f64, z: f64) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Vector3) -> f64;
    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Vector3) -> f64;
    #[wasm_bindgen(method, getter)]
    pub fn z(this: &Vector3) -> f64;
    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f64, y: f64, z: f64);
    #[wasm_bindgen(method, js_name = setScalar)]
    pub fn set_scalar(this: &Vector3, value: f64);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Vector2;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(x: f64, y: f64) -> Vector2;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Euler;
    #[wasm_bindgen(method, setter)]
    pub fn set_y(this: &Euler, value: f64);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Box3;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Box3;
    #[wasm_bindgen(method, js_name = setFromObject)]
    pub fn set_from_object(this: &Box3, object: &Object3D) -> Box3;
    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Box3, target: &Vector3) -> Vector3;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Color;
    #[wasm_bindgen(method, getter)]
    pub fn r(this: &Color) -> f32;
    #[wasm_bindgen(method, getter)]
    pub fn g(this: &Color) -> f32;
    #[wasm_bindgen(method, getter)]
    pub fn b(this: &Color) -> f32;
    #[wasm_bindgen(method, js_name = setHex)]
    pub fn set_hex(this: &Color, hex: u32);

    // ---------------- Materials ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Material;
    #[wasm_bindgen(method, getter)]
    pub fn color(this: &Material) -> Option<Color>;
    #[wasm_bindgen(method, getter)]
    pub fn emissive(this: &Material) -> Option<Color>;
    #[wasm_bindgen(method, getter)]
    pub fn uuid(this: &Material) -> String;
    #[wasm_bindgen(method)]
    pub fn dispose(this: &Material);

    #[wasm_bindgen(js_namespace = THREE, extends = Material)]
    #[derive(Clone, Debug)]
    pub type MeshStandardMaterial;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(params: &Object) -> MeshStandardMaterial;

    #[wasm_bindgen(js_namespace = THREE, extends = Material)]
    #[derive(Clone, Debug)]
    pub type MeshPhysicalMaterial;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(params: &Object) -> MeshPhysicalMaterial;

    // ---------------- Camera, renderer, controls ----------------
    #[wasm_bindgen(js_namespace = THREE, extends = Object3D)]
    #[derive(Clone, Debug)]
    pub type PerspectiveCamera;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> PerspectiveCamera;
    #[wasm_bindgen(method, setter)]
    pub fn set_aspect(this: &PerspectiveCamera, aspect: f64);
    #[wasm_bindgen(method, js_name = updateProjectionMatrix)]
    pub fn update_projection_matrix(this: &PerspectiveCamera);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type WebGLRenderer;
    #[wasm_bindgen(constructor, js_namespace = THREE, catch)]
    pub fn new(params: &Object) -> Result<WebGLRenderer, JsValue>;
    #[wasm_bindgen(method, js_name = setSize)]
    pub fn set_size(this: &WebGLRenderer, width: f64, height: f64, update_style: bool);
    #[wasm_bindgen(method, js_name = setPixelRatio)]
    pub fn set_pixel_ratio(this: &WebGLRenderer, ratio: f64);
    #[wasm_bindgen(method, getter, js_name = shadowMap)]
    pub fn shadow_map(this: &WebGLRenderer) -> Object;
    #[wasm_bindgen(method)]
    pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &PerspectiveCamera);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Raycaster;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Raycaster;
    #[wasm_bindgen(method, js_name = setFromCamera)]
    pub fn set_from_camera(this: &Raycaster, coords: &Vector2, camera: &PerspectiveCamera);
    #[wasm_bindgen(method, js_name = intersectObject)]
    pub fn intersect_object(this: &Raycaster, object: &Object3D, recursive: bool) -> Array;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type OrbitControls;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(camera: &PerspectiveCamera, dom_element: &web::HtmlCanvasElement) -> OrbitControls;
    #[wasm_bindgen(method, setter)]
    pub fn set_enabled(this: &OrbitControls, value: bool);
    #[wasm_bindgen(method, setter, js_name = enableDamping)]
    pub fn set_enable_damping(this: &OrbitControls, value: bool);
    #[wasm_bindgen(method, setter, js_name = dampingFactor)]
    pub fn set_damping_factor(this: &OrbitControls, value: f64);
    #[wasm_bindgen(method, setter, js_name = minDistance)]
    pub fn set_min_distance(this: &OrbitControls, value: f64);
    #[wasm_bindgen(method, setter, js_name = maxDistance)]
    pub fn set_max_distance(this: &OrbitControls, value: f64);
    #[wasm_bindgen(method, getter)]
    pub fn target(this: &OrbitControls) -> Vector3;
    #[wasm_bindgen(method)]
    pub fn update(this: &OrbitControls);

    // ---------------- Asset loading ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type GLTFLoader;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> GLTFLoader;
    #[wasm_bindgen(method, js_name = loadAsync)]
    pub fn load_async(this: &GLTFLoader, url: &str) -> Promise;
}

/// Plain JS object for three.js constructor parameters.
pub fn params(entries: &[(&str, JsValue)]) -> Object {
    let obj = Object::new();
    for (key, value) in entries {
        _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj
}

fn num(v: f32) -> JsValue {
    JsValue::from_f64(v as f64)
}

/// Construct a fresh material instance from a finish description.
pub fn material_from_finish(finish: &MaterialFinish) -> Material {
    let mut entries = vec![
        ("color", JsValue::from(finish.color.to_hex())),
        ("metalness", num(finish.metalness)),
        ("roughness", num(finish.roughness)),
    ];
    if let Some(opacity) = finish.opacity {
        entries.push(("transparent", JsValue::TRUE));
        entries.push(("opacity", num(opacity)));
    }
    match finish.model {
        ShadingModel::Standard => MeshStandardMaterial::new(&params(&entries)).into(),
        ShadingModel::Physical => {
            entries.push(("clearcoat", num(finish.clearcoat)));
            entries.push(("clearcoatRoughness", num(finish.clearcoat_roughness)));
            if let Some(reflectivity) = finish.reflectivity {
                entries.push(("reflectivity", num(reflectivity)));
            }
            if let Some(sheen) = finish.sheen {
                entries.push(("sheen", num(sheen.intensity)));
                entries.push(("sheenColor", JsValue::from(sheen.color.to_hex())));
            }
            if finish.transmission > 0.0 {
                entries.push(("transmission", num(finish.transmission)));
                entries.push(("thickness", num(finish.thickness)));
            }
            MeshPhysicalMaterial::new(&params(&entries)).into()
        }
    }
}

pub fn color_to_rgb(color: &Color) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

/// Materials of a mesh; multi-material meshes hold an array.
pub fn materials_of(mesh: &Object3D) -> Vec<Material> {
    let value = mesh.material();
    if Array::is_array(&value) {
        Array::from(&value)
            .iter()
            .filter(JsValue::is_object)
            .map(|m| m.unchecked_into::<Material>())
            .collect()
    } else if value.is_object() {
        vec![value.unchecked_into::<Material>()]
    } else {
        Vec::new()
    }
}
