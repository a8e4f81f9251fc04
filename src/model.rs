use crate::three;
use configurator_core::{MaterialFinish, NodeId, Rgb, SceneGraph};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// [`SceneGraph`] adapter over a loaded GLTF scene.
///
/// Meshes are collected once in traversal order; a node's [`NodeId`] is its
/// index in that list. Raycast hits are mapped back through the mesh uuid.
pub struct ThreeModel {
    root: Option<three::Object3D>,
    meshes: Vec<three::Object3D>,
    names: Vec<String>,
    by_uuid: FnvHashMap<String, NodeId>,
}

impl ThreeModel {
    /// Stand-in used while the asset is still loading (or failed to).
    pub fn empty() -> Self {
        Self {
            root: None,
            meshes: Vec::new(),
            names: Vec::new(),
            by_uuid: FnvHashMap::default(),
        }
    }

    pub fn from_root(root: three::Object3D) -> Self {
        let found: Rc<RefCell<Vec<three::Object3D>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = found.clone();
        let visit = Closure::wrap(Box::new(move |obj: three::Object3D| {
            if obj.is_mesh().unwrap_or(false) {
                obj.set_cast_shadow(true);
                obj.set_receive_shadow(true);
                sink.borrow_mut().push(obj);
            }
        }) as Box<dyn FnMut(three::Object3D)>);
        root.traverse(&visit);
        drop(visit);

        let meshes = found.take();
        let names = meshes.iter().map(|m| m.name()).collect::<Vec<_>>();
        let by_uuid = meshes
            .iter()
            .enumerate()
            .map(|(i, m)| (m.uuid(), NodeId(i as u32)))
            .collect::<FnvHashMap<_, _>>();
        log::info!("[model] {} meshes", meshes.len());
        Self {
            root: Some(root),
            meshes,
            names,
            by_uuid,
        }
    }

    pub fn root(&self) -> Option<&three::Object3D> {
        self.root.as_ref()
    }

    pub fn node_for(&self, object: &three::Object3D) -> Option<NodeId> {
        self.by_uuid.get(&object.uuid()).copied()
    }

    fn mesh(&self, node: NodeId) -> Option<&three::Object3D> {
        self.meshes.get(node.0 as usize)
    }

    // Multi-material meshes report an array; they are treated as having no
    // single authored material.
    fn material(&self, node: NodeId) -> Option<three::Material> {
        let value = self.mesh(node)?.material();
        if !value.is_object() || js_sys::Array::is_array(&value) {
            return None;
        }
        Some(value.unchecked_into::<three::Material>())
    }
}

impl SceneGraph for ThreeModel {
    fn mesh_nodes(&self) -> Vec<NodeId> {
        (0..self.meshes.len() as u32).map(NodeId).collect()
    }

    fn node_name(&self, node: NodeId) -> Option<&str> {
        self.names.get(node.0 as usize).map(String::as_str)
    }

    fn authored_color(&self, node: NodeId) -> Option<Rgb> {
        self.material(node)
            .and_then(|m| m.color())
            .map(|c| three::color_to_rgb(&c))
    }

    fn install_material(&mut self, node: NodeId, finish: &MaterialFinish) {
        if let Some(mesh) = self.mesh(node) {
            mesh.set_material(&three::material_from_finish(finish));
        }
    }

    fn set_color(&mut self, node: NodeId, color: Rgb) {
        if let Some(c) = self.material(node).and_then(|m| m.color()) {
            c.set_hex(color.to_hex());
        }
    }

    fn set_emissive(&mut self, node: NodeId, color: Rgb) {
        if let Some(c) = self.material(node).and_then(|m| m.emissive()) {
            c.set_hex(color.to_hex());
        }
    }
}
