//! Boundary between the configurator and the externally owned scene graph.
//!
//! The rendering engine owns every node and material. The configurator only
//! refers to mesh nodes by [`NodeId`] and drives them through [`SceneGraph`],
//! so the engine can be swapped without touching selection or ledger logic.
//! [`MemoryScene`] is a headless implementation used by tests and tooling.

use crate::color::Rgb;

/// Identity handle for a mesh node, issued by the scene-graph adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadingModel {
    Standard,
    Physical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheen {
    pub intensity: f32,
    pub color: Rgb,
}

/// Description of a freshly constructed material.
///
/// Physical-only properties (`clearcoat`, `reflectivity`, `sheen`,
/// `transmission`, `thickness`) are ignored by standard materials.
/// `opacity: Some(_)` marks the material transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialFinish {
    pub model: ShadingModel,
    pub color: Rgb,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
    pub clearcoat_roughness: f32,
    pub reflectivity: Option<f32>,
    pub sheen: Option<Sheen>,
    pub transmission: f32,
    pub thickness: f32,
    pub opacity: Option<f32>,
}

impl MaterialFinish {
    pub fn standard(color: Rgb, metalness: f32, roughness: f32) -> Self {
        Self {
            model: ShadingModel::Standard,
            color,
            metalness,
            roughness,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            reflectivity: None,
            sheen: None,
            transmission: 0.0,
            thickness: 0.0,
            opacity: None,
        }
    }

    pub fn physical(color: Rgb, metalness: f32, roughness: f32) -> Self {
        Self {
            model: ShadingModel::Physical,
            ..Self::standard(color, metalness, roughness)
        }
    }

    pub fn with_clearcoat(mut self, clearcoat: f32, roughness: f32) -> Self {
        self.clearcoat = clearcoat;
        self.clearcoat_roughness = roughness;
        self
    }
}

/// Operations the configurator needs from a rendering engine's object graph.
pub trait SceneGraph {
    /// Every mesh node of the loaded asset, in traversal order.
    fn mesh_nodes(&self) -> Vec<NodeId>;

    fn node_name(&self, node: NodeId) -> Option<&str>;

    /// Color of the material the asset was authored with, if it has one.
    fn authored_color(&self, node: NodeId) -> Option<Rgb>;

    /// Replace the node's material with a new instance that is not shared
    /// with any other node.
    fn install_material(&mut self, node: NodeId, finish: &MaterialFinish);

    /// Mutate the color of the node's current material in place.
    fn set_color(&mut self, node: NodeId, color: Rgb);

    fn set_emissive(&mut self, node: NodeId, color: Rgb);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct MemoryMaterial {
    pub finish: Option<MaterialFinish>,
    pub color: Rgb,
    pub emissive: Rgb,
}

#[derive(Clone, Debug)]
struct MemoryNode {
    name: String,
    is_mesh: bool,
    material: Option<MaterialHandle>,
}

/// In-memory scene graph. Materials live in their own arena so several
/// nodes may share one, as exported assets frequently do.
#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    nodes: Vec<MemoryNode>,
    materials: Vec<MemoryMaterial>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_material(&mut self, color: Rgb) -> MaterialHandle {
        self.materials.push(MemoryMaterial {
            finish: None,
            color,
            emissive: Rgb::BLACK,
        });
        MaterialHandle(self.materials.len() - 1)
    }

    pub fn add_mesh(&mut self, name: &str, material: MaterialHandle) -> NodeId {
        self.push_node(name, true, Some(material))
    }

    /// Mesh with its own authored material of the given color.
    pub fn add_mesh_with_color(&mut self, name: &str, color: Rgb) -> NodeId {
        let material = self.add_material(color);
        self.add_mesh(name, material)
    }

    /// Mesh whose authored material exposes no color.
    pub fn add_bare_mesh(&mut self, name: &str) -> NodeId {
        self.push_node(name, true, None)
    }

    /// Non-mesh node (group, empty, light); never reported by `mesh_nodes`.
    pub fn add_group(&mut self, name: &str) -> NodeId {
        self.push_node(name, false, None)
    }

    fn push_node(&mut self, name: &str, is_mesh: bool, material: Option<MaterialHandle>) -> NodeId {
        self.nodes.push(MemoryNode {
            name: name.to_owned(),
            is_mesh,
            material,
        });
        NodeId((self.nodes.len() - 1) as u32)
    }

    pub fn material_handle(&self, node: NodeId) -> Option<MaterialHandle> {
        self.nodes.get(node.0 as usize).and_then(|n| n.material)
    }

    pub fn material_of(&self, node: NodeId) -> Option<&MemoryMaterial> {
        self.material_handle(node)
            .and_then(|h| self.materials.get(h.0))
    }

    pub fn color_of(&self, node: NodeId) -> Option<Rgb> {
        self.material_of(node).map(|m| m.color)
    }

    pub fn emissive_of(&self, node: NodeId) -> Option<Rgb> {
        self.material_of(node).map(|m| m.emissive)
    }

    pub fn shares_material(&self, a: NodeId, b: NodeId) -> bool {
        match (self.material_handle(a), self.material_handle(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    fn material_mut(&mut self, node: NodeId) -> Option<&mut MemoryMaterial> {
        let handle = self.material_handle(node)?;
        self.materials.get_mut(handle.0)
    }
}

impl SceneGraph for MemoryScene {
    fn mesh_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_mesh)
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn node_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0 as usize).map(|n| n.name.as_str())
    }

    fn authored_color(&self, node: NodeId) -> Option<Rgb> {
        self.color_of(node)
    }

    fn install_material(&mut self, node: NodeId, finish: &MaterialFinish) {
        let Some(slot) = self.nodes.get(node.0 as usize) else {
            return;
        };
        if !slot.is_mesh {
            return;
        }
        self.materials.push(MemoryMaterial {
            finish: Some(*finish),
            color: finish.color,
            emissive: Rgb::BLACK,
        });
        let handle = MaterialHandle(self.materials.len() - 1);
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.material = Some(handle);
        }
    }

    fn set_color(&mut self, node: NodeId, color: Rgb) {
        if let Some(m) = self.material_mut(node) {
            m.color = color;
        }
    }

    fn set_emissive(&mut self, node: NodeId, color: Rgb) {
        if let Some(m) = self.material_mut(node) {
            m.emissive = color;
        }
    }
}
