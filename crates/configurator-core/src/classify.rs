//! Part classification by node naming convention.
//!
//! Asset authors name sub-meshes after the physical part they model
//! (`CubeChasis`, `Boton_03`, `Knob_Base`, `Aro_1`, ...). Classification runs
//! once per loaded asset and produces a [`PartIndex`]: ordered groups of node
//! handles plus a membership map for pointer hit tests.

use fnv::FnvHashMap;

use crate::color::Rgb;
use crate::constants::{
    BUTTON_SHEEN_HEX, DEFAULT_BUTTON_SWATCH, DEFAULT_CHASSIS_SWATCH, DEFAULT_KNOB_SWATCH,
    KNOB_LUMINANCE_THRESHOLD, RING_BASE_HEX,
};
use crate::palette::find_swatch;
use crate::scene::{MaterialFinish, NodeId, SceneGraph, Sheen};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartKind {
    Chassis,
    Button,
    Knob,
    Ring,
    Unclassified,
}

impl PartKind {
    /// Whether nodes of this kind can be selected and recolored.
    pub fn is_selectable(self) -> bool {
        matches!(self, PartKind::Chassis | PartKind::Button | PartKind::Knob)
    }
}

// Evaluated top to bottom; first match wins.
const NAME_RULES: &[(PartKind, &[&str])] = &[
    (PartKind::Chassis, &["chasis", "chassis"]),
    (PartKind::Button, &["boton", "button"]),
    (PartKind::Knob, &["knob"]),
    (PartKind::Ring, &["aro", "ring"]),
];

/// Kind suggested by a node name alone, before the knob luminance filter.
pub fn kind_for_name(name: &str) -> PartKind {
    let lower = name.to_lowercase();
    NAME_RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| lower.contains(m)))
        .map(|(kind, _)| *kind)
        .unwrap_or(PartKind::Unclassified)
}

/// Only dark knob caps are recolorable; light knob meshes are the metal
/// shaft/base. A knob without a readable authored color is not recolorable.
pub fn knob_is_recolorable(authored: Option<Rgb>) -> bool {
    authored
        .map(|c| c.average_intensity() < KNOB_LUMINANCE_THRESHOLD)
        .unwrap_or(false)
}

/// Full classification for one node.
pub fn classify_node(name: &str, authored: Option<Rgb>) -> PartKind {
    match kind_for_name(name) {
        PartKind::Knob if !knob_is_recolorable(authored) => PartKind::Unclassified,
        kind => kind,
    }
}

fn swatch_color(name: &str) -> Rgb {
    find_swatch(name).map(|s| s.color()).unwrap_or(Rgb::BLACK)
}

/// Finish installed on every node of a group at load time.
pub fn default_finish(kind: PartKind) -> Option<MaterialFinish> {
    let finish = match kind {
        PartKind::Chassis => MaterialFinish::physical(swatch_color(DEFAULT_CHASSIS_SWATCH), 0.8, 0.35)
            .with_clearcoat(0.85, 0.1),
        PartKind::Button => MaterialFinish {
            reflectivity: Some(0.3),
            sheen: Some(Sheen {
                intensity: 0.5,
                color: Rgb::from_hex(BUTTON_SHEEN_HEX),
            }),
            ..MaterialFinish::physical(swatch_color(DEFAULT_BUTTON_SWATCH), 0.4, 0.68)
                .with_clearcoat(0.85, 0.08)
        },
        PartKind::Knob => MaterialFinish::standard(swatch_color(DEFAULT_KNOB_SWATCH), 0.0, 1.0),
        PartKind::Ring => MaterialFinish {
            transmission: 0.3,
            thickness: 0.5,
            opacity: Some(0.7),
            ..MaterialFinish::physical(Rgb::from_hex(RING_BASE_HEX), 0.0, 0.2)
                .with_clearcoat(0.8, 0.1)
        },
        PartKind::Unclassified => return None,
    };
    Some(finish)
}

/// Classified groups of one loaded asset.
#[derive(Clone, Debug, Default)]
pub struct PartIndex {
    chassis: Vec<NodeId>,
    buttons: Vec<NodeId>,
    knobs: Vec<NodeId>,
    rings: Vec<NodeId>,
    kinds: FnvHashMap<NodeId, PartKind>,
    names: FnvHashMap<NodeId, String>,
}

impl PartIndex {
    /// Traverse the scene once, group its meshes and install a fresh
    /// material on every classified node.
    pub fn classify<S: SceneGraph + ?Sized>(scene: &mut S) -> Self {
        let mut index = PartIndex::default();
        for node in scene.mesh_nodes() {
            let name = scene.node_name(node).unwrap_or_default().to_owned();
            let kind = classify_node(&name, scene.authored_color(node));
            let Some(finish) = default_finish(kind) else {
                if kind_for_name(&name) == PartKind::Knob {
                    log::debug!("[classify] skipping light knob mesh {:?}", name);
                }
                continue;
            };
            scene.install_material(node, &finish);
            index.insert(node, kind, name);
        }
        log::info!(
            "[classify] chassis={} buttons={} knobs={} rings={}",
            index.chassis.len(),
            index.buttons.len(),
            index.knobs.len(),
            index.rings.len()
        );
        index
    }

    fn insert(&mut self, node: NodeId, kind: PartKind, name: String) {
        let group = match kind {
            PartKind::Chassis => &mut self.chassis,
            PartKind::Button => &mut self.buttons,
            PartKind::Knob => &mut self.knobs,
            PartKind::Ring => &mut self.rings,
            PartKind::Unclassified => return,
        };
        group.push(node);
        self.kinds.insert(node, kind);
        self.names.insert(node, name);
    }

    pub fn chassis(&self) -> &[NodeId] {
        &self.chassis
    }

    pub fn buttons(&self) -> &[NodeId] {
        &self.buttons
    }

    pub fn knobs(&self) -> &[NodeId] {
        &self.knobs
    }

    pub fn rings(&self) -> &[NodeId] {
        &self.rings
    }

    pub fn group(&self, kind: PartKind) -> &[NodeId] {
        match kind {
            PartKind::Chassis => &self.chassis,
            PartKind::Button => &self.buttons,
            PartKind::Knob => &self.knobs,
            PartKind::Ring => &self.rings,
            PartKind::Unclassified => &[],
        }
    }

    pub fn kind_of(&self, node: NodeId) -> PartKind {
        self.kinds
            .get(&node)
            .copied()
            .unwrap_or(PartKind::Unclassified)
    }

    pub fn name_of(&self, node: NodeId) -> Option<&str> {
        self.names.get(&node).map(String::as_str)
    }

    /// Every classified node, rings included.
    pub fn classified(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.chassis
            .iter()
            .chain(&self.buttons)
            .chain(&self.knobs)
            .chain(&self.rings)
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
