use smallvec::SmallVec;

use crate::classify::{PartIndex, PartKind};
use crate::color::Rgb;
use crate::constants::CLEAR_EMISSIVE_HEX;
use crate::scene::{NodeId, SceneGraph};

/// Active configurator tool. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Normal,
    Chassis,
    Buttons,
    Knobs,
}

impl View {
    /// Tool strip order.
    pub const ALL: [View; 4] = [View::Normal, View::Chassis, View::Buttons, View::Knobs];

    /// Part group interactable in this view.
    pub fn part_kind(self) -> Option<PartKind> {
        match self {
            View::Normal => None,
            View::Chassis => Some(PartKind::Chassis),
            View::Buttons => Some(PartKind::Button),
            View::Knobs => Some(PartKind::Knob),
        }
    }

    pub fn is_customizing(self) -> bool {
        self != View::Normal
    }

    pub fn id(self) -> &'static str {
        match self {
            View::Normal => "normal",
            View::Chassis => "chassis",
            View::Buttons => "buttons",
            View::Knobs => "knobs",
        }
    }

    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Normal => "View",
            View::Chassis => "Chassis",
            View::Buttons => "Buttons",
            View::Knobs => "Knobs",
        }
    }

    /// Palette panel heading.
    pub fn title(self) -> &'static str {
        match self {
            View::Normal => "PERSONALIZA TU CONTROLADOR",
            View::Chassis => "CHOOSE THE CHASSIS COLOR",
            View::Buttons => "CHOOSE THE BUTTONS COLOR",
            View::Knobs => "CHOOSE THE KNOBS COLOR",
        }
    }
}

pub type SelectionSet = SmallVec<[NodeId; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Normal view, or the node is outside the active view's group.
    Ignored,
    Selected(NodeId),
    Deselected(NodeId),
}

/// Active view plus per-view selections.
///
/// Chassis selection is singular and replaced on click; button and knob
/// selections are insertion-ordered toggle sets.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    view: View,
    chassis: Option<NodeId>,
    buttons: SelectionSet,
    knobs: SelectionSet,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switch tools. Returns `false` when `view` is already active.
    pub fn set_view(&mut self, view: View, parts: &PartIndex) -> bool {
        if view == self.view {
            return false;
        }
        self.view = view;
        self.reset_for_view(parts);
        true
    }

    /// Clear every selection, then auto-select the first chassis node when
    /// the chassis tool is active.
    pub fn reset_for_view(&mut self, parts: &PartIndex) {
        self.clear();
        if self.view == View::Chassis {
            self.chassis = parts.chassis().first().copied();
        }
    }

    pub fn clear(&mut self) {
        self.chassis = None;
        self.buttons.clear();
        self.knobs.clear();
    }

    pub fn pointer_down(&mut self, node: NodeId, parts: &PartIndex) -> PointerOutcome {
        let Some(kind) = self.view.part_kind() else {
            return PointerOutcome::Ignored;
        };
        if parts.kind_of(node) != kind {
            return PointerOutcome::Ignored;
        }
        match self.view {
            View::Chassis => {
                self.chassis = Some(node);
                PointerOutcome::Selected(node)
            }
            View::Buttons => toggle(&mut self.buttons, node),
            View::Knobs => toggle(&mut self.knobs, node),
            View::Normal => PointerOutcome::Ignored,
        }
    }

    /// Selection of the active view; empty in `Normal`.
    pub fn selected(&self) -> &[NodeId] {
        match self.view {
            View::Normal => &[],
            View::Chassis => match &self.chassis {
                Some(node) => std::slice::from_ref(node),
                None => &[],
            },
            View::Buttons => &self.buttons,
            View::Knobs => &self.knobs,
        }
    }

    pub fn is_selected(&self, node: NodeId) -> bool {
        self.selected().contains(&node)
    }
}

fn toggle(set: &mut SelectionSet, node: NodeId) -> PointerOutcome {
    if let Some(pos) = set.iter().position(|n| *n == node) {
        set.remove(pos);
        PointerOutcome::Deselected(node)
    } else {
        set.push(node);
        PointerOutcome::Selected(node)
    }
}

/// Clear the emissive channel of every classified node, then light up the
/// active view's selection. Call once after every selection mutation.
pub fn refresh_highlights<S: SceneGraph + ?Sized>(
    scene: &mut S,
    parts: &PartIndex,
    selection: &SelectionState,
    highlight: Rgb,
) {
    let cleared = Rgb::from_hex(CLEAR_EMISSIVE_HEX);
    for node in parts.classified() {
        scene.set_emissive(node, cleared);
    }
    for node in selection.selected() {
        scene.set_emissive(*node, highlight);
    }
}
