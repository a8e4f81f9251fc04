use crate::color::Rgb;
use crate::selection::View;

/// A named, fixed color option.
///
/// `name` is the canonical key recorded in the ledger; `alias` is the label
/// used by the storefront catalog. Lookups accept either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub alias: &'static str,
    pub hex: u32,
}

impl Swatch {
    pub const fn new(name: &'static str, alias: &'static str, hex: u32) -> Self {
        Self { name, alias, hex }
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_hex(self.hex)
    }

    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.name.eq_ignore_ascii_case(key) || self.alias.eq_ignore_ascii_case(key)
    }
}

/// The ten swatches offered for every customizable group of the current
/// product line, in palette grid order.
pub const CONTROLLER_SWATCHES: &[Swatch] = &[
    Swatch::new("Green", "Verde", 0x7C_BA_40),
    Swatch::new("Yellow", "Amarillo", 0xF3_E6_00),
    Swatch::new("Blue", "Azul", 0x32_5E_B7),
    Swatch::new("White", "Blanco", 0xF5_F5_F5),
    Swatch::new("Orange", "Naranja", 0xF4_71_19),
    Swatch::new("Purple", "Morado", 0x7B_21_7E),
    Swatch::new("Red", "Rojo", 0xE5_24_21),
    Swatch::new("Black", "Negro", 0x1C_1C_1C),
    Swatch::new("Pink", "Rosa", 0xFF_00_7F),
    Swatch::new("Gray", "Gris", 0x80_80_80),
];

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    swatches: &'static [Swatch],
}

impl Palette {
    pub const fn new(swatches: &'static [Swatch]) -> Self {
        Self { swatches }
    }

    pub fn swatches(&self) -> &'static [Swatch] {
        self.swatches
    }

    pub fn get(&self, key: &str) -> Option<&'static Swatch> {
        self.swatches.iter().find(|s| s.matches(key))
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

/// Per-group palettes. Identical today, kept separate so a product line can
/// restrict e.g. knob caps to fewer colors.
#[derive(Clone, Copy, Debug)]
pub struct Palettes {
    pub chassis: Palette,
    pub buttons: Palette,
    pub knobs: Palette,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            chassis: Palette::new(CONTROLLER_SWATCHES),
            buttons: Palette::new(CONTROLLER_SWATCHES),
            knobs: Palette::new(CONTROLLER_SWATCHES),
        }
    }
}

impl Palettes {
    /// Palette shown for a view; `Normal` has none.
    pub fn for_view(&self, view: View) -> Option<&Palette> {
        match view {
            View::Normal => None,
            View::Chassis => Some(&self.chassis),
            View::Buttons => Some(&self.buttons),
            View::Knobs => Some(&self.knobs),
        }
    }
}

/// Canonical swatch for a key from the shared controller palette.
pub fn find_swatch(key: &str) -> Option<&'static Swatch> {
    CONTROLLER_SWATCHES.iter().find(|s| s.matches(key))
}
