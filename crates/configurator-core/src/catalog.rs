//! Static product catalog for the storefront.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductCategory {
    Controllers,
    Mixers,
    Custom,
    Accessories,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductCategory::Controllers => "Controllers",
            ProductCategory::Mixers => "Mixers",
            ProductCategory::Custom => "Custom",
            ProductCategory::Accessories => "Accessories",
        };
        f.write_str(label)
    }
}

/// A product as listed in the catalog. Read-only to the configurator.
///
/// - `price_cents`: list price in whole cents
/// - `model_path`: GLB asset path relative to the site base URL
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price_cents: u32,
    pub category: ProductCategory,
    pub description: &'static str,
    pub specs: &'static [&'static str],
    pub model_path: &'static str,
}

impl Product {
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Name comparison that ignores case and whitespace ("Beato16" == "Beato 16").
    pub fn name_matches(&self, query: &str) -> bool {
        let squash = |s: &str| {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        };
        squash(self.name) == squash(query)
    }
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "1",
        name: "Knobo",
        price_cents: 165_00,
        category: ProductCategory::Controllers,
        description: "Compacto, dinámico y listo para la acción. Control rotatorio de precisión.",
        specs: &["Rotary Encoder", "Touch Sensitive", "USB-C"],
        model_path: "models/KNOBO.glb",
    },
    Product {
        id: "2",
        name: "LOOPO",
        price_cents: 165_00,
        category: ProductCategory::Controllers,
        description: "Fluidez total, mezcla a tu manera. Perfecto para live looping.",
        specs: &["Loop Station", "RGB Feedback", "Portable"],
        model_path: "models/LOOPO.glb",
    },
    Product {
        id: "3",
        name: "FADO",
        price_cents: 203_00,
        category: ProductCategory::Mixers,
        description: "Control de faders suave y preciso para tu DAW.",
        specs: &["Motorized Faders", "OLED Display", "Metal Chassis"],
        model_path: "models/FADO.glb",
    },
    Product {
        id: "4",
        name: "Beato 8",
        price_cents: 241_00,
        category: ProductCategory::Controllers,
        description: "Controlador MIDI con 8 botones ARCADE y 4 knobs asignables para control preciso de mezclas, efectos y automatizaciones en tiempo real. Cuerpo metálico robusto y personalizable.",
        specs: &[
            "8 Botones ARCADE",
            "4 Knobs Asignables",
            "Cuerpo Metálico",
            "Personalizable",
        ],
        model_path: "models/BEATO.glb",
    },
    Product {
        id: "5",
        name: "Mixo",
        price_cents: 292_00,
        category: ProductCategory::Mixers,
        description: "La solución completa de mezcla compacta.",
        specs: &["3-Band EQ", "Crossfader", "FX Controls"],
        model_path: "models/MIXO.glb",
    },
    Product {
        id: "6",
        name: "Beato 16",
        price_cents: 355_00,
        category: ProductCategory::Controllers,
        description: "Nuevo Beato, más control que nunca. 16 pads RGB.",
        specs: &["16 RGB Pads", "Sequencer Mode", "MIDI 2.0"],
        model_path: "models/BEATO16.glb",
    },
];

pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// Resolve a product by id first, then by loose name match.
pub fn lookup_product(key: &str) -> Option<&'static Product> {
    find_product(key).or_else(|| PRODUCTS.iter().find(|p| p.name_matches(key)))
}
