use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Product;
use crate::constants::DEFAULT_CHASSIS_SWATCH;
use crate::selection::View;

/// Color choices made during one configurator session.
///
/// Button and knob entries are keyed by node name. Maps are ordered so two
/// ledgers with the same choices serialize identically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationLedger {
    chassis: String,
    buttons: BTreeMap<String, String>,
    knobs: BTreeMap<String, String>,
}

impl Default for ConfigurationLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CHASSIS_SWATCH)
    }
}

impl ConfigurationLedger {
    pub fn new(default_chassis: &str) -> Self {
        Self {
            chassis: default_chassis.to_owned(),
            buttons: BTreeMap::new(),
            knobs: BTreeMap::new(),
        }
    }

    pub fn chassis(&self) -> &str {
        &self.chassis
    }

    pub fn buttons(&self) -> &BTreeMap<String, String> {
        &self.buttons
    }

    pub fn knobs(&self) -> &BTreeMap<String, String> {
        &self.knobs
    }

    pub fn record_chassis(&mut self, swatch: &str) {
        self.chassis = swatch.to_owned();
    }

    pub fn record_button(&mut self, node_name: &str, swatch: &str) {
        self.buttons.insert(node_name.to_owned(), swatch.to_owned());
    }

    pub fn record_knob(&mut self, node_name: &str, swatch: &str) {
        self.knobs.insert(node_name.to_owned(), swatch.to_owned());
    }

    /// Whether `swatch` is currently recorded anywhere in the view's group.
    /// Drives the "chosen" marker on palette swatches.
    pub fn is_chosen(&self, view: View, swatch: &str) -> bool {
        match view {
            View::Normal => false,
            View::Chassis => self.chassis == swatch,
            View::Buttons => self.buttons.values().any(|s| s == swatch),
            View::Knobs => self.knobs.values().any(|s| s == swatch),
        }
    }

    pub fn summary(&self) -> ConfigurationSummary {
        build_summary(self)
    }
}

/// Display-ready view of a ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigurationSummary {
    pub chassis_color_name: String,
    pub customized_button_count: usize,
    pub customized_knob_count: usize,
}

pub fn build_summary(ledger: &ConfigurationLedger) -> ConfigurationSummary {
    ConfigurationSummary {
        chassis_color_name: ledger.chassis.clone(),
        customized_button_count: ledger.buttons.len(),
        customized_knob_count: ledger.knobs.len(),
    }
}

impl fmt::Display for ConfigurationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chassis: {}", self.chassis_color_name)?;
        writeln!(f, "Customized buttons: {}", self.customized_button_count)?;
        write!(f, "Customized knobs: {}", self.customized_knob_count)
    }
}

/// Text shown in the purchase confirmation prompt.
pub fn confirmation_text(product: &Product, summary: &ConfigurationSummary) -> String {
    format!(
        "Product: {}\nPrice: {}\nConfiguration:\n{}",
        product.name,
        product.price_display(),
        summary
    )
}
