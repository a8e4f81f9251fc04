pub mod cart;
pub mod catalog;
pub mod classify;
pub mod color;
pub mod configurator;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod palette;
pub mod scene;
pub mod selection;
pub mod state;

pub use cart::*;
pub use catalog::*;
pub use classify::*;
pub use color::*;
pub use configurator::*;
pub use constants::*;
// `error::Result` stays module-scoped so glob importers keep std's `Result`.
pub use error::ConfiguratorError;
pub use ledger::*;
pub use palette::*;
pub use scene::*;
pub use selection::*;
pub use state::*;
