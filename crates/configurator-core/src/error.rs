use crate::cart::CartError;

pub type Result<T> = std::result::Result<T, ConfiguratorError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfiguratorError {
    #[error("Could not load asset {path:?}\n  - {reason}")]
    AssetLoad { path: String, reason: String },
    #[error("No product matches {0:?}")]
    UnknownProduct(String),
    #[error(transparent)]
    Cart(#[from] CartError),
}
