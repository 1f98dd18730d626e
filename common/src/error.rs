use thiserror::Error;

use crate::model::plant::PlantId;

/// Failure of a remote catalog call, or of a lookup that would have produced one.
///
/// The page does not tell these apart when reporting to the user; the variants
/// exist so the cause can be logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("plant {0} not found")]
    NotFound(PlantId),
    #[error("catalog is unavailable after an earlier failure")]
    Unavailable,
}

/// Rejected user input. Handled locally and never reaches the error state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Why a price edit produced no PATCH.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceEditError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
