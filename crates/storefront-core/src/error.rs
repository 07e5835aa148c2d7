//! Error types for catalog retrieval.

use thiserror::Error;

use crate::catalog::ProductId;

/// Result type alias for catalog retrieval operations.
pub type RetrievalResult<T> = Result<T, RetrievalError>;

/// Errors raised while sourcing the product catalog from an external location.
///
/// Retrieval is the only fallible boundary in the session: the in-session
/// operations (filter, sort, add, remove, total, count) are total functions
/// over already-validated state and carry no error type. Callers of the
/// retrieval path degrade to an empty catalog with a user-visible notice
/// rather than abort the session.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("catalog source unreachable: {0}")]
    Unreachable(#[from] std::io::Error),

    #[error("catalog source malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate product id {0} in catalog source")]
    DuplicateId(ProductId),

    #[error("product {id} has negative price {price}")]
    NegativePrice { id: ProductId, price: f64 },
}
