//! Error types for pattern catalog construction

use thiserror::Error;

/// Errors raised while building a [`PatternCatalog`](crate::PatternCatalog).
///
/// Analysis itself never fails; only compiling trigger expressions and
/// validating catalog identity can.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid trigger expression for '{owner}': {expression}")]
    InvalidTrigger {
        owner: String,
        expression: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate red flag id: {0}")]
    DuplicateRedFlag(String),

    #[error("Duplicate clause type: {0}")]
    DuplicateClauseType(String),
}
