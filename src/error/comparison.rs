//! Facet comparison errors.

use thiserror::Error;

use crate::model::signal::Facet;

/// One comparison facet could not be evaluated.
///
/// Evaluation of the remaining facets continues; the caller skips only the
/// facet named here rather than aborting the whole cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("comparison of facet {facet} failed: {reason}")]
pub struct ComparisonError {
    pub facet: Facet,
    pub reason: String,
}

impl ComparisonError {
    pub fn new(facet: Facet, reason: impl Into<String>) -> Self {
        Self {
            facet,
            reason: reason.into(),
        }
    }
}
