//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration, boundaries that cannot be sampled, and generic errors.
//! Missing inputs (no asset, no boundary, empty boundary) are not errors; see
//! [`crate::scatter::SkipReason`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A setting is out of range, e.g. negative spacing or a neighbourhood below two cells.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The boundary cannot enclose an area: too few vertices, non-finite coordinates or a
    /// flat bounding box.
    #[error("degenerate boundary: {reason} ({vertices} vertices)")]
    DegenerateBoundary { vertices: usize, reason: String },

    /// Neither a boundary vertex nor the centroid passes the containment test.
    #[error("no seed point inside the boundary polygon ({vertices} vertices)")]
    SeedOutsideBoundary { vertices: usize },

    /// Any other failure, usually raised by a collaborator.
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn degenerate(vertices: usize, reason: impl Into<String>) -> Self {
        Error::DegenerateBoundary {
            vertices,
            reason: reason.into(),
        }
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
