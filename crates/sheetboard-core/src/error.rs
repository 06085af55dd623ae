//! Error taxonomy for the dataset pipeline.
//!
//! Row-level failures never leave the dataset constructors: each one is
//! converted into a row-skip so a slightly malformed export cannot poison
//! the whole sheet. Source failures propagate to the caller untouched.

use thiserror::Error;

/// Why one raw row was rejected during dataset construction.
///
/// Produced by the per-row validation step and discarded by the collection
/// step; the only observable effect is the row's absence from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has no '{0}' cell")]
    MissingColumn(&'static str),

    #[error("unparseable date: {0}")]
    BadDate(String),

    #[error("unparseable amount: {0}")]
    BadAmount(String),

    #[error("account is empty after trimming")]
    EmptyAccount,

    #[error("no category labels left after trimming")]
    NoCategories,
}

/// Failure fetching a range from the remote spreadsheet.
///
/// Authentication failures are distinguished from transport trouble so the
/// caller can run its re-authentication flow and re-invoke the whole fetch
/// cycle. The pipeline itself never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("unauthenticated: token missing, expired, or revoked")]
    Unauthenticated,

    #[error("permission denied for the requested spreadsheet")]
    PermissionDenied,

    #[error("transport error: {0}")]
    Transport(String),
}

impl SourceError {
    /// True for failures a fresh sign-in could fix.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::PermissionDenied)
    }
}
