//! Error types for page assembly.
//!
//! Every error here reports caller misuse (an unmatched restore, a malformed
//! path, an invalid widget) and is returned synchronously. Nothing is retried
//! and an operation that fails leaves its receiver untouched.

/// Result type alias for page assembly operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while assembling pages and documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Restore requested with no matching save
    #[error("Graphics state underflow: restore without matching save")]
    StateUnderflow,

    /// Page finalized while saved graphics states are still open
    #[error("Unbalanced graphics state: {depth} saved state(s) still open at end of page")]
    UnbalancedState {
        /// Number of saves without a matching restore
        depth: usize,
    },

    /// Numeric or structural input out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Line or curve segment appended before any move-to
    #[error("No active subpath: move_to must precede line_to/curve_to")]
    NoActiveSubpath,

    /// Subpath already closed
    #[error("Subpath already closed: start a new subpath with move_to")]
    AlreadyClosed,

    /// Form field name already used on this page
    #[error("Duplicate form field name: '{0}'")]
    DuplicateFieldName(String),

    /// Second selected radio button in one group
    #[error("Radio group '{group}' already has a selected button")]
    MultipleSelection {
        /// Radio group name
        group: String,
    },

    /// Mutation attempted after the page was finalized
    #[error("Page already finalized")]
    PageFinalized,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidParameter`] from anything printable.
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidParameter(reason.into())
    }
}
