//! Error types for the dashboard controller.

use trapline_core::EntityKind;

/// Failures surfaced by dashboard operations.
///
/// Transport failures and backend rejections collapse into the same
/// variant; the user sees one generic message either way.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Either collection read failed.
    #[error("Failed to fetch data")]
    Fetch {
        /// Underlying client error
        #[source]
        source: trapline_client::Error,
    },

    /// A create request failed.
    #[error("Failed to save {kind}")]
    Save {
        /// Which record kind was being saved
        kind: EntityKind,
        /// Underlying client error
        #[source]
        source: trapline_client::Error,
    },

    /// The draft is missing a required field; nothing was sent.
    #[error("Cannot submit {kind}: {source}")]
    Draft {
        /// Which form was submitted
        kind: EntityKind,
        /// Validation failure
        #[source]
        source: trapline_core::Error,
    },
}

/// Convenience `Result` type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the same operation might succeed.
    ///
    /// Network and backend failures may be transient; a draft error needs
    /// the user to fill in the form first.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Fetch { .. } => true,
            Error::Save { .. } => true,
            Error::Draft { .. } => false,
        }
    }
}
