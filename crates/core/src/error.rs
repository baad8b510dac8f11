//! Error taxonomy for the catalog.
//!
//! Nothing here is fatal: callers log the error and keep the view usable.

/// Message shown inline when a draft has an empty field
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

/// Top-level catalog error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Draft rejected before any network call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Load or create failed on the wire
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

/// A draft that cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields are blank
    #[error("{}", ALL_FIELDS_REQUIRED)]
    MissingFields { fields: Vec<&'static str> },

    /// A price field does not hold a finite number; `field` is the form label
    #[error("{field} must be a number, got {value:?}")]
    InvalidPrice { field: &'static str, value: String },
}

impl ValidationError {
    /// Text for the inline error slot of the creation surface
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Failure talking to the remote product store
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// Failure reported by a non-HTTP store
    #[error("product store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
