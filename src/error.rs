//! Error taxonomy for the Guardian client
//!
//! Validation problems are raised before any request is built; everything
//! the service or the network reports surfaces through the transport
//! variants unchanged.

use crate::resource::object::ResourceKind;

/// Errors produced by the client library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller-supplied input failed validation; no request was sent.
    #[error("{0}")]
    Validation(String),

    /// The service reported 404, or a lookup exhausted every strategy.
    #[error("{0}")]
    NotFound(String),

    /// A name search matched more than one resource.
    #[error("multiple {kind} matches found for '{name}', use an ID to be more specific")]
    NoUniqueMatch { kind: ResourceKind, name: String },

    /// A resource attribute is absent even after completion.
    #[error("resource has no attribute '{0}'")]
    AttributeNotFound(String),

    /// Any non-2xx status not mapped above.
    #[error("request failed: {status} {message}")]
    Transport { status: u16, message: String },

    /// Connection-level failure from the HTTP stack.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The service returned a body that is not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// True for 404s and exhausted lookups.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
