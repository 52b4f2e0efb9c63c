use thiserror::Error;

/// Errors returned by catalog lookups and extractors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body is not JSON, or not a JSON object.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A result entry exists but lacks a field every entry must carry.
    #[error("malformed {context}: {reason}")]
    MalformedDocument { context: String, reason: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl CatalogError {
    /// `true` for failures of the remote service rather than of its data.
    #[must_use]
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::Http(_) | CatalogError::UnexpectedStatus { .. }
        )
    }

    pub(crate) fn malformed(context: &str, reason: impl Into<String>) -> Self {
        CatalogError::MalformedDocument {
            context: context.to_owned(),
            reason: reason.into(),
        }
    }
}
