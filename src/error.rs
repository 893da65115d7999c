use thiserror::Error;

use crate::spotify::Resource;

/// Every failure the tool can run into. None of them are retried; the binary
/// aborts on the first one.
#[derive(Error, Debug)]
pub enum Error {
    /// Credentials file missing or unparsable, or a required key absent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token endpoint unreachable, non-200, or a malformed token body.
    #[error("Spotify authentication failed: {0}")]
    Auth(String),

    /// Resource endpoint unreachable or answered with something other than 200.
    #[error("Failed to fetch {resource} {id}: {reason}")]
    Fetch {
        resource: Resource,
        id: String,
        reason: String,
    },

    /// A 200 response whose body does not match the expected shape.
    #[error("Invalid {resource} response for {id}: {source}")]
    Decode {
        resource: Resource,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn fetch(resource: Resource, id: &str, reason: impl ToString) -> Self {
        Error::Fetch {
            resource,
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
