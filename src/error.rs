// src/error.rs
// =============================================================================
// Typed errors for the boundaries of the discovery engine.
//
// - FetchError: a robots.txt or sitemap request failed. The sitemap resolver
//   catches these per URL and keeps going.
// - PolicyError: the word lists could not be loaded. This one is fatal and is
//   raised before any network work starts.
//
// Everything above these boundaries (orchestrators, the binary) uses
// anyhow::Result and attaches context with .context(...).
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// A failed text fetch (robots.txt or sitemap XML).
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not finish within the per-request timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The server answered with a non-2xx status
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Connection, TLS or body decoding failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    // Builds the right variant from a reqwest error
    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// Word-list data could not be turned into a policy.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A required list was absent from the supplied mapping
    #[error("required word list '{name}' is missing")]
    MissingList { name: &'static str },

    /// A required list file could not be read
    #[error("failed to read word list '{name}' from {}: {source}", .path.display())]
    Unreadable {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A list file was read but is not valid CSV
    #[error("word list '{name}' in {} is not valid CSV: {source}", .path.display())]
    Malformed {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
