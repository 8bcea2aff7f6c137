// src/core/net.rs
//
// Sheet fetch over HTTPS. The one fallible, one blocking operation in the
// whole pipeline; everything downstream of the fetched text is total.

use std::time::Duration;

use thiserror::Error;

use crate::config::consts::REQUEST_TIMEOUT_SECS;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("no cached sheet at {0}")]
    CacheMissing(String),
}

/// Fetch the published sheet as text. Redirects are followed by the
/// client; any non-success final status is an error.
pub fn fetch_csv(url: &str) -> Result<String, SourceError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(SourceError::Status { status: status.as_u16(), url: s!(url) });
    }

    Ok(resp.text()?)
}
