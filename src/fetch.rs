//! Puzzle input download.
//!
//! One authenticated GET per call: no retries, no caching, and no timeout
//! beyond the transport default.

use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use reqwest::StatusCode;
use url::Url;

use crate::constants::SESSION_COOKIE;
use crate::error::{Error, Result};

/// Joins `{year}/day/{day}/input` onto `base`.
///
/// # Returns
/// * `Err(Error::FetchFailed)` - If `base` is not a URL that can carry a path
pub fn build_url(base: &str, day: u32, year: i32) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| Error::FetchFailed {
        url: base.to_string(),
        status: None,
        reason: format!("invalid base url: {e}"),
    })?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| Error::FetchFailed {
            url: base.to_string(),
            status: None,
            reason: "base url cannot have path segments".to_string(),
        })?;
        segments.pop_if_empty().extend([
            year.to_string(),
            "day".to_string(),
            day.to_string(),
            "input".to_string(),
        ]);
    }

    Ok(url)
}

/// Downloads puzzle inputs from the remote service.
pub struct InputFetcher {
    client: Client,
    base_url: String,
}

impl InputFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder().build().map_err(|e| Error::FetchFailed {
            url: base_url.clone(),
            status: None,
            reason: format!("cannot create http client: {e}"),
        })?;
        Ok(Self { client, base_url })
    }

    /// Fetches the input of `day` in `year`, authenticated by `session`.
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The raw response body on status 200
    /// * `Err(Error::FetchFailed)` - Bad base url, transport failure, or any other status
    pub fn fetch(&self, session: &str, day: u32, year: i32) -> Result<Vec<u8>> {
        let url = build_url(&self.base_url, day, year)?;
        log::info!("Downloading input from {url}");

        let failed = |status: Option<u16>, reason: String| Error::FetchFailed {
            url: url.to_string(),
            status,
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .header(COOKIE, format!("{SESSION_COOKIE}={session}"))
            .send()
            .map_err(|e| failed(None, format!("request failed: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(failed(
                Some(status.as_u16()),
                format!("non-200 status received: {status}"),
            ));
        }

        let body = response
            .bytes()
            .map_err(|e| failed(Some(status.as_u16()), format!("cannot read body: {e}")))?;
        log::debug!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}
