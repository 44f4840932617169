//! Sheet sources
//!
//! The input boundary of the pipeline: something that turns a location into
//! the raw CSV text of the hike log. Fetching is blocking; the refresh
//! service runs it on tokio's blocking pool.

use crate::constants::USER_AGENT;
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Source of raw sheet text
pub trait SheetSource: Send + Sync {
    /// Fetch the full text at `location`
    fn fetch(&self, location: &str) -> Result<String>;
}

/// Published-sheet CSV over HTTP(S)
///
/// One GET per fetch, no retries. A non-success status is a transport
/// failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSheetSource;

impl HttpSheetSource {
    pub fn new() -> Self {
        Self
    }
}

impl SheetSource for HttpSheetSource {
    fn fetch(&self, location: &str) -> Result<String> {
        debug!("GET {}", location);

        let response = ureq::get(location)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|err| Error::transport(location, format!("request failed: {err}")))?;

        let body = response.into_body().read_to_string().map_err(|err| {
            Error::transport(location, format!("failed reading response body: {err}"))
        })?;

        debug!("Fetched {} bytes from {}", body.len(), location);
        Ok(body)
    }
}

/// Local CSV export of the sheet; the location is a file path
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSheetSource;

impl FileSheetSource {
    pub fn new() -> Self {
        Self
    }
}

impl SheetSource for FileSheetSource {
    fn fetch(&self, location: &str) -> Result<String> {
        let path = Path::new(location);
        debug!("Reading sheet export {}", path.display());
        std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read sheet export {}", path.display()), e))
    }
}
