use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thiserror::Error;

/// Faults that abort an extraction run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("question item has no title")]
    MissingTitle,
    #[error("timed out after {timeout:?} waiting for `{selector}`")]
    Timeout { selector: String, timeout: Duration },
    #[error("no next page control to activate")]
    MissingNextControl,
    #[error("webdriver error: {0}")]
    Browser(#[from] WebDriverError),
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl ScrapeError {
    pub fn timeout(selector: &str, timeout: Duration) -> Self {
        ScrapeError::Timeout {
            selector: selector.to_string(),
            timeout,
        }
    }

    /// Faults caused by the content of a single item rather than the session.
    pub fn is_item_fault(&self) -> bool {
        matches!(self, ScrapeError::MissingTitle)
    }
}
