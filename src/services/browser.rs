//! The browsing surface the extraction pipeline runs against.
//!
//! Every method is a suspension point. Implementations are a WebDriver
//! session ([`super::droid`]) and replayed HTML ([`super::snapshot`]).

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ScrapeError;

/// One open page of the listing.
#[async_trait]
pub trait Page: Send + Sync {
    type Element: Element;

    async fn goto(&self, url: &str) -> Result<(), ScrapeError>;

    /// Resolves once `selector` matches something, or fails with
    /// [`ScrapeError::Timeout`] after `timeout`.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError>;

    /// Matching elements in DOM order.
    async fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, ScrapeError>;

    async fn query_one(&self, selector: &str) -> Result<Option<Self::Element>, ScrapeError> {
        Ok(self.query_all(selector).await?.into_iter().next())
    }
}

/// An element on a [`Page`]. Queries only look at descendants.
#[async_trait]
pub trait Element: Send + Sync + Sized {
    async fn query_all(&self, selector: &str) -> Result<Vec<Self>, ScrapeError>;

    async fn query_one(&self, selector: &str) -> Result<Option<Self>, ScrapeError> {
        Ok(self.query_all(selector).await?.into_iter().next())
    }

    async fn text(&self) -> Result<String, ScrapeError>;

    async fn attribute(&self, name: &str) -> Result<Option<String>, ScrapeError>;

    /// Click.
    async fn activate(&self) -> Result<(), ScrapeError>;

    /// Replace the contents of an input with `text`.
    async fn fill(&self, text: &str) -> Result<(), ScrapeError>;
}
