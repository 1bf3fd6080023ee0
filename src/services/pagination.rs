use std::time::Duration;

use crate::{
    configuration::ExtractionSettings, domain::selectors::ListingSelectors, error::ScrapeError,
};

use super::{Element, Page};

pub struct Paginator<'a> {
    selectors: &'a ListingSelectors,
    navigation_timeout: Duration,
}

impl<'a> Paginator<'a> {
    pub fn new(selectors: &'a ListingSelectors, extraction: &ExtractionSettings) -> Self {
        Paginator {
            selectors,
            navigation_timeout: extraction.navigation_timeout(),
        }
    }

    pub async fn has_next<P: Page>(&self, page: &P) -> Result<bool, ScrapeError> {
        Ok(page.query_one(&self.selectors.next_page).await?.is_some())
    }

    /// Clicks the next page control and returns once question elements are present again.
    pub async fn advance<P: Page>(&self, page: &P) -> Result<(), ScrapeError> {
        let next = page
            .query_one(&self.selectors.next_page)
            .await?
            .ok_or(ScrapeError::MissingNextControl)?;

        next.activate().await?;
        page.wait_for(&self.selectors.item, self.navigation_timeout).await
    }
}
