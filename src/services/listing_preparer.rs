use std::time::Duration;

use crate::{
    configuration::{ExtractionSettings, ListingSettings},
    error::ScrapeError,
};

use super::{Element, Page};

/// Opens the listing and narrows it to the configured tag.
pub struct ListingPreparer<'a> {
    listing: &'a ListingSettings,
    content_timeout: Duration,
    consent_timeout: Duration,
}

impl<'a> ListingPreparer<'a> {
    pub fn new(listing: &'a ListingSettings, extraction: &ExtractionSettings) -> Self {
        ListingPreparer {
            listing,
            content_timeout: extraction.content_timeout(),
            consent_timeout: extraction.consent_timeout(),
        }
    }

    pub async fn prepare<P: Page>(&self, page: &P) -> Result<(), ScrapeError> {
        log::info!("Navigating to {}", self.listing.url);
        page.goto(&self.listing.url).await?;

        self.accept_cookies(page).await?;
        self.apply_tag_filter(page).await
    }

    async fn accept_cookies<P: Page>(&self, page: &P) -> Result<(), ScrapeError> {
        let selector = &self.listing.selectors.cookie_consent;

        match wait_for_element(page, selector, self.consent_timeout).await {
            Ok(button) => {
                log::info!("Accepting cookies");
                button.activate().await
            }
            Err(ScrapeError::Timeout { .. }) => {
                log::debug!("No cookie banner shown");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn apply_tag_filter<P: Page>(&self, page: &P) -> Result<(), ScrapeError> {
        let tag = self.listing.tag();
        if tag.is_empty() {
            log::info!("No tag configured, keeping the unfiltered listing");
            return Ok(());
        }

        log::info!("Applying filter for tag {}", tag);
        let selectors = &self.listing.selectors;

        wait_for_element(page, &selectors.filter_toggle, self.content_timeout)
            .await?
            .activate()
            .await?;

        let input = wait_for_element(page, &selectors.tag_input, self.content_timeout).await?;
        input.activate().await?;
        input.fill(tag).await?;

        wait_for_element(page, &selectors.apply_filter, self.content_timeout)
            .await?
            .activate()
            .await
    }
}

async fn wait_for_element<P: Page>(
    page: &P,
    selector: &str,
    timeout: Duration,
) -> Result<P::Element, ScrapeError> {
    page.wait_for(selector, timeout).await?;
    page.query_one(selector)
        .await?
        .ok_or_else(|| ScrapeError::timeout(selector, timeout))
}
