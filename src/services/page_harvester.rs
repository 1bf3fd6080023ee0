use std::time::Duration;

use crate::{
    configuration::{ExtractionSettings, MalformedItemPolicy},
    domain::{question::Question, selectors::ListingSelectors},
    error::ScrapeError,
};

use super::{extract_question, Page};

pub struct PageHarvester<'a> {
    selectors: &'a ListingSelectors,
    content_timeout: Duration,
    policy: MalformedItemPolicy,
}

impl<'a> PageHarvester<'a> {
    pub fn new(selectors: &'a ListingSelectors, extraction: &ExtractionSettings) -> Self {
        PageHarvester {
            selectors,
            content_timeout: extraction.content_timeout(),
            policy: extraction.malformed_item,
        }
    }

    /// Extracts at most `remaining` questions from the current page, in DOM order.
    /// Items after the cutoff are never read.
    pub async fn harvest<P: Page>(
        &self,
        page: &P,
        remaining: usize,
    ) -> Result<Vec<Question>, ScrapeError> {
        if remaining == 0 {
            return Ok(vec![]);
        }

        page.wait_for(&self.selectors.item, self.content_timeout).await?;
        let items = page.query_all(&self.selectors.item).await?;
        log::debug!("Found {} question elements on page", items.len());

        let mut questions = Vec::with_capacity(remaining.min(items.len()));
        for (index, item) in items.iter().enumerate() {
            if questions.len() >= remaining {
                break;
            }

            match extract_question(item, self.selectors).await {
                Ok(question) => questions.push(question),
                Err(e) if e.is_item_fault() && self.policy == MalformedItemPolicy::Skip => {
                    log::warn!("Skipping question element {} on page: {}", index, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(questions)
    }
}
