use crate::{
    configuration::ExtractionSettings,
    domain::{result_set::ResultSet, selectors::ListingSelectors},
    error::ScrapeError,
};

use super::{Page, PageHarvester, Paginator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Collecting,
    Done,
}

/// Harvests page after page until the target is met or the listing runs out.
pub struct ExtractionDriver<'a, P: Page> {
    page: &'a P,
    harvester: PageHarvester<'a>,
    paginator: Paginator<'a>,
}

impl<'a, P: Page> ExtractionDriver<'a, P> {
    pub fn new(
        page: &'a P,
        selectors: &'a ListingSelectors,
        extraction: &ExtractionSettings,
    ) -> Self {
        ExtractionDriver {
            page,
            harvester: PageHarvester::new(selectors, extraction),
            paginator: Paginator::new(selectors, extraction),
        }
    }

    /// Fewer than `target` questions is a normal outcome when pages run out.
    /// Any fault aborts the run and drops what was collected.
    pub async fn run(&self, target: usize) -> Result<ResultSet, ScrapeError> {
        log::info!("Starting to extract up to {} questions", target);

        let mut results = ResultSet::with_target(target);
        let mut state = DriverState::Collecting;
        let mut page_number = 1;

        while state == DriverState::Collecting {
            let remaining = results.remaining();
            if remaining == 0 {
                state = DriverState::Done;
                continue;
            }

            let batch = self.harvester.harvest(self.page, remaining).await?;
            let kept = results.extend(batch);
            log::info!(
                "Page {}: extracted {} questions ({}/{})",
                page_number,
                kept,
                results.len(),
                target
            );

            state = if results.is_full() {
                DriverState::Done
            } else if self.paginator.has_next(self.page).await? {
                log::info!("Navigating to page {}", page_number + 1);
                self.paginator.advance(self.page).await?;
                page_number += 1;
                DriverState::Collecting
            } else {
                log::info!(
                    "No more pages after page {}, stopping with {} questions",
                    page_number,
                    results.len()
                );
                DriverState::Done
            };
        }

        log::info!("Extraction complete with {} questions", results.len());
        Ok(results)
    }
}
