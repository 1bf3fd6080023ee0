use serde::Serialize;

use crate::{
    configuration::Settings,
    domain::{
        result_set::ResultSet,
        validation::{validate, Validation},
    },
    error::ScrapeError,
    services::{ExtractionDriver, ListingPreparer, Page},
};

#[derive(Debug, Serialize)]
pub struct Report {
    pub tag: String,
    pub validation: Validation,
    pub questions: ResultSet,
}

/// Opens the listing, applies the tag filter, then extracts and validates.
pub async fn prepare_and_run<P: Page>(page: &P, settings: &Settings) -> Result<Report, ScrapeError> {
    ListingPreparer::new(&settings.listing, &settings.extraction)
        .prepare(page)
        .await?;

    run(page, settings).await
}

/// Extracts from whatever listing `page` currently shows and validates the result.
pub async fn run<P: Page>(page: &P, settings: &Settings) -> Result<Report, ScrapeError> {
    let listing = &settings.listing;

    let questions = ExtractionDriver::new(page, &listing.selectors, &settings.extraction)
        .run(listing.target_count)
        .await?;

    let tag = listing.tag();
    let validation = validate(questions.questions(), tag);
    log::info!("Questions sorted correctly: {}", validation.sorted_descending);
    log::info!("All questions have {:?} tag: {}", tag, validation.all_tagged);

    Ok(Report {
        tag: tag.to_string(),
        validation,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::{prepare_and_run, run};
    use crate::{
        configuration::Settings,
        services::{Interaction, SnapshotSite},
        test_support::{filterable_listing_page, listing_page, numbered_items, question_item},
    };

    #[tokio::test]
    async fn filtered_listing_validates() {
        let settings = Settings::default();
        let site = SnapshotSite::new([
            filterable_listing_page(&numbered_items(0..60), true),
            filterable_listing_page(&numbered_items(60..120), false),
        ]);

        let report = prepare_and_run(&site.new_page(), &settings).await.unwrap();

        assert_eq!(report.questions.len(), 100);
        assert!(report.validation.all_tagged);
        assert!(report.validation.sorted_descending);
    }

    #[tokio::test]
    async fn padded_tag_is_trimmed_for_filter_and_validation() {
        let mut settings = Settings::default();
        settings.listing.tag = " javascript ".to_string();
        settings.listing.target_count = 5;
        let site = SnapshotSite::new([filterable_listing_page(&numbered_items(0..5), false)]);

        let report = prepare_and_run(&site.new_page(), &settings).await.unwrap();

        assert_eq!(report.tag, "javascript");
        assert!(report.validation.all_tagged);
        assert!(site.interactions().contains(&Interaction::Fill(
            "input[name=tagQuery]".to_string(),
            "javascript".to_string()
        )));
    }

    #[tokio::test]
    async fn out_of_order_untagged_listing_fails_validation() {
        let mut settings = Settings::default();
        settings.listing.target_count = 3;
        let items = vec![
            question_item("a", &["javascript"], Some("3"), Some("2024-01-01 10:00:00Z")),
            question_item("b", &["typescript"], Some("1"), Some("2024-01-03 10:00:00Z")),
            question_item("c", &["javascript"], None, Some("2024-01-02 10:00:00Z")),
        ];
        let site = SnapshotSite::new([listing_page(&items, false)]);

        let report = run(&site.new_page(), &settings).await.unwrap();

        assert_eq!(report.questions.len(), 3);
        assert!(!report.validation.all_tagged);
        assert!(!report.validation.sorted_descending);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tag"], "javascript");
        assert_eq!(json["questions"][1]["votes"], 1);
        assert_eq!(json["questions"][2]["votes"], 0);
    }
}
