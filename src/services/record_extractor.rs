use crate::{
    domain::{question::Question, selectors::ListingSelectors},
    error::ScrapeError,
};

use super::Element;

/// Reads one listing item. Only the title is required.
pub async fn extract_question<E: Element>(
    item: &E,
    selectors: &ListingSelectors,
) -> Result<Question, ScrapeError> {
    let title = title_from(item.query_one(&selectors.title).await?).await?;
    let tags = tags_from(item.query_all(&selectors.tag).await?).await?;
    let votes = votes_from(item.query_one(&selectors.votes).await?).await?;
    let timestamp = timestamp_from(item.query_one(&selectors.timestamp).await?).await?;

    Ok(Question {
        title,
        tags,
        votes,
        timestamp,
    })
}

async fn title_from<E: Element>(element: Option<E>) -> Result<String, ScrapeError> {
    let Some(element) = element else {
        return Err(ScrapeError::MissingTitle);
    };

    let title = element.text().await?.trim().to_string();
    match title.is_empty() {
        true => Err(ScrapeError::MissingTitle),
        false => Ok(title),
    }
}

async fn tags_from<E: Element>(elements: Vec<E>) -> Result<Vec<String>, ScrapeError> {
    let mut tags = Vec::with_capacity(elements.len());
    for element in elements {
        tags.push(element.text().await?.trim().to_string());
    }
    Ok(tags)
}

async fn votes_from<E: Element>(element: Option<E>) -> Result<i64, ScrapeError> {
    match element {
        Some(element) => Ok(parse_votes(&element.text().await?)),
        None => Ok(0),
    }
}

async fn timestamp_from<E: Element>(element: Option<E>) -> Result<Option<String>, ScrapeError> {
    match element {
        Some(element) => element.attribute("title").await,
        None => Ok(None),
    }
}

/// Base-10 vote count; anything unreadable counts as zero.
pub fn parse_votes(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(votes) => votes,
        Err(e) => {
            log::warn!("Unreadable vote count {:?}, using 0. Error: {}", raw, e);
            0
        }
    }
}
