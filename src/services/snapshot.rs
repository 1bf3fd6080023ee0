//! Saved listing pages served through the [`Page`] interface.
//!
//! Activating a `rel="next"` control moves to the following snapshot. On the
//! last snapshot `rel="next"` controls are hidden, so a saved mid-listing page
//! ends the listing instead of repeating. Clicks and typing are recorded as
//! [`Interaction`]s. Content never changes, so waits resolve or time out
//! immediately.

use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

use super::{Element, Page};

/// A click or keystrokes sent to an element, named like a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Activate(String),
    Fill(String, String),
}

#[derive(Clone)]
pub struct SnapshotSite {
    pages: Arc<Vec<String>>,
    cursor: Arc<AtomicUsize>,
    interactions: Arc<Mutex<Vec<Interaction>>>,
}

impl SnapshotSite {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SnapshotSite {
            pages: Arc::new(pages.into_iter().map(Into::into).collect()),
            cursor: Arc::new(AtomicUsize::new(0)),
            interactions: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Loads every `.html` file in `directory`, ordered by file name.
    pub fn from_dir(directory: &Path) -> Result<Self, ScrapeError> {
        let entries = std::fs::read_dir(directory).map_err(|e| {
            ScrapeError::Snapshot(format!("cannot read {}: {}", directory.display(), e))
        })?;

        let mut paths = vec![];
        for entry in entries {
            let path = entry
                .map_err(|e| ScrapeError::Snapshot(format!("cannot list snapshot: {}", e)))?
                .path();
            if path.extension().is_some_and(|ext| ext == "html") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(ScrapeError::Snapshot(format!(
                "no .html files in {}",
                directory.display()
            )));
        }

        let mut pages = Vec::with_capacity(paths.len());
        for path in paths {
            let html = std::fs::read_to_string(&path).map_err(|e| {
                ScrapeError::Snapshot(format!("cannot read {}: {}", path.display(), e))
            })?;
            pages.push(html);
        }

        log::info!(
            "Loaded {} snapshot pages from {}",
            pages.len(),
            directory.display()
        );
        Ok(SnapshotSite::new(pages))
    }

    pub fn new_page(&self) -> SnapshotPage {
        SnapshotPage { site: self.clone() }
    }

    /// Index of the snapshot currently shown.
    pub fn current_page(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    fn on_last_page(&self) -> bool {
        self.current_page() + 1 >= self.pages.len()
    }

    /// Everything clicked or typed into so far, oldest first.
    pub fn interactions(&self) -> Vec<Interaction> {
        self.interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, interaction: Interaction) {
        self.interactions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(interaction);
    }

    fn current_html(&self) -> &str {
        self.pages
            .get(self.current_page())
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn advance(&self) {
        let current = self.current_page();
        if current + 1 < self.pages.len() {
            self.cursor.store(current + 1, Ordering::SeqCst);
        }
    }
}

pub struct SnapshotPage {
    site: SnapshotSite,
}

pub struct SnapshotElement {
    outer_html: String,
    site: SnapshotSite,
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Snapshot(format!("invalid selector `{}`: {}", selector, e)))
}

fn select_in_document(html: &str, selector: &Selector) -> Vec<String> {
    Html::parse_document(html)
        .select(selector)
        .map(|element| element.html())
        .collect()
}

/// Runs `f` on the element serialized in `outer_html`.
fn with_fragment<T>(outer_html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> Option<T> {
    let fragment = Html::parse_fragment(outer_html);
    let element = fragment
        .root_element()
        .children()
        .find_map(ElementRef::wrap)?;
    Some(f(element))
}

impl SnapshotElement {
    fn child(&self, outer_html: String) -> SnapshotElement {
        SnapshotElement {
            outer_html,
            site: self.site.clone(),
        }
    }

    /// `tag#id[name=..][aria-controls=..][type=..]`, whichever attributes exist.
    fn describe(&self) -> String {
        with_fragment(&self.outer_html, |element| {
            let value = element.value();
            let mut description = value.name().to_string();
            if let Some(id) = value.id() {
                description.push_str(&format!("#{}", id));
            }
            for attribute in ["name", "aria-controls", "type"] {
                if let Some(found) = value.attr(attribute) {
                    description.push_str(&format!("[{}={}]", attribute, found));
                }
            }
            description
        })
        .unwrap_or_default()
    }

    fn is_next_control(&self) -> bool {
        with_fragment(&self.outer_html, |element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| rel.split_whitespace().any(|r| r == "next"))
        })
        .unwrap_or(false)
    }
}

#[async_trait]
impl Page for SnapshotPage {
    type Element = SnapshotElement;

    async fn goto(&self, url: &str) -> Result<(), ScrapeError> {
        log::debug!("Snapshot goto {} rewinds to the first page", url);
        self.site.cursor.store(0, Ordering::SeqCst);
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError> {
        match self.query_all(selector).await?.is_empty() {
            true => Err(ScrapeError::timeout(selector, timeout)),
            false => Ok(()),
        }
    }

    async fn query_all(&self, selector: &str) -> Result<Vec<SnapshotElement>, ScrapeError> {
        let parsed = parse_selector(selector)?;
        let hide_next = self.site.on_last_page();
        Ok(select_in_document(self.site.current_html(), &parsed)
            .into_iter()
            .map(|outer_html| SnapshotElement {
                outer_html,
                site: self.site.clone(),
            })
            .filter(|element| !(hide_next && element.is_next_control()))
            .collect())
    }
}

#[async_trait]
impl Element for SnapshotElement {
    async fn query_all(&self, selector: &str) -> Result<Vec<Self>, ScrapeError> {
        let parsed = parse_selector(selector)?;
        let matches = with_fragment(&self.outer_html, |element| {
            element
                .select(&parsed)
                .map(|found| found.html())
                .collect::<Vec<String>>()
        })
        .unwrap_or_default();

        Ok(matches.into_iter().map(|html| self.child(html)).collect())
    }

    async fn text(&self) -> Result<String, ScrapeError> {
        Ok(with_fragment(&self.outer_html, |element| element.text().collect::<String>())
            .unwrap_or_default())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>, ScrapeError> {
        Ok(with_fragment(&self.outer_html, |element| {
            element.value().attr(name).map(str::to_string)
        })
        .flatten())
    }

    async fn activate(&self) -> Result<(), ScrapeError> {
        self.site.record(Interaction::Activate(self.describe()));
        if self.is_next_control() {
            self.site.advance();
            log::debug!("Snapshot moved to page {}", self.site.current_page());
        }
        Ok(())
    }

    async fn fill(&self, text: &str) -> Result<(), ScrapeError> {
        self.site
            .record(Interaction::Fill(self.describe(), text.to_string()));
        Ok(())
    }
}
