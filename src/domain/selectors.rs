use serde::Deserialize;

/// CSS selectors describing the listing markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingSelectors {
    pub item: String,
    pub title: String,
    pub tag: String,
    pub votes: String,
    pub timestamp: String,
    pub next_page: String,
    pub cookie_consent: String,
    pub filter_toggle: String,
    pub tag_input: String,
    pub apply_filter: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        ListingSelectors {
            item: "div.s-post-summary--content".to_string(),
            title: "h3 > a".to_string(),
            tag: "a.post-tag".to_string(),
            votes: "div.s-post-summary--stats-item__emphasized span.s-post-summary--stats-item-number"
                .to_string(),
            timestamp: "span.relativetime".to_string(),
            next_page: r#"a.s-pagination--item[rel="next"]"#.to_string(),
            cookie_consent: "#onetrust-accept-btn-handler".to_string(),
            filter_toggle: r#"button[aria-controls="uql-form"]"#.to_string(),
            tag_input: r#"#uql-form input[name="tagQuery"]"#.to_string(),
            apply_filter: r#"#uql-form button[type="submit"]"#.to_string(),
        }
    }
}
