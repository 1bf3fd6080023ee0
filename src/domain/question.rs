use serde::Serialize;

/// One listing entry, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub title: String,
    pub tags: Vec<String>,
    pub votes: i64,
    /// `title` attribute of the relative time element, kept verbatim.
    pub timestamp: Option<String>,
}

impl Question {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
