use serde::{Serialize, Serializer};

use super::question::Question;

pub const DEFAULT_TARGET: usize = 100;

/// Questions collected by a run, in page order then DOM order.
///
/// Only grows, and never beyond its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    questions: Vec<Question>,
    target: usize,
}

impl Default for ResultSet {
    fn default() -> Self {
        ResultSet::with_target(DEFAULT_TARGET)
    }
}

impl ResultSet {
    pub fn with_target(target: usize) -> Self {
        ResultSet {
            questions: Vec::with_capacity(target.min(DEFAULT_TARGET)),
            target,
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.questions.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Appends a batch in order, dropping whatever does not fit.
    /// Returns how many questions were kept.
    pub(crate) fn extend(&mut self, batch: Vec<Question>) -> usize {
        let take = batch.len().min(self.remaining());
        self.questions.extend(batch.into_iter().take(take));
        take
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::ResultSet;
    use crate::domain::question::Question;

    fn question(title: &str) -> Question {
        Question {
            title: title.to_string(),
            tags: vec![],
            votes: 0,
            timestamp: None,
        }
    }

    #[test]
    fn extend_stops_at_target() {
        let mut results = ResultSet::with_target(3);

        assert_eq!(results.extend(vec![question("a"), question("b")]), 2);
        assert_eq!(results.remaining(), 1);

        assert_eq!(results.extend(vec![question("c"), question("d")]), 1);
        assert!(results.is_full());

        let titles: Vec<&str> = results.questions().iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn zero_target_is_full_from_the_start() {
        let mut results = ResultSet::with_target(0);

        assert!(results.is_full());
        assert_eq!(results.extend(vec![question("a")]), 0);
        assert!(results.is_empty());
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let mut results = ResultSet::with_target(2);
        results.extend(vec![question("a")]);

        let json = serde_json::to_value(&results).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{"title": "a", "tags": [], "votes": 0, "timestamp": null}])
        );
    }
}
