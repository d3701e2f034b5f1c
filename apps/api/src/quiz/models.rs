use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aptitude bucket a quiz question contributes to.
///
/// Declaration order is the canonical order used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Logical,
    Verbal,
    Numerical,
    Spatial,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Logical,
        Category::Verbal,
        Category::Numerical,
        Category::Spatial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Logical => "logical",
            Category::Verbal => "verbal",
            Category::Numerical => "numerical",
            Category::Spatial => "spatial",
        }
    }

    /// Case-insensitive parse. Returns `None` for anything outside the four buckets.
    pub fn parse(raw: &str) -> Option<Category> {
        let raw = raw.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub category: Category,
}

/// Question position → chosen option index.
///
/// Choices are kept as raw JSON values: out-of-range, fractional or null
/// choices are accepted and never influence the tally, which is keyed by
/// question alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<usize, Value>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the choice for a question.
    pub fn record(&mut self, question: usize, option: i64) {
        self.0.insert(question, Value::from(option));
    }

    /// Integer choice for a question. `None` when unanswered or not an integer.
    pub fn get(&self, question: usize) -> Option<i64> {
        self.0.get(&question).and_then(Value::as_i64)
    }


    pub fn question_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(usize, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (usize, i64)>>(iter: I) -> Self {
        AnswerSet(
            iter.into_iter()
                .map(|(question, option)| (question, Value::from(option)))
                .collect(),
        )
    }
}

/// Per-category answer counts. Serialises as `{logical, verbal, numerical, spatial}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub logical: u32,
    pub verbal: u32,
    pub numerical: u32,
    pub spatial: u32,
}

impl CategoryTally {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Logical => self.logical,
            Category::Verbal => self.verbal,
            Category::Numerical => self.numerical,
            Category::Spatial => self.spatial,
        }
    }

    pub fn increment(&mut self, category: Category) {
        let slot = match category {
            Category::Logical => &mut self.logical,
            Category::Verbal => &mut self.verbal,
            Category::Numerical => &mut self.numerical,
            Category::Spatial => &mut self.spatial,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Static stream suggestion attached to a dominant category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRecord {
    pub stream: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
}
