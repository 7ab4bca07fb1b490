//! Shared data models: the allow-list, inspection results, and lint output.

pub mod inspect;

use serde::Serialize;
use std::collections::HashSet;

/// Category strings permitted in document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    categories: HashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test; no case folding or trimming.
    pub fn allows(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One disallowed category used by one file.
pub struct Violation {
    pub file: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub files: usize,
    pub violations: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Lint results container.
pub struct Report {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_exact_match() {
        let allow = AllowList::new(["blog", "Tutorial"]);
        assert!(allow.allows("blog"));
        assert!(!allow.allows("Blog"));
        assert!(!allow.allows("tutorial"));
        assert!(!allow.allows(" blog"));
    }

    #[test]
    fn allow_list_dedups() {
        let allow = AllowList::new(vec!["a".to_string(), "a".to_string(), "b".to_string()]);
        assert_eq!(allow.len(), 2);
        assert!(AllowList::default().is_empty());
    }
}
