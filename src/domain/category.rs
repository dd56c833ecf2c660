// src/domain/category.rs
use crate::constants::{ALL_CATEGORY, DEFAULT_CATEGORIES};
use serde::Serialize;

/// Ordered set of category names.
///
/// Always starts with the synthetic [`ALL_CATEGORY`] entry. Names are unique
/// (case-sensitive) and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Categories(Vec<String>);

impl Categories {
    pub fn defaults() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }

    /// Rebuild from a stored list, dropping blank and duplicate names
    pub fn from_stored(names: Vec<String>) -> Self {
        let mut categories = Self(vec![ALL_CATEGORY.to_string()]);
        for name in names {
            categories.insert(&name);
        }
        categories
    }

    /// Append `name` (trimmed). Returns the stored name, or `None` if it was
    /// blank or already present.
    pub fn insert(&mut self, name: &str) -> Option<&str> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return None;
        }
        self.0.push(name.to_string());
        self.0.last().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Categories {
    fn default() -> Self {
        Self::defaults()
    }
}
