//! Ordered grouping of document keys for navigation.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    label: String,
    documents: Vec<String>,
}

/// Category label to ordered document keys.
///
/// Categories keep insertion order, as do the keys within each category.
/// A key belongs to exactly one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    by_label: HashMap<String, usize>,
    by_document: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category with its documents.
    ///
    /// # Errors
    ///
    /// Fails if the label already exists or a key is already indexed.
    pub fn push<I, S>(&mut self, label: impl Into<String>, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        if self.by_label.contains_key(&label) {
            return Err(ModelError::DuplicateCategory { label });
        }
        let position = self.categories.len();
        let mut keys = Vec::new();
        for key in documents {
            let key = key.into();
            if self.by_document.contains_key(&key) || keys.contains(&key) {
                return Err(ModelError::DuplicateDocument { key });
            }
            keys.push(key);
        }
        for key in &keys {
            self.by_document.insert(key.clone(), position);
        }
        self.by_label.insert(label.clone(), position);
        self.categories.push(Category {
            label,
            documents: keys,
        });
        Ok(())
    }

    /// Categories in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|c| (c.label.as_str(), c.documents.as_slice()))
    }

    /// Documents of one category.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.by_label
            .get(label)
            .map(|&position| self.categories[position].documents.as_slice())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Label of the category listing `key`.
    pub fn category_of(&self, key: &str) -> Option<&str> {
        self.by_document
            .get(key)
            .map(|&position| self.categories[position].label.as_str())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of all category list lengths.
    pub fn total_count(&self) -> usize {
        self.categories.iter().map(|c| c.documents.len()).sum()
    }
}
