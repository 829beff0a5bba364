//! The loaded listing

use std::slice;

/// Ordered, trimmed, non-blank records as read from the listing file.
///
/// Position 1 is the first non-blank line. The listing is never mutated after
/// loading; benchmarks copy it or build their own containers from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    records: Vec<String>,
}

impl Listing {
    /// Wrap already-cleaned records
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.records
    }

    /// Record at a 1-based position
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.records.get(index))
            .map(String::as_str)
    }

    /// Independent working copy of the records
    pub fn to_vec(&self) -> Vec<String> {
        self.records.clone()
    }
}

impl From<Vec<String>> for Listing {
    fn from(records: Vec<String>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<String> for Listing {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
