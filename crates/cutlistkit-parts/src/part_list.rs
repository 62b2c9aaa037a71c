//! Hardware counter

use serde::{Deserialize, Serialize};

/// Ordered name counter used for hardware items
///
/// Names keep the order in which they were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartList {
    names: Vec<String>,
    counts: Vec<usize>,
}

impl PartList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more `name`
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        match self.names.iter().position(|n| *n == name) {
            Some(index) => self.counts[index] += 1,
            None => {
                self.names.push(name);
                self.counts.push(1);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Unique names in first-seen order
    pub fn get_list(&self) -> &[String] {
        &self.names
    }

    /// Counts parallel to [`get_list`](Self::get_list)
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// `(name, count)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    /// Number of hardware items counted, duplicates included
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
