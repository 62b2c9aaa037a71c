//! Part registry
//!
//! [`PartRegistry`] keeps parts in insertion order and maintains a
//! secondary index keyed by `(material, thickness)`. The index exists only
//! to answer homogeneity questions cheaply; every partition is still built
//! by walking the primary sequence so the output order is stable.
//!
//! Parts are shared between the sequence and the index through [`Arc`], so
//! removal can drop exactly the occurrence that left the sequence even when
//! structurally equal duplicates are present.

use crate::part::Part;
use crate::summary::{compact_rows, material_totals, CompactRow, MaterialTotal};
use cutlistkit_core::LengthFormat;
use serde::{Serialize, Serializer};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// Index key of a part
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartKey {
    pub material: String,
    /// Thickness in mm rendered with three decimals
    pub thickness: String,
}

impl PartKey {
    pub fn of(part: &Part) -> Self {
        Self {
            material: part.material.clone(),
            thickness: thickness_key(part.thickness),
        }
    }
}

fn thickness_key(thickness_mm: f64) -> String {
    format!("{:.3}", thickness_mm)
}

/// Ordered, indexed collection of parts
#[derive(Debug, Clone, Default)]
pub struct PartRegistry {
    parts: VecDeque<Arc<Part>>,
    index: HashMap<PartKey, Vec<Arc<Part>>>,
}

impl PartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part
    pub fn add(&mut self, part: Part) {
        self.push_back(Arc::new(part));
    }

    fn push_back(&mut self, part: Arc<Part>) {
        self.index_insert(&part);
        self.parts.push_back(part);
    }

    fn index_insert(&mut self, part: &Arc<Part>) {
        self.index
            .entry(PartKey::of(part))
            .or_default()
            .push(Arc::clone(part));
    }

    fn index_remove(&mut self, part: &Arc<Part>) {
        let key = PartKey::of(part);
        if let Some(bucket) = self.index.get_mut(&key) {
            if let Some(pos) = bucket.iter().position(|p| Arc::ptr_eq(p, part)) {
                bucket.remove(pos);
            }
            if bucket.is_empty() {
                self.index.remove(&key);
            }
        }
    }

    /// Remove the first part structurally equal to `part`.
    ///
    /// Returns false if no such part exists.
    pub fn remove(&mut self, part: &Part) -> bool {
        let Some(pos) = self.parts.iter().position(|p| **p == *part) else {
            debug!(name = %part.name, "remove: part not in registry");
            return false;
        };
        if let Some(removed) = self.parts.remove(pos) {
            self.index_remove(&removed);
        }
        true
    }

    /// Take the part at the front of the sequence
    pub fn remove_first(&mut self) -> Option<Part> {
        let first = self.parts.pop_front()?;
        self.index_remove(&first);
        Some(Arc::unwrap_or_clone(first))
    }

    /// Put a part at the front of the sequence
    pub fn insert_first(&mut self, part: Part) {
        let part = Arc::new(part);
        self.index_insert(&part);
        self.parts.push_front(part);
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Part> {
        self.parts.get(index).map(AsRef::as_ref)
    }

    /// Parts in sequence order
    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().map(AsRef::as_ref)
    }

    /// Owned copies of the parts in sequence order
    pub fn get_list(&self) -> Vec<Part> {
        self.iter().cloned().collect()
    }

    /// Keys currently present in the index
    pub fn keys(&self) -> impl Iterator<Item = &PartKey> {
        self.index.keys()
    }

    /// Parts filed under `key`
    pub fn indexed(&self, key: &PartKey) -> impl Iterator<Item = &Part> {
        self.index
            .get(key)
            .into_iter()
            .flat_map(|bucket| bucket.iter().map(AsRef::as_ref))
    }

    pub fn all_same_material(&self) -> bool {
        let mut materials = self.index.keys().map(|k| &k.material);
        match materials.next() {
            Some(first) => materials.all(|m| m == first),
            None => true,
        }
    }

    pub fn all_same_thickness(&self) -> bool {
        let mut thicknesses = self.index.keys().map(|k| &k.thickness);
        match thicknesses.next() {
            Some(first) => thicknesses.all(|t| t == first),
            None => true,
        }
    }

    /// One registry per material
    pub fn split_by_material(&self) -> Vec<PartRegistry> {
        if self.all_same_material() {
            return vec![self.clone()];
        }
        self.partition(|p| p.material.clone())
    }

    /// One registry per `(material, thickness)` pair
    pub fn split_by_material_and_thickness(&self) -> Vec<PartRegistry> {
        if self.index.len() <= 1 {
            return vec![self.clone()];
        }
        self.partition(PartKey::of)
    }

    /// One registry per thickness
    pub fn split_by_thickness(&self) -> Vec<PartRegistry> {
        if self.all_same_thickness() {
            return vec![self.clone()];
        }
        self.partition(|p| thickness_key(p.thickness))
    }

    fn partition<K, F>(&self, key_of: F) -> Vec<PartRegistry>
    where
        K: Eq + std::hash::Hash,
        F: Fn(&Part) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut out: Vec<PartRegistry> = Vec::new();
        for part in &self.parts {
            let slot = *slots.entry(key_of(part)).or_insert_with(|| {
                out.push(PartRegistry::new());
                out.len() - 1
            });
            out[slot].push_back(Arc::clone(part));
        }
        out
    }

    /// A copy ordered by name, leaving this registry untouched
    pub fn sort_by_name(&self) -> PartRegistry {
        let mut sorted = self.clone();
        sorted.sort();
        sorted
    }

    /// Order by name in place (stable, case-sensitive)
    pub fn sort(&mut self) {
        self.parts
            .make_contiguous()
            .sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// Add every part of `other`
    pub fn append(&mut self, other: &PartRegistry) {
        for part in &other.parts {
            self.push_back(Arc::clone(part));
        }
    }

    /// Copy that shares no parts with this registry
    pub fn deep_clone(&self) -> PartRegistry {
        let mut copy = PartRegistry::new();
        for part in self.iter() {
            copy.add(part.deep_clone());
        }
        copy
    }

    /// Summed amount per material in first-seen order
    pub fn material_totals(&self) -> Vec<MaterialTotal> {
        material_totals(self.iter())
    }

    /// Consecutive identical parts collapsed into counted rows
    pub fn compact_rows(&self, fmt: &LengthFormat) -> Vec<CompactRow> {
        compact_rows(self.iter(), fmt)
    }
}

impl PartialEq for PartRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.parts.len() == other.parts.len() && self.iter().eq(other.iter())
    }
}

impl Serialize for PartRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl FromIterator<Part> for PartRegistry {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        let mut registry = PartRegistry::new();
        for part in iter {
            registry.add(part);
        }
        registry
    }
}
