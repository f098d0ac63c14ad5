//! Per-scan-unit aggregation of declarations.

use std::collections::HashMap;

use envscan_core::Declaration;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Declarations of one scan unit, keyed by variable name.
///
/// `put` is last-write-wins: a later declaration replaces an earlier one with
/// the same key but keeps the slot the key was first inserted at, so
/// insertion order is the order keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Declaration>,
    index: HashMap<String, usize>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `declaration`, returning the one it replaced.
    pub fn put(&mut self, declaration: Declaration) -> Option<Declaration> {
        if let Some(&slot) = self.index.get(&declaration.key) {
            return Some(std::mem::replace(&mut self.entries[slot], declaration));
        }
        self.index
            .insert(declaration.key.clone(), self.entries.len());
        self.entries.push(declaration);
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Declaration> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.key.as_str()).collect()
    }

    /// Current entries, in insertion order or sorted by key.
    #[must_use]
    pub fn entries(&self, sorted: bool) -> Entries<'_> {
        let mut entries: Vec<&Declaration> = self.entries.iter().collect();
        if sorted {
            entries.sort_by(|a, b| a.key.cmp(&b.key));
        }
        Entries(entries)
    }
}

impl Extend<Declaration> for Registry {
    fn extend<T: IntoIterator<Item = Declaration>>(&mut self, iter: T) {
        for declaration in iter {
            self.put(declaration);
        }
    }
}

impl FromIterator<Declaration> for Registry {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries(false).serialize(serializer)
    }
}

/// An ordered view over a [`Registry`]. Serializes as a `key -> declaration` map.
#[derive(Debug, Clone)]
pub struct Entries<'a>(Vec<&'a Declaration>);

impl<'a> Entries<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Declaration> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&'a str> {
        self.0.iter().map(|d| d.key.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for Entries<'a> {
    type Item = &'a Declaration;
    type IntoIter = std::vec::IntoIter<&'a Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for declaration in &self.0 {
            map.serialize_entry(&declaration.key, declaration)?;
        }
        map.end()
    }
}
