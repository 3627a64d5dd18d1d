//! Grounding map data model.
//!
//! A [`GroundingMap`] maps an entity name to a [`Grounding`]: either a
//! [`DbRefs`] set (namespace -> identifier, always carrying `TEXT`) or the
//! explicit `Ungrounded` marker. Serialized to JSON it matches the INDRA-style
//! `db_refs` dicts downstream grounding pipelines expect, with `null` for
//! ungrounded names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Rows and reference sets
// ============================================================================

/// Reserved namespace that always maps to the entity name itself.
pub const TEXT_NAMESPACE: &str = "TEXT";

/// One record of a grounding map file: the entity name followed by
/// namespace/identifier pairs.
pub type Row = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DbRefs(BTreeMap<String, String>);

impl DbRefs {
    pub fn new(text: impl Into<String>) -> Self {
        let mut refs = BTreeMap::new();
        refs.insert(TEXT_NAMESPACE.to_string(), text.into());
        Self(refs)
    }

    /// The entity name this set was built for.
    pub fn text(&self) -> &str {
        self.0.get(TEXT_NAMESPACE).map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.0.get(namespace).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: `TEXT` is present from construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when something besides `TEXT` is present.
    pub fn has_references(&self) -> bool {
        self.0.len() > 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(ns, id)| (ns.as_str(), id.as_str()))
    }

    /// Namespaces other than `TEXT`, sorted.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|ns| *ns != TEXT_NAMESPACE)
    }

    /// Inserts a reference, returning the identifier it replaced.
    /// `TEXT` is never overwritten.
    pub(crate) fn insert(&mut self, namespace: &str, identifier: &str) -> Option<String> {
        if namespace == TEXT_NAMESPACE {
            return None;
        }
        self.0.insert(namespace.to_string(), identifier.to_string())
    }
}

// ============================================================================
// Grounding
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grounding {
    Grounded(DbRefs),
    Ungrounded,
}

impl Grounding {
    /// `Ungrounded` unless the set holds at least one real reference.
    pub fn from_db_refs(refs: DbRefs) -> Self {
        if refs.has_references() {
            Grounding::Grounded(refs)
        } else {
            Grounding::Ungrounded
        }
    }

    pub fn db_refs(&self) -> Option<&DbRefs> {
        match self {
            Grounding::Grounded(refs) => Some(refs),
            Grounding::Ungrounded => None,
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, Grounding::Grounded(_))
    }
}

// ============================================================================
// Grounding map
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundingMap(BTreeMap<String, Grounding>);

impl GroundingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Grounding> {
        self.0.get(name)
    }

    pub fn db_refs(&self, name: &str) -> Option<&DbRefs> {
        self.get(name).and_then(Grounding::db_refs)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_grounded(&self, name: &str) -> bool {
        self.get(name).is_some_and(Grounding::is_grounded)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn grounded_count(&self) -> usize {
        self.0.values().filter(|g| g.is_grounded()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grounding)> {
        self.0.iter().map(|(name, g)| (name.as_str(), g))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Last write wins; returns the replaced entry.
    pub(crate) fn insert(&mut self, name: String, grounding: Grounding) -> Option<Grounding> {
        self.0.insert(name, grounding)
    }
}

// ============================================================================
// Tests
// ============================================================================
