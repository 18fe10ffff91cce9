//! Base attack bonus progression tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A BAB progression row ("3", "full", "fighter", ...).
///
/// Classes reference a progression by its `key` (the row id) or its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabProgression {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Character level to base attack bonus
    #[serde(default)]
    pub entries: BTreeMap<u8, i32>,
}

impl BabProgression {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_entry(mut self, level: u8, bonus: i32) -> Self {
        self.entries.insert(level, bonus);
        self
    }

    pub fn bonus_at(&self, level: u8) -> Option<i32> {
        self.entries.get(&level).copied()
    }

    /// True when `reference` names this row by id or by name.
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        self.key.trim().eq_ignore_ascii_case(reference)
            || self
                .name
                .as_deref()
                .is_some_and(|name| name.trim().eq_ignore_ascii_case(reference))
    }
}
