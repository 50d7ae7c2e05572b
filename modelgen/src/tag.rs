//! Delimited annotation strings parsed into key/value lookups.
//!
//! Annotation sources such as `"comment:创建时间;index"` or
//! `"required,min=1"` are split once into a [`TagTable`] when a field
//! descriptor is built.

use std::collections::BTreeMap;

use serde::Serialize;

/// Item separator used by validation annotations.
pub const VALIDATE_ITEM_SEP: &str = ",";
/// Key/value separator used by validation annotations.
pub const VALIDATE_KV_SEP: &str = "=";
/// Item separator used by persistence annotations.
pub const PERSIST_ITEM_SEP: &str = ";";
/// Key/value separator used by persistence annotations.
pub const PERSIST_KV_SEP: &str = ":";

/// Key/value table parsed from a single annotation string.
///
/// Parsing never fails. Pieces without a key/value separator are stored
/// with the piece as both key and value, and a repeated key keeps the value
/// of its last occurrence.
///
/// ```
/// use modelgen::TagTable;
///
/// let tags = TagTable::parse("comment:状态;index", ";", ":");
/// assert_eq!(tags.get("comment"), Some("状态"));
/// assert_eq!(tags.get("index"), Some("index"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagTable(BTreeMap<String, String>);

impl TagTable {
    /// Splits `raw` on `item_sep`, then each piece on the first `kv_sep`.
    ///
    /// An empty `item_sep` makes every character its own piece.
    #[must_use]
    pub fn parse(raw: &str, item_sep: &str, kv_sep: &str) -> Self {
        let mut entries = BTreeMap::new();
        if raw.is_empty() {
            return Self(entries);
        }
        let pieces: Vec<&str> = if item_sep.is_empty() {
            raw.split_inclusive(|_: char| true).collect()
        } else {
            raw.split(item_sep).collect()
        };
        for piece in pieces.into_iter().filter(|piece| !piece.is_empty()) {
            let split = if kv_sep.is_empty() {
                None
            } else {
                piece.split_once(kv_sep)
            };
            let (key, value) = split.unwrap_or((piece, piece));
            entries.insert(key.to_owned(), value.to_owned());
        }
        Self(entries)
    }

    /// Parses a validation annotation (`key=value,flag`).
    #[must_use]
    pub fn validation(raw: &str) -> Self {
        Self::parse(raw, VALIDATE_ITEM_SEP, VALIDATE_KV_SEP)
    }

    /// Parses a persistence annotation (`key:value;flag`).
    #[must_use]
    pub fn persistence(raw: &str) -> Self {
        Self::parse(raw, PERSIST_ITEM_SEP, PERSIST_KV_SEP)
    }

    /// Returns the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` when `key` was present in the source string.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the table holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
