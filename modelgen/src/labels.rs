//! Default labels for conventional field names.

use std::collections::BTreeMap;

/// Labels used when a field carries neither a `label` annotation nor a
/// persistence `comment`, keyed by declared field name.
///
/// [`LabelDefaults::default`] holds the built-in conventions for identifier
/// and timestamp columns; [`LabelDefaults::empty`] starts from nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDefaults(BTreeMap<String, String>);

const BUILT_IN: [(&str, &str); 4] = [
    ("id", "ID"),
    ("create_time", "创建时间"),
    ("update_time", "更新时间"),
    ("delete_time", "删除时间"),
];

impl LabelDefaults {
    /// A table with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds or replaces the label for `field`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, label: impl Into<String>) -> Self {
        self.0.insert(field.into(), label.into());
        self
    }

    /// Label registered for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl Default for LabelDefaults {
    fn default() -> Self {
        Self(
            BUILT_IN
                .iter()
                .map(|(field, label)| ((*field).to_owned(), (*label).to_owned()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for LabelDefaults
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}
