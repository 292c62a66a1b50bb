//! Insertion-ordered HTML attribute map.

use std::fmt;

use indexmap::IndexMap;

/// HTML attributes, rendered in insertion order as ` key="value"` pairs.
///
/// ```
/// use scriv_html::Attrs;
///
/// let attrs = Attrs::new().set("id", "id1").set("class", "wide");
/// assert_eq!(attrs.to_string(), " id=\"id1\" class=\"wide\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    map: IndexMap<String, String>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute; setting an existing key overwrites its value and
    /// keeps its position.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Display for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.map {
            write!(f, " {key}=\"{value}\"")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
