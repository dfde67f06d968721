//! Java-style property file parsing.
//!
//! The accepted syntax is the common subset of `.properties` files:
//! `key=value` or `key: value` pairs, `#` and `!` comment lines, and
//! blank lines. Keys and values are trimmed of surrounding whitespace.
//! Backslash line continuations are not supported.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Error origin for text parsed without a backing file.
const INLINE_ORIGIN: &str = "<inline>";

/// An immutable-after-resolution set of string properties.
///
/// Within a single file, a later duplicate of a key wins. Across layers,
/// [`PropertySet::merge`] applies the same rule: the merged-in layer
/// overrides the receiver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
}

impl PropertySet {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses property file text.
    ///
    /// Errors from text parsed this way carry the placeholder origin
    /// `<inline>`; [`PropertySet::from_file`] attributes them to the real
    /// file instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLine`] for any non-blank, non-comment
    /// line without a `=` or `:` separator, or with an empty key.
    pub fn parse_str(text: &str) -> ConfigResult<Self> {
        let mut entries = BTreeMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some(sep) = line.find(['=', ':']) else {
                return Err(ConfigError::InvalidLine {
                    path: PathBuf::from(INLINE_ORIGIN),
                    line: idx + 1,
                    content: raw.to_string(),
                });
            };

            let key = line[..sep].trim();
            if key.is_empty() {
                return Err(ConfigError::InvalidLine {
                    path: PathBuf::from(INLINE_ORIGIN),
                    line: idx + 1,
                    content: raw.to_string(),
                });
            }
            let value = line[sep + 1..].trim();

            // Last occurrence of a duplicate key wins.
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    /// Reads and parses a property file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read (including
    /// when it does not exist; callers that treat absence as an empty
    /// layer handle that case themselves) and [`ConfigError::InvalidLine`]
    /// naming the file on malformed content.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_str(&text).map_err(|err| err.with_path(path))
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for a key, or a missing-key binding error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the key is absent.
    pub fn get_required(&self, key: &str) -> ConfigResult<&str> {
        self.get(key).ok_or_else(|| ConfigError::missing_key(key))
    }

    /// Returns whether the set contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of properties in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlays another layer onto this set; the other layer's values win
    /// on conflicting keys.
    pub fn merge(&mut self, overrides: PropertySet) {
        self.entries.extend(overrides.entries);
    }

    /// Iterates over key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inserts a single property, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl FromIterator<(String, String)> for PropertySet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
