//! Replacement table types and the shared built-in defaults.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tables;

/// Maps a single character to its replacement string.
pub type CharMap = HashMap<char, String>;

/// Maps a short literal substring (two or more characters) to its
/// replacement string.
pub type MultiCharMap = HashMap<String, String>;

/// The built-in single-character table, materialized once.
static DEFAULT_CHARMAP: LazyLock<CharMap> = LazyLock::new(|| {
    tables::CHARMAP
        .iter()
        .map(|&(c, replacement)| (c, replacement.to_string()))
        .collect()
});

/// The built-in multi-character table, materialized once.
static DEFAULT_MULTICHARMAP: LazyLock<MultiCharMap> = LazyLock::new(|| {
    tables::MULTICHARMAP
        .iter()
        .map(|&(key, replacement)| (key.to_string(), replacement.to_string()))
        .collect()
});

/// Returns a copy of the built-in single-character replacement table.
///
/// Useful as a starting point for a per-call override charmap.
pub fn default_charmap() -> CharMap {
    DEFAULT_CHARMAP.clone()
}

/// Returns a copy of the built-in multi-character replacement table.
pub fn default_multicharmap() -> MultiCharMap {
    DEFAULT_MULTICHARMAP.clone()
}

/// Borrows the shared built-in single-character table.
pub fn shared_charmap() -> &'static CharMap {
    &DEFAULT_CHARMAP
}

/// Borrows the shared built-in multi-character table.
pub fn shared_multicharmap() -> &'static MultiCharMap {
    &DEFAULT_MULTICHARMAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charmap_has_no_duplicate_keys() {
        assert_eq!(tables::CHARMAP.len(), default_charmap().len());
    }

    #[test]
    fn multicharmap_keys_are_at_least_two_chars() {
        for (key, _) in tables::MULTICHARMAP {
            assert!(key.chars().count() >= 2, "key {key:?} too short");
        }
    }

    #[test]
    fn known_entries_present() {
        let map = default_charmap();
        assert_eq!(map.get(&'À').map(String::as_str), Some("A"));
        assert_eq!(map.get(&'ß').map(String::as_str), Some("ss"));
        assert_eq!(map.get(&'€').map(String::as_str), Some("euro"));
        assert_eq!(map.get(&'☠').map(String::as_str), Some("skull and bones"));
    }

    #[test]
    fn default_copies_are_independent() {
        let mut copy = default_charmap();
        copy.insert('x', "y".to_string());
        assert!(!default_charmap().contains_key(&'x'));
    }
}
