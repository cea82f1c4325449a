use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reference-counted immutable string for comment text and author ids.
///
/// The overlay resolver derives up to three sub-segments from one
/// scheduled segment, each carrying the same text. Wrapping `Arc<str>`
/// makes those clones a refcount bump instead of a fresh allocation.
///
/// Implements `PartialEq<&str>` so `assert_eq!(seg.text, "abc")` reads
/// naturally in tests.
#[derive(Debug, Clone, Eq)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count (not byte length) — comment widths are measured
    /// in glyphs, and comment text is routinely non-ASCII.
    #[inline]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SharedStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Sub-segments split from the same parent share the allocation.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl PartialEq<&str> for SharedStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Ord for SharedStr {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for SharedStr {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for SharedStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self.0).hash(state);
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    #[inline]
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    #[inline]
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s.as_str()))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Serde is hand-rolled so serde's `rc` feature stays off.

impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr(Arc::from(s.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_same_allocation() {
        let a = SharedStr::from("こんにちは");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(&*a, &*b);
    }

    #[test]
    fn char_count_is_glyphs_not_bytes() {
        let s = SharedStr::from("弾幕");
        assert_eq!(s.char_count(), 2);
        assert!(s.as_str().len() > 2);
    }

    #[test]
    fn eq_against_str_literal() {
        let s = SharedStr::from("abc");
        assert_eq!(s, "abc");
    }

    #[test]
    fn serde_roundtrip() {
        let s = SharedStr::from("comet");
        let json = serde_json::to_string(&s).unwrap_or_default();
        assert_eq!(json, "\"comet\"");
        let back: SharedStr = serde_json::from_str(&json).unwrap_or_else(|_| SharedStr::from(""));
        assert_eq!(back, s);
    }

    #[test]
    fn ordering_by_content() {
        assert!(SharedStr::from("alice") < SharedStr::from("bob"));
    }
}
