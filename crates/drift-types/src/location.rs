//! Location addressing for tracked nodes.
//!
//! A node's location is built by joining ancestor keys root-to-leaf, each key
//! followed by the separator. Keys are validated at hierarchy construction to
//! never contain the separator, so locations are unique tree-wide and safe to
//! use as storage paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The character joining node keys into a location.
pub const SEPARATOR: char = '/';

/// The comparison address of a tracked node.
///
/// The root location is empty; each level appends `key` plus a trailing
/// separator, so the location of a leaf under `PAGES` → `home` is
/// `"PAGES/home/"`.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Location(String);

impl Location {
    /// The empty root location.
    pub fn root() -> Self {
        Self::default()
    }

    /// The location of a child node with the given key.
    pub fn child(&self, key: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + key.len() + 1);
        path.push_str(&self.0);
        path.push_str(key);
        path.push(SEPARATOR);
        Self(path)
    }

    /// The location as a path string, trailing separator included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the root location.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        assert!(Location::root().is_root());
        assert_eq!(Location::root().as_str(), "");
    }

    #[test]
    fn child_appends_key_and_separator() {
        let loc = Location::root().child("PAGES").child("home");
        assert_eq!(loc.as_str(), "PAGES/home/");
        assert!(!loc.is_root());
    }

    #[test]
    fn locations_order_lexicographically() {
        let a = Location::root().child("a");
        let b = Location::root().child("b");
        assert!(a < b);
    }

    #[test]
    fn display_matches_as_str() {
        let loc = Location::root().child("X");
        assert_eq!(loc.to_string(), loc.as_str());
    }
}
