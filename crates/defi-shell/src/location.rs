//! Navigation records and path depth.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Separator between route path segments.
pub const SEPARATOR: char = '/';

/// Identity of a single navigation event.
///
/// Two navigations to the same path carry different keys, which is what lets
/// the swap container replay an animation for a refresh of the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey(u64);

impl LocationKey {
    /// Creates a key from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nav-{}", self.0)
    }
}

/// A validated navigation record.
///
/// Deserializing goes through [`Location::new`], so a malformed path is
/// rejected rather than loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation")]
pub struct Location {
    path: String,
    key: LocationKey,
}

#[derive(Deserialize)]
struct RawLocation {
    path: String,
    key: LocationKey,
}

impl TryFrom<RawLocation> for Location {
    type Error = ShellError;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Self::new(raw.path, raw.key)
    }
}

impl Location {
    /// Creates a location after checking the path shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidLocation`] if the path is empty or does not
    /// start with [`SEPARATOR`].
    pub fn new(path: impl Into<String>, key: LocationKey) -> Result<Self> {
        let path = path.into();
        validate_path(&path)?;
        Ok(Self { path, key })
    }

    /// The slash-delimited route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The navigation key.
    #[must_use]
    pub fn key(&self) -> LocationKey {
        self.key
    }

    /// Depth of this location's path, see [`path_depth`].
    #[must_use]
    pub fn depth(&self) -> usize {
        path_depth(&self.path)
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShellError::invalid_location(path, "path is empty"));
    }
    if !path.starts_with(SEPARATOR) {
        return Err(ShellError::invalid_location(
            path,
            "path must start with '/'",
        ));
    }
    Ok(())
}

/// Counts the separator-delimited segments of a route path.
///
/// A single trailing separator does not open a new segment, so the root path
/// `/` has depth 1, `/wallets` and `/wallets/` have depth 2.
#[must_use]
pub fn path_depth(path: &str) -> usize {
    path.strip_suffix(SEPARATOR)
        .unwrap_or(path)
        .split(SEPARATOR)
        .count()
}

/// Hands out navigation keys for paths reported by the router.
///
/// The router re-renders its consumers for reasons other than navigation, so
/// the same path observed twice in a row keeps its key. A fresh key is minted
/// when the path changes or when [`LocationHistory::renavigate`] signals a
/// navigation to the current path.
#[derive(Debug, Default)]
pub struct LocationHistory {
    next_key: u64,
    current: Option<Location>,
}

impl LocationHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the path of the current render.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidLocation`] for a malformed path; the
    /// history is left untouched in that case.
    pub fn observe(&mut self, path: &str) -> Result<Location> {
        if let Some(current) = &self.current {
            if current.path == path {
                return Ok(current.clone());
            }
        }
        self.push(path)
    }

    /// Records a navigation to `path` even if it equals the current path.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidLocation`] for a malformed path.
    pub fn renavigate(&mut self, path: &str) -> Result<Location> {
        self.push(path)
    }

    /// The most recently observed location, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    fn push(&mut self, path: &str) -> Result<Location> {
        let location = Location::new(path, LocationKey::new(self.next_key))?;
        self.next_key += 1;
        self.current = Some(location.clone());
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn depth_counts_segments() {
        assert_eq!(path_depth("/"), 1);
        assert_eq!(path_depth("/wallets"), 2);
        assert_eq!(path_depth("/settings"), 2);
        assert_eq!(path_depth("/wallets/123"), 3);
        assert_eq!(path_depth("/wallets/123/send"), 4);
    }

    #[test]
    fn trailing_separator_does_not_add_depth() {
        assert_eq!(path_depth("/wallets/"), path_depth("/wallets"));
        assert_eq!(path_depth("/wallets/123/"), 3);
    }

    #[test]
    fn location_rejects_empty_path() {
        let err = Location::new("", LocationKey::new(0)).unwrap_err();
        assert!(matches!(err, ShellError::InvalidLocation { reason: "path is empty", .. }));
    }

    #[test]
    fn location_rejects_relative_path() {
        let err = Location::new("wallets/1", LocationKey::new(0)).unwrap_err();
        assert_eq!(
            err,
            ShellError::invalid_location("wallets/1", "path must start with '/'")
        );
    }

    #[test]
    fn location_exposes_depth_and_key() {
        let loc = Location::new("/wallets/123/send", LocationKey::new(7)).unwrap();
        assert_eq!(loc.depth(), 4);
        assert_eq!(loc.key(), LocationKey::new(7));
        assert_eq!(loc.key().to_string(), "nav-7");
    }

    #[test]
    fn deserialize_validates_path() {
        let loc: Location = serde_json::from_str(r#"{"path":"/wallets/1","key":4}"#).unwrap();
        assert_eq!(loc, Location::new("/wallets/1", LocationKey::new(4)).unwrap());

        let empty = serde_json::from_str::<Location>(r#"{"path":"","key":0}"#).unwrap_err();
        assert!(empty.to_string().contains("path is empty"));

        let relative = serde_json::from_str::<Location>(r#"{"path":"wallets/1","key":0}"#);
        assert!(relative.is_err());
    }

    #[test]
    fn history_keeps_key_for_same_path() {
        let mut history = LocationHistory::new();
        let first = history.observe("/wallets").unwrap();
        let again = history.observe("/wallets").unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn history_mints_key_on_path_change() {
        let mut history = LocationHistory::new();
        let first = history.observe("/wallets").unwrap();
        let second = history.observe("/settings").unwrap();
        assert_ne!(first.key(), second.key());
        assert_eq!(history.current(), Some(&second));
    }

    #[test]
    fn renavigate_same_path_mints_new_key() {
        let mut history = LocationHistory::new();
        let first = history.observe("/wallets").unwrap();
        let refreshed = history.renavigate("/wallets").unwrap();
        assert_eq!(first.path(), refreshed.path());
        assert_ne!(first.key(), refreshed.key());
    }

    #[test]
    fn history_ignores_malformed_path() {
        let mut history = LocationHistory::new();
        let first = history.observe("/wallets").unwrap();
        assert!(history.observe("").is_err());
        assert_eq!(history.current(), Some(&first));
    }
}
