//! Catalog aliases.
//!
//! An alias is the dotted key naming a catalog entry. Raw aliases may use
//! `-`, `_` or `.` as separators; all three normalize to `.`, so
//! `spring-boot-starter-web` and `spring.boot.starter.web` name the same entry.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::core::errors::CatalogError;

/// Shape every raw alias must have before normalization.
static ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9_.\-]*$").expect("alias pattern is valid"));

/// First segments a library alias may not use; they name the other sections.
pub const RESERVED_LIBRARY_PREFIXES: &[&str] = &["bundles", "versions", "plugins"];

/// Segments no alias may contain anywhere.
pub const FORBIDDEN_SEGMENTS: &[&str] = &["extensions", "class", "convention"];

/// A normalized, dot-separated catalog key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alias {
    normalized: String,
}

impl Alias {
    /// Validate and normalize a raw alias.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidAlias {
            alias: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("alias is empty"));
        }
        if !ALIAS_PATTERN.is_match(raw) {
            return Err(invalid(
                "must start with a lowercase letter and contain only letters, digits, `.`, `-` or `_`",
            ));
        }

        let normalized = normalize(raw);
        for segment in normalized.split('.') {
            if segment.is_empty() {
                return Err(invalid("contains an empty segment"));
            }
            if FORBIDDEN_SEGMENTS.contains(&segment) {
                return Err(invalid(&format!("segment `{}` is reserved", segment)));
            }
        }

        Ok(Alias { normalized })
    }

    /// The normalized dotted form.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Iterate over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.normalized.split('.')
    }

    /// The first segment.
    pub fn first_segment(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Everything before the last segment, if there is more than one.
    pub fn parent(&self) -> Option<&str> {
        self.normalized.rsplit_once('.').map(|(parent, _)| parent)
    }

    /// True if this alias lives strictly below `prefix` (an empty prefix is the root).
    pub fn is_under(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        self.normalized.len() > prefix.len()
            && self.normalized.starts_with(prefix)
            && self.normalized.as_bytes()[prefix.len()] == b'.'
    }

    /// The segment directly below `prefix`, if this alias is under it.
    pub fn child_segment(&self, prefix: &str) -> Option<&str> {
        if !self.is_under(prefix) {
            return None;
        }
        let rest = if prefix.is_empty() {
            self.normalized.as_str()
        } else {
            &self.normalized[prefix.len() + 1..]
        };
        rest.split('.').next()
    }

    /// Number of leading segments shared with `other`.
    pub fn shared_segments(&self, other: &str) -> usize {
        self.segments()
            .zip(other.split('.'))
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// How close this alias is to `other`: shared leading segments, then the
    /// common prefix length of the first segment that differs.
    pub fn closeness(&self, other: &str) -> (usize, usize) {
        let shared = self.shared_segments(other);
        let prefix = match (self.segments().nth(shared), other.split('.').nth(shared)) {
            (Some(a), Some(b)) => a
                .chars()
                .zip(b.chars())
                .take_while(|(x, y)| x == y)
                .count(),
            _ => 0,
        };
        (shared, prefix)
    }
}

/// Normalize separators without validating.
pub fn normalize(raw: &str) -> String {
    raw.replace(['-', '_'], ".")
}

/// Join a prefix and a segment into a dotted path.
pub fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl Borrow<str> for Alias {
    fn borrow(&self) -> &str {
        &self.normalized
    }
}

impl Serialize for Alias {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.normalized)
    }
}
