//! Version descriptors.
//!
//! A catalog version is a "rich" constraint: any combination of a required,
//! strict, preferred and rejected versions. Most entries only carry a plain
//! required version, which is what [`RichVersion::single_version`] reports.

use std::fmt;

use serde::Serialize;

/// Separator of the `strictly!!prefer` shorthand.
const STRICT_SEPARATOR: &str = "!!";

/// A rich version constraint as declared in a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strictly: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reject: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reject_all: bool,
}

impl RichVersion {
    /// A plain required version.
    pub fn require(version: impl Into<String>) -> Self {
        RichVersion {
            require: Some(version.into()),
            ..Default::default()
        }
    }

    /// A strict version.
    pub fn strictly(version: impl Into<String>) -> Self {
        RichVersion {
            strictly: Some(version.into()),
            ..Default::default()
        }
    }

    /// Add a preferred version.
    pub fn with_prefer(mut self, version: impl Into<String>) -> Self {
        self.prefer = Some(version.into());
        self
    }

    /// Add a rejected version.
    pub fn with_reject(mut self, version: impl Into<String>) -> Self {
        self.reject.push(version.into());
        self
    }

    /// Parse a string notation.
    ///
    /// `"1.2"` is a required version, `"[1.0,2.0)!!1.5"` is strictly
    /// `[1.0,2.0)` preferring `1.5`, and `"1.0!!"` is strictly `1.0`.
    pub fn parse(notation: &str) -> Self {
        match notation.split_once(STRICT_SEPARATOR) {
            Some((strictly, prefer)) => RichVersion {
                strictly: Some(strictly.to_string()),
                prefer: (!prefer.is_empty()).then(|| prefer.to_string()),
                ..Default::default()
            },
            None => RichVersion::require(notation),
        }
    }

    /// True if nothing at all is constrained.
    pub fn is_empty(&self) -> bool {
        self.require.is_none()
            && self.strictly.is_none()
            && self.prefer.is_none()
            && self.reject.is_empty()
            && !self.reject_all
    }

    /// The version as a single string, or `""` if it cannot be expressed as one.
    ///
    /// A version is single-valued when exactly one of `strictly`, `require`
    /// or `prefer` is set and nothing is rejected.
    pub fn single_version(&self) -> &str {
        if !self.reject.is_empty() || self.reject_all {
            return "";
        }
        let mut set = [&self.strictly, &self.require, &self.prefer]
            .into_iter()
            .flatten();
        match (set.next(), set.next()) {
            (Some(version), None) => version,
            _ => "",
        }
    }
}

impl fmt::Display for RichVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let single = self.single_version();
        if !single.is_empty() || self.is_empty() {
            return f.write_str(single);
        }

        let mut parts = Vec::new();
        if let Some(ref v) = self.strictly {
            parts.push(format!("strictly {}", v));
        }
        if let Some(ref v) = self.require {
            parts.push(format!("require {}", v));
        }
        if let Some(ref v) = self.prefer {
            parts.push(format!("prefer {}", v));
        }
        if self.reject_all {
            parts.push("reject all".to_string());
        } else if !self.reject.is_empty() {
            parts.push(format!("reject {}", self.reject.join(" & ")));
        }
        write!(f, "{{{}}}", parts.join("; "))
    }
}

/// How an entry declares its version before references are resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VersionSpec {
    /// No version at all (for example a BOM-managed module).
    #[default]
    Unspecified,
    /// A reference to an entry of the `[versions]` table, by raw alias.
    Ref(String),
    /// A version written in place.
    Inline(RichVersion),
}
