//! Advisory notices for deprecated accessor paths.
//!
//! Advisories never fail the lookup that triggered them: they are logged
//! under the `vercat::deprecation` target and the lookup proceeds.

use crate::core::errors::Section;

/// Behaviour being deprecated when catalogs are read from a plugins block.
pub const PLUGINS_BLOCK_BEHAVIOUR: &str =
    "Accessing libraries or bundles from version catalogs in the plugins block.";

/// What to do instead.
pub const PLUGINS_BLOCK_ADVICE: &str =
    "Only use versions or plugins from catalogs in the plugins block.";

/// A non-fatal deprecation notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// What was accessed, e.g. `library spring.boot.starter.web`.
    pub subject: String,
    pub behaviour: &'static str,
    pub advice: &'static str,
}

impl Advisory {
    /// Advisory for reading a library or bundle from a plugins block.
    pub fn plugins_block(section: Section, key: &str) -> Self {
        let subject = if key.is_empty() {
            format!("{} accessors", section)
        } else {
            format!("{} `{}`", section, key)
        };
        Advisory {
            subject,
            behaviour: PLUGINS_BLOCK_BEHAVIOUR,
            advice: PLUGINS_BLOCK_ADVICE,
        }
    }

    /// The single-line notice.
    pub fn message(&self) -> String {
        format!(
            "{} This is deprecated ({}). {}",
            self.behaviour, self.subject, self.advice
        )
    }

    /// Log the advisory.
    pub fn emit(&self) {
        tracing::warn!(target: "vercat::deprecation", "{}", self.message());
    }
}
