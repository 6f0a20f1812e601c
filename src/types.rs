//! Shared types used across certbatch.
//! `CleanupPolicy` is accepted both on the command line and in JSON config files.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What happens to an intermediate document when editing or conversion fails.
///
/// On success the intermediate is always deleted.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleanupPolicy {
    /// Delete the intermediate regardless of the outcome
    #[default]
    Always,
    /// Leave the intermediate on disk for inspection
    KeepOnFailure,
}

impl CleanupPolicy {
    pub fn keeps_failed(self) -> bool {
        matches!(self, CleanupPolicy::KeepOnFailure)
    }
}

impl std::fmt::Display for CleanupPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupPolicy::Always => write!(f, "always"),
            CleanupPolicy::KeepOnFailure => write!(f, "keep-on-failure"),
        }
    }
}
