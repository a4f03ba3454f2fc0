// Batch operations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operation requested from a batch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Report the dictionary path, declared encoding and word characters.
    Info,
    /// Spell-check each word (with an optional ignore list).
    Check,
    /// Spelling suggestions per word.
    Suggest,
    /// Morphological analyses per word.
    Analyze,
    /// Stems per word.
    Stem,
}

impl Operation {
    /// All operations, in the order they are usually listed.
    pub const ALL: [Operation; 5] = [
        Operation::Info,
        Operation::Check,
        Operation::Suggest,
        Operation::Analyze,
        Operation::Stem,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Info => "info",
            Operation::Check => "check",
            Operation::Suggest => "suggest",
            Operation::Analyze => "analyze",
            Operation::Stem => "stem",
        }
    }

    /// Whether the operation runs a per-word loop.
    pub fn takes_words(self) -> bool {
        !matches!(self, Operation::Info)
    }

    /// Whether the operation produces a list of strings per word.
    pub fn produces_lists(self) -> bool {
        matches!(
            self,
            Operation::Suggest | Operation::Analyze | Operation::Stem
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown operation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
