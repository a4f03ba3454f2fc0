// Aggregated batch output

use std::path::PathBuf;

use serde::Serialize;

use crate::operation::Operation;

/// Description of a loaded dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryInfo {
    /// Path of the dictionary file as given by the caller.
    pub dictionary: PathBuf,
    /// Encoding name declared by the dictionary, verbatim.
    pub encoding: String,
    /// Extra word characters, converted to host text.
    pub word_chars: String,
}

/// Output of one batch call, shaped by the requested [`Operation`].
///
/// For every variant that carries a list, the list has exactly one entry
/// per input word, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", content = "result", rename_all = "lowercase")]
pub enum OperationResult {
    Info(DictionaryInfo),
    Check(Vec<bool>),
    Suggest(Vec<Vec<String>>),
    Analyze(Vec<Vec<String>>),
    Stem(Vec<Vec<String>>),
}

impl OperationResult {
    pub fn operation(&self) -> Operation {
        match self {
            OperationResult::Info(_) => Operation::Info,
            OperationResult::Check(_) => Operation::Check,
            OperationResult::Suggest(_) => Operation::Suggest,
            OperationResult::Analyze(_) => Operation::Analyze,
            OperationResult::Stem(_) => Operation::Stem,
        }
    }

    /// Number of per-word entries. `None` for `Info`.
    pub fn len(&self) -> Option<usize> {
        match self {
            OperationResult::Info(_) => None,
            OperationResult::Check(flags) => Some(flags.len()),
            OperationResult::Suggest(lists)
            | OperationResult::Analyze(lists)
            | OperationResult::Stem(lists) => Some(lists.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// The per-word string lists, for list-producing operations.
    pub fn lists(&self) -> Option<&[Vec<String>]> {
        match self {
            OperationResult::Suggest(lists)
            | OperationResult::Analyze(lists)
            | OperationResult::Stem(lists) => Some(lists),
            _ => None,
        }
    }
}
