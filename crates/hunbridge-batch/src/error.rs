// Fatal, whole-call errors

use std::path::PathBuf;

use hunbridge_core::EngineLoadError;

/// Errors that prevent a batch call from producing any output.
///
/// Failures confined to a single word never appear here; they only show up
/// as that word's failure-default in the result.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The affix/dictionary pair could not be opened.
    #[error("failed to load dictionary {}: {source}", dictionary.display())]
    DictionaryLoad {
        dictionary: PathBuf,
        #[source]
        source: EngineLoadError,
    },

    /// The dictionary declares an encoding no converter exists for.
    #[error("dictionary declares unsupported encoding {0:?}")]
    UnsupportedEncoding(String),

    /// No dictionary with the given name was found.
    #[error("could not find dictionary {name:?} in any of the search paths:\n{}", list_paths(searched))]
    DictionaryNotFound { name: String, searched: Vec<PathBuf> },
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
