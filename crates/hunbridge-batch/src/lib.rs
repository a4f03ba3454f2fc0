//! Batch spell checking, suggestion, analysis and stemming.
//!
//! Each call opens one affix/dictionary pair, converts every input word from
//! host text into the encoding the dictionary declares, runs the engine, and
//! converts results back. A word that cannot be represented in the
//! dictionary encoding never fails the batch: its output slot holds the
//! operation's failure-default (`false` or an empty list), so the output
//! always has one entry per input word, in input order.
//!
//! # Architecture
//!
//! - [`handle`] -- Scoped ownership of one loaded dictionary
//! - [`batch`] -- The five batch operations and their shared pipeline
//! - [`aggregate`] -- Ordered, length-preserving result collection
//! - [`dictionary`] -- Finding installed dictionaries by language name
//! - [`error`] -- Whole-call errors
//!
//! # Example
//!
//! ```no_run
//! let flags = hunbridge_batch::check(
//!     "/usr/share/hunspell/en_US.aff",
//!     "/usr/share/hunspell/en_US.dic",
//!     &["color", "colour"],
//!     &["colour"],
//! )?;
//! assert_eq!(flags.len(), 2);
//! # Ok::<(), hunbridge_batch::BridgeError>(())
//! ```

pub mod aggregate;
pub mod batch;
pub mod dictionary;
pub mod error;
pub mod handle;

#[cfg(test)]
mod testing;

pub use aggregate::{BatchSummary, ResultAggregator};
pub use batch::{BatchProcessor, BatchRequest, NO_IGNORE};
pub use dictionary::{DictionaryPaths, find_dictionary, list_dictionaries};
pub use error::BridgeError;
pub use handle::DictionaryHandle;
pub use hunbridge_core::{DictionaryInfo, ItemOutcome, Operation, OperationResult};

// ============================================================================
// Free functions over the word-list engine
// ============================================================================

#[cfg(feature = "wordlist")]
pub use hunbridge_wordlist::{WordListEngine, WordListLoader};

#[cfg(feature = "wordlist")]
use std::path::Path;

/// A processor bound to the word-list engine.
#[cfg(feature = "wordlist")]
pub fn default_processor() -> BatchProcessor<WordListLoader> {
    BatchProcessor::new(WordListLoader)
}

/// Describe the dictionary at `affix`/`dictionary`.
#[cfg(feature = "wordlist")]
pub fn info(affix: impl AsRef<Path>, dictionary: impl AsRef<Path>) -> Result<DictionaryInfo, BridgeError> {
    default_processor().info(affix.as_ref(), dictionary.as_ref())
}

/// Spell-check `words`, treating `ignore` as correct for this call only.
#[cfg(feature = "wordlist")]
pub fn check<W: AsRef<str>, I: AsRef<str>>(
    affix: impl AsRef<Path>,
    dictionary: impl AsRef<Path>,
    words: &[W],
    ignore: &[I],
) -> Result<Vec<bool>, BridgeError> {
    default_processor().check(affix.as_ref(), dictionary.as_ref(), words, ignore)
}

#[cfg(feature = "wordlist")]
pub fn suggest<S: AsRef<str>>(
    affix: impl AsRef<Path>,
    dictionary: impl AsRef<Path>,
    words: &[S],
) -> Result<Vec<Vec<String>>, BridgeError> {
    default_processor().suggest(affix.as_ref(), dictionary.as_ref(), words)
}

#[cfg(feature = "wordlist")]
pub fn analyze<S: AsRef<str>>(
    affix: impl AsRef<Path>,
    dictionary: impl AsRef<Path>,
    words: &[S],
) -> Result<Vec<Vec<String>>, BridgeError> {
    default_processor().analyze(affix.as_ref(), dictionary.as_ref(), words)
}

#[cfg(feature = "wordlist")]
pub fn stem<S: AsRef<str>>(
    affix: impl AsRef<Path>,
    dictionary: impl AsRef<Path>,
    words: &[S],
) -> Result<Vec<Vec<String>>, BridgeError> {
    default_processor().stem(affix.as_ref(), dictionary.as_ref(), words)
}
