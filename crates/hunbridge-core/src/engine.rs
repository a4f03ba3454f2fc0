// Capability contract for dictionary engines.
//
// An engine works exclusively in the byte encoding its dictionary declares.
// Every word handed to it and every string it returns is a byte string in
// that encoding; conversion to and from host text happens outside the engine.

use std::path::{Path, PathBuf};

/// Error raised by an [`EngineLoader`] when an affix/dictionary pair cannot
/// be turned into a working engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineLoadError {
    /// One of the files could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but its contents do not follow the expected format.
    #[error("malformed {}: line {line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Both files parse, but they cannot be used together.
    #[error("incompatible affix and dictionary files: {0}")]
    Incompatible(String),
}

/// A loaded affix/dictionary pair.
///
/// Engines may keep internal buffers between calls and are not required to
/// be reentrant, so the trait makes no `Sync` promise. Mutation of the
/// session vocabulary goes through `&mut self`.
pub trait Engine {
    /// Name of the byte encoding the dictionary declares (e.g. `"UTF-8"`,
    /// `"ISO8859-1"`). The name is reported verbatim; it is not validated.
    fn encoding(&self) -> &str;

    /// Extra characters treated as word characters, in the engine encoding.
    fn word_chars(&self) -> &[u8];

    /// Check whether `word` is correctly spelled.
    fn spell(&self, word: &[u8]) -> bool;

    /// Add `word` to the session vocabulary. Never written back to disk.
    fn add_word(&mut self, word: &[u8]);

    /// Spelling suggestions for `word`. Empty when there are none.
    fn suggest(&self, word: &[u8]) -> Vec<Vec<u8>>;

    /// Morphological analyses of `word`. Empty when there are none.
    fn analyze(&self, word: &[u8]) -> Vec<Vec<u8>>;

    /// Stems of `word`. Empty when there are none.
    fn stem(&self, word: &[u8]) -> Vec<Vec<u8>>;
}

/// Factory that opens an [`Engine`] from an affix file and a dictionary file.
pub trait EngineLoader {
    type Engine: Engine;

    fn load(&self, affix: &Path, dictionary: &Path) -> Result<Self::Engine, EngineLoadError>;
}

impl<L: EngineLoader + ?Sized> EngineLoader for &L {
    type Engine = L::Engine;

    fn load(&self, affix: &Path, dictionary: &Path) -> Result<Self::Engine, EngineLoadError> {
        (**self).load(affix, dictionary)
    }
}
