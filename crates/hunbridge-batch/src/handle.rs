// DictionaryHandle: one loaded affix/dictionary pair, owned by one call.
//
// The handle owns the engine. Dropping the handle drops the engine, which
// releases whatever the engine holds; there is no other release path, so it
// runs exactly once however the owning call ends (normal return, early
// error return, or unwinding out of the batch loop).

use std::path::{Path, PathBuf};

use hunbridge_core::{Engine, EngineLoadError, EngineLoader};

use crate::error::BridgeError;

/// An opened dictionary, exclusively owned by the call that opened it.
pub struct DictionaryHandle<E: Engine> {
    engine: E,
    affix: PathBuf,
    dictionary: PathBuf,
}

impl<E: Engine> DictionaryHandle<E> {
    /// Open the affix/dictionary pair with `loader`.
    ///
    /// Both files must exist; a missing file fails before the loader is
    /// asked to do anything.
    pub fn open<L>(loader: &L, affix: &Path, dictionary: &Path) -> Result<Self, BridgeError>
    where
        L: EngineLoader<Engine = E> + ?Sized,
    {
        let load_error = |source| BridgeError::DictionaryLoad {
            dictionary: dictionary.to_path_buf(),
            source,
        };

        for path in [affix, dictionary] {
            if !path.is_file() {
                return Err(load_error(EngineLoadError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                }));
            }
        }

        let engine = loader.load(affix, dictionary).map_err(load_error)?;
        tracing::debug!(
            affix = %affix.display(),
            dictionary = %dictionary.display(),
            encoding = engine.encoding(),
            "opened dictionary"
        );

        Ok(Self {
            engine,
            affix: affix.to_path_buf(),
            dictionary: dictionary.to_path_buf(),
        })
    }

    /// Encoding name declared by the dictionary.
    pub fn encoding(&self) -> &str {
        self.engine.encoding()
    }

    /// Extra word characters, in the engine encoding.
    pub fn word_chars(&self) -> &[u8] {
        self.engine.word_chars()
    }

    pub fn affix_path(&self) -> &Path {
        &self.affix
    }

    pub fn dictionary_path(&self) -> &Path {
        &self.dictionary
    }

    pub fn spell(&self, word: &[u8]) -> bool {
        self.engine.spell(word)
    }

    /// Add an engine-encoded word to this handle's session vocabulary.
    pub fn add_to_session(&mut self, word: &[u8]) {
        self.engine.add_word(word);
    }

    pub fn suggest(&self, word: &[u8]) -> Vec<Vec<u8>> {
        self.engine.suggest(word)
    }

    pub fn analyze(&self, word: &[u8]) -> Vec<Vec<u8>> {
        self.engine.analyze(word)
    }

    pub fn stem(&self, word: &[u8]) -> Vec<Vec<u8>> {
        self.engine.stem(word)
    }

    /// Release the dictionary now rather than at the end of the scope.
    pub fn close(self) {}
}

impl<E: Engine> Drop for DictionaryHandle<E> {
    fn drop(&mut self) {
        tracing::debug!(dictionary = %self.dictionary.display(), "released dictionary");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockLoader, dictionary_files};

    #[test]
    fn open_exposes_engine_metadata() {
        let files = dictionary_files();
        let loader = MockLoader::new("ISO8859-1", &["color"]);
        let handle = DictionaryHandle::open(&loader, &files.affix, &files.dictionary).unwrap();
        assert_eq!(handle.encoding(), "ISO8859-1");
        assert_eq!(handle.word_chars(), b"'");
        assert_eq!(handle.dictionary_path(), files.dictionary.as_path());
        assert_eq!(handle.affix_path(), files.affix.as_path());
        assert!(handle.spell(b"color"));
        assert!(!handle.spell(b"colour"));
    }

    #[test]
    fn missing_file_fails_before_loading() {
        let files = dictionary_files();
        let loader = MockLoader::new("UTF-8", &[]);
        let missing = files.dir.path().join("missing.dic");
        let err = DictionaryHandle::open(&loader, &files.affix, &missing)
            .err()
            .unwrap();
        match err {
            BridgeError::DictionaryLoad { dictionary, source } => {
                assert_eq!(dictionary, missing);
                assert!(matches!(source, EngineLoadError::Io { .. }));
            }
            other => panic!("expected DictionaryLoad, got: {other}"),
        }
        assert_eq!(loader.loads(), 0);
    }

    #[test]
    fn loader_failure_is_a_load_error() {
        let files = dictionary_files();
        let loader = MockLoader::failing();
        let err = DictionaryHandle::open(&loader, &files.affix, &files.dictionary)
            .err()
            .unwrap();
        assert!(matches!(err, BridgeError::DictionaryLoad { .. }));
        assert_eq!(loader.releases(), 0);
    }

    #[test]
    fn session_words_stay_on_the_handle() {
        let files = dictionary_files();
        let loader = MockLoader::new("UTF-8", &["color"]);

        let mut first = DictionaryHandle::open(&loader, &files.affix, &files.dictionary).unwrap();
        first.add_to_session(b"colour");
        assert!(first.spell(b"colour"));
        first.close();

        let second = DictionaryHandle::open(&loader, &files.affix, &files.dictionary).unwrap();
        assert!(!second.spell(b"colour"));
    }

    #[test]
    fn release_happens_once_on_close_or_drop() {
        let files = dictionary_files();
        let loader = MockLoader::new("UTF-8", &[]);

        let handle = DictionaryHandle::open(&loader, &files.affix, &files.dictionary).unwrap();
        handle.close();
        assert_eq!(loader.releases(), 1);

        {
            let _handle =
                DictionaryHandle::open(&loader, &files.affix, &files.dictionary).unwrap();
        }
        assert_eq!(loader.releases(), 2);
        assert_eq!(loader.loads(), 2);
    }
}
