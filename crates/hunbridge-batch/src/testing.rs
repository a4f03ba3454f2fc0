// Mock engine for unit tests.

use std::borrow::Cow;
use std::cell::Cell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use hunbridge_core::{Engine, EngineLoadError, EngineLoader};
use hunbridge_encoding::Charset;
use tempfile::TempDir;

/// Empty affix and dictionary files; the mock engine never reads them.
pub struct DictionaryFiles {
    pub dir: TempDir,
    pub affix: PathBuf,
    pub dictionary: PathBuf,
}

pub fn dictionary_files() -> DictionaryFiles {
    let dir = TempDir::new().unwrap();
    let affix = dir.path().join("mock.aff");
    let dictionary = dir.path().join("mock.dic");
    std::fs::write(&affix, b"").unwrap();
    std::fs::write(&dictionary, b"").unwrap();
    DictionaryFiles {
        dir,
        affix,
        dictionary,
    }
}

/// Engine over a fixed set of byte-string words.
///
/// - `suggest` returns known words starting with the same byte
/// - `analyze` returns `" st:<word>"` for known words
/// - `stem` returns the word itself for known words
/// - the word `broken` makes `suggest` return a string that is not valid
///   in the engine encoding, followed by `fine`
/// - the word `explode` panics in every operation
pub struct MockEngine {
    encoding: String,
    words: BTreeSet<Vec<u8>>,
    session: BTreeSet<Vec<u8>>,
    releases: Rc<Cell<usize>>,
}

impl MockEngine {
    fn known(&self, word: &[u8]) -> bool {
        if word == b"explode" {
            panic!("engine exploded");
        }
        self.words.contains(word) || self.session.contains(word)
    }
}

impl Engine for MockEngine {
    fn encoding(&self) -> &str {
        &self.encoding
    }

    fn word_chars(&self) -> &[u8] {
        b"'"
    }

    fn spell(&self, word: &[u8]) -> bool {
        self.known(word)
    }

    fn add_word(&mut self, word: &[u8]) {
        self.session.insert(word.to_vec());
    }

    fn suggest(&self, word: &[u8]) -> Vec<Vec<u8>> {
        if word == b"broken" {
            return vec![b"\xFF".to_vec(), b"fine".to_vec()];
        }
        self.known(word);
        self.words
            .iter()
            .filter(|w| w.first() == word.first() && w.as_slice() != word)
            .cloned()
            .collect()
    }

    fn analyze(&self, word: &[u8]) -> Vec<Vec<u8>> {
        if !self.known(word) {
            return Vec::new();
        }
        let mut out = b" st:".to_vec();
        out.extend_from_slice(word);
        vec![out]
    }

    fn stem(&self, word: &[u8]) -> Vec<Vec<u8>> {
        if self.known(word) {
            vec![word.to_vec()]
        } else {
            Vec::new()
        }
    }
}

impl Drop for MockEngine {
    fn drop(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// Loader for [`MockEngine`], counting loads and releases.
pub struct MockLoader {
    encoding: String,
    words: BTreeSet<Vec<u8>>,
    fail: bool,
    loads: Cell<usize>,
    releases: Rc<Cell<usize>>,
}

impl MockLoader {
    /// Words are given as host text and stored encoded with `encoding`.
    pub fn new(encoding: &str, words: &[&str]) -> Self {
        let target: Charset =
            hunbridge_encoding::resolve(encoding).unwrap_or(hunbridge_encoding::HOST_ENCODING);
        Self {
            encoding: encoding.to_string(),
            words: words
                .iter()
                .map(|w| {
                    target
                        .encode(w)
                        .map_or_else(|| w.as_bytes().to_vec(), Cow::into_owned)
                })
                .collect(),
            fail: false,
            loads: Cell::new(0),
            releases: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("UTF-8", &[])
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }

    pub fn releases(&self) -> usize {
        self.releases.get()
    }
}

impl EngineLoader for MockLoader {
    type Engine = MockEngine;

    fn load(&self, _affix: &Path, dictionary: &Path) -> Result<MockEngine, EngineLoadError> {
        self.loads.set(self.loads.get() + 1);
        if self.fail {
            return Err(EngineLoadError::Malformed {
                path: dictionary.to_path_buf(),
                line: 1,
                message: "mock failure".into(),
            });
        }
        Ok(MockEngine {
            encoding: self.encoding.clone(),
            words: self.words.clone(),
            session: BTreeSet::new(),
            releases: Rc::clone(&self.releases),
        })
    }
}
