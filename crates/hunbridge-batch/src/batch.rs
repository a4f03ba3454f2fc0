// BatchProcessor: the five batch operations over one dictionary
//
// Every call follows the same pipeline: open the handle, derive the
// converter pair from the declared encoding, run the per-word loop, release.
// Only the per-word engine step differs between operations.

use std::path::{Path, PathBuf};

use hunbridge_core::{DictionaryInfo, EngineLoader, ItemOutcome, Operation, OperationResult};
use hunbridge_encoding::{ConverterPair, EncodingError};

use crate::aggregate::{BatchSummary, ResultAggregator};
use crate::error::BridgeError;
use crate::handle::DictionaryHandle;

/// An empty ignore list for [`BatchProcessor::check`].
pub const NO_IGNORE: &[&str] = &[];

/// A complete batch call, as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub operation: Operation,
    pub affix: PathBuf,
    pub dictionary: PathBuf,
    /// Words to process. Unused by [`Operation::Info`].
    pub words: Vec<String>,
    /// Session-only additions before checking. Used by [`Operation::Check`] only.
    pub ignore: Vec<String>,
}

impl BatchRequest {
    pub fn new(
        operation: Operation,
        affix: impl Into<PathBuf>,
        dictionary: impl Into<PathBuf>,
    ) -> Self {
        Self {
            operation,
            affix: affix.into(),
            dictionary: dictionary.into(),
            words: Vec::new(),
            ignore: Vec::new(),
        }
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignore<I, S>(mut self, ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = ignore.into_iter().map(Into::into).collect();
        self
    }
}

/// Runs batch operations with engines produced by `L`.
///
/// The processor itself holds no dictionary state. Each call opens its own
/// [`DictionaryHandle`] and releases it before returning, so independent
/// calls never observe each other's session vocabulary.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor<L> {
    loader: L,
}

impl<L: EngineLoader> BatchProcessor<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Dispatch `request` to the matching operation.
    pub fn run(&self, request: &BatchRequest) -> Result<OperationResult, BridgeError> {
        let (affix, dictionary) = (request.affix.as_path(), request.dictionary.as_path());
        let words = request.words.as_slice();
        Ok(match request.operation {
            Operation::Info => OperationResult::Info(self.info(affix, dictionary)?),
            Operation::Check => {
                OperationResult::Check(self.check(affix, dictionary, words, &request.ignore)?)
            }
            Operation::Suggest => OperationResult::Suggest(self.suggest(affix, dictionary, words)?),
            Operation::Analyze => OperationResult::Analyze(self.analyze(affix, dictionary, words)?),
            Operation::Stem => OperationResult::Stem(self.stem(affix, dictionary, words)?),
        })
    }

    /// Describe the dictionary: path, declared encoding and word characters.
    pub fn info(&self, affix: &Path, dictionary: &Path) -> Result<DictionaryInfo, BridgeError> {
        let (handle, pair) = self.open(affix, dictionary)?;
        let word_chars = pair.to_host(handle.word_chars()).unwrap_or_else(|err| {
            tracing::warn!(
                dictionary = %dictionary.display(),
                %err,
                "word characters are not valid in the declared encoding"
            );
            String::new()
        });
        let info = DictionaryInfo {
            dictionary: dictionary.to_path_buf(),
            encoding: handle.encoding().to_string(),
            word_chars,
        };
        handle.close();
        Ok(info)
    }

    /// Spell-check `words`, treating `ignore` as correct for this call only.
    ///
    /// A word that cannot be represented in the dictionary encoding is
    /// reported as misspelled. An ignore word that cannot be represented is
    /// skipped.
    pub fn check<W: AsRef<str>, I: AsRef<str>>(
        &self,
        affix: &Path,
        dictionary: &Path,
        words: &[W],
        ignore: &[I],
    ) -> Result<Vec<bool>, BridgeError> {
        let (mut handle, pair) = self.open(affix, dictionary)?;

        for word in ignore {
            let word = word.as_ref();
            match pair.to_engine(word) {
                Ok(bytes) => handle.add_to_session(&bytes),
                Err(err) => tracing::trace!(word, %err, "skipping unconvertible ignore word"),
            }
        }

        let mut results = ResultAggregator::with_expected(words.len());
        for word in words {
            let outcome = to_engine(&pair, word.as_ref()).map(|bytes| handle.spell(&bytes));
            results.record(outcome);
        }
        log_summary(Operation::Check, dictionary, results.summary());
        handle.close();
        Ok(results.finalize())
    }

    /// Spelling suggestions for each of `words`.
    pub fn suggest<S: AsRef<str>>(
        &self,
        affix: &Path,
        dictionary: &Path,
        words: &[S],
    ) -> Result<Vec<Vec<String>>, BridgeError> {
        self.collect_lists(Operation::Suggest, affix, dictionary, words, |handle, word| {
            handle.suggest(word)
        })
    }

    /// Morphological analyses for each of `words`.
    pub fn analyze<S: AsRef<str>>(
        &self,
        affix: &Path,
        dictionary: &Path,
        words: &[S],
    ) -> Result<Vec<Vec<String>>, BridgeError> {
        self.collect_lists(Operation::Analyze, affix, dictionary, words, |handle, word| {
            handle.analyze(word)
        })
    }

    /// Stems for each of `words`.
    pub fn stem<S: AsRef<str>>(
        &self,
        affix: &Path,
        dictionary: &Path,
        words: &[S],
    ) -> Result<Vec<Vec<String>>, BridgeError> {
        self.collect_lists(Operation::Stem, affix, dictionary, words, |handle, word| {
            handle.stem(word)
        })
    }

    // ========================================================================
    // Shared pipeline
    // ========================================================================

    fn open(
        &self,
        affix: &Path,
        dictionary: &Path,
    ) -> Result<(DictionaryHandle<L::Engine>, ConverterPair), BridgeError> {
        let handle = DictionaryHandle::open(&self.loader, affix, dictionary)?;
        match ConverterPair::for_engine(handle.encoding()) {
            Ok(pair) => Ok((handle, pair)),
            Err(_) => Err(BridgeError::UnsupportedEncoding(handle.encoding().to_string())),
        }
    }

    fn collect_lists<S, F>(
        &self,
        operation: Operation,
        affix: &Path,
        dictionary: &Path,
        words: &[S],
        step: F,
    ) -> Result<Vec<Vec<String>>, BridgeError>
    where
        S: AsRef<str>,
        F: Fn(&DictionaryHandle<L::Engine>, &[u8]) -> Vec<Vec<u8>>,
    {
        let (handle, pair) = self.open(affix, dictionary)?;

        let mut results = ResultAggregator::with_expected(words.len());
        for word in words {
            let word = word.as_ref();
            let outcome = to_engine(&pair, word).map(|bytes| {
                step(&handle, &bytes)
                    .iter()
                    .filter_map(|raw| to_host(&pair, operation, word, raw))
                    .collect::<Vec<_>>()
            });
            results.record(outcome);
        }
        log_summary(operation, dictionary, results.summary());
        handle.close();
        Ok(results.finalize())
    }
}

fn to_engine(pair: &ConverterPair, word: &str) -> ItemOutcome<Vec<u8>> {
    let converted: Result<Vec<u8>, EncodingError> = pair.to_engine(word);
    if let Err(err) = &converted {
        tracing::trace!(word, %err, "word not representable in dictionary encoding");
    }
    converted.into()
}

/// Engine output that does not decode is dropped from the word's list.
fn to_host(pair: &ConverterPair, operation: Operation, word: &str, raw: &[u8]) -> Option<String> {
    match pair.to_host(raw) {
        Ok(text) => Some(text),
        Err(err) => {
            tracing::warn!(%operation, word, %err, "dropping engine result that does not decode");
            None
        }
    }
}

fn log_summary(operation: Operation, dictionary: &Path, summary: BatchSummary) {
    tracing::debug!(
        %operation,
        dictionary = %dictionary.display(),
        total = summary.total,
        converted = summary.converted,
        defaulted = summary.defaulted,
        "batch finished"
    );
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use hunbridge_core::EngineLoadError;

    use super::*;
    use crate::testing::{DictionaryFiles, MockLoader, dictionary_files};

    fn processor(encoding: &str, words: &[&str]) -> (BatchProcessor<MockLoader>, DictionaryFiles) {
        (
            BatchProcessor::new(MockLoader::new(encoding, words)),
            dictionary_files(),
        )
    }

    #[test]
    fn check_example_with_ignore_and_unconvertible_word() {
        let (p, files) = processor("ISO8859-1", &["color"]);
        let result = p
            .check(
                &files.affix,
                &files.dictionary,
                &["color", "colour", "😀"],
                &["colour"],
            )
            .unwrap();
        assert_eq!(result, vec![true, true, false]);
        assert_eq!(p.loader().releases(), 1);
    }

    #[test]
    fn ignore_list_does_not_persist() {
        let (p, files) = processor("UTF-8", &["color"]);
        let first = p
            .check(&files.affix, &files.dictionary, &["colour"], &["colour"])
            .unwrap();
        let second = p
            .check(&files.affix, &files.dictionary, &["colour"], NO_IGNORE)
            .unwrap();
        assert_eq!(first, vec![true]);
        assert_eq!(second, vec![false]);
        assert_eq!(p.loader().loads(), 2);
        assert_eq!(p.loader().releases(), 2);
    }

    #[test]
    fn unconvertible_ignore_word_is_skipped() {
        let (p, files) = processor("ISO8859-1", &["café"]);
        let result = p
            .check(&files.affix, &files.dictionary, &["café", "日本"], &["日本"])
            .unwrap();
        assert_eq!(result, vec![true, false]);
    }

    #[test]
    fn words_and_ignore_may_differ_in_type() {
        let (p, files) = processor("UTF-8", &["color"]);
        let ignore: Vec<String> = vec!["colour".to_string()];
        let result = p
            .check(&files.affix, &files.dictionary, &["colour", "colr"], &ignore)
            .unwrap();
        assert_eq!(result, vec![true, false]);
    }

    #[test]
    fn latin1_dictionary_rejects_windows_only_characters() {
        let (p, files) = processor("ISO8859-1", &["color", "café"]);
        let result = p
            .check(&files.affix, &files.dictionary, &["color", "€uro", "don’t", "café"], NO_IGNORE)
            .unwrap();
        assert_eq!(result, vec![true, false, false, true]);
    }

    #[test]
    fn empty_batch_still_opens_and_releases() {
        let (p, files) = processor("UTF-8", &[]);
        let words: [&str; 0] = [];
        assert!(p.check(&files.affix, &files.dictionary, &words, &words).unwrap().is_empty());
        assert!(p.suggest(&files.affix, &files.dictionary, &words).unwrap().is_empty());
        assert_eq!(p.loader().releases(), 2);
    }

    #[test]
    fn list_operations_default_at_the_failing_position() {
        let (p, files) = processor("KOI8-R", &["мир", "мама"]);
        let words = ["мир", "ümlaut", "мама"];

        let stems = p.stem(&files.affix, &files.dictionary, &words).unwrap();
        assert_eq!(stems, vec![vec!["мир".to_string()], vec![], vec!["мама".to_string()]]);

        let analyses = p.analyze(&files.affix, &files.dictionary, &words).unwrap();
        assert_eq!(analyses.len(), 3);
        assert_eq!(analyses[0], vec![" st:мир"]);
        assert!(analyses[1].is_empty());
        assert_eq!(analyses[2], vec![" st:мама"]);

        let suggestions = p.suggest(&files.affix, &files.dictionary, &words).unwrap();
        assert_eq!(suggestions[0], vec!["мама"]);
        assert!(suggestions[1].is_empty());
        assert_eq!(suggestions[2], vec!["мир"]);
    }

    #[test]
    fn unknown_words_give_empty_lists() {
        let (p, files) = processor("UTF-8", &["apple"]);
        let stems = p.stem(&files.affix, &files.dictionary, &["zebra"]).unwrap();
        assert_eq!(stems, vec![Vec::<String>::new()]);
    }

    #[test]
    fn undecodable_engine_output_is_dropped() {
        let (p, files) = processor("UTF-8", &["fine"]);
        let result = p.suggest(&files.affix, &files.dictionary, &["broken"]).unwrap();
        assert_eq!(result, vec![vec!["fine".to_string()]]);
    }

    #[test]
    fn info_reports_declared_encoding_and_word_chars() {
        let (p, files) = processor("ISO8859-1", &[]);
        let info = p.info(&files.affix, &files.dictionary).unwrap();
        assert_eq!(info.dictionary, files.dictionary);
        assert_eq!(info.encoding, "ISO8859-1");
        assert_eq!(info.word_chars, "'");
        assert_eq!(p.loader().releases(), 1);
    }

    #[test]
    fn load_failure_is_fatal_for_every_operation() {
        let p = BatchProcessor::new(MockLoader::failing());
        let files = dictionary_files();
        for operation in Operation::ALL {
            let request = BatchRequest::new(operation, &files.affix, &files.dictionary)
                .with_words(["word"]);
            match p.run(&request) {
                Err(BridgeError::DictionaryLoad { source, .. }) => {
                    assert!(matches!(source, EngineLoadError::Malformed { .. }));
                }
                other => panic!("{operation}: expected DictionaryLoad, got {other:?}"),
            }
        }
        assert_eq!(p.loader().releases(), 0);
    }

    #[test]
    fn missing_dictionary_never_reaches_the_loader() {
        let (p, files) = processor("UTF-8", &[]);
        let missing = files.dir.path().join("nope.dic");
        let err = p.stem(&files.affix, &missing, &["word"]).unwrap_err();
        assert!(matches!(err, BridgeError::DictionaryLoad { .. }));
        assert_eq!(p.loader().loads(), 0);
    }

    #[test]
    fn unsupported_encoding_is_fatal_and_releases() {
        let (p, files) = processor("ISCII-DEVANAGARI", &["word"]);
        let err = p
            .check(&files.affix, &files.dictionary, &["word"], NO_IGNORE)
            .unwrap_err();
        match err {
            BridgeError::UnsupportedEncoding(label) => assert_eq!(label, "ISCII-DEVANAGARI"),
            other => panic!("expected UnsupportedEncoding, got {other}"),
        }
        assert_eq!(p.loader().releases(), 1);
    }

    #[test]
    fn release_happens_once_when_the_engine_panics() {
        let (p, files) = processor("UTF-8", &["fine"]);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            p.check(&files.affix, &files.dictionary, &["fine", "explode", "fine"], NO_IGNORE)
        }));
        assert!(outcome.is_err());
        assert_eq!(p.loader().loads(), 1);
        assert_eq!(p.loader().releases(), 1);
    }

    #[test]
    fn run_dispatches_on_operation() {
        let (p, files) = processor("UTF-8", &["apple", "apricot"]);
        let request = BatchRequest::new(Operation::Check, &files.affix, &files.dictionary)
            .with_words(["apple", "aple"])
            .with_ignore(["aple"]);
        assert_eq!(p.run(&request).unwrap(), OperationResult::Check(vec![true, true]));

        let request = BatchRequest::new(Operation::Suggest, &files.affix, &files.dictionary)
            .with_words(["apple"])
            .with_ignore(["unused"]);
        let result = p.run(&request).unwrap();
        assert_eq!(result.operation(), Operation::Suggest);
        assert_eq!(result.lists().unwrap(), &[vec!["apricot".to_string()]]);

        let request = BatchRequest::new(Operation::Info, &files.affix, &files.dictionary)
            .with_words(["ignored"]);
        assert_eq!(p.run(&request).unwrap().len(), None);
    }
}
