//! Reference word-list dictionary engine.
//!
//! Implements the [`hunbridge_core::Engine`] contract over a subset of the
//! affix/dictionary file format: `SET`, `WORDCHARS`, `TRY`, `FLAG`, `AF` and
//! single-level `PFX`/`SFX` rules with cross products. All other affix
//! directives are skipped.
//!
//! - [`aff`] -- Affix file parsing
//! - [`condition`] -- Affix rule conditions
//! - [`dic`] -- Dictionary file parsing
//! - [`forms`] -- Expansion of roots into surface forms
//! - [`suggest`] -- Edit-distance-one suggestions
//! - [`engine`] -- The `Engine` implementation

pub mod aff;
pub mod condition;
pub mod dic;
pub mod engine;
pub mod forms;
pub mod suggest;

use std::path::Path;

use hunbridge_core::{EngineLoadError, EngineLoader};
use hunbridge_encoding::Charset;

pub use engine::WordListEngine;

/// Loads [`WordListEngine`]s from affix/dictionary file pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListLoader;

impl EngineLoader for WordListLoader {
    type Engine = WordListEngine;

    fn load(&self, affix: &Path, dictionary: &Path) -> Result<WordListEngine, EngineLoadError> {
        let affix_raw = read(affix)?;
        let dictionary_raw = read(dictionary)?;

        let declared = aff::declared_encoding(&affix_raw);
        let encoding = match hunbridge_encoding::resolve(&declared) {
            Ok(encoding) => encoding,
            Err(_) => {
                tracing::warn!(
                    encoding = %declared,
                    "unrecognized dictionary encoding, reading files as ISO-8859-1"
                );
                Charset::Latin1
            }
        };

        let affix_data = aff::parse(&decode_lines(&affix_raw, encoding, affix)?, affix)?;
        let entries = dic::parse(
            &decode_lines(&dictionary_raw, encoding, dictionary)?,
            &affix_data,
            dictionary,
        )?;
        let forms = forms::WordForms::build(&entries, &affix_data);

        tracing::debug!(
            affix = %affix.display(),
            dictionary = %dictionary.display(),
            encoding = %affix_data.encoding,
            roots = entries.len(),
            forms = forms.len(),
            "loaded word list dictionary"
        );

        Ok(WordListEngine::new(
            affix_data.encoding,
            encoding,
            &affix_data.word_chars,
            &affix_data.try_chars,
            forms,
        ))
    }
}

fn read(path: &Path) -> Result<Vec<u8>, EngineLoadError> {
    std::fs::read(path).map_err(|source| EngineLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Split raw file bytes into lines and decode each one.
///
/// A leading UTF-8 byte order mark and trailing carriage returns are
/// dropped. A line that does not decode fails the load with its line number.
fn decode_lines(
    raw: &[u8],
    encoding: Charset,
    path: &Path,
) -> Result<Vec<String>, EngineLoadError> {
    let raw = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);
    raw.split(|&b| b == b'\n')
        .enumerate()
        .map(|(index, line)| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            encoding
                .decode(line)
                .map(|text| text.into_owned())
                .ok_or_else(|| EngineLoadError::Malformed {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!("not valid {}", encoding.name()),
                })
        })
        .collect()
}
