// WordListEngine: the Engine implementation over expanded word forms.
//
// The engine speaks bytes in the dictionary's declared encoding. It decodes
// each incoming word with that encoding, works on text internally, and
// encodes every result back before returning it. Input that does not decode
// is treated as unknown.

use std::borrow::Cow;

use hashbrown::HashSet;
use hunbridge_core::Engine;
use hunbridge_encoding::Charset;

use crate::forms::{Derivation, WordForms};
use crate::suggest;

/// A loaded word-list dictionary plus its session vocabulary.
pub struct WordListEngine {
    /// Encoding name as declared by the affix file.
    declared_encoding: String,
    /// Encoding used to decode input and encode output.
    encoding: Charset,
    word_chars: Vec<u8>,
    forms: WordForms,
    /// Replacement/insertion alphabet for suggestions.
    alphabet: Vec<char>,
    session: HashSet<String>,
}

impl WordListEngine {
    pub(crate) fn new(
        declared_encoding: String,
        encoding: Charset,
        word_chars: &str,
        try_chars: &str,
        forms: WordForms,
    ) -> Self {
        let mut alphabet: Vec<char> = Vec::new();
        for c in try_chars.chars() {
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }
        let mut known: Vec<char> = forms
            .iter()
            .flat_map(str::chars)
            .filter(|c| !alphabet.contains(c))
            .collect::<HashSet<char>>()
            .into_iter()
            .collect();
        known.sort_unstable();
        alphabet.extend(known);

        let word_chars = encoding
            .encode(word_chars)
            .map(Cow::into_owned)
            .unwrap_or_default();

        Self {
            declared_encoding,
            encoding,
            word_chars,
            forms,
            alphabet,
            session: HashSet::new(),
        }
    }

    /// Number of distinct surface forms in the dictionary.
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// Number of words added to the session vocabulary.
    pub fn session_len(&self) -> usize {
        self.session.len()
    }

    fn decode<'a>(&self, word: &'a [u8]) -> Option<Cow<'a, str>> {
        self.encoding.decode(word)
    }

    fn encode(&self, text: &str) -> Option<Vec<u8>> {
        self.encoding.encode(text).map(Cow::into_owned)
    }

    fn encode_all(&self, texts: impl IntoIterator<Item = String>) -> Vec<Vec<u8>> {
        texts.into_iter().filter_map(|t| self.encode(&t)).collect()
    }

    fn is_known(&self, word: &str) -> bool {
        self.forms.contains(word) || self.session.contains(word)
    }

    /// Accept a word as written, or in the case it would have in the
    /// dictionary when it is capitalized or all uppercase.
    fn is_correct(&self, word: &str) -> bool {
        case_variants(word).iter().any(|w| self.is_known(w))
    }

    /// Derivations of the first case variant the dictionary knows.
    fn derivations(&self, word: &str) -> Vec<Derivation> {
        for variant in case_variants(word) {
            let mut found: Vec<Derivation> =
                self.forms.get(&variant).map(<[_]>::to_vec).unwrap_or_default();
            if self.session.contains(&variant) {
                let own = Derivation {
                    root: variant.clone(),
                    prefix: None,
                    suffix: None,
                };
                if !found.contains(&own) {
                    found.push(own);
                }
            }
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

impl Engine for WordListEngine {
    fn encoding(&self) -> &str {
        &self.declared_encoding
    }

    fn word_chars(&self) -> &[u8] {
        &self.word_chars
    }

    fn spell(&self, word: &[u8]) -> bool {
        self.decode(word).is_some_and(|w| self.is_correct(&w))
    }

    fn add_word(&mut self, word: &[u8]) {
        match self.decode(word) {
            Some(w) if !w.is_empty() => {
                let w = w.into_owned();
                tracing::trace!(word = %w, "added session word");
                self.session.insert(w);
            }
            _ => tracing::trace!("ignored undecodable session word"),
        }
    }

    fn suggest(&self, word: &[u8]) -> Vec<Vec<u8>> {
        let Some(word) = self.decode(word) else {
            return Vec::new();
        };
        let suggestions = suggest::suggest(&word, &self.alphabet, |w| self.is_correct(w));
        self.encode_all(suggestions)
    }

    fn analyze(&self, word: &[u8]) -> Vec<Vec<u8>> {
        let Some(word) = self.decode(word) else {
            return Vec::new();
        };
        self.encode_all(self.derivations(&word).iter().map(Derivation::describe))
    }

    fn stem(&self, word: &[u8]) -> Vec<Vec<u8>> {
        let Some(word) = self.decode(word) else {
            return Vec::new();
        };
        let mut stems: Vec<String> = Vec::new();
        for derivation in self.derivations(&word) {
            if !stems.contains(&derivation.root) {
                stems.push(derivation.root);
            }
        }
        self.encode_all(stems)
    }
}

/// The word itself, then its lowercase forms when it is capitalized or
/// all uppercase.
fn case_variants(word: &str) -> Vec<String> {
    let mut variants = vec![word.to_string()];
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return variants;
    };
    let rest: String = chars.collect();
    if !first.is_uppercase() {
        return variants;
    }

    if rest.chars().any(char::is_lowercase) {
        variants.push(first.to_lowercase().chain(rest.chars()).collect());
    } else if !rest.is_empty() {
        let lower = word.to_lowercase();
        let mut title = lower.chars();
        let capitalized: String = title
            .next()
            .map(|f| f.to_uppercase().chain(title).collect())
            .unwrap_or_default();
        variants.push(capitalized);
        variants.push(lower);
    } else {
        variants.push(word.to_lowercase());
    }
    variants.dedup();
    variants
}
