// One-directional exact byte converter

use std::borrow::Cow;
use std::fmt;

use crate::EncodingError;
use crate::charset::Charset;
use crate::label::resolve;

/// Converts byte strings from one encoding to another.
///
/// Conversion is exact: malformed input, or a character the target encoding
/// cannot represent, fails the whole string. Nothing is substituted.
///
/// A converter holds no mutable state and can be reused for any number of
/// strings.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    from: Charset,
    to: Charset,
}

impl Converter {
    /// Build a converter between two named encodings.
    pub fn new(from: &str, to: &str) -> Result<Self, EncodingError> {
        Ok(Self::between(resolve(from)?, resolve(to)?))
    }

    /// Build a converter between two already resolved encodings.
    pub fn between(from: Charset, to: Charset) -> Self {
        Self { from, to }
    }

    pub fn source(&self) -> Charset {
        self.from
    }

    pub fn target(&self) -> Charset {
        self.to
    }

    /// Convert `input` from the source encoding to the target encoding.
    pub fn convert(&self, input: &[u8]) -> Result<Vec<u8>, EncodingError> {
        let text = self.decode(input)?;
        if self.from == self.to {
            return Ok(input.to_vec());
        }
        self.encode(&text)
    }

    /// Decode `input` in the source encoding.
    pub fn decode<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, str>, EncodingError> {
        self.from.decode(input).ok_or_else(|| self.failure())
    }

    /// Encode `text` into the target encoding.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        self.to
            .encode(text)
            .map(Cow::into_owned)
            .ok_or_else(|| self.failure())
    }

    fn failure(&self) -> EncodingError {
        EncodingError::ConversionFailure {
            from: self.from.name(),
            to: self.to.name(),
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Converter({} -> {})", self.from.name(), self.to.name())
    }
}
