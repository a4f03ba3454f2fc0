//! Encoding bridge between host text and dictionary byte encodings.
//!
//! Host text is UTF-8. A dictionary declares its own byte encoding in its
//! affix file; every word passed to the engine, and every string it returns,
//! is in that encoding.
//!
//! # Architecture
//!
//! - [`charset`] -- Exact character sets, including the ISO parts WHATWG
//!   folds into Windows code pages
//! - [`label`] -- Resolution of dictionary-declared encoding names
//! - [`converter`] -- One-directional, stateless, exact byte converters
//! - [`pair`] -- The host→engine / engine→host converter pair used per call

pub mod charset;
pub mod converter;
pub mod label;
pub mod pair;

pub use charset::Charset;
pub use converter::Converter;
pub use encoding_rs::Encoding;
pub use label::resolve;
pub use pair::{ConverterPair, HOST_ENCODING};

/// Error type for encoding resolution and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The encoding name is not known to the conversion facility.
    #[error("unsupported encoding: {0:?}")]
    UnsupportedEncoding(String),

    /// The input is malformed in the source encoding, or contains a
    /// character with no representation in the target encoding.
    #[error("cannot convert text from {from} to {to}")]
    ConversionFailure {
        from: &'static str,
        to: &'static str,
    },
}
