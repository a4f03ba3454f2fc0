// Host <-> engine converter pair

use encoding_rs::UTF_8;

use crate::EncodingError;
use crate::charset::Charset;
use crate::converter::Converter;
use crate::label::resolve;

/// Encoding of host text.
pub const HOST_ENCODING: Charset = Charset::Whatwg(UTF_8);

/// The two converters needed for one batch call.
///
/// `host_to_engine` and `engine_to_host` are independent; callers decide
/// separately how to react to a failure in either direction.
#[derive(Debug, Clone, Copy)]
pub struct ConverterPair {
    host_to_engine: Converter,
    engine_to_host: Converter,
}

impl ConverterPair {
    /// Build the pair for an engine that declares `engine_label`.
    pub fn for_engine(engine_label: &str) -> Result<Self, EncodingError> {
        let engine = resolve(engine_label)?;
        Ok(Self {
            host_to_engine: Converter::between(HOST_ENCODING, engine),
            engine_to_host: Converter::between(engine, HOST_ENCODING),
        })
    }

    /// The resolved engine encoding.
    pub fn engine_encoding(&self) -> Charset {
        self.host_to_engine.target()
    }

    pub fn host_to_engine(&self) -> &Converter {
        &self.host_to_engine
    }

    pub fn engine_to_host(&self) -> &Converter {
        &self.engine_to_host
    }

    /// Convert host text into the engine encoding.
    pub fn to_engine(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        self.host_to_engine.encode(text)
    }

    /// Convert an engine string back into host text.
    pub fn to_host(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        let converted = self.engine_to_host.convert(bytes)?;
        String::from_utf8(converted).map_err(|_| EncodingError::ConversionFailure {
            from: self.engine_to_host.source().name(),
            to: HOST_ENCODING.name(),
        })
    }
}
