// Exact character sets
//
// WHATWG maps several ISO-8859 labels (and ASCII) onto their Windows
// supersets. Dictionaries declaring those names mean the ISO table, where
// 0x80..=0x9F are the C1 controls, so they get their own variants here.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

/// A byte encoding with exact, non-substituting conversion in both
/// directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// US-ASCII: bytes 0x00..=0x7F only.
    Ascii,
    /// ISO-8859-1: byte `b` is code point `U+00b`.
    Latin1,
    /// An ISO-8859 part whose Windows `superset` assigns printable
    /// characters to 0x80..=0x9F. Here those bytes are the C1 controls and
    /// the superset's extra characters are not representable.
    IsoPart {
        name: &'static str,
        superset: &'static Encoding,
    },
    /// A WHATWG encoding, used as specified.
    Whatwg(&'static Encoding),
}

impl Charset {
    pub fn name(self) -> &'static str {
        match self {
            Charset::Ascii => "US-ASCII",
            Charset::Latin1 => "ISO-8859-1",
            Charset::IsoPart { name, .. } => name,
            Charset::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Decode `input`, or `None` if it is malformed in this charset.
    pub fn decode(self, input: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            Charset::Ascii => input
                .is_ascii()
                .then(|| std::str::from_utf8(input).ok().map(Cow::Borrowed))
                .flatten(),
            Charset::Latin1 => Some(encoding_rs::mem::decode_latin1(input)),
            Charset::IsoPart { superset, .. } => decode_with_c1(superset, input),
            Charset::Whatwg(encoding) => {
                encoding.decode_without_bom_handling_and_without_replacement(input)
            }
        }
    }

    /// Encode `text`, or `None` if any character has no representation.
    pub fn encode(self, text: &str) -> Option<Cow<'_, [u8]>> {
        match self {
            Charset::Ascii => text.is_ascii().then_some(Cow::Borrowed(text.as_bytes())),
            Charset::Latin1 => encoding_rs::mem::is_str_latin1(text)
                .then(|| encoding_rs::mem::encode_latin1_lossy(text)),
            Charset::IsoPart { superset, .. } => encode_with_c1(superset, text),
            // The WHATWG encoders never produce UTF-16; those two are done by hand.
            Charset::Whatwg(encoding) if encoding == UTF_16LE => {
                Some(Cow::Owned(text.encode_utf16().flat_map(u16::to_le_bytes).collect()))
            }
            Charset::Whatwg(encoding) if encoding == UTF_16BE => {
                Some(Cow::Owned(text.encode_utf16().flat_map(u16::to_be_bytes).collect()))
            }
            Charset::Whatwg(encoding) => {
                let (bytes, _, had_unmappable) = encoding.encode(text);
                (!had_unmappable).then_some(bytes)
            }
        }
    }
}

fn is_c1_byte(b: u8) -> bool {
    (0x80..=0x9F).contains(&b)
}

fn is_c1_char(c: char) -> bool {
    ('\u{80}'..='\u{9F}').contains(&c)
}

/// Decode runs between C1 bytes with `superset`; C1 bytes map to themselves.
fn decode_with_c1<'a>(superset: &'static Encoding, input: &'a [u8]) -> Option<Cow<'a, str>> {
    if !input.iter().copied().any(is_c1_byte) {
        return superset.decode_without_bom_handling_and_without_replacement(input);
    }
    let mut out = String::with_capacity(input.len());
    for chunk in input.split_inclusive(|&b| is_c1_byte(b)) {
        let (body, control) = match chunk.split_last() {
            Some((&last, body)) if is_c1_byte(last) => (body, Some(last)),
            _ => (chunk, None),
        };
        out.push_str(&superset.decode_without_bom_handling_and_without_replacement(body)?);
        if let Some(b) = control {
            out.push(char::from(b));
        }
    }
    Some(Cow::Owned(out))
}

/// Encode runs between C1 characters with `superset`, rejecting anything it
/// places in 0x80..=0x9F; C1 characters map to themselves.
fn encode_with_c1<'a>(superset: &'static Encoding, text: &'a str) -> Option<Cow<'a, [u8]>> {
    let mut out = Vec::with_capacity(text.len());
    for chunk in text.split_inclusive(is_c1_char) {
        let (body, control) = match chunk.chars().next_back() {
            Some(c) if is_c1_char(c) => (&chunk[..chunk.len() - c.len_utf8()], Some(c)),
            _ => (chunk, None),
        };
        let (bytes, _, had_unmappable) = superset.encode(body);
        if had_unmappable || bytes.iter().copied().any(is_c1_byte) {
            return None;
        }
        out.extend_from_slice(&bytes);
        if let Some(c) = control {
            out.push(c as u8);
        }
    }
    Some(Cow::Owned(out))
}
