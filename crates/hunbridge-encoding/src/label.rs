// Resolution of dictionary-declared encoding names
//
// Affix files name their encoding with `SET`. Most of the names in use
// (UTF-8, ISO8859-2 .. ISO8859-15, KOI8-R, KOI8-U) are WHATWG labels and
// resolve through encoding_rs. WHATWG folds ASCII, ISO-8859-1, ISO-8859-9
// and ISO-8859-11 into Windows code pages, so those names are caught first.

use encoding_rs::{Encoding, REPLACEMENT, WINDOWS_874, WINDOWS_1254};

use crate::EncodingError;
use crate::charset::Charset;

/// Encoding names found in dictionary files that are not WHATWG labels.
const DICTIONARY_ALIASES: &[(&str, &str)] = &[
    ("microsoft-cp1251", "windows-1251"),
    ("microsoft-cp1250", "windows-1250"),
    ("microsoft-cp1252", "windows-1252"),
    ("TIS620-2533", "tis-620"),
    ("TIS620", "tis-620"),
    ("ISO8859-8-I", "iso-8859-8-i"),
];

const ASCII_LABELS: &[&str] = &["us-ascii", "ascii", "ansi_x3.4-1968"];

const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso88591",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
];

const LATIN5_LABELS: &[&str] = &[
    "iso-8859-9",
    "iso8859-9",
    "iso88599",
    "iso_8859-9",
    "iso_8859-9:1989",
    "iso-ir-148",
    "latin5",
    "l5",
    "csisolatin5",
];

const THAI_LABELS: &[&str] = &["iso-8859-11", "iso8859-11", "iso885911", "tis-620"];

fn listed(labels: &[&str], name: &str) -> bool {
    labels.iter().any(|l| l.eq_ignore_ascii_case(name))
}

/// Resolve an encoding name to a [`Charset`].
///
/// Matching is case-insensitive and ignores surrounding whitespace.
/// Names that map to the WHATWG replacement encoding (ISO-2022-KR and
/// friends) are treated as unsupported since nothing can be decoded with it.
pub fn resolve(label: &str) -> Result<Charset, EncodingError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(EncodingError::UnsupportedEncoding(label.to_string()));
    }

    let canonical = DICTIONARY_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
        .map_or(trimmed, |&(_, name)| name);

    let charset = if listed(LATIN1_LABELS, canonical) {
        Charset::Latin1
    } else if listed(ASCII_LABELS, canonical) {
        Charset::Ascii
    } else if listed(LATIN5_LABELS, canonical) {
        Charset::IsoPart {
            name: "ISO-8859-9",
            superset: WINDOWS_1254,
        }
    } else if listed(THAI_LABELS, canonical) {
        Charset::IsoPart {
            name: "ISO-8859-11",
            superset: WINDOWS_874,
        }
    } else {
        match Encoding::for_label(canonical.as_bytes()) {
            Some(encoding) if encoding != REPLACEMENT => Charset::Whatwg(encoding),
            _ => return Err(EncodingError::UnsupportedEncoding(label.to_string())),
        }
    };
    tracing::trace!(label = trimmed, encoding = charset.name(), "resolved encoding");
    Ok(charset)
}
