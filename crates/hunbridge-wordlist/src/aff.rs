// Affix file parsing
//
// Supported directives: SET, WORDCHARS, TRY, FLAG, AF, PFX, SFX.
// Everything else is skipped, so real-world affix files load with their
// unsupported parts ignored.

use std::path::Path;

use hashbrown::HashMap;
use hunbridge_core::EngineLoadError;

use crate::condition::Condition;

/// Encoding assumed when the affix file has no `SET` line.
pub const DEFAULT_ENCODING: &str = "ISO8859-1";

/// How flag strings are split into individual flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagMode {
    /// One character per flag (the default, also `FLAG UTF-8`).
    #[default]
    Char,
    /// Two characters per flag (`FLAG long`).
    Long,
    /// Comma-separated decimal numbers (`FLAG num`).
    Numeric,
}

impl FlagMode {
    pub fn split(self, flags: &str) -> Vec<String> {
        match self {
            FlagMode::Char => flags.chars().map(String::from).collect(),
            FlagMode::Long => {
                let chars: Vec<char> = flags.chars().collect();
                chars.chunks(2).map(|pair| pair.iter().collect()).collect()
            }
            FlagMode::Numeric => flags
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// One `PFX`/`SFX` rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixRule {
    pub strip: String,
    pub add: String,
    pub condition: Condition,
}

impl AffixRule {
    /// Apply the rule to `root`, if its strip and condition allow it.
    pub fn apply(&self, kind: AffixKind, root: &str) -> Option<String> {
        let form = match kind {
            AffixKind::Suffix => {
                if !root.ends_with(self.strip.as_str()) || !self.condition.matches_end(root) {
                    return None;
                }
                format!("{}{}", &root[..root.len() - self.strip.len()], self.add)
            }
            AffixKind::Prefix => {
                if !root.starts_with(self.strip.as_str()) || !self.condition.matches_start(root) {
                    return None;
                }
                format!("{}{}", self.add, &root[self.strip.len()..])
            }
        };
        (!form.is_empty()).then_some(form)
    }
}

/// All rules sharing one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixClass {
    pub kind: AffixKind,
    pub cross_product: bool,
    pub rules: Vec<AffixRule>,
}

/// The parts of an affix file the engine uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixData {
    pub encoding: String,
    pub word_chars: String,
    pub try_chars: String,
    pub flag_mode: FlagMode,
    /// `AF` flag vectors; dictionary entries refer to them by 1-based index.
    pub aliases: Vec<Vec<String>>,
    pub classes: HashMap<String, AffixClass>,
}

impl Default for AffixData {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            word_chars: String::new(),
            try_chars: String::new(),
            flag_mode: FlagMode::default(),
            aliases: Vec::new(),
            classes: HashMap::new(),
        }
    }
}

/// Find the `SET` directive in raw affix bytes, before the file is decoded.
pub fn declared_encoding(raw: &[u8]) -> String {
    let raw = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);
    raw.split(|&b| b == b'\n')
        .find_map(|line| {
            let rest = line.trim_ascii().strip_prefix(b"SET")?;
            if !rest.first().is_some_and(u8::is_ascii_whitespace) {
                return None;
            }
            let label = rest.trim_ascii();
            (!label.is_empty()).then(|| String::from_utf8_lossy(label).into_owned())
        })
        .unwrap_or_else(|| DEFAULT_ENCODING.to_string())
}

/// Parse decoded affix file lines.
pub fn parse(lines: &[String], path: &Path) -> Result<AffixData, EngineLoadError> {
    let malformed = |index: usize, message: String| EngineLoadError::Malformed {
        path: path.to_path_buf(),
        line: index + 1,
        message,
    };

    let mut data = AffixData::default();
    let mut numbered = lines.iter().enumerate();

    while let Some((index, line)) = numbered.next() {
        let mut fields = line.split_whitespace();
        let Some(directive) = fields.next() else {
            continue;
        };

        match directive {
            "SET" => {
                if let Some(label) = fields.next() {
                    data.encoding = label.to_string();
                }
            }
            "WORDCHARS" => data.word_chars = fields.next().unwrap_or_default().to_string(),
            "TRY" => data.try_chars = fields.next().unwrap_or_default().to_string(),
            "FLAG" => {
                data.flag_mode = match fields.next() {
                    Some("long") => FlagMode::Long,
                    Some("num") => FlagMode::Numeric,
                    Some("UTF-8") | None => FlagMode::Char,
                    Some(other) => {
                        return Err(malformed(index, format!("unknown flag type {other:?}")));
                    }
                }
            }
            "AF" => {
                let count = parse_count(fields.next())
                    .ok_or_else(|| malformed(index, "AF needs an alias count".into()))?;
                for _ in 0..count {
                    let (entry_index, entry) = numbered
                        .next()
                        .ok_or_else(|| malformed(index, "missing AF entries".into()))?;
                    let mut entry_fields = entry.split_whitespace();
                    if entry_fields.next() != Some("AF") {
                        return Err(malformed(entry_index, "expected AF entry".into()));
                    }
                    let flags = entry_fields.next().unwrap_or_default();
                    data.aliases.push(data.flag_mode.split(flags));
                }
            }
            "PFX" | "SFX" => {
                let kind = if directive == "PFX" {
                    AffixKind::Prefix
                } else {
                    AffixKind::Suffix
                };
                let (Some(flag), Some(cross), Some(count)) =
                    (fields.next(), fields.next(), parse_count(fields.next()))
                else {
                    return Err(malformed(index, format!("incomplete {directive} header")));
                };

                let mut rules = Vec::with_capacity(count);
                for _ in 0..count {
                    let (rule_index, rule_line) = numbered
                        .next()
                        .ok_or_else(|| malformed(index, format!("missing {directive} rules")))?;
                    let rule_fields: Vec<&str> = rule_line.split_whitespace().collect();
                    if rule_fields.len() < 4 || rule_fields[0] != directive || rule_fields[1] != flag
                    {
                        return Err(malformed(
                            rule_index,
                            format!("expected {directive} {flag} rule"),
                        ));
                    }
                    let condition = Condition::parse(rule_fields.get(4).copied().unwrap_or("."))
                        .map_err(|e| malformed(rule_index, e.to_string()))?;
                    rules.push(AffixRule {
                        strip: zero_to_empty(rule_fields[2]).to_string(),
                        add: zero_to_empty(strip_continuation(rule_fields[3])).to_string(),
                        condition,
                    });
                }

                data.classes
                    .entry(flag.to_string())
                    .or_insert_with(|| AffixClass {
                        kind,
                        cross_product: cross == "Y",
                        rules: Vec::new(),
                    })
                    .rules
                    .extend(rules);
            }
            _ => {}
        }
    }

    Ok(data)
}

fn parse_count(field: Option<&str>) -> Option<usize> {
    field?.parse().ok()
}

/// `0` stands for the empty string in strip and add fields.
fn zero_to_empty(field: &str) -> &str {
    if field == "0" { "" } else { field }
}

/// Continuation flags (`add/flags`) are not applied.
fn strip_continuation(add: &str) -> &str {
    add.split_once('/').map_or(add, |(affix, _)| affix)
}
