// Dictionary file parsing

use std::path::Path;

use hunbridge_core::EngineLoadError;

use crate::aff::AffixData;

/// One dictionary line: a root word and the affix flags it allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicEntry {
    pub word: String,
    pub flags: Vec<String>,
}

/// Parse decoded dictionary lines.
///
/// The first non-empty line is the approximate entry count; it must be a
/// number but is otherwise only used as a capacity hint. Each following
/// line is `word[/flags]`, optionally followed by whitespace-separated
/// morphological fields, which are ignored.
pub fn parse(
    lines: &[String],
    affix: &AffixData,
    path: &Path,
) -> Result<Vec<DicEntry>, EngineLoadError> {
    let mut numbered = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((count_index, count_line)) = numbered.next() else {
        return Err(EngineLoadError::Malformed {
            path: path.to_path_buf(),
            line: 1,
            message: "missing word count".into(),
        });
    };
    let expected: usize = count_line
        .trim()
        .parse()
        .map_err(|_| EngineLoadError::Malformed {
            path: path.to_path_buf(),
            line: count_index + 1,
            message: format!("expected word count, found {:?}", count_line.trim()),
        })?;

    let mut entries = Vec::with_capacity(expected);
    for (index, line) in numbered {
        let Some(field) = line.split_whitespace().next() else {
            continue;
        };
        let (word, flags) = match field.split_once('/') {
            Some((word, flags)) if !word.is_empty() => (word, flags),
            _ => (field, ""),
        };
        let flags = resolve_flags(flags, affix).ok_or_else(|| {
            EngineLoadError::Incompatible(format!(
                "{}: line {}: flag alias {flags:?} is not defined in the affix file",
                path.display(),
                index + 1
            ))
        })?;
        entries.push(DicEntry {
            word: word.to_string(),
            flags,
        });
    }

    Ok(entries)
}

/// With an `AF` table, the flag field is a 1-based alias index.
fn resolve_flags(flags: &str, affix: &AffixData) -> Option<Vec<String>> {
    if flags.is_empty() {
        return Some(Vec::new());
    }
    if affix.aliases.is_empty() {
        return Some(affix.flag_mode.split(flags));
    }
    let index: usize = flags.parse().ok()?;
    affix.aliases.get(index.checked_sub(1)?).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn parses_entries_with_and_without_flags() {
        let entries = parse(
            &lines("3\ncolor/S\nday/SD\tpo:noun\nthe\n"),
            &AffixData::default(),
            Path::new("en.dic"),
        )
        .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].word, "color");
        assert_eq!(entries[0].flags, vec!["S"]);
        assert_eq!(entries[1].flags, vec!["S", "D"]);
        assert!(entries[2].flags.is_empty());
    }

    #[test]
    fn count_mismatch_is_tolerated() {
        let entries = parse(&lines("100\na\nb\n"), &AffixData::default(), Path::new("x.dic"))
            .unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn missing_count_is_malformed() {
        let err = parse(&lines("color\n"), &AffixData::default(), Path::new("x.dic")).unwrap_err();
        assert!(matches!(err, EngineLoadError::Malformed { line: 1, .. }));

        let err = parse(&[], &AffixData::default(), Path::new("x.dic")).unwrap_err();
        assert!(err.to_string().contains("missing word count"));
    }

    #[test]
    fn alias_indices() {
        let affix = AffixData {
            aliases: vec![vec!["A".into()], vec!["B".into(), "C".into()]],
            ..AffixData::default()
        };
        let entries = parse(&lines("1\nword/2\n"), &affix, Path::new("x.dic")).unwrap();
        assert_eq!(entries[0].flags, vec!["B", "C"]);
    }

    #[test]
    fn undefined_alias_is_incompatible() {
        let affix = AffixData {
            aliases: vec![vec!["A".into()]],
            ..AffixData::default()
        };
        for line in ["1\nword/3\n", "1\nword/0\n", "1\nword/AB\n"] {
            let err = parse(&lines(line), &affix, Path::new("x.dic")).unwrap_err();
            assert!(matches!(err, EngineLoadError::Incompatible(_)), "{line:?}");
        }
    }

    #[test]
    fn leading_slash_is_part_of_the_word() {
        let entries = parse(&lines("1\n/etc\n"), &AffixData::default(), Path::new("x.dic"))
            .unwrap();
        assert_eq!(entries[0].word, "/etc");
    }
}
