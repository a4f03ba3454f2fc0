// Locating installed affix/dictionary pairs by language name.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::BridgeError;

const DIC_EXTENSION: &str = "dic";
const AFF_EXTENSION: &str = "aff";

/// Paths of one affix/dictionary pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    pub affix: PathBuf,
    pub dictionary: PathBuf,
}

impl DictionaryPaths {
    /// Pair a `.dic` or `.aff` path with its sibling of the other kind.
    pub fn from_file(path: &Path) -> Self {
        Self {
            affix: path.with_extension(AFF_EXTENSION),
            dictionary: path.with_extension(DIC_EXTENSION),
        }
    }

    /// Language name, taken from the dictionary file stem (`en_US`).
    pub fn language(&self) -> Option<&str> {
        self.dictionary.file_stem().and_then(|s| s.to_str())
    }

    fn exists(&self) -> bool {
        self.affix.is_file() && self.dictionary.is_file()
    }
}

/// Directories searched for dictionaries, in order.
///
/// 1. Every entry of `DICPATH` (platform path-list syntax)
/// 2. Every entry of `HUNBRIDGE_DICT_PATH`
/// 3. `~/.hunspell`, and `~/Library/Spelling` on macOS
/// 4. System dictionary directories
/// 5. The current directory
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for var in ["DICPATH", "HUNBRIDGE_DICT_PATH"] {
        if let Some(value) = std::env::var_os(var) {
            paths.extend(std::env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()));
        }
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".hunspell"));
        #[cfg(target_os = "macos")]
        paths.push(home.join("Library").join("Spelling"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));
    paths.push(PathBuf::from("/Library/Spelling"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Resolve a language name or dictionary file path using [`search_paths`].
pub fn find_dictionary(lang_or_path: &str) -> Result<DictionaryPaths, BridgeError> {
    find_dictionary_in(lang_or_path, &search_paths())
}

/// Resolve a language name or dictionary file path against `dirs`.
///
/// An argument naming an existing `.dic` or `.aff` file is paired with its
/// sibling directly. Anything else is treated as a language name and looked
/// up as `<dir>/<name>.dic` in each directory.
pub fn find_dictionary_in(lang_or_path: &str, dirs: &[PathBuf]) -> Result<DictionaryPaths, BridgeError> {
    let given = Path::new(lang_or_path);
    let has_dictionary_extension = given
        .extension()
        .is_some_and(|ext| ext == DIC_EXTENSION || ext == AFF_EXTENSION);
    if has_dictionary_extension && given.is_file() {
        return Ok(DictionaryPaths::from_file(given));
    }

    let found = dirs
        .iter()
        .map(|dir| DictionaryPaths::from_file(&dir.join(lang_or_path)))
        .find(DictionaryPaths::exists);

    match found {
        Some(paths) => {
            tracing::debug!(
                name = lang_or_path,
                dictionary = %paths.dictionary.display(),
                "found dictionary"
            );
            Ok(paths)
        }
        None => Err(BridgeError::DictionaryNotFound {
            name: lang_or_path.to_string(),
            searched: dirs.to_vec(),
        }),
    }
}

/// Language names available across [`search_paths`].
pub fn list_dictionaries() -> Vec<String> {
    list_dictionaries_in(&search_paths())
}

/// Language names of every `.dic` file in `dirs` that has a sibling `.aff`,
/// sorted and without duplicates. Unreadable directories are skipped.
pub fn list_dictionaries_in(dirs: &[PathBuf]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for dir in dirs {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != DIC_EXTENSION) {
                continue;
            }
            let paths = DictionaryPaths::from_file(&path);
            if !paths.exists() {
                continue;
            }
            if let Some(language) = paths.language() {
                names.insert(language.to_string());
            }
        }
    }
    names.into_iter().collect()
}
