//! `dictionary` — the set of candidate words to look for.
//!
//! A [`Dictionary`] always has set semantics. It is built:
//! - directly from a set container (`HashSet<String>` or `BTreeSet<String>`),
//! - from a list, via [`Dictionary::try_from_list`], which refuses lists that repeat a word,
//! - from a word-list text file (`parse_from_str` / `load_from_path`).
//!
//! The text format is one word per line:
//! - surrounding whitespace is trimmed,
//! - blank lines and lines starting with `#` are skipped,
//! - repeated words collapse into one.
//!
//! Words are kept exactly as written. There is no case folding: `cat` and `CAT` are two
//! different words, and each only matches grid cells with the same characters.

use std::collections::{BTreeSet, HashSet};

use crate::errors::InputError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a list, which must not repeat any word.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotASet`] naming the first repeated word.
    pub fn try_from_list<I, S>(list: I) -> Result<Dictionary, InputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = HashSet::new();
        for word in list {
            let word: String = word.into();
            if words.contains(&word) {
                return Err(InputError::NotASet { reason: format!("{word:?} appears more than once") });
            }
            words.insert(word);
        }
        Ok(Dictionary { words })
    }

    /// Parse a word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Dictionary { words }
    }

    /// Native-only convenience method: read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Dictionary> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read dictionary from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words in lexicographic order, for stable display.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }

    #[must_use]
    pub fn as_set(&self) -> &HashSet<String> {
        &self.words
    }
}

impl From<HashSet<String>> for Dictionary {
    fn from(words: HashSet<String>) -> Self {
        Dictionary { words }
    }
}

impl From<BTreeSet<String>> for Dictionary {
    fn from(words: BTreeSet<String>) -> Self {
        Dictionary { words: words.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let dictionary = Dictionary::parse_from_str("CAT\nDOG\nBIRD");
        assert_eq!(dictionary.sorted(), vec!["BIRD", "CAT", "DOG"]);
    }

    #[test]
    fn test_parse_deduplicates() {
        let dictionary = Dictionary::parse_from_str("CAT\nDOG\nCAT\nCAT");
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let dictionary = Dictionary::parse_from_str("# animals\nCAT\n\n   \nDOG\n#BIRD\n");
        assert_eq!(dictionary.sorted(), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let dictionary = Dictionary::parse_from_str("  CAT  \n\tDOG\t");
        assert_eq!(dictionary.sorted(), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_keeps_case() {
        let dictionary = Dictionary::parse_from_str("cat\nCAT\nCat");
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("Cat"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(Dictionary::parse_from_str("").is_empty());
    }

    #[test]
    fn test_try_from_list_accepts_distinct_words() {
        let dictionary = Dictionary::try_from_list(["CAT", "DOG"]).unwrap();
        assert_eq!(dictionary.sorted(), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_try_from_list_rejects_repeats() {
        let err = Dictionary::try_from_list(vec!["CAT", "DOG", "CAT"]).unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(err.to_string().contains("\"CAT\" appears more than once"));
    }

    #[test]
    fn test_from_set_containers() {
        let hash: HashSet<String> = ["CAT".to_string(), "DOG".to_string()].into();
        let btree: BTreeSet<String> = ["DOG".to_string(), "CAT".to_string()].into();
        assert_eq!(Dictionary::from(hash), Dictionary::from(btree));
    }
}
