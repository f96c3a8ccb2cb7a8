//! Supported mnemonic languages and their wordlists.
//!
//! The word tables themselves are the standard BIP39 lists shipped by the
//! `bip39` crate. This module wraps each one in a [`Wordlist`] with a reverse
//! index so word lookups are a single hash probe, and builds the whole
//! registry exactly once per process.

mod detect;
mod split;

pub use detect::{detect_language, DetectOptions, Detection};
pub use split::{normalize_mnemonic, split_mnemonic, IDEOGRAPHIC_SPACE, REGULAR_SPACE};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::mnemonic::MnemonicError;

/// Number of words in every BIP39 wordlist
pub const WORDLIST_LEN: usize = 2048;

/// A mnemonic language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English
    #[default]
    English,
    /// Japanese (words are joined with the ideographic space)
    Japanese,
    /// Korean
    Korean,
    /// Spanish
    Spanish,
    /// Simplified Chinese
    ChineseSimplified,
    /// Traditional Chinese
    ChineseTraditional,
    /// French
    French,
    /// Italian
    Italian,
    /// Czech
    Czech,
    /// Portuguese
    Portuguese,
}

impl Language {
    /// Every supported language, in registry order
    pub const ALL: [Self; 10] = [
        Self::English,
        Self::Japanese,
        Self::Korean,
        Self::Spanish,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::French,
        Self::Italian,
        Self::Czech,
        Self::Portuguese,
    ];

    /// Delimiter placed between words of a mnemonic in this language
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Japanese => IDEOGRAPHIC_SPACE,
            _ => REGULAR_SPACE,
        }
    }

    /// Stable lowercase name, also accepted by [`FromStr`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Spanish => "spanish",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Czech => "czech",
            Self::Portuguese => "portuguese",
        }
    }

    /// The wordlist for this language
    #[must_use]
    pub fn wordlist(self) -> &'static Wordlist {
        &registry()[self.position()]
    }

    const fn position(self) -> usize {
        self as usize
    }

    const fn source(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::Japanese => bip39::Language::Japanese,
            Self::Korean => bip39::Language::Korean,
            Self::Spanish => bip39::Language::Spanish,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Czech => bip39::Language::Czech,
            Self::Portuguese => bip39::Language::Portuguese,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let language = match key.as_str() {
            "english" | "en" => Self::English,
            "japanese" | "ja" | "jp" => Self::Japanese,
            "korean" | "ko" => Self::Korean,
            "spanish" | "es" => Self::Spanish,
            "chinese_simplified" | "simplified_chinese" | "zh_hans" | "zh_cn" => {
                Self::ChineseSimplified
            }
            "chinese_traditional" | "traditional_chinese" | "zh_hant" | "zh_tw" => {
                Self::ChineseTraditional
            }
            "french" | "fr" => Self::French,
            "italian" | "it" => Self::Italian,
            "czech" | "cs" => Self::Czech,
            "portuguese" | "pt" => Self::Portuguese,
            _ => return Err(MnemonicError::UnsupportedLanguage(s.to_string())),
        };
        Ok(language)
    }
}

impl From<Language> for bip39::Language {
    fn from(language: Language) -> Self {
        language.source()
    }
}

/// An ordered 2048-word table with its reverse index
pub struct Wordlist {
    language: Language,
    words: &'static [&'static str; WORDLIST_LEN],
    index: HashMap<&'static str, u16>,
}

impl Wordlist {
    fn build(language: Language) -> Self {
        let words = language.source().word_list();
        let index = words
            .iter()
            .zip(0u16..)
            .map(|(word, i)| (*word, i))
            .collect();
        Self {
            language,
            words,
            index,
        }
    }

    /// Language this table belongs to
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Word at `index`, if the index is inside the table
    #[must_use]
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    /// Position of `word` in the table (exact match)
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Whether `word` is part of the table
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// All words in table order
    #[must_use]
    pub const fn words(&self) -> &'static [&'static str; WORDLIST_LEN] {
        self.words
    }

    /// Number of words (always 2048)
    #[must_use]
    pub const fn len(&self) -> usize {
        WORDLIST_LEN
    }

    /// Always false; present for API symmetry with `len`
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("len", &WORDLIST_LEN)
            .finish_non_exhaustive()
    }
}

fn registry() -> &'static [Wordlist] {
    static REGISTRY: OnceLock<Vec<Wordlist>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        tracing::debug!(languages = Language::ALL.len(), "building wordlist registry");
        Language::ALL.iter().map(|&lang| Wordlist::build(lang)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_tags() {
        for lang in Language::ALL {
            assert_eq!(lang.wordlist().language(), lang);
        }
    }

    #[test]
    fn test_wordlist_index_is_inverse() {
        for lang in Language::ALL {
            let list = lang.wordlist();
            assert_eq!(list.len(), WORDLIST_LEN);
            for (i, word) in list.words().iter().enumerate() {
                assert_eq!(list.index_of(word), Some(u16::try_from(i).unwrap()));
            }
        }
    }

    #[test]
    fn test_english_endpoints() {
        let list = Language::English.wordlist();
        assert_eq!(list.word(0), Some("abandon"));
        assert_eq!(list.word(3), Some("about"));
        assert_eq!(list.word(2047), Some("zoo"));
        assert_eq!(list.word(2048), None);
        assert!(!list.contains("notaword"));
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(Language::Japanese.delimiter(), "\u{3000}");
        for lang in Language::ALL.into_iter().filter(|l| *l != Language::Japanese) {
            assert_eq!(lang.delimiter(), " ");
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("zh-hans".parse::<Language>().unwrap(), Language::ChineseSimplified);
        assert_eq!(
            "chinese traditional".parse::<Language>().unwrap(),
            Language::ChineseTraditional
        );
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(MnemonicError::UnsupportedLanguage(name)) if name == "klingon"
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Language::ChineseSimplified).unwrap();
        assert_eq!(json, "\"chinese_simplified\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::ChineseSimplified);
    }
}
