//! Language detection by incremental wordlist narrowing.

use serde::{Deserialize, Serialize};

use super::split::{split_mnemonic, IDEOGRAPHIC_SPACE};
use super::Language;

/// Detection configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectOptions {
    /// Candidate languages. Empty means every supported language.
    pub languages: Vec<Language>,
}

impl DetectOptions {
    /// Restrict detection to the given languages
    #[must_use]
    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    fn candidates(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.languages.is_empty() || self.languages.contains(lang))
            .collect()
    }
}

/// Outcome of [`detect_language`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Languages compatible with every inspected word, in registry order
    pub languages: Vec<Language>,
    /// Whether at least one language remained
    pub found: bool,
}

impl Detection {
    fn from_candidates(languages: Vec<Language>) -> Self {
        let found = !languages.is_empty();
        Self { languages, found }
    }

    /// The detected language when exactly one was found
    #[must_use]
    pub fn unique(&self) -> Option<Language> {
        match self.languages.as_slice() {
            [lang] => Some(*lang),
            _ => None,
        }
    }

    /// Whether detection settled on exactly one language
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique().is_some()
    }
}

/// Detect which languages a mnemonic may belong to.
///
/// Starts from all languages (or from `options.languages` when non-empty).
/// An ideographic-space delimiter restricts the candidates to Japanese.
/// Each word then drops every language whose wordlist lacks it, and the
/// search stops as soon as a single candidate remains. Several languages are
/// returned when more than one table holds every word, as happens with the
/// two Chinese lists.
///
/// ```
/// use wordseed::{detect_language, DetectOptions, Language};
///
/// let detection = detect_language("露 水 域 耀 搜 船 良 摘 士 近 桃 案", &DetectOptions::default());
/// assert_eq!(
///     detection.languages,
///     [Language::ChineseSimplified, Language::ChineseTraditional]
/// );
/// ```
#[must_use]
pub fn detect_language(mnemonic: &str, options: &DetectOptions) -> Detection {
    let mut possible = options.candidates();
    let (words, delimiter) = split_mnemonic(mnemonic);

    if delimiter == IDEOGRAPHIC_SPACE {
        possible.retain(|lang| *lang == Language::Japanese);
    }

    for word in &words {
        possible.retain(|lang| lang.wordlist().contains(word));
        if possible.len() == 1 {
            tracing::trace!(language = %possible[0], "language narrowed to a single candidate");
            return Detection::from_candidates(possible);
        }
    }

    tracing::trace!(
        words = words.len(),
        candidates = possible.len(),
        "language detection finished without a unique match"
    );
    Detection::from_candidates(possible)
}
