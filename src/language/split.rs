//! Word splitting and canonical re-joining.

/// Ideographic space used between Japanese words
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

/// Ordinary space used by every other language
pub const REGULAR_SPACE: &str = " ";

const IDEOGRAPHIC_SPACE_CHAR: char = '\u{3000}';

const fn is_separator(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' ')
}

/// Split a mnemonic into its words and report its delimiter.
///
/// Outer whitespace is trimmed, then any run of tab, newline, vertical tab,
/// form feed, carriage return, space or ideographic space separates words.
/// The delimiter is the ideographic space if one occurs anywhere between
/// words, otherwise the ordinary space.
///
/// ```
/// use wordseed::split_mnemonic;
///
/// let (words, delimiter) = split_mnemonic("  carbon   elder\tdrip ");
/// assert_eq!(words, ["carbon", "elder", "drip"]);
/// assert_eq!(delimiter, " ");
/// ```
#[must_use]
pub fn split_mnemonic(mnemonic: &str) -> (Vec<&str>, &'static str) {
    let mut delimiter = REGULAR_SPACE;
    let words = mnemonic
        .trim()
        .split(|c: char| {
            if c == IDEOGRAPHIC_SPACE_CHAR {
                delimiter = IDEOGRAPHIC_SPACE;
                true
            } else {
                is_separator(c)
            }
        })
        .filter(|word| !word.is_empty())
        .collect();
    (words, delimiter)
}

/// Collapse irregular separators into the single canonical delimiter.
#[must_use]
pub fn normalize_mnemonic(mnemonic: &str) -> String {
    let (words, delimiter) = split_mnemonic(mnemonic);
    words.join(delimiter)
}
