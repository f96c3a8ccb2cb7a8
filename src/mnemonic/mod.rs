//! Entropy <-> mnemonic conversion.
//!
//! A [`Mnemonic`] binds one wordlist and its delimiter. It converts entropy
//! to words in two flavours:
//!
//! - standard BIP39 ([`Mnemonic::encode`] / [`Mnemonic::decode`]), for
//!   16-32 byte entropy and 12-24 words;
//! - arbitrary length ([`Mnemonic::encode_arbitrary`] /
//!   [`Mnemonic::decode_arbitrary`]), for 1-1024 byte payloads. This one is
//!   **not** BIP39 compliant and is meant for custom applications only.
//!
//! ```
//! use wordseed::{Language, Mnemonic};
//!
//! let codec = Mnemonic::new(Language::English);
//! let words = codec.encode(&[0u8; 16]).unwrap();
//! assert_eq!(
//!     words,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! assert_eq!(codec.decode(&words).unwrap(), [0u8; 16]);
//! ```

mod bits;
mod checksum;

pub use bits::{extract_bits, from_indices, to_indices, BITS_PER_WORD};
pub use checksum::{
    checksum_bits, word_count, Checksum, ChecksumScheme, MAX_ARBITRARY_ENTROPY,
    MAX_ARBITRARY_WORDS, STANDARD_ENTROPY_LENGTHS, STANDARD_WORD_COUNTS,
};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::language::{detect_language, split_mnemonic, DetectOptions, Language, Wordlist};

/// Entropy sizes (bits) accepted by [`Mnemonic::generate`]
pub const VALID_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Mnemonic codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MnemonicError {
    /// Entropy length (bytes) not accepted by the active scheme
    #[error("invalid entropy size: {0} bytes")]
    InvalidEntropySize(usize),
    /// Requested generation size is not one of 128/160/192/224/256 bits
    #[error("invalid entropy size: {0} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidEntropyBits(usize),
    /// Word count not accepted by the active scheme
    #[error("invalid number of words: {0}")]
    InvalidWordCount(usize),
    /// A word is missing from the active wordlist
    #[error("invalid mnemonic: word {position} is not in the wordlist")]
    InvalidMnemonic {
        /// Zero-based position of the offending word
        position: usize,
    },
    /// Recomputed checksum differs from the one carried by the words
    #[error("checksum incorrect")]
    ChecksumMismatch,
    /// Arbitrary-length payload pads past 1024 bytes
    #[error("entropy too large: {0} bytes (maximum {MAX_ARBITRARY_ENTROPY} bytes)")]
    EntropyTooLarge(usize),
    /// Unknown language name
    #[error("language {0:?} not supported")]
    UnsupportedLanguage(String),
    /// The random source failed to supply entropy
    #[error("random source failure: {0}")]
    RandomSource(String),
}

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;

/// Codec configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MnemonicOptions {
    /// Wordlist language (English by default)
    pub language: Language,
}

impl MnemonicOptions {
    /// Use the given language
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Generation configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Entropy size in bits
    pub entropy_bits: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { entropy_bits: 128 }
    }
}

impl GenerateOptions {
    /// Use the given entropy size (bits)
    #[must_use]
    pub const fn with_entropy_bits(mut self, entropy_bits: usize) -> Self {
        self.entropy_bits = entropy_bits;
        self
    }
}

/// Mnemonic codec bound to one language
#[derive(Clone, Copy, Debug)]
pub struct Mnemonic {
    language: Language,
    wordlist: &'static Wordlist,
}

impl Default for Mnemonic {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Mnemonic {
    /// Create a codec for `language`
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            wordlist: language.wordlist(),
        }
    }

    /// Create a codec from options
    #[must_use]
    pub fn with_options(options: &MnemonicOptions) -> Self {
        Self::new(options.language)
    }

    /// Language of this codec
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Delimiter used when joining words
    #[must_use]
    pub const fn delimiter(&self) -> &'static str {
        self.language.delimiter()
    }

    /// Generate a new random mnemonic from the operating system RNG.
    ///
    /// # Errors
    /// `InvalidEntropyBits` for unsupported sizes, `RandomSource` if the OS
    /// RNG fails.
    pub fn generate(&self, options: &GenerateOptions) -> MnemonicResult<String> {
        self.generate_with_rng(&mut OsRng, options)
    }

    /// Generate a new mnemonic drawing entropy from `rng`.
    ///
    /// # Errors
    /// `InvalidEntropyBits` for unsupported sizes, `RandomSource` if `rng`
    /// fails.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        options: &GenerateOptions,
    ) -> MnemonicResult<String> {
        if !VALID_ENTROPY_BITS.contains(&options.entropy_bits) {
            return Err(MnemonicError::InvalidEntropyBits(options.entropy_bits));
        }
        let mut entropy = Zeroizing::new(vec![0u8; options.entropy_bits / 8]);
        rng.try_fill_bytes(&mut entropy)
            .map_err(|e| MnemonicError::RandomSource(e.to_string()))?;
        self.encode(&entropy)
    }

    /// Encode 16/20/24/28/32 bytes of entropy as a BIP39 mnemonic.
    ///
    /// # Errors
    /// `InvalidEntropySize` for any other length.
    pub fn encode(&self, entropy: &[u8]) -> MnemonicResult<String> {
        self.encode_with(ChecksumScheme::Standard, entropy)
    }

    /// Decode a BIP39 mnemonic back into its entropy.
    ///
    /// # Errors
    /// `InvalidWordCount` unless the phrase has 12/15/18/21/24 words,
    /// `InvalidMnemonic` for a word outside the wordlist, `ChecksumMismatch`
    /// if the checksum bits do not match.
    pub fn decode(&self, mnemonic: &str) -> MnemonicResult<Vec<u8>> {
        self.decode_with(ChecksumScheme::Standard, mnemonic)
    }

    /// Encode a payload of any length from 1 to 1024 bytes.
    ///
    /// **Not BIP39 compliant.** The payload is right-padded with zero bytes to
    /// the next 4-byte boundary and gets one checksum bit per 4 padded bytes,
    /// so every 4 bytes become 3 words (4 bytes => 3 words, 16 => 12,
    /// 1024 => 768). For 16-32 byte payloads that are a multiple of 4 the
    /// output equals [`Mnemonic::encode`].
    ///
    /// # Errors
    /// `InvalidEntropySize` for an empty payload, `EntropyTooLarge` past
    /// 1024 bytes.
    pub fn encode_arbitrary(&self, entropy: &[u8]) -> MnemonicResult<String> {
        self.encode_with(ChecksumScheme::Arbitrary, entropy)
    }

    /// Decode a mnemonic produced by [`Mnemonic::encode_arbitrary`].
    ///
    /// The result keeps the zero padding added at encode time, so its length
    /// is always `words / 3 * 4` bytes.
    ///
    /// # Errors
    /// `InvalidWordCount` unless the word count is a positive multiple of 3 no
    /// larger than 768, `InvalidMnemonic` for unknown words,
    /// `ChecksumMismatch` on checksum failure.
    pub fn decode_arbitrary(&self, mnemonic: &str) -> MnemonicResult<Vec<u8>> {
        self.decode_with(ChecksumScheme::Arbitrary, mnemonic)
    }

    fn encode_with(&self, scheme: ChecksumScheme, entropy: &[u8]) -> MnemonicResult<String> {
        let entropy = scheme.prepare_entropy(entropy)?;
        let checksum = Checksum::compute(&entropy);
        let count = word_count(entropy.len());

        let mut buffer = Zeroizing::new(Vec::with_capacity(entropy.len() + checksum.bytes().len()));
        buffer.extend_from_slice(&entropy);
        buffer.extend_from_slice(checksum.bytes());

        let words: Vec<&str> = to_indices(&buffer, count)
            .into_iter()
            .map(|index| self.word(index))
            .collect();

        debug!(
            language = %self.language,
            scheme = ?scheme,
            entropy_bytes = entropy.len(),
            checksum_bits = checksum.bits(),
            words = count,
            "encoded mnemonic"
        );
        Ok(words.join(self.delimiter()))
    }

    fn decode_with(&self, scheme: ChecksumScheme, mnemonic: &str) -> MnemonicResult<Vec<u8>> {
        let (words, _) = split_mnemonic(mnemonic);
        let entropy_len = scheme.entropy_len(words.len())?;

        let indices = Zeroizing::new(
            words
                .iter()
                .enumerate()
                .map(|(position, word)| {
                    self.wordlist
                        .index_of(word)
                        .ok_or(MnemonicError::InvalidMnemonic { position })
                })
                .collect::<MnemonicResult<Vec<u16>>>()?,
        );

        let total_bits = entropy_len * 8 + checksum_bits(entropy_len);
        let buffer = Zeroizing::new(from_indices(&indices, total_bits.div_ceil(8)));
        let entropy = buffer[..entropy_len].to_vec();

        if !Checksum::compute(&entropy).matches(&buffer, entropy_len * 8) {
            debug!(
                language = %self.language,
                scheme = ?scheme,
                words = words.len(),
                "checksum mismatch"
            );
            return Err(MnemonicError::ChecksumMismatch);
        }

        trace!(
            language = %self.language,
            scheme = ?scheme,
            entropy_bytes = entropy_len,
            "decoded mnemonic"
        );
        Ok(entropy)
    }

    fn word(&self, index: u16) -> &'static str {
        // Indices are 11 bits wide and every table holds 2048 words
        self.wordlist.words()[usize::from(index)]
    }
}

/// Check whether a phrase is a valid standard BIP39 mnemonic.
///
/// The language is detected first. Every detected language must then decode
/// the phrase with a correct checksum; no detection means not valid.
#[must_use]
pub fn is_mnemonic_valid(mnemonic: &str) -> bool {
    let detection = detect_language(mnemonic, &DetectOptions::default());
    if !detection.found {
        return false;
    }
    detection
        .languages
        .iter()
        .all(|&lang| Mnemonic::new(lang).decode(mnemonic).is_ok())
}
