//! Checksum schemes appended to entropy before word packing.
//!
//! Both schemes take one checksum bit per 32 bits of entropy from the front
//! of `SHA-256(entropy)`. They differ in which entropy sizes and word counts
//! they accept:
//!
//! - [`ChecksumScheme::Standard`] is BIP39: 16/20/24/28/32 bytes, 12-24 words.
//! - [`ChecksumScheme::Arbitrary`] right-pads any 1-1024 byte payload to a
//!   4-byte boundary and accepts any multiple of 3 words up to 768. It is
//!   **not** BIP39 compatible outside the sizes the two schemes share.

use std::borrow::Cow;

use sha2::{Digest, Sha256};

use super::bits::{leading_bits_match, BITS_PER_WORD};
use super::{MnemonicError, MnemonicResult};

/// Entropy lengths (bytes) accepted by the standard scheme
pub const STANDARD_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Word counts accepted by the standard scheme
pub const STANDARD_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Largest padded payload the arbitrary scheme can checksum (256 bits of digest x 32)
pub const MAX_ARBITRARY_ENTROPY: usize = 1024;

/// Word count of a maximal arbitrary-length mnemonic
pub const MAX_ARBITRARY_WORDS: usize = MAX_ARBITRARY_ENTROPY / 4 * 3;

/// Entropy bytes covered by one checksum bit (and by three words)
const BYTES_PER_CHECKSUM_BIT: usize = 4;

/// Which entropy sizes and word counts a codec call accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecksumScheme {
    /// BIP39 fixed sizes
    Standard,
    /// Zero-padded payloads of any length up to 1024 bytes
    Arbitrary,
}

impl ChecksumScheme {
    /// Validate entropy for encoding, padding it when the scheme allows.
    ///
    /// # Errors
    /// `InvalidEntropySize` for lengths the scheme rejects, `EntropyTooLarge`
    /// when an arbitrary payload pads past 1024 bytes.
    pub fn prepare_entropy(self, entropy: &[u8]) -> MnemonicResult<Cow<'_, [u8]>> {
        match self {
            Self::Standard => {
                if STANDARD_ENTROPY_LENGTHS.contains(&entropy.len()) {
                    Ok(Cow::Borrowed(entropy))
                } else {
                    Err(MnemonicError::InvalidEntropySize(entropy.len()))
                }
            }
            Self::Arbitrary => {
                if entropy.is_empty() {
                    return Err(MnemonicError::InvalidEntropySize(0));
                }
                let padded_len =
                    entropy.len().div_ceil(BYTES_PER_CHECKSUM_BIT) * BYTES_PER_CHECKSUM_BIT;
                if padded_len > MAX_ARBITRARY_ENTROPY {
                    return Err(MnemonicError::EntropyTooLarge(entropy.len()));
                }
                if padded_len == entropy.len() {
                    return Ok(Cow::Borrowed(entropy));
                }
                let mut padded = Vec::with_capacity(padded_len);
                padded.extend_from_slice(entropy);
                padded.resize(padded_len, 0);
                Ok(Cow::Owned(padded))
            }
        }
    }

    /// Entropy length (bytes) encoded by `word_count` words.
    ///
    /// # Errors
    /// `InvalidWordCount` when the scheme does not accept `word_count`.
    pub fn entropy_len(self, word_count: usize) -> MnemonicResult<usize> {
        let accepted = match self {
            Self::Standard => STANDARD_WORD_COUNTS.contains(&word_count),
            Self::Arbitrary => {
                word_count > 0 && word_count % 3 == 0 && word_count <= MAX_ARBITRARY_WORDS
            }
        };
        if accepted {
            Ok(word_count / 3 * BYTES_PER_CHECKSUM_BIT)
        } else {
            Err(MnemonicError::InvalidWordCount(word_count))
        }
    }
}

/// Checksum bits for an (already padded) entropy length
#[must_use]
pub const fn checksum_bits(entropy_len: usize) -> usize {
    entropy_len / BYTES_PER_CHECKSUM_BIT
}

/// Words needed for an (already padded) entropy length
#[must_use]
pub const fn word_count(entropy_len: usize) -> usize {
    (entropy_len * 8 + checksum_bits(entropy_len)) / BITS_PER_WORD
}

/// The leading bits of `SHA-256(entropy)` that follow the entropy in a mnemonic
pub struct Checksum {
    digest: [u8; 32],
    bits: usize,
}

impl Checksum {
    /// Checksum for entropy that has already passed [`ChecksumScheme::prepare_entropy`]
    #[must_use]
    pub fn compute(entropy: &[u8]) -> Self {
        let digest: [u8; 32] = Sha256::digest(entropy).into();
        Self {
            digest,
            bits: checksum_bits(entropy.len()),
        }
    }

    /// Width of the checksum in bits
    #[must_use]
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Digest bytes holding the checksum bits (the last one may be partial)
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.digest[..self.bits.div_ceil(8)]
    }

    /// Whether the checksum equals the bits of `data` starting at bit `start`
    #[must_use]
    pub fn matches(&self, data: &[u8], start: usize) -> bool {
        leading_bits_match(data, start, &self.digest, self.bits)
    }
}
