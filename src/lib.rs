//! # Wordseed
//!
//! Multilingual mnemonic codec for seed backups.
//!
//! ## Architecture
//!
//! - **Language**: the ten BIP39 wordlists, word splitting and language
//!   detection by incremental wordlist narrowing
//! - **Mnemonic**: 11-bit word packing with SHA-256 checksums, in a standard
//!   BIP39 flavour and an arbitrary-length (non-standard) flavour
//! - **Seed**: PBKDF2-HMAC-SHA512 seed derivation
//!
//! Every operation is a pure function of its inputs. The wordlist registry is
//! built once and only read afterwards, so all of it is safe to call from
//! many threads at once.
//!
//! ```
//! use wordseed::{derive_seed, detect_language, DetectOptions, Language, Mnemonic};
//!
//! let codec = Mnemonic::new(Language::Japanese);
//! let words = codec.encode(&[7u8; 32]).unwrap();
//!
//! let detection = detect_language(&words, &DetectOptions::default());
//! assert_eq!(detection.languages, [Language::Japanese]);
//! assert_eq!(codec.decode(&words).unwrap(), [7u8; 32]);
//!
//! let seed = derive_seed(&words, "correct horse");
//! assert_eq!(seed.as_bytes().len(), 64);
//! ```

#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod language;
pub mod mnemonic;
pub mod seed;

pub use language::{
    detect_language, normalize_mnemonic, split_mnemonic, DetectOptions, Detection, Language,
    Wordlist,
};
pub use mnemonic::{
    is_mnemonic_valid, GenerateOptions, Mnemonic, MnemonicError, MnemonicOptions, MnemonicResult,
};
pub use seed::{derive_seed, new_seed, Seed, SeedOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
