//! PBKDF2-HMAC-SHA512 seed derivation.
//!
//! The mnemonic text is the password and `"mnemonic" + passphrase` the salt,
//! with 2048 rounds and a 64-byte output. The text is used as given: it is
//! not validated, split or normalized first.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Number of PBKDF2 rounds for seed derivation
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

const SALT_PREFIX: &str = "mnemonic";

/// Seed derivation configuration
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedOptions {
    /// Optional passphrase ("" by default)
    pub passphrase: String,
}

impl SeedOptions {
    /// Use the given passphrase
    #[must_use]
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = passphrase.into();
        self
    }
}

impl fmt::Debug for SeedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedOptions")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

/// A 64-byte seed, wiped from memory on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Get the underlying bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Convert to hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Derive a seed from mnemonic text and options.
#[must_use]
pub fn new_seed(mnemonic: &str, options: &SeedOptions) -> Seed {
    derive_seed(mnemonic, &options.passphrase)
}

/// Derive a seed from mnemonic text and a passphrase.
///
/// ```
/// use wordseed::derive_seed;
///
/// let seed = derive_seed("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about", "TREZOR");
/// assert!(seed.to_hex().starts_with("c55257c360c07c72"));
/// ```
#[must_use]
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(passphrase);

    let mut seed = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);
    Seed(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_known_seed_no_passphrase() {
        let seed = derive_seed(ZERO_12, "");
        assert_eq!(
            seed.to_hex(),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_known_seed_with_passphrase() {
        let seed = new_seed(ZERO_12, &SeedOptions::default().with_passphrase("TREZOR"));
        assert_eq!(
            seed.to_hex(),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_seed_deterministic() {
        assert_eq!(derive_seed(ZERO_12, "x"), derive_seed(ZERO_12, "x"));
    }

    #[test]
    fn test_passphrase_changes_seed() {
        assert_ne!(derive_seed(ZERO_12, "x"), derive_seed(ZERO_12, "y"));
        assert_ne!(derive_seed(ZERO_12, ""), derive_seed(ZERO_12, "x"));
    }

    #[test]
    fn test_seed_length_is_fixed() {
        let long = "word ".repeat(500);
        for (mnemonic, passphrase) in [("", ""), ("a", "b"), (long.as_str(), long.as_str())] {
            assert_eq!(derive_seed(mnemonic, passphrase).as_bytes().len(), SEED_LEN);
        }
    }

    #[test]
    fn test_debug_is_redacted() {
        let seed = derive_seed(ZERO_12, "");
        assert_eq!(format!("{seed:?}"), "Seed([REDACTED])");
        let options = SeedOptions::default().with_passphrase("hunter2");
        assert!(!format!("{options:?}").contains("hunter2"));
    }
}
