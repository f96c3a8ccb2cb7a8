use proptest::prelude::*;

use wordseed::{
    derive_seed, is_mnemonic_valid, split_mnemonic, Language, Mnemonic, MnemonicError,
};

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn standard_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn standard_roundtrip(lang in any_language(), entropy in standard_entropy()) {
        let codec = Mnemonic::new(lang);
        let phrase = codec.encode(&entropy).unwrap();
        let decoded = codec.decode(&phrase).unwrap();
        prop_assert_eq!(&decoded, &entropy);
        prop_assert_eq!(codec.encode(&decoded).unwrap(), phrase);
    }

    #[test]
    fn generated_standard_mnemonics_are_valid(lang in any_language(), entropy in standard_entropy()) {
        let phrase = Mnemonic::new(lang).encode(&entropy).unwrap();
        prop_assert!(is_mnemonic_valid(&phrase));
    }

    #[test]
    fn arbitrary_roundtrip_keeps_payload_and_zero_padding(
        lang in any_language(),
        entropy in prop::collection::vec(any::<u8>(), 1..=300),
    ) {
        let codec = Mnemonic::new(lang);
        let phrase = codec.encode_arbitrary(&entropy).unwrap();
        let padded_len = entropy.len().div_ceil(4) * 4;
        prop_assert_eq!(split_mnemonic(&phrase).0.len(), padded_len / 4 * 3);

        let decoded = codec.decode_arbitrary(&phrase).unwrap();
        prop_assert_eq!(decoded.len(), padded_len);
        prop_assert_eq!(&decoded[..entropy.len()], entropy.as_slice());
        prop_assert!(decoded[entropy.len()..].iter().all(|&b| b == 0));
        prop_assert_eq!(codec.encode_arbitrary(&decoded).unwrap(), phrase);
    }

    #[test]
    fn standard_decode_gates_word_count(count in 0usize..40) {
        prop_assume!(![12, 15, 18, 21, 24].contains(&count));
        let phrase = vec!["zoo"; count].join(" ");
        prop_assert_eq!(
            Mnemonic::default().decode(&phrase),
            Err(MnemonicError::InvalidWordCount(count))
        );
    }

    #[test]
    fn arbitrary_decode_gates_word_count(count in 0usize..100) {
        prop_assume!(count == 0 || count % 3 != 0);
        let phrase = vec!["zoo"; count].join(" ");
        prop_assert_eq!(
            Mnemonic::default().decode_arbitrary(&phrase),
            Err(MnemonicError::InvalidWordCount(count))
        );
    }

    #[test]
    fn lowest_entropy_bit_changes_words(entropy in standard_entropy()) {
        let codec = Mnemonic::default();
        let mut flipped = entropy.clone();
        let last = flipped.len() - 1;
        flipped[last] ^= 1;
        prop_assert_ne!(codec.encode(&entropy).unwrap(), codec.encode(&flipped).unwrap());
    }

    #[test]
    fn seed_is_always_64_bytes(mnemonic in ".{0,200}", passphrase in ".{0,64}") {
        let seed = derive_seed(&mnemonic, &passphrase);
        prop_assert_eq!(seed.as_bytes().len(), 64);
        prop_assert_eq!(seed, derive_seed(&mnemonic, &passphrase));
    }
}
