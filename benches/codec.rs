use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordseed::{detect_language, derive_seed, DetectOptions, Language, Mnemonic};

fn bench_codec(c: &mut Criterion) {
    let codec = Mnemonic::new(Language::English);
    let entropy = [0x5au8; 32];
    let phrase = codec.encode(&entropy).unwrap();
    let payload = vec![0xa5u8; 1024];
    let long_phrase = codec.encode_arbitrary(&payload).unwrap();

    c.bench_function("encode_24_words", |b| b.iter(|| codec.encode(black_box(&entropy))));
    c.bench_function("decode_24_words", |b| b.iter(|| codec.decode(black_box(&phrase))));
    c.bench_function("encode_arbitrary_1024_bytes", |b| {
        b.iter(|| codec.encode_arbitrary(black_box(&payload)));
    });
    c.bench_function("decode_arbitrary_768_words", |b| {
        b.iter(|| codec.decode_arbitrary(black_box(&long_phrase)));
    });
    c.bench_function("detect_language", |b| {
        b.iter(|| detect_language(black_box(&phrase), &DetectOptions::default()));
    });
    c.bench_function("derive_seed", |b| b.iter(|| derive_seed(black_box(&phrase), "")));
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
