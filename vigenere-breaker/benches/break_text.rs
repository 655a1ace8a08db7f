use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigenere_breaker::{VigenereBreaker, VigenereCipher, WordSet};

fn break_benchmark(c: &mut Criterion) {
    let plaintext = "Defend the east gate at seven. The enemy seeks the keep before \
                     the freeze sets in. Meet me near the elm trees beside the green \
                     river when the evening settles over the meadows.";
    let encrypted = VigenereCipher::new(&[5, 11, 2, 19]).encrypt(plaintext);
    let words = WordSet::from_words([
        "defend", "the", "east", "gate", "at", "seven", "enemy", "seeks", "keep", "before",
        "freeze", "sets", "in", "meet", "me", "near", "elm", "trees", "beside", "green", "river",
        "when", "evening", "settles", "over", "meadows",
    ]);
    let breaker = VigenereBreaker::new('e');

    c.bench_function("break_for_language", |b| {
        b.iter(|| breaker.break_for_language(black_box(&encrypted), black_box(&words)))
    });
}

criterion_group!(benches, break_benchmark);
criterion_main!(benches);
