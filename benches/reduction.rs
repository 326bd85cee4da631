use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nielsen_rs::{freely_reduced, nielsen_reduced, FreeGroup, Symbol, Word};

const LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

fn group() -> FreeGroup<char> {
    FreeGroup::new(LABELS.map(Word::generator), Word::generator('e')).unwrap()
}

/// Pseudo-random symbols over a, b, c, d and their inverses
fn generate_word(len: usize, seed: &mut u64) -> Word<char> {
    (0..len)
        .map(|_| {
            // Simple LCG random
            *seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let idx = ((*seed >> 16) % 8) as usize;
            if idx < 4 {
                Symbol::Generator(LABELS[idx])
            } else {
                Symbol::Inverse(LABELS[idx - 4])
            }
        })
        .collect()
}

/// A word followed by its inverse, which collapses entirely from the middle
fn generate_palindrome(group: &FreeGroup<char>, len: usize) -> Word<char> {
    let mut seed = 7u64;
    let half = generate_word(len / 2, &mut seed);
    &half + &group.inverse(&half).unwrap()
}

fn bench_free_reduction(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let free_group = group();
    let mut group = c.benchmark_group("free_reduction");

    for size in sizes.iter() {
        let mut seed = 12345u64;
        let random = generate_word(*size, &mut seed);
        let collapsing = generate_palindrome(&free_group, *size);

        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, word| {
            b.iter(|| black_box(freely_reduced(&free_group, black_box(word)).unwrap()));
        });

        group.bench_with_input(
            BenchmarkId::new("collapsing", size),
            &collapsing,
            |b, word| {
                b.iter(|| black_box(freely_reduced(&free_group, black_box(word)).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_nielsen(c: &mut Criterion) {
    let set_sizes = [2, 4, 8];
    let free_group = group();
    let mut group = c.benchmark_group("nielsen");

    for count in set_sizes.iter() {
        let mut seed = 42u64;
        let words: Vec<Word<char>> = (0..*count).map(|_| generate_word(8, &mut seed)).collect();

        group.bench_with_input(BenchmarkId::new("words_of_8", count), &words, |b, words| {
            b.iter(|| black_box(nielsen_reduced(&free_group, black_box(words.clone()))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_free_reduction, bench_nielsen);
criterion_main!(benches);
