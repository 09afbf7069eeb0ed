// Criterion benchmarks for pwforge-wordlist.
//
// Run:
//   cargo bench -p pwforge-wordlist

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pwforge_wordlist::combiner::{DEFAULT_SEPARATORS, combine};
use pwforge_wordlist::leet::leet_variants;
use pwforge_wordlist::{Seed, SeedKind, VariantPool, WordlistGenerator, YearRange};

fn seeds() -> Vec<Seed> {
    [
        (SeedKind::Name, "Max"),
        (SeedKind::Pet, "rex"),
        (SeedKind::Birth, "1990"),
        (SeedKind::Keyword, "summer"),
    ]
    .into_iter()
    .filter_map(|(kind, value)| Seed::new(kind, value))
    .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Leet expansion of a word with many substitutable positions.
fn bench_leet(c: &mut Criterion) {
    c.bench_function("leet_variants(password)", |b| {
        b.iter(|| leet_variants(black_box("password")))
    });
}

/// Combination of a ten-variant pool with the default separators.
fn bench_combine(c: &mut Criterion) {
    let pool = VariantPool::build(&seeds(), false);
    let separators: Vec<String> = DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect();
    c.bench_function("combine(default pool)", |b| {
        b.iter(|| combine(black_box(&pool), &separators, 3))
    });
}

/// The full pipeline with years and the default cap.
fn bench_generate(c: &mut Criterion) {
    let mut generator = WordlistGenerator::default();
    generator.set_years(Some(YearRange::new(2015, 2025).unwrap()));
    let seeds = seeds();
    c.bench_function("generate(4 seeds, 11 years)", |b| {
        b.iter(|| generator.generate(black_box(&seeds)).unwrap())
    });
}

/// The full pipeline with leet expansion.
fn bench_generate_leet(c: &mut Criterion) {
    let mut generator = WordlistGenerator::default();
    generator.set_leet(true);
    let seeds = vec![
        Seed::new(SeedKind::Name, "Max").unwrap(),
        Seed::new(SeedKind::Pet, "rex").unwrap(),
    ];
    c.bench_function("generate(leet)", |b| {
        b.iter(|| generator.generate(black_box(&seeds)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_leet,
    bench_combine,
    bench_generate,
    bench_generate_leet
);
criterion_main!(benches);
