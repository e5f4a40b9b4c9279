//! Performance benchmarks for compound splitting
//!
//! Run with: cargo bench --bench split_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordsplit_core::{Dictionary, Language, WordSplitter};

const COMPOUNDS: &[&str] = &[
    "Autobahnraststätte",
    "Arbeitszeit",
    "Kinderzimmer",
    "Verkehrsmittel",
    "Versicherungsvertrag",
    "Wirtschaftsanwalt",
    "Regierungsbezirk",
    "Fensterscheibenwischer",
    "Katze",
];

/// Generate a batch of words cycling through the sample compounds
fn generate_words(count: usize) -> Vec<String> {
    COMPOUNDS
        .iter()
        .cycle()
        .take(count)
        .map(|w| w.to_string())
        .collect()
}

/// Single-word splitting with and without the result cache
fn bench_single_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_word");

    let cached = WordSplitter::new().unwrap();
    let uncached = WordSplitter::builder().cache_results(false).build().unwrap();

    for word in ["Arbeitszeit", "Autobahnraststätte", "Fensterscheibenwischer"] {
        group.bench_with_input(BenchmarkId::new("uncached", word), word, |b, word| {
            b.iter(|| uncached.split(black_box(word)));
        });
        group.bench_with_input(BenchmarkId::new("cached", word), word, |b, word| {
            b.iter(|| cached.split(black_box(word)));
        });
    }

    group.finish();
}

/// Cost of repeated long words, where memoization matters
fn bench_word_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_length");

    let splitter = WordSplitter::builder()
        .dictionary(Dictionary::from_words(["Haus", "Tür", "Schlüssel"]))
        .min_fragment_length(3)
        .cache_results(false)
        .without_exceptions()
        .build()
        .unwrap();

    for repeat in [2, 8, 32, 64] {
        let word = "Haus".repeat(repeat);
        group.throughput(Throughput::Bytes(word.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeat), &word, |b, word| {
            b.iter(|| splitter.split(black_box(word)));
        });
    }

    group.finish();
}

/// Sequential vs parallel batch splitting
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batches");

    for size in [100, 1_000, 10_000] {
        let words = generate_words(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &words, |b, words| {
            let splitter = WordSplitter::builder().cache_results(false).build().unwrap();
            b.iter(|| {
                words
                    .iter()
                    .map(|w| splitter.split(black_box(w)))
                    .collect::<Vec<_>>()
            });
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &words, |b, words| {
            let splitter = WordSplitter::builder().cache_results(false).build().unwrap();
            b.iter(|| splitter.split_many(black_box(words)));
        });
    }

    group.finish();
}

/// Decoding the embedded dictionary blob
fn bench_dictionary_load(c: &mut Criterion) {
    let blob = Language::German.dictionary().unwrap().to_blob().encode().unwrap();

    c.bench_function("decode_embedded_blob", |b| {
        b.iter(|| Dictionary::from_blob_bytes(black_box(&blob)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_single_word,
    bench_word_length,
    bench_batches,
    bench_dictionary_load
);
criterion_main!(benches);
