use std::fs::File;
use std::io::Write;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use orthos::{CandidateGenerator, Language, LanguageStore, StoreConfig, edits1, edits2};
use tempfile::TempDir;

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "hello", "world", "spell",
    "spelling", "correct", "correction", "candidate", "dictionary", "language", "phrase",
];

fn test_store(dir: &TempDir) -> LanguageStore {
    let mut f = File::create(dir.path().join("en_words.txt")).unwrap();
    for word in WORDS {
        writeln!(f, "{word}").unwrap();
    }
    let mut f = File::create(dir.path().join("en_fillers.txt")).unwrap();
    writeln!(f, "moving on").unwrap();
    LanguageStore::open(Language::new("en").unwrap(), &StoreConfig::new(dir.path())).unwrap()
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    for word in ["teh", "wrld", "corection"] {
        group.bench_function(format!("edits1/{word}"), |b| {
            b.iter(|| black_box(edits1(black_box(word))))
        });
        group.bench_function(format!("edits2/{word}"), |b| {
            b.iter(|| black_box(edits2(black_box(word))))
        });
    }

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir);
    let generator = CandidateGenerator::new(&store);

    let mut group = c.benchmark_group("candidates");

    // Tier 0: member short-circuit.
    group.bench_function("member", |b| {
        b.iter(|| black_box(generator.candidates(black_box("spelling"))))
    });
    // Tier 1: one edit away.
    group.bench_function("distance_1", |b| {
        b.iter(|| black_box(generator.candidates(black_box("speling"))))
    });
    // Tier 2: two edits away.
    group.bench_function("distance_2", |b| {
        b.iter(|| black_box(generator.candidates(black_box("sepling"))))
    });
    // Miss: full expansion with no hit.
    group.bench_function("no_correction", |b| {
        b.iter(|| black_box(generator.candidates(black_box("zzzzzzzz"))))
    });

    group.finish();
}

criterion_group!(benches, bench_edits, bench_candidates);
criterion_main!(benches);
