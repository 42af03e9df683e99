//! Benchmarks for index build, search and suggest.
//!
//! Catalog sizes mirror what a personal music page realistically holds:
//! - Small:  ~20 songs
//! - Medium: ~200 songs
//!
//! Songs are the sample catalog replicated with unique ids and a numeric
//! suffix on each title, so CJK, pinyin and Latin text are all exercised.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use songdex::testing::sample_catalog;
use songdex::{build_index, Catalog, MemoryStore, SearchConfig, SongSearch};

// ============================================================================
// CATALOG SIMULATION
// ============================================================================

const SIZES: &[(&str, usize)] = &[("small", 5), ("medium", 50)];

/// The sample catalog repeated `copies` times.
fn replicated_catalog(copies: usize) -> Catalog {
    let base = sample_catalog();
    let songs = (0..copies)
        .flat_map(|i| {
            base.songs.iter().map(move |song| {
                let mut song = song.clone();
                song.id = format!("{}_{i}", song.id);
                for title in &mut song.titles {
                    title.push_str(&format!(" {i}"));
                }
                song
            })
        })
        .collect();
    Catalog { songs }
}

fn engine(catalog: &Catalog) -> SongSearch {
    SongSearch::new(
        Some(catalog),
        SearchConfig {
            disable_history: true,
            ..SearchConfig::default()
        },
        Box::new(MemoryStore::new()),
    )
    .expect("default config is valid")
}

// ============================================================================
// INDEX BUILD
// ============================================================================

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for &(name, copies) in SIZES {
        let catalog = replicated_catalog(copies);
        group.throughput(Throughput::Elements(catalog.songs.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &catalog, |b, catalog| {
            b.iter(|| build_index(black_box(Some(catalog))))
        });
    }

    group.finish();
}

// ============================================================================
// SEARCH
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let queries = [
        ("exact_latin", "canon in d"),
        ("exact_cjk", "月晕"),
        ("pinyin", "yueyun"),
        ("typo", "moon hallo"),
        ("scoped", "info:崩坏3"),
    ];

    for &(name, copies) in SIZES {
        let mut engine = engine(&replicated_catalog(copies));
        let mut group = c.benchmark_group(format!("search_{name}"));
        for (label, query) in queries {
            group.bench_function(label, |b| b.iter(|| engine.search(black_box(query))));
        }
        group.finish();
    }
}

// ============================================================================
// SUGGEST
// ============================================================================

fn bench_suggest(c: &mut Criterion) {
    let prefixes = [("latin", "da"), ("initials", "cll"), ("cjk", "卡")];

    for &(name, copies) in SIZES {
        let engine = engine(&replicated_catalog(copies));
        let mut group = c.benchmark_group(format!("suggest_{name}"));
        for (label, prefix) in prefixes {
            group.bench_function(label, |b| {
                b.iter(|| engine.suggest(black_box(prefix), Some(10)))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_index_build, bench_search, bench_suggest);
criterion_main!(benches);
