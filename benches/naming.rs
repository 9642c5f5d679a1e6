//! Naming Pipeline Benchmarks
//!
//! Measures end-to-end generation for growing keyword sets and the cost of
//! scoring a single name.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use startup_namer::{IndustryLexicon, NamingEngine, NamingRequest};
use startup_namer::core::scoring::QualityScorer;

const KEYWORDS: &[&str] = &["flow", "data", "pixel", "ledger", "bloom", "signal"];

fn bench_generate(c: &mut Criterion) {
    let engine = NamingEngine::with_defaults();
    let mut group = c.benchmark_group("generate");

    for count in [1, 2, 4, 6] {
        let request = NamingRequest::new(KEYWORDS[..count].iter().copied())
            .with_industry("saas")
            .with_description("collaborative dashboards for distributed product teams");

        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| black_box(engine.generate(black_box(request))))
        });
    }

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let lexicon = IndustryLexicon::builtin();
    let profile = lexicon.lookup("fintech");
    let scorer = QualityScorer::default();

    c.bench_function("score_single_name", |b| {
        b.iter(|| {
            let scores = scorer.score(black_box("LedgerMint"), None, profile);
            black_box(scorer.overall(&scores))
        })
    });
}

criterion_group!(benches, bench_generate, bench_score);
criterion_main!(benches);
