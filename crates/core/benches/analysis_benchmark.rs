//! Benchmarks pour l'analyse de composition

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dnaseq_core::{analyze_batch, AnalyzerConfig, SequenceAnalyzer, SequenceRecord, SequenceReport, ValidationMode};
use std::time::Duration;

fn benchmark_analyze(c: &mut Criterion) {
    // Séquences de test de différentes tailles
    let test_data = vec![
        ("small", "ACGTTGCA".repeat(128)),         // 1 kb
        ("medium", "ACGTTGCA".repeat(12_800)),     // 100 kb
        ("large", "ACGTTGCA".repeat(128 * 1024)),  // 1 Mb
    ];

    let mut group = c.benchmark_group("Composition Analysis");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for (name, seq) in &test_data {
        group.bench_function(format!("strict_{}", name), |b| {
            let analyzer = SequenceAnalyzer::default();
            b.iter(|| analyzer.analyze(black_box(seq)));
        });

        group.bench_function(format!("lenient_{}", name), |b| {
            let analyzer = SequenceAnalyzer::new(AnalyzerConfig::builder().mode(ValidationMode::Lenient).build());
            b.iter(|| analyzer.analyze(black_box(seq)));
        });
    }

    group.finish();
}

fn benchmark_report(c: &mut Criterion) {
    let seq = "ATGGCTGCTTAAGGCCTATA".repeat(500);
    let analyzer = SequenceAnalyzer::default();

    c.bench_function("full_report_10kb", |b| {
        b.iter(|| SequenceReport::build(black_box(&seq), &analyzer));
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let records: Vec<SequenceRecord> = (0..256)
        .map(|i| SequenceRecord {
            id: format!("read_{}", i),
            description: String::new(),
            sequence: "ACGTTGCA".repeat(1000),
        })
        .collect();
    let analyzer = SequenceAnalyzer::default();

    c.bench_function("batch_256x8kb", |b| {
        b.iter(|| analyze_batch(&analyzer, black_box(&records)));
    });
}

criterion_group!(benches, benchmark_analyze, benchmark_report, benchmark_batch);
criterion_main!(benches);
