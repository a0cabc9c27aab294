use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skatequiz_core::assignment::{best_assignment, ScoreMatrix};
use skatequiz_core::similarity::similarity;

const REFERENCE: [&str; 6] = [
    "Very good height and very good length",
    "Good take-off and landing",
    "Effortless throughout (including rhythm in jump combinations)",
    "Steps before the jump, unexpected or creative entry",
    "Very good body position from take-off to landing",
    "Element matches the music",
];

const SHUFFLED: [&str; 6] = [
    "good takeoff and landings",
    "very good hight and length",
    "matches the music",
    "creative entry, steps before",
    "effortless through out",
    "",
];

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    group.bench_function("identical", |b| {
        b.iter(|| similarity(black_box(REFERENCE[2]), black_box(REFERENCE[2])))
    });

    group.bench_function("typo", |b| {
        b.iter(|| similarity(black_box(SHUFFLED[1]), black_box(REFERENCE[0])))
    });

    group.bench_function("blank", |b| {
        b.iter(|| similarity(black_box(""), black_box(REFERENCE[0])))
    });

    group.finish();
}

fn bench_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("assignment");

    group.bench_function("score_matrix", |b| {
        b.iter(|| ScoreMatrix::compute(black_box(&SHUFFLED), black_box(&REFERENCE)))
    });

    let matrix = ScoreMatrix::compute(&SHUFFLED, &REFERENCE);
    group.bench_function("solve_720", |b| b.iter(|| black_box(&matrix).solve()));

    group.bench_function("end_to_end", |b| {
        b.iter(|| best_assignment(black_box(&SHUFFLED), black_box(&REFERENCE)))
    });

    group.finish();
}

criterion_group!(benches, bench_similarity, bench_assignment);
criterion_main!(benches);
