use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dictation_trainer::{
    compute_alignment_entries, compute_similarity_percent, normalize, score, tokenize, NoiseFilter,
};

const REFERENCE: &str = "The quick brown fox jumps over the lazy dog while the crowd \
    watches quietly and the narrator keeps talking about everything that happens on screen";

const USER: &str = "the quick brown fox jump over a lazy dog while the crowd \
    watched quietly and the narator keeps talking about everything";

fn bench_normalization(c: &mut Criterion) {
    c.bench_function("normalize_sentence", |b| {
        b.iter(|| black_box(normalize(black_box(REFERENCE))))
    });

    c.bench_function("tokenize_sentence", |b| {
        b.iter(|| black_box(tokenize(black_box(REFERENCE))))
    });
}

fn bench_scoring(c: &mut Criterion) {
    let user_tokens = tokenize(USER);
    let reference_tokens = tokenize(REFERENCE);

    c.bench_function("similarity_percent", |b| {
        b.iter(|| {
            black_box(compute_similarity_percent(
                black_box(&user_tokens),
                black_box(&reference_tokens),
            ))
        })
    });

    c.bench_function("alignment_entries", |b| {
        b.iter(|| {
            black_box(compute_alignment_entries(
                black_box(&user_tokens),
                black_box(&reference_tokens),
                0.75,
            ))
        })
    });

    c.bench_function("score_end_to_end", |b| {
        b.iter(|| black_box(score(black_box(USER), black_box(REFERENCE))))
    });
}

fn bench_noise_stripping(c: &mut Criterion) {
    let filter = NoiseFilter::new();
    let noisy = "Hello [Music] everyone [ APPLAUSE ] welcome back [laughter] to the show";

    c.bench_function("noise_strip", |b| {
        b.iter(|| black_box(filter.strip(black_box(noisy))))
    });
}

criterion_group!(benches, bench_normalization, bench_scoring, bench_noise_stripping);
criterion_main!(benches);
