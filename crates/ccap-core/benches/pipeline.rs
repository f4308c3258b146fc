use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ccap_core::mora::{expand_mora, mora_tokenize};
use ccap_core::normalize::normalize;
use ccap_core::phoneme::to_phonemes;
use ccap_core::vocab::VocabRegistry;

const READINGS: &[&str] = &[
    "きょうはいいてんきですね",
    "すーぱーまーけっと",
    "ゔぁいおりんのしゅくだい",
    "てぃーしゃつとでぃすく",
    "てんきすごくいいいいいい",
];

const SURFACES: &[&str] = &[
    "　　　ＰＲＭＬ　　副　読　本　　　",
    "南アルプスの　天然水　Ｓｐａｒｋｉｎｇ　Ｌｅｍｏｎ　レモン一絞り",
    "ﾊﾝｶｸｶﾀｶﾅとスーパーーーー",
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (i, s) in SURFACES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), s, |b, s| {
            b.iter(|| normalize(black_box(s)))
        });
    }
    group.finish();
}

fn bench_phonemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_phonemes");
    for reading in READINGS {
        group.bench_with_input(BenchmarkId::from_parameter(reading), reading, |b, r| {
            b.iter(|| to_phonemes(black_box(r)))
        });
    }
    group.finish();
}

fn bench_mora(c: &mut Criterion) {
    c.bench_function("mora_tokenize", |b| {
        b.iter(|| {
            for reading in READINGS {
                black_box(mora_tokenize(black_box(reading)));
            }
        })
    });

    c.bench_function("expand_mora", |b| {
        let mut registry = VocabRegistry::new();
        b.iter(|| {
            for reading in READINGS {
                let _ = black_box(expand_mora(black_box(reading), &mut registry));
            }
        })
    });
}

criterion_group!(benches, bench_normalize, bench_phonemes, bench_mora);
criterion_main!(benches);
