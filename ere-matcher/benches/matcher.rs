use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ere_matcher::Regex;

fn bench_search(c: &mut Criterion) {
    let hay: String = "Hark! Hark! The lark at heaven's gate sings. ".repeat(64);

    let re = Regex::new("l[a-z]*k").unwrap();
    c.bench_function("search/literal_head", |b| {
        b.iter(|| re.search(black_box(hay.as_str())))
    });

    let re = Regex::new("[Hh]eaven|[Gg]ate").unwrap();
    c.bench_function("search/alternation", |b| {
        b.iter(|| re.search(black_box(hay.as_str())))
    });

    let re = Regex::new("(a|aa)+$").unwrap();
    let pathological = "a".repeat(256) + "b";
    c.bench_function("search/no_backtracking_blowup", |b| {
        b.iter(|| re.search(black_box(pathological.as_str())))
    });
}

fn bench_iter(c: &mut Criterion) {
    let hay: String = "one 1 two 22 three 333 ".repeat(64);
    let re = Regex::new("[0-9]+").unwrap();
    c.bench_function("iter/digits", |b| {
        b.iter(|| re.find_iter(black_box(hay.as_bytes())).count())
    });
}

criterion_group!(benches, bench_search, bench_iter);
criterion_main!(benches);
