use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webcorpus::processing::deduplicate;

fn texts(nb: usize) -> Vec<String> {
    (0..nb)
        .map(|x| format!("document number {} talks about topic {} and item {}", x, x % 7, x % 13))
        .collect()
}

pub fn dedup(c: &mut Criterion) {
    let texts = texts(500);
    c.bench_function("dedup_500", |b| b.iter(|| deduplicate(black_box(&texts))));
}

criterion_group!(benches, dedup);
criterion_main!(benches);
