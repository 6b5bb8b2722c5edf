use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webcorpus::{
    extract::RawPayload,
    filtering::DenyList,
    pipelines::{Document, DocumentFilter},
};

fn pages() -> Vec<RawPayload> {
    [
        "<html><body><h1>Title</h1><p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p></body></html>",
        "<html><body><p>Call +15551234567 or write to 123-45-6789, thanks.</p><p>menu home about</p></body></html>",
        "<html><body><p>Это обычный текст на русском языке.</p></body></html>",
        "<html><body><p>aGVsbG8gd29ybGQaGVsbG8gd29ybGQaGVsbG8gd29ybGQaGVsbG8gd29ybGQaGVsbG8gd29ybGQaGVsbG8gd29ybGQaGVsbG8gd29ybGQ</p></body></html>",
    ]
    .into_iter()
    .map(RawPayload::from)
    .collect()
}

pub fn filter_payloads(c: &mut Criterion) {
    let denylist = DenyList::new(["badword".to_string()].into_iter().collect::<HashSet<_>>());
    let filter = DocumentFilter::new(&denylist);
    let payloads = pages();
    c.bench_function("filter_payloads", |b| {
        b.iter(|| {
            for p in &payloads {
                black_box(filter.process("bench".to_string(), black_box(p)));
            }
        })
    });
}

pub fn judge_text(c: &mut Criterion) {
    let denylist = DenyList::default();
    let filter = DocumentFilter::new(&denylist);
    let content = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n".repeat(100);
    c.bench_function("judge_text", |b| {
        b.iter(|| {
            let doc = Document::new("bench".to_string(), content.clone());
            black_box(filter.judge(black_box(doc)))
        })
    });
}

criterion_group!(benches, filter_payloads, judge_text);
criterion_main!(benches);
