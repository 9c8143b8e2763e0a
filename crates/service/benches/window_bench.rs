use criterion::{criterion_group, criterion_main, Criterion};

use models::PageRequest;
use service::{links, window};

fn bench_paginate(c: &mut Criterion) {
    let req = PageRequest::build(10, 7, "created_at", "desc", 10).unwrap();

    c.bench_function("window_paginate", |b| {
        b.iter(|| {
            let meta = window::paginate(&req, 1_000_003);
            criterion::black_box(meta)
        });
    });

    c.bench_function("build_links", |b| {
        b.iter(|| {
            let l = links::build_links(&req, 100_001, "/invoices");
            criterion::black_box(l)
        });
    });
}

criterion_group!(benches, bench_paginate);
criterion_main!(benches);
