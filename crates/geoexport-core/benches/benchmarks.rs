use criterion::{criterion_group, criterion_main, Criterion};
use geoexport_core::prelude::*;
use std::hint::black_box;

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_dataset/global", |b| {
        b.iter(|| DatasetVariant::Global.build().unwrap())
    });
}

fn bench_render(c: &mut Criterion) {
    let db = DatasetVariant::Global.build().unwrap();
    let exporter = Exporter::new(&db, ExportOptions::for_variant(DatasetVariant::Global));

    let mut group = c.benchmark_group("render");
    for format in OutputFormat::ALL {
        group.bench_function(format.extension(), |b| {
            b.iter(|| exporter.render(black_box(format)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
