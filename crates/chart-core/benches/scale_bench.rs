use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stockscope_chart::scale::{extent, index_positions};
use stockscope_chart::{NumberFormat, ScaleMapping};

fn bench_scale(c: &mut Criterion) {
    let values: Vec<f64> = (0..100_000).map(|i| 2_700.0 + (i as f64 * 0.01).sin() * 150.0).collect();

    c.bench_function("extent_100k", |b| b.iter(|| black_box(extent(values.iter().copied()))));

    let (lo, hi) = extent(values.iter().copied()).unwrap_or((0.0, 1.0));
    let mapping = ScaleMapping::new((lo, hi), (40.0, 360.0)).inverted();
    c.bench_function("map_100k", |b| {
        b.iter(|| {
            let sum: f32 = values.iter().map(|v| mapping.map(*v)).sum();
            black_box(sum)
        })
    });

    c.bench_function("index_positions_100k", |b| b.iter(|| black_box(index_positions(100_000, (40.0, 760.0)))));
}

fn bench_format(c: &mut Criterion) {
    let rupees = NumberFormat::rupees();
    c.bench_function("format_rupees_1k", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                black_box(rupees.format(1_234_567.0 + i as f64));
            }
        })
    });
}

criterion_group!(benches, bench_scale, bench_format);
criterion_main!(benches);
