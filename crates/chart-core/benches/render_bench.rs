use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stockscope_chart::{CandleProvider, Chart, RandomWalkProvider, RecordingPainter, RenderOptions, Timeframe, Viewport};

fn build_candles(tf: Timeframe) -> Chart {
    let candles = RandomWalkProvider::seeded(11).candles(tf).expect("candles");
    Chart::candlestick(candles)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for tf in [Timeframe::OneYear, Timeframe::Max] {
        group.bench_function(format!("candles_{tf}"), |b| {
            let chart = build_candles(tf);
            let viewport = Viewport::new(800.0, 400.0);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(viewport, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_record(c: &mut Criterion) {
    let chart = build_candles(Timeframe::Max);
    let opts = RenderOptions::default();
    c.bench_function("record_candles_Max", |b| {
        let mut painter = RecordingPainter::new();
        b.iter(|| {
            chart.render_to(&mut painter, Viewport::new(800.0, 400.0), &opts);
            black_box(painter.commands().len());
        });
    });
}

criterion_group!(benches, bench_render, bench_record);
criterion_main!(benches);
