// File: crates/chart-core/tests/candlestick.rs
// Purpose: Candle wicks/bodies, doji visibility, direction colours and the volume strip.

use approx::assert_relative_eq;
use skia_safe::Color;
use stockscope_chart::geometry::Bounds;
use stockscope_chart::{Candle, Chart, RecordingPainter, RenderOptions, Theme, Viewport};

fn candle(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Candle {
    Candle::try_new(open, high, low, close, volume).expect("valid candle")
}

fn sample() -> Vec<Candle> {
    vec![
        candle(2_700.0, 2_760.0, 2_680.0, 2_740.0, 500_000.0), // up
        candle(2_740.0, 2_750.0, 2_650.0, 2_660.0, 1_000_000.0), // down
        candle(2_660.0, 2_700.0, 2_600.0, 2_660.0, 250_000.0), // doji
    ]
}

fn record(candles: Vec<Candle>) -> RecordingPainter {
    let mut painter = RecordingPainter::new();
    Chart::candlestick(candles).render_to(&mut painter, Viewport::new(600.0, 400.0), &RenderOptions::default());
    painter
}

fn bodies(painter: &RecordingPainter) -> Vec<(Bounds, Color)> {
    painter.rects().filter(|(_, c)| c.a() == 255).collect()
}

fn volumes(painter: &RecordingPainter) -> Vec<(Bounds, Color)> {
    painter.rects().filter(|(_, c)| c.a() != 255).collect()
}

#[test]
fn price_plot_leaves_room_for_the_volume_strip() {
    let chart = Chart::candlestick(sample());
    let plot = chart.plot_area(&Viewport::new(600.0, 400.0));
    assert_relative_eq!(plot.top, 40.0);
    assert_relative_eq!(plot.bottom, 280.0);
}

#[test]
fn wick_spans_high_to_low() {
    let theme = Theme::light();
    let painter = record(sample());
    let wicks: Vec<_> = painter.lines().filter(|(_, _, s)| s.color != theme.grid).collect();
    assert_eq!(wicks.len(), 3);
    // domain 2600..2760 over 40..280: 2760 → 40, 2600 → 280
    let (top, bottom, _) = wicks[0];
    assert_relative_eq!(top.y, 40.0, epsilon = 1e-3);
    assert_relative_eq!(bottom.y, 280.0 - 80.0 / 160.0 * 240.0, epsilon = 1e-3);
    assert_eq!(top.x, bottom.x);
    assert_relative_eq!(top.x, 40.0 + 520.0 / 6.0, epsilon = 1e-3);
}

#[test]
fn doji_body_is_at_least_one_pixel() {
    let painter = record(sample());
    let bodies = bodies(&painter);
    assert_eq!(bodies.len(), 3);
    assert!(bodies[2].0.height() >= 1.0);
    assert!(bodies.iter().all(|(b, _)| b.height() >= 1.0 && b.width() >= 1.0));
}

#[test]
fn direction_drives_colour() {
    let theme = Theme::light();
    let painter = record(sample());
    let colors: Vec<_> = bodies(&painter).into_iter().map(|(_, c)| c).collect();
    assert_eq!(colors, vec![theme.up, theme.down, theme.down]);
}

#[test]
fn volume_bars_scale_to_the_largest_period() {
    let theme = Theme::light();
    let painter = record(sample());
    let vols = volumes(&painter);
    assert_eq!(vols.len(), 3);
    // strip spans 300..360
    assert_relative_eq!(vols[1].0.height(), 60.0, epsilon = 1e-3);
    assert_relative_eq!(vols[1].0.bottom, 360.0, epsilon = 1e-3);
    assert_relative_eq!(vols[0].0.height(), 30.0, epsilon = 1e-3);
    assert_eq!(vols[0].1, theme.up.with_a(theme.volume_alpha));
    assert_eq!(vols[1].1, theme.down.with_a(theme.volume_alpha));
    assert!(painter.texts().any(|(t, at)| t == "Volume" && at.y == 295.0));
}

#[test]
fn zero_volume_history_has_flat_volume_bars() {
    let candles = vec![candle(10.0, 12.0, 9.0, 11.0, 0.0), candle(11.0, 11.5, 10.0, 10.5, 0.0)];
    let painter = record(candles);
    for (bar, _) in volumes(&painter) {
        assert_eq!(bar.height(), 0.0);
    }
}

#[test]
fn price_axis_uses_rupee_labels_and_five_steps() {
    let theme = Theme::light();
    let painter = record(sample());
    let grid_lines = painter.lines().filter(|(_, _, s)| s.color == theme.grid).count();
    assert_eq!(grid_lines, 6);
    let first = painter.texts().next().unwrap();
    assert_eq!(first.0, "\u{20b9}2,760");
    assert_relative_eq!(first.1.x, 30.0);
}

#[test]
fn single_flat_candle_does_not_panic() {
    let painter = record(vec![candle(5.0, 5.0, 5.0, 5.0, 1.0)]);
    let bodies = bodies(&painter);
    assert_eq!(bodies.len(), 1);
    assert!(bodies[0].0.height() >= 1.0);
}
