// File: crates/chart-core/tests/bar_chart.rs
// Purpose: Bar heights relative to the series maximum, palette cycling and degenerate maxima.

use approx::assert_relative_eq;
use stockscope_chart::{Chart, DataPoint, RecordingPainter, RenderOptions, Theme, Viewport};

fn margins() -> Vec<DataPoint> {
    vec![DataPoint::new("Gross", 42.0), DataPoint::new("Operating", 18.0), DataPoint::new("Net", 12.0)]
}

fn record(chart: &Chart) -> RecordingPainter {
    let mut painter = RecordingPainter::new();
    chart.render_to(&mut painter, Viewport::new(600.0, 250.0), &RenderOptions::default());
    painter
}

#[test]
fn tallest_bar_fills_the_plot_height() {
    let painter = record(&Chart::bars(margins()));
    let bars: Vec<_> = painter.rects().map(|(r, _)| r).collect();
    assert_eq!(bars.len(), 3);

    let plot_height = 250.0 - 2.0 * 40.0;
    assert_relative_eq!(bars[0].height(), plot_height, epsilon = 1e-3);
    assert_relative_eq!(bars[0].top, 40.0, epsilon = 1e-3);
    assert_relative_eq!(bars[2].height(), 12.0 / 42.0 * plot_height, epsilon = 1e-3);
    for bar in &bars {
        assert_relative_eq!(bar.bottom, 210.0, epsilon = 1e-3);
        assert_relative_eq!(bar.width(), 520.0 / 3.0 * 0.6, epsilon = 1e-3);
    }
}

#[test]
fn bars_are_centred_in_their_slots() {
    let painter = record(&Chart::bars(margins()));
    let centres: Vec<f32> = painter.rects().map(|(r, _)| (r.left + r.right) / 2.0).collect();
    let slot = 520.0 / 3.0;
    for (i, c) in centres.iter().enumerate() {
        assert_relative_eq!(*c, 40.0 + slot * i as f32 + slot / 2.0, epsilon = 1e-3);
    }
}

#[test]
fn value_and_category_labels() {
    let painter = record(&Chart::bars(margins()));
    let texts: Vec<_> = painter.texts().collect();
    let grid: Vec<&str> = texts[..5].iter().map(|(t, _)| *t).collect();
    assert_eq!(grid, vec!["42.0", "31.5", "21.0", "10.5", "0.0"]);

    // then value above, category below, per bar
    assert_eq!(texts[5].0, "42.0");
    assert_relative_eq!(texts[5].1.y, 35.0, epsilon = 1e-3);
    assert_eq!(texts[6].0, "Gross");
    assert_relative_eq!(texts[6].1.y, 240.0);
    assert_eq!(texts[10].0, "Net");
}

#[test]
fn all_zero_values_give_zero_height_bars() {
    let chart = Chart::bars(vec![DataPoint::new("A", 0.0), DataPoint::new("B", 0.0)]);
    let painter = record(&chart);
    let bars: Vec<_> = painter.rects().map(|(r, _)| r).collect();
    assert_eq!(bars.len(), 2);
    for bar in bars {
        assert!(bar.height().is_finite());
        assert_eq!(bar.height(), 0.0);
        assert_eq!(bar.top, 210.0);
    }
}

#[test]
fn negative_values_never_produce_negative_heights() {
    let chart = Chart::bars(vec![DataPoint::new("ROE", 14.2), DataPoint::new("Loss", -3.0)]);
    let painter = record(&chart);
    assert!(painter.rects().all(|(r, _)| r.height() >= 0.0));
}

#[test]
fn palette_cycles_by_index() {
    let theme = Theme::light();
    let points = (0..6).map(|i| DataPoint::new(format!("C{i}"), 1.0 + i as f64)).collect();
    let painter = record(&Chart::bars(points));
    let colors: Vec<_> = painter.rects().map(|(_, c)| c).collect();
    assert_eq!(colors[0], theme.palette[0]);
    assert_eq!(colors[3], theme.palette[3]);
    assert_eq!(colors[4], theme.palette[0]);
    assert_eq!(colors[5], theme.palette[1]);
}
