// File: crates/chart-core/tests/property_series.rs
// Purpose: Mark invariants for arbitrary line, bar and candle inputs via the recording painter.

use proptest::prelude::*;
use stockscope_chart::types::fiscal_years;
use stockscope_chart::{Candle, Chart, DataPoint, RecordingPainter, RenderOptions, Viewport};

const PLOT_TOP: f32 = 40.0;
const PLOT_BOTTOM: f32 = 210.0;
const TOL: f32 = 1e-2;

fn record(chart: &Chart, viewport: Viewport) -> RecordingPainter {
    let mut painter = RecordingPainter::new();
    chart.render_to(&mut painter, viewport, &RenderOptions::default());
    painter
}

fn candle_strategy() -> impl Strategy<Value = Candle> {
    (1.0f64..5_000.0, 0.0f64..500.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0e6, any::<bool>()).prop_map(
        |(low, span, open_f, close_f, volume, doji)| {
            let open = low + open_f * span;
            let close = if doji { open } else { low + close_f * span };
            Candle::try_new(open, low + span, low, close, volume).expect("valid candle")
        },
    )
}

proptest! {
    #[test]
    fn line_markers_stay_in_plot_and_hit_extremes(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..60)) {
        let painter = record(&Chart::line(fiscal_years(0, &values)), Viewport::default());
        let markers: Vec<_> = painter.circles().map(|(c, _)| c).collect();
        prop_assert_eq!(markers.len(), values.len());
        prop_assert_eq!(painter.segment_count(), values.len() - 1);
        for m in &markers {
            prop_assert!(m.y >= PLOT_TOP - TOL && m.y <= PLOT_BOTTOM + TOL);
            prop_assert!(m.x >= 40.0 - TOL && m.x <= 560.0 + TOL);
        }

        let top = markers.iter().map(|m| m.y).fold(f32::INFINITY, f32::min);
        prop_assert!((top - PLOT_TOP).abs() < TOL);
        let flat = values.iter().all(|v| *v == values[0]);
        if !flat {
            let bottom = markers.iter().map(|m| m.y).fold(f32::NEG_INFINITY, f32::max);
            prop_assert!((bottom - PLOT_BOTTOM).abs() < TOL);
        }
    }

    #[test]
    fn all_zero_bars_have_zero_height(n in 1usize..40) {
        let points = (0..n).map(|i| DataPoint::new(format!("C{i}"), 0.0)).collect();
        let painter = record(&Chart::bars(points), Viewport::default());
        let bars: Vec<_> = painter.rects().map(|(r, _)| r).collect();
        prop_assert_eq!(bars.len(), n);
        for bar in bars {
            prop_assert_eq!(bar.height(), 0.0);
            prop_assert_eq!(bar.bottom, PLOT_BOTTOM);
        }
    }

    #[test]
    fn bar_heights_are_finite_and_bounded(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..40)) {
        let points = values.iter().enumerate().map(|(i, v)| DataPoint::new(format!("C{i}"), *v)).collect();
        let painter = record(&Chart::bars(points), Viewport::default());
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (bar, v) in painter.rects().map(|(r, _)| r).zip(&values) {
            prop_assert!(bar.height().is_finite());
            prop_assert!(bar.height() >= 0.0);
            prop_assert!(bar.height() <= PLOT_BOTTOM - PLOT_TOP + TOL);
            prop_assert!((bar.bottom - PLOT_BOTTOM).abs() < TOL);
            if *v <= 0.0 {
                prop_assert_eq!(bar.height(), 0.0);
            }
            if *v == max && max > 0.0 {
                prop_assert!((bar.top - PLOT_TOP).abs() < TOL);
            }
        }
    }

    #[test]
    fn every_candle_body_is_visible(candles in prop::collection::vec(candle_strategy(), 1..80)) {
        let painter = record(&Chart::candlestick(candles.clone()), Viewport::new(600.0, 400.0));
        let bodies: Vec<_> = painter.rects().filter(|(_, c)| c.a() == 255).map(|(r, _)| r).collect();
        prop_assert_eq!(bodies.len(), candles.len());
        for body in &bodies {
            prop_assert!(body.height() >= 1.0);
            prop_assert!(body.width() >= 1.0);
            prop_assert!(body.top >= PLOT_TOP - TOL);
        }

        let wicks: Vec<_> = painter.lines().filter(|(from, to, _)| from.x == to.x).collect();
        prop_assert_eq!(wicks.len(), candles.len());
        for ((high, low, _), body) in wicks.iter().zip(&bodies) {
            prop_assert!(high.y <= body.top + TOL);
            prop_assert!(low.y >= high.y);
        }
    }

    #[test]
    fn volume_bars_fit_the_strip(candles in prop::collection::vec(candle_strategy(), 1..80)) {
        let painter = record(&Chart::candlestick(candles.clone()), Viewport::new(600.0, 400.0));
        let volumes: Vec<_> = painter.rects().filter(|(_, c)| c.a() != 255).map(|(r, _)| r).collect();
        prop_assert_eq!(volumes.len(), candles.len());
        for bar in volumes {
            prop_assert!(bar.height() >= 0.0 && bar.height() <= 60.0 + TOL);
            prop_assert!((bar.bottom - 360.0).abs() < TOL);
        }
    }
}
