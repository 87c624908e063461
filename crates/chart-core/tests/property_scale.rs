// File: crates/chart-core/tests/property_scale.rs
// Purpose: Value mapping invariants over arbitrary finite sequences.

use proptest::prelude::*;
use stockscope_chart::scale::{extent, index_positions};
use stockscope_chart::ScaleMapping;

proptest! {
    #[test]
    fn inverted_mapping_puts_extent_on_range_ends(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64),
        top in 0.0f32..200.0,
        height in 1.0f32..800.0
    ) {
        let (lo, hi) = extent(values.iter().copied()).expect("finite values");
        let bottom = top + height;
        let mapping = ScaleMapping::new((lo, hi), (top, bottom)).inverted();

        if hi > lo {
            prop_assert!((mapping.map(hi) - top).abs() < 1e-3);
            prop_assert!((mapping.map(lo) - bottom).abs() < 1e-2);
        } else {
            prop_assert_eq!(mapping.map(lo), top);
        }
        for v in &values {
            let y = mapping.map(*v);
            prop_assert!(y.is_finite());
            prop_assert!(y >= top - 1e-2 && y <= bottom + 1e-2);
        }
    }

    #[test]
    fn higher_values_never_map_lower_on_screen(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
        lo in -1.0e6f64..0.0,
        span in 1.0f64..2.0e6
    ) {
        let mapping = ScaleMapping::new((lo, lo + span), (40.0, 210.0)).inverted();
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(mapping.map(large) <= mapping.map(small));
    }

    #[test]
    fn index_positions_are_ordered_and_bounded(n in 1usize..500, left in 0.0f32..100.0, width in 1.0f32..2000.0) {
        let right = left + width;
        let xs = index_positions(n, (left, right));
        prop_assert_eq!(xs.len(), n);
        prop_assert_eq!(xs[0], left);
        prop_assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(xs.iter().all(|x| *x >= left && *x <= right + 1e-3));
    }
}
