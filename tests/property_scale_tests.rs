use dataviz_rs::core::{BandScale, LinearScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 840.0))
            .expect("valid scale");
        let px = scale.scale(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9 + 1e-9);
    }

    #[test]
    fn inverted_range_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (480.0, 0.0))
            .expect("valid scale");
        let px = scale.scale(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9 + 1e-9);
    }

    #[test]
    fn linear_scale_is_strictly_monotonic(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 1.0f64..1_000.0,
        a_factor in 0.0f64..1.0,
        gap_factor in 0.001f64..0.5
    ) {
        let domain_end = domain_start + domain_span;
        let a = domain_start + a_factor * domain_span * 0.5;
        let b = a + gap_factor * domain_span * 0.5;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 840.0))
            .expect("valid scale");
        let px_a = scale.scale(a).expect("a");
        let px_b = scale.scale(b).expect("b");

        // Distinct inputs never collapse onto one pixel coordinate.
        prop_assert!(px_a < px_b);
    }

    #[test]
    fn inverted_ranges_flip_the_ordering(
        domain_span in 1.0f64..1_000.0,
        a_factor in 0.0f64..0.49,
        b_factor in 0.51f64..1.0
    ) {
        let a = a_factor * domain_span;
        let b = b_factor * domain_span;

        let scale = LinearScale::new((0.0, domain_span), (480.0, 0.0))
            .expect("valid scale");
        let px_a = scale.scale(a).expect("a");
        let px_b = scale.scale(b).expect("b");

        // Larger domain values plot closer to the top (smaller y).
        prop_assert!(px_b < px_a);
    }

    #[test]
    fn band_widths_are_uniform(count in 1usize..40, span in 10.0f64..2_000.0) {
        let categories: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
        let bands = BandScale::new(categories.clone(), (0.0, span), 0.0)
            .expect("valid scale");

        let width = bands.bandwidth();
        for (index, category) in categories.iter().enumerate() {
            let start = bands.band_start(category).expect("start");
            prop_assert!((start - index as f64 * span / count as f64).abs() <= 1e-6);
            prop_assert!(start + width <= span + 1e-6);
        }
    }
}
