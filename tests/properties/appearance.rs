//! Property tests for the position and scale mapping.

use proptest::prelude::*;

use lookatme::domain::services::{position_offset, scale_multiplier};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Position offset is monotonic in the percentage and spans
    /// 0 to `container - content`.
    #[test]
    fn property_position_offset_is_monotonic(
        container in 1.0f32..4000.0,
        content_fraction in 0.0f32..=1.0,
        a in 0.0f32..=100.0,
        b in 0.0f32..=100.0,
    ) {
        let content = container * content_fraction;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(position_offset(container, content, low) <= position_offset(container, content, high));
        prop_assert_eq!(position_offset(container, content, 0.0), 0.0);

        let full = position_offset(container, content, 100.0);
        prop_assert!((full - (container - content)).abs() <= 1e-3 * container.max(1.0));
    }

    /// PROPERTY: Scale maps 0..=100 onto 0.5..=1.5, monotonically.
    #[test]
    fn property_scale_multiplier_range(a in 0.0f32..=100.0, b in 0.0f32..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(scale_multiplier(low) <= scale_multiplier(high));
        prop_assert!((0.5..=1.5).contains(&scale_multiplier(low)));
        prop_assert!((0.5..=1.5).contains(&scale_multiplier(high)));
    }
}

#[test]
fn scale_fixed_points() {
    assert_eq!(scale_multiplier(0.0), 0.5);
    assert_eq!(scale_multiplier(50.0), 1.0);
    assert_eq!(scale_multiplier(100.0), 1.5);
}
