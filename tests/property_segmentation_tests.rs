use gauge_rs::api::{ArcConfig, SubArcConfig, build_arc_data};
use gauge_rs::core::{Color, resolve_segment_colors};
use proptest::prelude::*;

fn sub_arcs_strategy() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::of(-50.0f64..150.0), 1..8)
}

proptest! {
    #[test]
    fn explicit_segment_lengths_sum_to_one(
        min_value in -1_000.0f64..1_000.0,
        span in 0.001f64..10_000.0,
        limits in sub_arcs_strategy()
    ) {
        let max_value = min_value + span;
        let sub_arcs = limits
            .iter()
            .map(|limit| match limit {
                Some(ratio) => SubArcConfig::new().with_limit(min_value + ratio / 100.0 * span),
                None => SubArcConfig::new(),
            })
            .collect();
        let arc = ArcConfig::default().with_sub_arcs(sub_arcs);
        let data = build_arc_data(&arc, min_value, max_value);

        let total: f64 = data.iter().map(|datum| datum.percentage_length).sum();
        prop_assert!((total - 1.0).abs() <= 1e-6);
        prop_assert!(data.iter().all(|datum| datum.percentage_length >= 0.0));
        prop_assert!(data.windows(2).all(|pair| pair[0].limit <= pair[1].limit + 1e-9));
    }

    #[test]
    fn count_mode_lengths_sum_to_one(
        min_value in -1_000.0f64..1_000.0,
        span in 0.001f64..10_000.0,
        count in 1usize..64
    ) {
        let arc = ArcConfig::default().with_nb_sub_arcs(count);
        let data = build_arc_data(&arc, min_value, min_value + span);
        prop_assert_eq!(data.len(), count);
        let total: f64 = data.iter().map(|datum| datum.percentage_length).sum();
        prop_assert!((total - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn resolved_colors_keep_endpoints(
        channels in prop::collection::vec((0u8..=255, 0u8..=255, 0u8..=255), 2..6),
        count in 1usize..24
    ) {
        let colors: Vec<Color> = channels
            .iter()
            .map(|(r, g, b)| Color::from_rgb8(*r, *g, *b))
            .collect();
        let resolved = resolve_segment_colors(&colors, count);
        prop_assert_eq!(resolved.len(), count);
        if colors.len() == count {
            prop_assert_eq!(&resolved, &colors);
        } else {
            prop_assert_eq!(resolved[0], colors[0]);
            if count > 1 {
                prop_assert_eq!(resolved[count - 1], colors[colors.len() - 1]);
            }
        }
    }
}
