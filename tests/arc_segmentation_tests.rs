use approx::assert_abs_diff_eq;
use gauge_rs::api::{ArcConfig, ArcSegmentation, SubArcConfig, build_arc_data};
use gauge_rs::core::Color;

fn lengths(segmentation: &ArcSegmentation) -> Vec<f64> {
    segmentation
        .data
        .iter()
        .map(|datum| datum.percentage_length)
        .collect()
}

#[test]
fn explicit_limit_then_open_segment_covers_range() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new().with_limit(30.0).with_color("#ff0000"),
        SubArcConfig::new().with_color("#0000ff"),
    ]);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);

    let lengths = lengths(&segmentation);
    assert_eq!(lengths.len(), 2);
    assert_abs_diff_eq!(lengths[0], 0.30, epsilon = 1e-12);
    assert_abs_diff_eq!(lengths[1], 0.70, epsilon = 1e-12);
    let limits: Vec<f64> = segmentation.data.iter().map(|datum| datum.limit).collect();
    assert_eq!(limits, vec![30.0, 100.0]);
    assert_eq!(segmentation.data[0].color, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(segmentation.data[1].color, Color::rgb(0.0, 0.0, 1.0));
}

#[test]
fn count_mode_ramps_colors_between_endpoints() {
    let arc = ArcConfig::default()
        .with_nb_sub_arcs(4)
        .with_color_array(["#000", "#fff"]);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);

    assert_eq!(segmentation.data.len(), 4);
    for datum in &segmentation.data {
        assert_abs_diff_eq!(datum.percentage_length, 0.25, epsilon = 1e-12);
    }
    assert_eq!(segmentation.data[0].color.to_hex(), "#000000");
    assert_eq!(segmentation.data[3].color.to_hex(), "#ffffff");
    let lightness: Vec<f64> = segmentation
        .data
        .iter()
        .map(|datum| datum.color.to_hsl().lightness)
        .collect();
    assert!(lightness.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn count_mode_limits_follow_a_nonzero_minimum() {
    let arc = ArcConfig::default().with_nb_sub_arcs(4);
    let limits: Vec<f64> = build_arc_data(&arc, 20.0, 60.0)
        .iter()
        .map(|datum| datum.limit)
        .collect();
    assert_eq!(limits, vec![30.0, 40.0, 50.0, 60.0]);
}

#[test]
fn missing_arc_config_uses_default_palette() {
    let segmentation = ArcSegmentation::build(&ArcConfig::default(), 0.0, 100.0);
    let colors: Vec<String> = segmentation
        .data
        .iter()
        .map(|datum| datum.color.to_hex())
        .collect();
    assert_eq!(colors, vec!["#5be12c", "#f5cd19", "#ea4228"]);
}

#[test]
fn limits_outside_the_range_are_clamped() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new().with_limit(-40.0),
        SubArcConfig::new().with_limit(250.0),
    ]);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);
    let lengths = lengths(&segmentation);
    assert_abs_diff_eq!(lengths[0], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(lengths[1], 1.0, epsilon = 1e-12);
    assert!(lengths.iter().all(|length| *length >= 0.0));
}

#[test]
fn non_monotonic_limits_never_produce_negative_lengths() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new().with_limit(80.0),
        SubArcConfig::new().with_limit(20.0),
        SubArcConfig::new(),
    ]);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);
    let limits: Vec<f64> = segmentation.data.iter().map(|datum| datum.limit).collect();
    assert!(limits.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(lengths(&segmentation).iter().all(|length| *length >= 0.0));
}

#[test]
fn empty_range_collapses_to_last_segment() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new().with_limit(10.0),
        SubArcConfig::new(),
    ]);
    let segmentation = ArcSegmentation::build(&arc, 50.0, 50.0);
    assert_eq!(lengths(&segmentation), vec![0.0, 1.0]);
}

#[test]
fn gradient_mode_paints_one_band_with_cumulative_stops() {
    let arc = ArcConfig::default()
        .with_sub_arcs(vec![
            SubArcConfig::new().with_limit(25.0).with_color("#00ff00"),
            SubArcConfig::new().with_limit(75.0).with_color("#ffff00"),
            SubArcConfig::new().with_color("#ff0000"),
        ])
        .with_gradient(true);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);

    let painted = segmentation.painted_segments();
    assert_eq!(painted.len(), 1);
    assert_eq!(painted[0].percentage_length, 1.0);

    let stops = segmentation.gradient.expect("gradient stops");
    let offsets: Vec<f64> = stops.iter().map(|stop| stop.offset).collect();
    assert_abs_diff_eq!(offsets[0], 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(offsets[1], 0.75, epsilon = 1e-12);
    assert_abs_diff_eq!(offsets[2], 1.0, epsilon = 1e-12);
}

#[test]
fn segment_lookup_assigns_boundaries_to_the_lower_segment() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new().with_limit(40.0),
        SubArcConfig::new(),
    ]);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);
    assert_eq!(segmentation.segment_at(0.1), Some(0));
    assert_eq!(segmentation.segment_at(0.4), Some(0));
    assert_eq!(segmentation.segment_at(0.41), Some(1));
    assert_eq!(segmentation.segment_at(1.0), Some(1));
    assert_eq!(segmentation.segment_at(f64::NAN), None);
}

#[test]
fn tooltips_and_tick_flags_follow_their_sub_arc() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new()
            .with_limit(50.0)
            .with_tooltip("low")
            .with_tick(),
        SubArcConfig::new().with_tooltip("high"),
    ]);
    let data = build_arc_data(&arc, 0.0, 100.0);
    assert_eq!(data[0].tooltip.as_deref(), Some("low"));
    assert!(data[0].show_tick);
    assert_eq!(data[1].tooltip.as_deref(), Some("high"));
    assert_eq!(data[1].sub_arc_index, Some(1));
}
