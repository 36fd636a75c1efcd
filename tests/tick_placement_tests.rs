use gauge_rs::api::{
    ArcConfig, ArcSegmentation, LabelFormatters, SubArcConfig, TickConfig, TickLabelsConfig,
    TickPlacement, TickValueConfig, apply_auto_spacing, build_tick_layer, collect_ticks,
    text_anchor,
};
use gauge_rs::core::{ContainerSize, Dimensions, GaugeType, LayoutInput, MarginRatios};
use gauge_rs::render::TextAnchor;
use std::f64::consts::PI;
use std::sync::Arc;

fn default_segmentation() -> ArcSegmentation {
    ArcSegmentation::build(&ArcConfig::default(), 0.0, 100.0)
}

fn semicircle_dimensions(width: f64, height: f64) -> Dimensions {
    Dimensions::compute(LayoutInput {
        container: ContainerSize::new(width, height),
        gauge_type: GaugeType::Semicircle,
        angles: None,
        margins: MarginRatios::uniform(0.0),
        arc_width: 0.2,
    })
}

#[test]
fn close_ticks_get_opposite_offsets_and_distant_ones_none() {
    let close = TickLabelsConfig::default().with_ticks([48.0, 50.0]);
    let mut ticks = collect_ticks(&close, &default_segmentation(), 0.0, 100.0);
    apply_auto_spacing(&mut ticks, 0.0, 100.0, PI);
    let offset = |value: f64| {
        ticks
            .iter()
            .find(|tick| tick.value == value)
            .map(|tick| tick.angular_offset)
            .expect("tick present")
    };
    assert!(offset(48.0) < 0.0);
    assert!(offset(50.0) > 0.0);
    assert_eq!(offset(48.0), -offset(50.0));
    assert_eq!(offset(0.0), 0.0);
    assert_eq!(offset(100.0), 0.0);

    let distant = TickLabelsConfig::default().with_ticks([10.0, 50.0]);
    let mut ticks = collect_ticks(&distant, &default_segmentation(), 0.0, 100.0);
    apply_auto_spacing(&mut ticks, 0.0, 100.0, PI);
    assert!(ticks.iter().all(|tick| tick.angular_offset == 0.0));
}

#[test]
fn min_max_ticks_are_implicit_and_deduplicated() {
    let labels = TickLabelsConfig::default().with_ticks([0.0, 40.0, 100.0]);
    let values: Vec<f64> = collect_ticks(&labels, &default_segmentation(), 0.0, 100.0)
        .iter()
        .map(|tick| tick.value)
        .collect();
    assert_eq!(values, vec![0.0, 40.0, 100.0]);

    let hidden = TickLabelsConfig {
        hide_min_max: true,
        ..TickLabelsConfig::default().with_ticks([40.0])
    };
    let values: Vec<f64> = collect_ticks(&hidden, &default_segmentation(), 0.0, 100.0)
        .iter()
        .map(|tick| tick.value)
        .collect();
    assert_eq!(values, vec![40.0]);
}

#[test]
fn sub_arc_boundaries_add_ticks_and_out_of_range_ticks_drop() {
    let arc = ArcConfig::default().with_sub_arcs(vec![
        SubArcConfig::new().with_limit(25.0).with_tick(),
        SubArcConfig::new().with_limit(60.0),
        SubArcConfig::new(),
    ]);
    let segmentation = ArcSegmentation::build(&arc, 0.0, 100.0);
    let labels = TickLabelsConfig::default().with_ticks([-5.0, 140.0]);
    let values: Vec<f64> = collect_ticks(&labels, &segmentation, 0.0, 100.0)
        .iter()
        .map(|tick| tick.value)
        .collect();
    assert_eq!(values, vec![0.0, 25.0, 100.0]);
}

#[test]
fn per_tick_override_wins_over_default_for_all_ticks() {
    let mut labels = TickLabelsConfig::default();
    labels.default_tick_value_config = TickValueConfig {
        hide: Some(true),
        ..TickValueConfig::default()
    };
    labels.ticks = vec![TickConfig {
        value: 50.0,
        value_config: TickValueConfig {
            hide: Some(false),
            ..TickValueConfig::default()
        },
        ..TickConfig::default()
    }];
    let ticks = collect_ticks(&labels, &default_segmentation(), 0.0, 100.0);
    let hidden: Vec<(f64, bool)> = ticks.iter().map(|tick| (tick.value, tick.text.hide)).collect();
    assert_eq!(hidden, vec![(0.0, true), (50.0, false), (100.0, true)]);
}

#[test]
fn anchors_follow_center_band_and_swap_for_inner_ticks() {
    let outer = TickLabelsConfig::default();
    assert_eq!(text_anchor(0.1, &outer), TextAnchor::End);
    assert_eq!(text_anchor(0.5, &outer), TextAnchor::Middle);
    assert_eq!(text_anchor(0.9, &outer), TextAnchor::Start);

    let inner = TickLabelsConfig::default().with_placement(TickPlacement::Inner);
    assert_eq!(text_anchor(0.1, &inner), TextAnchor::Start);
    assert_eq!(text_anchor(0.9, &inner), TextAnchor::End);
}

#[test]
fn tick_sizes_scale_with_radius_within_bounds() {
    let labels = TickLabelsConfig::default();
    let ticks = collect_ticks(&labels, &default_segmentation(), 0.0, 100.0);
    let formatters = LabelFormatters::default();

    let small = build_tick_layer(&semicircle_dimensions(40.0, 20.0), &ticks, &labels, &formatters);
    let medium = build_tick_layer(&semicircle_dimensions(200.0, 100.0), &ticks, &labels, &formatters);
    let large = build_tick_layer(&semicircle_dimensions(2000.0, 1000.0), &ticks, &labels, &formatters);

    let font = |layer: &gauge_rs::render::LayerPrimitives| layer.texts[0].font_size_px;
    assert_eq!(font(&medium), 10.0);
    assert_eq!(font(&small), 5.0);
    assert_eq!(font(&large), 15.0);
    assert_eq!(medium.lines.len(), 2);
}

#[test]
fn degenerate_radius_skips_ticks() {
    let labels = TickLabelsConfig::default();
    let ticks = collect_ticks(&labels, &default_segmentation(), 0.0, 100.0);
    let layer = build_tick_layer(
        &semicircle_dimensions(0.0, 0.0),
        &ticks,
        &labels,
        &LabelFormatters::default(),
    );
    assert!(layer.is_empty());
}

#[test]
fn custom_tick_formatter_is_used() {
    let labels = TickLabelsConfig::default();
    let ticks = collect_ticks(&labels, &default_segmentation(), 0.0, 100.0);
    let formatters = LabelFormatters {
        tick_label: Some(Arc::new(|value| format!("{value}%"))),
        ..LabelFormatters::default()
    };
    let layer = build_tick_layer(&semicircle_dimensions(200.0, 100.0), &ticks, &labels, &formatters);
    let texts: Vec<&str> = layer.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["0%", "100%"]);
}
