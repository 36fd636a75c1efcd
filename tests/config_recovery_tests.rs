use approx::assert_abs_diff_eq;
use gauge_rs::api::{
    ArcConfig, DEFAULT_POINTER_COLOR, GaugeConfig, GaugeEngine, PointerConfig, TickConfig,
};
use gauge_rs::core::{Color, ContainerSize, GaugeType, MarginRatios};
use gauge_rs::render::{Fill, NullRenderer, SceneLayerKind};

fn semicircle() -> GaugeConfig {
    GaugeConfig::new(GaugeType::Semicircle)
        .with_value(40.0)
        .with_margins(MarginRatios::uniform(0.0))
        .with_pointer(PointerConfig::default().with_animate(false))
}

fn engine() -> GaugeEngine<NullRenderer> {
    GaugeEngine::new(NullRenderer::default(), ContainerSize::new(200.0, 100.0))
}

#[test]
fn nan_channel_in_color_array_falls_back_instead_of_failing() {
    let mut engine = engine();
    let config = semicircle()
        .with_arc(ArcConfig::default().with_color_array(["rgb(nan, 0, 0)", "#fff"]));

    engine.set_config(config).expect("recovered config");
    let colors: Vec<Color> = engine
        .segmentation()
        .data
        .iter()
        .map(|datum| datum.color)
        .collect();
    assert_eq!(colors.first(), Some(&Color::BLACK));
    assert_eq!(colors.last(), Some(&Color::WHITE));
}

#[test]
fn nan_alpha_in_pointer_color_uses_default_pointer_color() {
    let mut engine = engine();
    let mut config = semicircle();
    config.pointer.color = "rgba(0, 0, 0, NaN)".to_owned();

    engine.set_config(config).expect("recovered config");
    let expected = Color::parse_css(DEFAULT_POINTER_COLOR).expect("default pointer color");
    let pointers = engine
        .sink()
        .frame
        .layer(SceneLayerKind::Pointers)
        .expect("pointer layer");
    assert!(!pointers.paths.is_empty());
    for path in &pointers.paths {
        assert_eq!(path.fill, Fill::Solid(expected));
    }
}

#[test]
fn invalid_tick_style_overrides_fall_through_to_defaults() {
    let mut engine = engine();
    let mut config = semicircle();
    let tick_labels = &mut config.labels.tick_labels;
    tick_labels.default_tick_line_config.distance_from_arc = Some(f64::NAN);
    tick_labels.default_tick_line_config.length = Some(-4.0);
    tick_labels.default_tick_value_config.font_size = Some(f64::INFINITY);
    let mut tick = TickConfig::new(50.0);
    tick.line_config.width = Some(f64::NAN);
    tick.value_config.font_size = Some(-1.0);
    tick_labels.ticks.push(tick);

    engine.set_config(config).expect("recovered config");
    let ticks = engine
        .sink()
        .frame
        .layer(SceneLayerKind::Ticks)
        .expect("tick layer");
    assert_eq!(ticks.lines.len(), 3);
    for line in &ticks.lines {
        assert_abs_diff_eq!(line.length(), 7.0, epsilon = 1e-9);
    }
    assert_eq!(ticks.texts.len(), 3);
    for text in &ticks.texts {
        assert_abs_diff_eq!(text.font_size_px, 10.0, epsilon = 1e-9);
    }
}

#[test]
fn huge_angle_overrides_commit_promptly() {
    let mut engine = engine();
    let config = semicircle().with_angles_deg(-1e10, 1e10);

    engine.set_config(config).expect("config");
    engine.resize(ContainerSize::new(300.0, 300.0)).expect("resize");
    assert!(engine.dimensions().outer_radius > 0.0);
}
