use gauge_rs::api::{
    ArcConfig, ChangeTopic, EngineLifecycle, GaugeConfig, GaugeEngine, LabelFormatters,
    PointerConfig, PointerEntry,
};
use gauge_rs::core::{ContainerSize, GaugeType, MarginRatios, ValueScale};
use gauge_rs::render::{NullRenderer, SceneLayerKind};
use std::sync::Arc;

fn semicircle(value: f64) -> GaugeConfig {
    GaugeConfig::new(GaugeType::Semicircle)
        .with_value(value)
        .with_margins(MarginRatios::uniform(0.0))
        .with_pointer(PointerConfig::default().with_animation(1000.0, 0.0))
}

fn engine() -> GaugeEngine<NullRenderer> {
    GaugeEngine::new(NullRenderer::default(), ContainerSize::new(200.0, 100.0))
}

/// Runs every pending animation to completion, one frame per 100 ms.
fn settle(engine: &mut GaugeEngine<NullRenderer>, mut now_ms: f64) -> f64 {
    while engine.is_animating() {
        engine.advance_frame(now_ms).expect("frame");
        now_ms += 100.0;
    }
    now_ms
}

fn percentage(engine: &GaugeEngine<NullRenderer>, index: usize) -> f64 {
    engine
        .animations()
        .get(index)
        .expect("pointer state")
        .current_percentage
}

#[test]
fn first_config_builds_every_layer_and_animates_from_start() {
    let mut engine = engine();
    assert_eq!(engine.lifecycle(), EngineLifecycle::Uninitialized);

    let flags = engine.set_config(semicircle(60.0)).expect("config");
    assert!(flags.is_full_rebuild());
    assert_eq!(engine.lifecycle(), EngineLifecycle::Ready);
    assert_eq!(engine.sink().full_patch_count, 1);
    assert_eq!(
        engine.sink().last_patch_layers,
        SceneLayerKind::CANONICAL_ORDER.to_vec()
    );
    assert_eq!(percentage(&engine, 0), 0.0);
    assert!(engine.is_animating());

    settle(&mut engine, 0.0);
    assert_eq!(percentage(&engine, 0), 0.6);
    assert_eq!(engine.value_labels(), ["60"]);
}

#[test]
fn value_change_tweens_from_old_to_new_percentage() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");
    let now = settle(&mut engine, 0.0);

    engine.set_value(80.0).expect("value");
    let scale = ValueScale::new(0.0, 100.0, 0.0, 1.0);
    engine.advance_frame(now).expect("first frame");
    assert_eq!(percentage(&engine, 0), scale.value_to_percentage(20.0));

    engine.advance_frame(now + 500.0).expect("mid frame");
    let mid = percentage(&engine, 0);
    assert!(mid > 0.2 && mid < 0.8);

    engine.advance_frame(now + 1000.0).expect("last frame");
    assert_eq!(percentage(&engine, 0), scale.value_to_percentage(80.0));
    assert!(!engine.is_animating());
}

#[test]
fn resize_mid_animation_jumps_to_target_without_further_frames() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");
    let now = settle(&mut engine, 0.0);

    engine.set_value(80.0).expect("value");
    engine.advance_frame(now).expect("first frame");
    engine.advance_frame(now + 400.0).expect("mid frame");
    assert!(engine.is_animating());

    engine
        .resize(ContainerSize::new(400.0, 200.0))
        .expect("resize");
    assert_eq!(percentage(&engine, 0), 0.8);
    assert!(!engine.is_animating());
    assert_eq!(engine.dimensions().outer_radius, 200.0);
    assert_eq!(engine.sink().full_patch_count, 2);

    let patches = engine.sink().patch_count;
    assert!(!engine.advance_frame(now + 600.0).expect("stale frame"));
    assert_eq!(engine.sink().patch_count, patches);
    assert_eq!(percentage(&engine, 0), 0.8);
}

#[test]
fn value_only_update_repaints_pointer_and_label_only() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");
    let arc_before = engine.segmentation().clone();

    let flags = engine.set_value(55.0).expect("value");
    assert!(!flags.is_full_rebuild());
    assert!(flags.contains(ChangeTopic::Pointer));
    assert!(flags.contains(ChangeTopic::ValueLabel));
    assert!(!flags.contains(ChangeTopic::Arc));
    assert_eq!(engine.sink().full_patch_count, 1);
    assert_eq!(
        engine.sink().last_patch_layers,
        vec![SceneLayerKind::Pointers, SceneLayerKind::ValueLabel]
    );
    assert_eq!(engine.segmentation(), &arc_before);
}

#[test]
fn arc_change_repaints_arc_and_ticks_only() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");

    let config = semicircle(20.0).with_arc(ArcConfig::default().with_nb_sub_arcs(5));
    let flags = engine.set_config(config).expect("arc change");
    assert!(flags.contains(ChangeTopic::Arc));
    assert!(!flags.contains(ChangeTopic::Pointer));
    assert_eq!(
        engine.sink().last_patch_layers,
        vec![SceneLayerKind::Arc, SceneLayerKind::Ticks]
    );
    assert_eq!(engine.segmentation().data.len(), 5);
}

#[test]
fn grafana_arc_change_also_repaints_progress_pointer() {
    let mut engine = engine();
    let base = GaugeConfig::new(GaugeType::Grafana).with_value(40.0);
    engine.set_config(base.clone()).expect("config");

    let config = base.with_arc(ArcConfig::default().with_color_array(["#00ff00", "#ff0000"]));
    engine.set_config(config).expect("arc change");
    assert_eq!(
        engine.sink().last_patch_layers,
        vec![
            SceneLayerKind::Arc,
            SceneLayerKind::Ticks,
            SceneLayerKind::Pointers
        ]
    );
}

#[test]
fn identical_config_paints_nothing() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");
    let patches = engine.sink().patch_count;

    let flags = engine.set_config(semicircle(20.0)).expect("same config");
    assert!(flags.is_none());
    assert_eq!(engine.sink().patch_count, patches);
}

#[test]
fn type_change_forces_full_rebuild() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");
    let mut config = semicircle(20.0);
    config.gauge_type = GaugeType::Radial;
    let flags = engine.set_config(config).expect("type change");
    assert!(flags.is_full_rebuild());
    assert_eq!(engine.sink().full_patch_count, 2);
}

#[test]
fn unrelated_pointer_update_keeps_running_animation() {
    let mut engine = engine();
    let config = semicircle(0.0).with_pointers(vec![
        PointerEntry::new(10.0),
        PointerEntry::new(20.0),
    ]);
    engine.set_config(config).expect("config");
    let now = settle(&mut engine, 0.0);

    engine.set_pointer_value(0, 70.0).expect("pointer 0");
    engine.advance_frame(now).expect("first frame");
    engine.advance_frame(now + 300.0).expect("mid frame");
    let in_flight = percentage(&engine, 0);

    engine.set_pointer_value(1, 90.0).expect("pointer 1");
    let first = engine.animations().get(0).expect("pointer 0 state");
    assert!(first.in_progress);
    assert_eq!(first.target_percentage, 0.7);
    assert_eq!(first.current_percentage, in_flight);

    settle(&mut engine, now + 400.0);
    assert_eq!(engine.animations().current_percentages(), vec![0.7, 0.9]);
}

#[test]
fn removing_pointers_keeps_remaining_indices_in_sync() {
    let mut engine = engine();
    let entries = vec![
        PointerEntry::new(10.0),
        PointerEntry::new(50.0),
        PointerEntry::new(90.0),
    ];
    engine
        .set_config(semicircle(0.0).with_pointers(entries.clone()))
        .expect("config");
    let now = settle(&mut engine, 0.0);

    engine
        .set_config(semicircle(0.0).with_pointers(entries[..2].to_vec()))
        .expect("fewer pointers");
    assert_eq!(engine.animations().len(), 2);
    assert!(!engine.is_animating());
    assert_eq!(engine.animations().current_percentages(), vec![0.1, 0.5]);

    engine
        .set_config(semicircle(0.0).with_pointers(entries))
        .expect("pointer back");
    assert_eq!(engine.animations().len(), 3);
    settle(&mut engine, now);
    assert_eq!(engine.animations().current_percentages(), vec![0.1, 0.5, 0.9]);
}

#[test]
fn disabled_animation_jumps_straight_to_target() {
    let mut engine = engine();
    let config = semicircle(45.0).with_pointer(PointerConfig::default().with_animate(false));
    engine.set_config(config).expect("config");
    assert_eq!(percentage(&engine, 0), 0.45);
    assert!(!engine.is_animating());
}

#[test]
fn skipped_frames_do_not_emit_patches() {
    let mut engine = engine();
    engine.set_config(semicircle(20.0)).expect("config");
    let now = settle(&mut engine, 0.0);

    engine.set_value(20.001).expect("tiny change");
    assert!(engine.advance_frame(now).expect("first frame"));
    let patches = engine.sink().patch_count;
    assert!(!engine.advance_frame(now + 1.0).expect("tiny step"));
    assert_eq!(engine.sink().patch_count, patches);
}

#[test]
fn zero_container_renders_degenerate_scene() {
    let mut engine = GaugeEngine::new(NullRenderer::default(), ContainerSize::new(0.0, -10.0));
    engine.set_config(semicircle(50.0)).expect("config");
    assert_eq!(engine.dimensions().outer_radius, 0.0);
    let frame = &engine.sink().frame;
    assert!(frame.layer(SceneLayerKind::Ticks).is_none_or(|layer| layer.is_empty()));
}

#[test]
fn formatter_change_repaints_ticks_and_value_label() {
    let mut engine = engine();
    engine.set_config(semicircle(42.0)).expect("config");
    engine
        .set_formatters(LabelFormatters {
            value_label: Some(Arc::new(|value| format!("{value:.1} rpm"))),
            ..LabelFormatters::default()
        })
        .expect("formatters");
    assert_eq!(engine.value_labels(), ["42.0 rpm"]);
    let last = engine.sink().last_patch_layers.clone();
    assert_eq!(last, vec![SceneLayerKind::Ticks, SceneLayerKind::ValueLabel]);
    assert_eq!(engine.sink().full_patch_count, 1);
}
