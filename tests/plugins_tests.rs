use std::cell::RefCell;
use std::f64::consts::FRAC_PI_4;
use std::rc::Rc;

use gauge_rs::GaugeError;
use gauge_rs::api::{GaugeConfig, GaugeEngine, InteractionConfig, PointerConfig};
use gauge_rs::core::{ContainerSize, GaugeType, MarginRatios, Point, angle_to_coordinate};
use gauge_rs::extensions::{GaugeEvent, GaugePlugin, PluginContext};
use gauge_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(GaugeEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(GaugeEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl GaugePlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: GaugeEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &GaugeEvent) -> &'static str {
    match event {
        GaugeEvent::ConfigCommitted { .. } => "commit",
        GaugeEvent::Resized { .. } => "resize",
        GaugeEvent::AnimationStarted { .. } => "anim_start",
        GaugeEvent::AnimationFinished { .. } => "anim_end",
        GaugeEvent::SegmentHovered { .. } => "hover",
        GaugeEvent::SegmentLeft { .. } => "leave",
        GaugeEvent::SegmentClicked { .. } => "click",
        GaugeEvent::DragStarted { .. } => "drag_start",
        GaugeEvent::ValueDragged { .. } => "drag_value",
        GaugeEvent::DragEnded { .. } => "drag_end",
        GaugeEvent::Rendered => "rendered",
    }
}

fn config() -> GaugeConfig {
    GaugeConfig::new(GaugeType::Semicircle)
        .with_value(40.0)
        .with_margins(MarginRatios::uniform(0.0))
        .with_pointer(PointerConfig::default().with_animation(200.0, 0.0))
}

fn engine_with_recorder() -> (
    GaugeEngine<NullRenderer>,
    Rc<RefCell<Vec<(GaugeEvent, PluginContext)>>>,
) {
    let mut engine = GaugeEngine::new(NullRenderer::default(), ContainerSize::new(200.0, 100.0));
    let events = Rc::new(RefCell::new(Vec::new()));
    engine
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");
    (engine, events)
}

fn kinds(events: &Rc<RefCell<Vec<(GaugeEvent, PluginContext)>>>) -> Vec<&'static str> {
    events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect()
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let (mut engine, events) = engine_with_recorder();

    engine.set_config(config()).expect("config");
    engine.advance_frame(0.0).expect("frame");
    engine.advance_frame(200.0).expect("frame");
    engine
        .resize(ContainerSize::new(400.0, 200.0))
        .expect("resize");

    assert_eq!(
        kinds(&events),
        vec![
            "rendered",
            "commit",
            "anim_start",
            "rendered",
            "rendered",
            "anim_end",
            "rendered",
            "resize",
        ]
    );
    let (_, last_context) = *events.borrow().last().expect("event");
    assert_eq!(last_context.container, ContainerSize::new(400.0, 200.0));
    assert_eq!(last_context.outer_radius, 200.0);
    assert_eq!(last_context.primary_percentage, 0.4);
    assert!(!last_context.animating);
}

#[test]
fn hover_click_and_drag_emit_interaction_events() {
    let (mut engine, events) = engine_with_recorder();
    let config = config()
        .with_pointer(PointerConfig::default().with_animate(false))
        .with_interaction(InteractionConfig {
            drag: true,
            ..InteractionConfig::default()
        });
    engine.set_config(config).expect("config");
    events.borrow_mut().clear();

    let point = angle_to_coordinate(-FRAC_PI_4, 90.0, Point::new(100.0, 100.0));
    engine.pointer_move(point.x, point.y).expect("hover");
    assert_eq!(engine.click(point.x, point.y), Some(0));
    engine.pointer_leave().expect("leave");
    assert_eq!(kinds(&events), vec!["hover", "click", "leave"]);
    events.borrow_mut().clear();

    engine.drag_start(point.x, point.y).expect("drag");
    engine.drag_end();
    let observed = kinds(&events);
    assert_eq!(observed.first(), Some(&"drag_start"));
    assert!(observed.contains(&"drag_value"));
    assert_eq!(observed.last(), Some(&"drag_end"));
}

#[test]
fn plugin_ids_must_be_unique_and_non_empty() {
    let (mut engine, events) = engine_with_recorder();

    let duplicate = engine.register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())));
    assert!(matches!(duplicate, Err(GaugeError::InvalidConfig(_))));
    let empty = engine.register_plugin(Box::new(RecordingPlugin::new("", events.clone())));
    assert!(matches!(empty, Err(GaugeError::InvalidConfig(_))));

    assert_eq!(engine.plugin_count(), 1);
    assert!(engine.has_plugin("recorder"));
    assert!(engine.unregister_plugin("recorder"));
    assert!(!engine.unregister_plugin("recorder"));

    engine.set_config(config()).expect("config");
    assert!(events.borrow().is_empty());
}
