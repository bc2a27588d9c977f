#![forbid(unsafe_code)]

//! Resolution tracing integration tests.
//!
//! Spans and fallback events enabled:
//!   cargo test -p shade-style --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p shade-style --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shade_style::StaticContext;
use shade_style::palette::system_colors;
#[cfg(feature = "tracing")]
use shade_style::{Brightness, ColorValue, DynamicColor};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span with its fields and parent info.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

/// A captured event with its level and fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct CapturedEvent {
    level: tracing::Level,
    fields: Vec<(String, String)>,
}

#[cfg(feature = "tracing")]
impl CapturedEvent {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A tracing Layer that records spans and events.
struct Capture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

/// Handle to read what was captured.
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }
}

fn capture() -> (Capture, CaptureHandle) {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let handle = CaptureHandle {
        spans: spans.clone(),
        events: events.clone(),
    };
    (Capture { spans, events }, handle)
}

/// Visitor that extracts fields as strings.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);

        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: visitor.0,
        });
    }
}

fn with_capture<R>(f: impl FnOnce() -> R) -> (R, CaptureHandle) {
    let (layer, handle) = capture();
    let subscriber = tracing_subscriber::registry().with(layer);
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, handle)
}

#[cfg(feature = "tracing")]
const LIGHT: ColorValue = ColorValue::new(0xFF11_2233);
#[cfg(feature = "tracing")]
const DARK: ColorValue = ColorValue::new(0xFF44_5566);

// ============================================================================
// Span and event tests (feature enabled)
// ============================================================================

#[cfg(feature = "tracing")]
#[test]
fn resolve_opens_span() {
    let color = DynamicColor::with_brightness(LIGHT, DARK).labeled("inactiveGray");
    let ctx = Arc::new(StaticContext::new().with_brightness(Brightness::Dark));
    let (resolved, handle) = with_capture(|| color.resolve(&ctx, true));
    assert_eq!(resolved.unwrap().effective(), DARK);

    let spans = handle.spans();
    let span = spans
        .iter()
        .find(|s| s.name == "dynamic_color_resolve")
        .expect("resolve should open a span");
    assert_eq!(span.fields.get("label").map(String::as_str), Some("inactiveGray"));
    assert_eq!(span.parent_name, None);
}

#[cfg(feature = "tracing")]
#[test]
fn lenient_fallback_emits_trace_per_missing_axis() {
    let color = system_colors::system_background();
    let ctx = Arc::new(StaticContext::new());
    let (resolved, handle) = with_capture(|| color.resolve(&ctx, true));
    assert!(resolved.is_ok());

    let axes: Vec<_> = handle
        .events()
        .into_iter()
        .filter(|e| e.level == tracing::Level::TRACE)
        .filter_map(|e| e.field("axis").map(str::to_string))
        .collect();
    assert_eq!(axes, ["brightness", "contrast", "elevation"]);
}

#[cfg(feature = "tracing")]
#[test]
fn irrelevant_axes_do_not_emit_fallbacks() {
    let color = DynamicColor::with_brightness(LIGHT, DARK);
    let ctx = Arc::new(StaticContext::new().with_brightness(Brightness::Light));
    let (_, handle) = with_capture(|| color.resolve(&ctx, true));
    assert!(handle.events().iter().all(|e| e.field("axis").is_none()));
}

#[cfg(feature = "tracing")]
#[test]
fn strict_failure_emits_debug_event() {
    let color = DynamicColor::with_brightness(LIGHT, DARK);
    let ctx = Arc::new(StaticContext::new());
    let (result, handle) = with_capture(|| color.resolve(&ctx, false));
    assert!(result.is_err());

    let events = handle.events();
    let failure = events
        .iter()
        .find(|e| e.level == tracing::Level::DEBUG)
        .expect("strict failure should emit a debug event");
    assert_eq!(failure.field("axis"), Some("brightness"));
}

#[cfg(feature = "tracing")]
#[test]
fn palette_resolution_nests_color_spans() {
    let ctx = Arc::new(StaticContext::new().with_brightness(Brightness::Dark));
    let (resolved, handle) =
        with_capture(|| shade_style::palette::system().resolve_all(&ctx, true));
    assert!(resolved.is_ok());

    let spans = handle.spans();
    let root = spans.first().expect("palette span");
    assert_eq!(root.name, "palette_resolve");
    assert_eq!(root.parent_name, None);

    let color_spans: Vec<_> = spans
        .iter()
        .filter(|s| s.name == "dynamic_color_resolve")
        .collect();
    // Static entries are passed through without a span.
    assert_eq!(color_spans.len(), shade_style::palette::system().len() - 5);
    for span in color_spans {
        assert_eq!(
            span.parent_name.as_deref(),
            Some("palette_resolve"),
            "color span {:?} should be nested under the palette span",
            span.fields.get("label")
        );
    }
}

// ============================================================================
// Zero-overhead verification (feature disabled)
// ============================================================================

#[cfg(not(feature = "tracing"))]
#[test]
fn zero_overhead_no_spans_or_events() {
    let color = system_colors::system_background();
    let ctx = Arc::new(StaticContext::new());
    let (resolved, handle) = with_capture(|| color.resolve(&ctx, true));
    assert!(resolved.is_ok());
    assert!(handle.spans().is_empty());
    assert!(handle.events().is_empty());
}
