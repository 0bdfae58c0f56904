use glam::Vec2;

use sylva::interpreter::{TraceConfig, Tracer};
use sylva::render::{RenderSink, SvgCanvas};

fn canvas_for(symbols: &str) -> SvgCanvas {
    let tracer = Tracer::new(TraceConfig {
        initial_heading: 0.0,
        ..TraceConfig::default()
    });
    let mut canvas = SvgCanvas::new();
    for segment in tracer.trace(symbols.chars()) {
        canvas.accept(&segment.unwrap());
    }
    canvas
}

#[test]
fn empty_canvas_is_still_a_document() {
    let canvas = SvgCanvas::new();
    assert!(canvas.is_empty());
    let svg = canvas.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>\n"));
    assert!(!svg.contains("<line"));
}

#[test]
fn one_line_per_segment() {
    let canvas = canvas_for("F[+F]F");
    assert_eq!(canvas.segment_count(), 3);
    let svg = canvas.to_svg();
    assert_eq!(svg.matches("<line").count(), 3);
}

#[test]
fn trunk_and_branch_use_distinct_strokes() {
    let svg = canvas_for("F[+F]F").to_svg();
    assert!(svg.contains(r##"stroke="#8b4513""##));
    assert!(svg.contains(r##"stroke="#00ff00""##));
}

#[test]
fn viewbox_covers_the_drawing() {
    let canvas = canvas_for("FFFF");
    let svg = canvas.to_svg();
    // Four steps right from the origin: x spans 0..40 plus margin.
    assert!(svg.contains(r#"viewBox="-10 -10 60 20""#), "got: {svg}");
}

#[test]
fn hairline_segments_are_clamped_to_visible_width() {
    let tracer = Tracer::new(TraceConfig {
        pen_width: 0.25,
        ..TraceConfig::default()
    });
    let mut canvas = SvgCanvas::new();
    for segment in tracer.trace("F".chars()) {
        canvas.accept(&segment.unwrap());
    }
    let svg = canvas.to_svg();
    assert!(svg.contains(r#"stroke-width="1""#));
}

#[test]
fn sink_sees_segments_in_draw_order() {
    struct Recorder(Vec<Vec2>);

    impl RenderSink for Recorder {
        fn accept(&mut self, segment: &sylva::interpreter::Segment) {
            self.0.push(segment.from);
        }
    }

    let tracer = Tracer::new(TraceConfig {
        initial_heading: 0.0,
        ..TraceConfig::default()
    });
    let mut recorder = Recorder(Vec::new());
    for segment in tracer.trace("FF".chars()) {
        recorder.accept(&segment.unwrap());
    }
    assert_eq!(recorder.0, vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]);
}
