use glam::Vec2;
use proptest::prelude::*;

use sylva::interpreter::{
    InterpretErrorKind, PenColor, Segment, TraceConfig, Tracer, TurtleState, BRANCH_TAPER,
};

const EPSILON: f32 = 1e-4;

fn flat_tracer() -> Tracer {
    // Heading 0 (facing right) keeps the expected coordinates readable.
    Tracer::new(TraceConfig {
        angle_degrees: 90.0,
        step_length: 10.0,
        start: Vec2::ZERO,
        initial_heading: 0.0,
        pen_width: 1.0,
    })
}

fn assert_approx(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() < EPSILON,
        "expected {expected:?} but got {actual:?}",
    );
}

#[test]
fn single_draw_emits_one_segment() {
    let segments = flat_tracer().trace_all("F".chars()).unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].from, Vec2::ZERO);
    assert_eq!(segments[0].to, Vec2::new(10.0, 0.0));
    assert_eq!(segments[0].color, PenColor::Trunk);
    assert_eq!(segments[0].width, 1.0);
}

#[test]
fn g_draws_exactly_like_f() {
    let from_f = flat_tracer().trace_all("FF".chars()).unwrap();
    let from_g = flat_tracer().trace_all("GG".chars()).unwrap();
    assert_eq!(from_f, from_g);
}

#[test]
fn unrecognized_symbols_are_no_ops() {
    let segments = flat_tracer().trace_all("XAYZB".chars()).unwrap();
    assert!(segments.is_empty());

    let plain = flat_tracer().trace_all("FF".chars()).unwrap();
    let noisy = flat_tracer().trace_all("XFAYFZ".chars()).unwrap();
    assert_eq!(plain, noisy);
}

#[test]
fn empty_sequence_emits_nothing() {
    let segments = flat_tracer().trace_all("".chars()).unwrap();
    assert!(segments.is_empty());
}

#[test]
fn turns_rotate_in_opposite_directions() {
    // `+` turns counter-clockwise, which is upward in the inverted-y
    // output space.
    let up = flat_tracer().trace_all("+F".chars()).unwrap();
    assert_approx(up[0].to, Vec2::new(0.0, -10.0));

    let down = flat_tracer().trace_all("-F".chars()).unwrap();
    assert_approx(down[0].to, Vec2::new(0.0, 10.0));
}

#[test]
fn branch_draws_tapered_and_recolored() {
    let segments = flat_tracer().trace_all("F[+F]F".chars()).unwrap();
    assert_eq!(segments.len(), 3);

    assert_eq!(segments[0].from, Vec2::ZERO);
    assert_eq!(segments[0].to, Vec2::new(10.0, 0.0));
    assert_eq!(segments[0].color, PenColor::Trunk);
    assert_eq!(segments[0].width, 1.0);

    assert_eq!(segments[1].from, Vec2::new(10.0, 0.0));
    assert_approx(segments[1].to, Vec2::new(10.0, -10.0));
    assert_eq!(segments[1].color, PenColor::Branch);
    assert_eq!(segments[1].width, BRANCH_TAPER);

    // The pop restored the pre-branch pose exactly.
    assert_eq!(segments[2].from, Vec2::new(10.0, 0.0));
    assert_approx(segments[2].to, Vec2::new(20.0, 0.0));
    assert_eq!(segments[2].color, PenColor::Trunk);
    assert_eq!(segments[2].width, 1.0);
}

#[test]
fn nested_branches_taper_multiplicatively() {
    let segments = flat_tracer().trace_all("[F[F[F]]]".chars()).unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].width, BRANCH_TAPER);
    assert_eq!(segments[1].width, BRANCH_TAPER * BRANCH_TAPER);
    assert_eq!(segments[2].width, BRANCH_TAPER * BRANCH_TAPER * BRANCH_TAPER);
    for segment in &segments {
        assert_eq!(segment.color, PenColor::Branch);
    }
}

#[test]
fn bracket_wrapped_sequence_restores_the_initial_state() {
    let tracer = flat_tracer();
    let mut trace = tracer.trace("[F+F-FF[+F]G]".chars());
    while trace.next().is_some() {}
    assert_eq!(trace.depth(), 0);
    assert_eq!(
        *trace.state(),
        TurtleState::new(Vec2::ZERO, 0.0, 1.0),
    );
}

#[test]
fn heading_accumulates_without_wrapping() {
    let tracer = Tracer::new(TraceConfig {
        angle_degrees: 100.0,
        ..TraceConfig::default()
    });
    let mut trace = tracer.trace("++++".chars());
    assert!(trace.next().is_none());
    // 90 + 4 * 100, not reduced modulo 360.
    assert_eq!(trace.state().heading, 490.0);
}

#[test]
fn unmatched_pop_fails_without_emitting() {
    let mut trace = flat_tracer().trace("]".chars());
    let error = trace
        .next()
        .expect("the unmatched pop must surface")
        .unwrap_err();
    assert_eq!(error.kind, InterpretErrorKind::UnbalancedBranchMarkers);
    assert_eq!(error.offset, 0);
    assert!(trace.next().is_none(), "a poisoned trace must stay finished");
}

#[test]
fn unmatched_pop_reports_its_offset() {
    let mut collected: Vec<Segment> = Vec::new();
    let mut trace = flat_tracer().trace("F[+F]]F".chars());
    let error = loop {
        match trace.next().expect("the trace cannot finish cleanly") {
            Ok(segment) => collected.push(segment),
            Err(error) => break error,
        }
    };
    assert_eq!(error.kind, InterpretErrorKind::UnbalancedBranchMarkers);
    assert_eq!(error.offset, 5);
    // Segments drawn before the failure are still valid output.
    assert_eq!(collected.len(), 2);
    assert!(trace.next().is_none());
}

#[test]
fn unclosed_push_is_not_an_error() {
    let segments = flat_tracer().trace_all("F[+F".chars()).unwrap();
    assert_eq!(segments.len(), 2);
}

#[test]
fn traces_are_independent() {
    let tracer = flat_tracer();
    let first = tracer.trace_all("F[+F]F".chars()).unwrap();
    let second = tracer.trace_all("F[+F]F".chars()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn early_termination_stops_consuming() {
    // Take two segments out of a long sequence; dropping the trace
    // afterwards must be fine.
    let tracer = flat_tracer();
    let symbols = "F".repeat(1_000_000);
    let segments: Vec<_> = tracer
        .trace(symbols.chars())
        .take(2)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(segments.len(), 2);
}

// Property-based tests

fn flat_symbols_strategy() -> impl Strategy<Value = String> {
    "[FGXY+\\-]{0,12}".prop_map(|s| s)
}

fn balanced_symbols_strategy() -> impl Strategy<Value = String> {
    flat_symbols_strategy()
        .prop_recursive(4, 64, 8, |inner| {
            (inner.clone(), inner).prop_map(|(body, tail)| format!("[{body}]{tail}"))
        })
        .boxed()
}

proptest! {
    #[test]
    fn balanced_sequences_never_fail(symbols in balanced_symbols_strategy()) {
        let tracer = flat_tracer();
        let segments = tracer.trace_all(symbols.chars());
        prop_assert!(segments.is_ok());
    }

    #[test]
    fn each_draw_symbol_emits_exactly_one_segment(symbols in balanced_symbols_strategy()) {
        let draw_count = symbols.chars().filter(|&c| c == 'F' || c == 'G').count();
        let segments = flat_tracer().trace_all(symbols.chars()).unwrap();
        prop_assert_eq!(segments.len(), draw_count);
    }

    #[test]
    fn segments_chain_from_the_turtle_position(symbols in balanced_symbols_strategy()) {
        // Every segment starts where the turtle stood when it was drawn:
        // within an unbranched run, each segment starts at its
        // predecessor's endpoint.
        let unbranched: String = symbols.chars().filter(|&c| c != '[' && c != ']').collect();
        let segments = flat_tracer().trace_all(unbranched.chars()).unwrap();
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[test]
    fn branches_never_leak_state(symbols in balanced_symbols_strategy()) {
        let tracer = flat_tracer();
        let wrapped = format!("[{symbols}]");
        let mut trace = tracer.trace(wrapped.chars());
        while let Some(result) = trace.next() {
            prop_assert!(result.is_ok());
        }
        prop_assert_eq!(trace.depth(), 0);
        prop_assert_eq!(*trace.state(), TurtleState::new(Vec2::ZERO, 0.0, 1.0));
    }

    #[test]
    fn interpretation_is_deterministic(symbols in balanced_symbols_strategy()) {
        let tracer = flat_tracer();
        let first = tracer.trace_all(symbols.chars()).unwrap();
        let second = tracer.trace_all(symbols.chars()).unwrap();
        prop_assert_eq!(first, second);
    }
}
