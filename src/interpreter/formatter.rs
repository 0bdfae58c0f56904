use super::{InterpretError, PenColor, Segment};

/// Interface for rendering segments and interpreter errors as text.
pub trait SegmentFormatter {
    /// Formats a single segment into a string.
    fn format(&self, segment: &Segment) -> String;
    /// Formats an interpreter error into a string.
    fn format_error(&self, error: &InterpretError) -> String;
}

/// One segment per line: `(x1, y1) -> (x2, y2) trunk 2`.
pub struct BasicFormatter;

impl SegmentFormatter for BasicFormatter {
    fn format(&self, segment: &Segment) -> String {
        let color = match segment.color {
            PenColor::Trunk => "trunk",
            PenColor::Branch => "branch",
        };
        format!(
            "({}, {}) -> ({}, {}) {color} {}",
            segment.from.x, segment.from.y, segment.to.x, segment.to.y, segment.width
        )
    }

    fn format_error(&self, error: &InterpretError) -> String {
        format!("Error: {error}")
    }
}

pub struct DebugFormatter;

impl SegmentFormatter for DebugFormatter {
    fn format(&self, segment: &Segment) -> String {
        format!("{segment:?}")
    }

    fn format_error(&self, error: &InterpretError) -> String {
        format!("{error:?}")
    }
}
