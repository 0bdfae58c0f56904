use crate::interpreter::{PenColor, Segment};
use std::fmt::Write as _;

/// A consumer of drawing commands. The interpreter knows nothing about
/// pixels; anything that accepts segments in draw order can sit on this
/// side of the seam.
pub trait RenderSink {
    fn accept(&mut self, segment: &Segment);
}

/// Collects segments and serializes them as a standalone SVG document.
///
/// The viewport is fitted to the bounding box of everything drawn, padded
/// by [`SvgCanvas::MARGIN`], so the caller never has to know the coordinate
/// space the grammar's start position and step length imply.
#[derive(Debug, Clone, Default)]
pub struct SvgCanvas {
    segments: Vec<Segment>,
}

impl SvgCanvas {
    const MARGIN: f32 = 10.0;
    const TRUNK_COLOR: &'static str = "#8b4513";
    const BRANCH_COLOR: &'static str = "#00ff00";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Serializes everything accepted so far. An empty canvas yields a
    /// valid document with a degenerate viewport.
    pub fn to_svg(&self) -> String {
        let (min, max) = self.bounds();
        let width = (max.x - min.x) + 2.0 * Self::MARGIN;
        let height = (max.y - min.y) + 2.0 * Self::MARGIN;
        let origin_x = min.x - Self::MARGIN;
        let origin_y = min.y - Self::MARGIN;

        let mut doc = String::new();
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{origin_x} {origin_y} {width} {height}">"#
        );
        for segment in &self.segments {
            let color = match segment.color {
                PenColor::Trunk => Self::TRUNK_COLOR,
                PenColor::Branch => Self::BRANCH_COLOR,
            };
            // The original rasterizer clamped thickness to at least one
            // pixel; preserved here so tapered branches stay visible.
            let width = segment.width.max(1.0);
            let _ = writeln!(
                doc,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{width}" stroke-linecap="round"/>"#,
                segment.from.x, segment.from.y, segment.to.x, segment.to.y
            );
        }
        doc.push_str("</svg>\n");
        doc
    }

    fn bounds(&self) -> (glam::Vec2, glam::Vec2) {
        let mut min = glam::Vec2::ZERO;
        let mut max = glam::Vec2::ZERO;
        let mut first = true;
        for segment in &self.segments {
            for point in [segment.from, segment.to] {
                if first {
                    min = point;
                    max = point;
                    first = false;
                } else {
                    min = min.min(point);
                    max = max.max(point);
                }
            }
        }
        (min, max)
    }
}

impl RenderSink for SvgCanvas {
    fn accept(&mut self, segment: &Segment) {
        self.segments.push(*segment);
    }
}
