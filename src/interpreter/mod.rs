mod error;
pub mod formatter;
mod turtle;

pub use error::{InterpretError, InterpretErrorKind};
pub use turtle::{PenColor, Segment, TurtleOp, TurtleState, BRANCH_TAPER};

use crate::grammar::Grammar;
use glam::Vec2;

/// Drawing parameters for one interpretation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceConfig {
    /// Turn increment in degrees for `+` and `-`.
    pub angle_degrees: f32,
    /// Forward distance per draw symbol.
    pub step_length: f32,
    /// Starting position of the turtle.
    pub start: Vec2,
    /// Starting heading in degrees. 90 faces up in the inverted-y output
    /// space.
    pub initial_heading: f32,
    /// Starting line thickness.
    pub pen_width: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            angle_degrees: 90.0,
            step_length: 10.0,
            start: Vec2::ZERO,
            initial_heading: 90.0,
            pen_width: 1.0,
        }
    }
}

impl From<&Grammar> for TraceConfig {
    fn from(grammar: &Grammar) -> Self {
        Self {
            angle_degrees: grammar.angle_degrees,
            step_length: grammar.step_length,
            start: grammar.start,
            initial_heading: grammar.initial_heading,
            pen_width: grammar.pen_width,
        }
    }
}

/// Executes turtle commands against a symbol sequence, producing line
/// segments.
///
/// The tracer itself holds only configuration; every call to
/// [`trace`](Self::trace) gets its own turtle state and branch stack, so
/// traces of different sequences are independent and may run concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tracer {
    config: TraceConfig,
}

impl Tracer {
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    /// Starts a lazy trace over `symbols`.
    ///
    /// Segments are produced on demand: dropping the returned iterator
    /// early abandons the rest of the input without further work, which
    /// matters when expanded sequences run into the millions of symbols.
    pub fn trace<I>(&self, symbols: I) -> Trace<I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        Trace {
            symbols: symbols.into_iter(),
            angle_degrees: self.config.angle_degrees,
            step_length: self.config.step_length,
            turtle: TurtleState::new(
                self.config.start,
                self.config.initial_heading,
                self.config.pen_width,
            ),
            stack: Vec::new(),
            offset: 0,
            poisoned: false,
        }
    }

    /// Traces the whole sequence into a materialized segment list.
    pub fn trace_all<I>(&self, symbols: I) -> Result<Vec<Segment>, InterpretError>
    where
        I: IntoIterator<Item = char>,
    {
        self.trace(symbols).collect()
    }
}

/// An in-flight interpretation: iterate to receive segments in draw order.
///
/// Yields `Err` exactly once, on the first unmatched `]`; after that the
/// trace is finished and yields `None`.
#[derive(Debug)]
pub struct Trace<I> {
    symbols: I,
    angle_degrees: f32,
    step_length: f32,
    turtle: TurtleState,
    stack: Vec<TurtleState>,
    offset: usize,
    poisoned: bool,
}

impl<I> Trace<I> {
    /// The turtle pose as of the last yielded item. After the iterator is
    /// exhausted this is the final pose.
    pub fn state(&self) -> &TurtleState {
        &self.turtle
    }

    /// Current branch nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<I> Iterator for Trace<I>
where
    I: Iterator<Item = char>,
{
    type Item = Result<Segment, InterpretError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        for symbol in self.symbols.by_ref() {
            let offset = self.offset;
            self.offset += 1;
            match TurtleOp::classify(symbol) {
                TurtleOp::Draw => {
                    return Some(Ok(self.turtle.advance(self.step_length)));
                }
                TurtleOp::TurnLeft => self.turtle.turn_left(self.angle_degrees),
                TurtleOp::TurnRight => self.turtle.turn_right(self.angle_degrees),
                TurtleOp::Push => {
                    self.stack.push(self.turtle);
                    self.turtle.enter_branch();
                }
                TurtleOp::Pop => match self.stack.pop() {
                    Some(saved) => self.turtle = saved,
                    None => {
                        self.poisoned = true;
                        return Some(Err(InterpretError {
                            kind: InterpretErrorKind::UnbalancedBranchMarkers,
                            offset,
                        }));
                    }
                },
                TurtleOp::Ignore => {}
            }
        }
        None
    }
}
