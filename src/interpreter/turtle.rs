use glam::Vec2;

/// Width multiplier applied on every branch entry so branches taper.
pub const BRANCH_TAPER: f32 = 0.8;

/// The two pen colors the interpreter distinguishes: the main trunk and
/// everything drawn inside a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenColor {
    Trunk,
    Branch,
}

/// One drawn line segment, emitted in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: PenColor,
    pub width: f32,
}

/// The full turtle pose. Saved wholesale on `[` and restored wholesale
/// on `]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub position: Vec2,
    /// Heading in degrees. Accumulates unbounded; it is deliberately never
    /// reduced modulo 360 so that command sequences stay numerically
    /// comparable against golden outputs.
    pub heading: f32,
    pub color: PenColor,
    pub width: f32,
}

impl TurtleState {
    pub fn new(position: Vec2, heading: f32, width: f32) -> Self {
        Self {
            position,
            heading,
            color: PenColor::Trunk,
            width,
        }
    }

    /// Moves forward by `step`, returning the segment just drawn.
    ///
    /// The heading is converted to radians only here, at projection time.
    /// The y component is negated: headings grow counter-clockwise in math
    /// convention while the output coordinate space has y growing downward.
    pub fn advance(&mut self, step: f32) -> Segment {
        let radians = self.heading.to_radians();
        let to = self.position + step * Vec2::new(radians.cos(), -radians.sin());
        let segment = Segment {
            from: self.position,
            to,
            color: self.color,
            width: self.width,
        };
        self.position = to;
        segment
    }

    pub fn turn_left(&mut self, angle_degrees: f32) {
        self.heading += angle_degrees;
    }

    pub fn turn_right(&mut self, angle_degrees: f32) {
        self.heading -= angle_degrees;
    }

    /// Switches the pen to branch drawing: branch color, tapered width.
    pub fn enter_branch(&mut self) {
        self.color = PenColor::Branch;
        self.width *= BRANCH_TAPER;
    }
}

/// The closed command alphabet of the turtle. Every symbol classifies to
/// exactly one variant; symbols with no geometric meaning (growth
/// placeholders like `X`) classify to [`TurtleOp::Ignore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurtleOp {
    /// Draw forward one step (`F` and `G` both mean this).
    Draw,
    /// Turn counter-clockwise by the configured angle (`+`).
    TurnLeft,
    /// Turn clockwise by the configured angle (`-`).
    TurnRight,
    /// Save the full turtle state and enter a branch (`[`).
    Push,
    /// Restore the most recently saved state (`]`).
    Pop,
    /// No geometric meaning.
    Ignore,
}

impl TurtleOp {
    pub fn classify(symbol: char) -> Self {
        match symbol {
            'F' | 'G' => Self::Draw,
            '+' => Self::TurnLeft,
            '-' => Self::TurnRight,
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}
