//! Pen state and operations for 2D turtle interpretation.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single drawable line segment; append order is draw order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: DVec2,
    pub to: DVec2,
}

impl LineSegment {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self { from, to }
    }
}

/// A saved (position, facing) pair, pushed and popped to draw branching
/// figures.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenSnapshot {
    pub position: DVec2,
    /// Facing angle in degrees, clockwise from screen-up.
    pub facing: f64,
}

/// The state of the drawing pen.
///
/// Coordinates follow the screen convention: `+x` right, `+y` down, and a
/// facing of 0° points "up" (toward decreasing `y`), increasing clockwise.
///
/// Every operation consumes the state and returns the updated value, so one
/// `PenState` is threaded through an interpretation pass and shares nothing;
/// independent figures are free to run in parallel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenState {
    /// Current pen position.
    pub position: DVec2,

    /// Facing angle in degrees, clockwise from screen-up (0° = north).
    pub facing: f64,

    /// Whether moving the pen emits segments. Movement with the pen up still
    /// updates the position.
    pub pen_down: bool,

    /// LIFO stack of saved (position, facing) snapshots. Its depth always
    /// equals the number of unmatched pushes.
    pub stack: Vec<PenSnapshot>,

    /// Accumulated segments, in draw order. Append-only within a pass except
    /// for the coalescing rewrite of the last segment's `to` endpoint.
    pub lines: Vec<LineSegment>,

    /// True only immediately after a pen-down forward move; the next forward
    /// move then extends the last segment instead of appending a new one.
    /// Consecutive collinear moves become one segment, which keeps the
    /// segment count down and avoids seam artifacts under thick strokes.
    pub continue_segment: bool,
}

impl Default for PenState {
    /// Pen at the origin, facing up, pen down, nothing drawn.
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            facing: 0.0,
            pen_down: true,
            stack: Vec::new(),
            lines: Vec::new(),
            continue_segment: false,
        }
    }
}

impl PenState {
    /// Creates a pen at integer pixel coordinates `(x, y)` with the given
    /// facing, pen down.
    ///
    /// Initial coordinates address a pixel grid, so non-integral (or
    /// non-finite) values are rejected here rather than silently truncated.
    pub fn at(x: f64, y: f64, facing: f64) -> Result<Self, PenError> {
        if !x.is_finite() || x.fract() != 0.0 {
            return Err(PenError::NonIntegerStart { axis: 'x', value: x });
        }
        if !y.is_finite() || y.fract() != 0.0 {
            return Err(PenError::NonIntegerStart { axis: 'y', value: y });
        }
        if !facing.is_finite() {
            return Err(PenError::NonFiniteFacing(facing));
        }
        Ok(Self {
            position: DVec2::new(x, y),
            facing,
            ..Self::default()
        })
    }

    /// Moves the pen `distance` units along its facing.
    ///
    /// 0° moves toward decreasing `y` (screen-up), so the displacement is
    /// `(sin θ, −cos θ) · distance`. With the pen down a segment is emitted:
    /// either the last segment is extended (when the previous operation was
    /// also a pen-down forward) or a fresh one is appended. With the pen up
    /// only the position changes.
    pub fn forward(mut self, distance: f64) -> Self {
        let theta = self.facing.to_radians();
        let start = self.position;
        let end = start + DVec2::new(theta.sin() * distance, -theta.cos() * distance);
        self.position = end;

        if self.pen_down {
            match self.lines.last_mut() {
                Some(last) if self.continue_segment => last.to = end,
                _ => self.lines.push(LineSegment::new(start, end)),
            }
        }
        self.continue_segment = self.pen_down;
        self
    }

    /// Turns the pen clockwise by `delta_degrees` (negative turns
    /// counter-clockwise). Breaks segment coalescing.
    pub fn rotate(mut self, delta_degrees: f64) -> Self {
        self.facing += delta_degrees;
        self.continue_segment = false;
        self
    }

    /// Lifts the pen: subsequent moves reposition without drawing.
    pub fn pen_up(mut self) -> Self {
        self.pen_down = false;
        self
    }

    /// Lowers the pen: subsequent moves draw again.
    pub fn pen_down(mut self) -> Self {
        self.pen_down = true;
        self
    }

    /// Saves the current (position, facing) onto the stack. Breaks segment
    /// coalescing.
    pub fn push_pos_and_angle(mut self) -> Self {
        self.stack.push(PenSnapshot {
            position: self.position,
            facing: self.facing,
        });
        self.continue_segment = false;
        self
    }

    /// Restores the most recently saved (position, facing), keeping every
    /// segment drawn since the matching push. Breaks segment coalescing.
    ///
    /// Returns `None` when the stack is empty — a mismatched push/pop in the
    /// rule grammar, which the interpreter reports as a fatal error.
    pub fn pop_pos_and_angle(mut self) -> Option<Self> {
        let snapshot = self.stack.pop()?;
        self.position = snapshot.position;
        self.facing = snapshot.facing;
        self.continue_segment = false;
        Some(self)
    }
}

/// Rejected pen construction.
#[derive(Clone, Debug, PartialEq)]
pub enum PenError {
    /// An initial coordinate was non-finite or not a whole number.
    NonIntegerStart { axis: char, value: f64 },
    /// The initial facing angle was NaN or infinite.
    NonFiniteFacing(f64),
}

impl fmt::Display for PenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenError::NonIntegerStart { axis, value } => write!(
                f,
                "initial pen {axis}-coordinate {value} is not a whole pixel coordinate"
            ),
            PenError::NonFiniteFacing(v) => {
                write!(f, "initial facing angle {v} is not a finite number")
            }
        }
    }
}

impl std::error::Error for PenError {}

/// Operations the pen interpreter can dispatch a symbol to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PenOp {
    /// Move forward by the given distance, drawing if the pen is down (`F`).
    Forward(f64),
    /// Turn clockwise by the given angle in degrees; negative is
    /// counter-clockwise (`+` / `-`).
    Turn(f64),
    /// Lift the pen.
    PenUp,
    /// Lower the pen.
    PenDown,
    /// Save position and facing onto the stack (`[`).
    Push,
    /// Restore the most recently saved position and facing (`]`).
    Pop,
    /// No-op — symbol has no drawing meaning.
    Ignore,
}
