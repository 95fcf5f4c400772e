//! Turtle state and operations for 2D branch interpretation.

use crate::skeleton::Segment;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Tracks the pen position and heading. The interpreter copies this whole
/// value onto the branch stack on a push and restores it on a pop, which is
/// what makes branches independent of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: Vec2,

    /// Current heading in radians. Heading 0 points "up" (toward -y in a
    /// y-down canvas convention); positive headings rotate toward +x.
    /// The value is accumulated as-is, never normalized into a canonical
    /// range; only `sin`/`cos` ever consume it.
    pub heading: f32,
}

impl TurtleState {
    /// Creates a turtle at `position` facing `heading`.
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Unit vector the turtle is facing: `(sin h, -cos h)`.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.heading.sin(), -self.heading.cos())
    }

    /// The point one step ahead of the turtle without moving it.
    pub fn step_end(&self, step_length: f32) -> Vec2 {
        self.position + self.direction() * step_length
    }

    /// Steps forward, returning the segment drawn from the old position to
    /// the new one at the current heading.
    pub fn advance(&mut self, step_length: f32) -> Segment {
        let start = self.position;
        let end = self.step_end(step_length);
        self.position = end;
        Segment {
            start,
            end,
            heading: self.heading,
        }
    }

    /// Steps forward without drawing (pen up).
    pub fn slide(&mut self, step_length: f32) {
        self.position = self.step_end(step_length);
    }

    /// Rotates the heading by `delta` radians.
    pub fn turn(&mut self, delta: f32) {
        self.heading += delta;
    }

    /// Rotates the heading by 180 degrees.
    pub fn turn_around(&mut self) {
        self.heading += std::f32::consts::PI;
    }
}

/// Operations that can be performed by the drawing turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    // --- Spatial ---
    /// Draw one segment forward (`L`).
    Draw,
    /// Step forward without drawing (`f`). The next drawn segment still
    /// attaches to the same tree anchor, across the geometric gap.
    Move,
    /// Turn by the configured angle increment, scaled by the given sign
    /// (`+` / `-`).
    Turn(f32),
    /// Turn 180 degrees (`|`).
    TurnAround,

    // --- Flow control ---
    /// Save the turtle state and branch anchor onto the stack (`[`).
    Push,
    /// Restore the most recently pushed state (`]`).
    Pop,
    /// No-op; symbol has no registered meaning.
    Ignore,
}
