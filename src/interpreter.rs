//! Interpreter that converts an L-System symbol string into a [`Skeleton`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::build_skeleton`] with the current generation string
//! (or [`TurtleInterpreter::trace`] for a flat segment list).

use crate::grammar::Symbol;
use crate::skeleton::{Segment, SegmentId, Skeleton};
use crate::turtle::{TurtleOp, TurtleState};
use glam::Vec2;
use std::collections::HashMap;
use thiserror::Error;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by one draw or pen-up step, in world units.
    pub step_length: f32,
    /// Radians added or subtracted by one turn symbol.
    pub angle_increment: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_length: 20.0,
            angle_increment: 0.5,
        }
    }
}

/// Interprets L-System output to grow a [`Skeleton`].
pub struct TurtleInterpreter {
    op_map: HashMap<Symbol, TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before
    /// interpreting anything.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern).
    ///
    /// Symbols absent from `map` are treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: HashMap<Symbol, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, replacing any previous
    /// binding.
    pub fn set_op(&mut self, symbol: Symbol, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional symbol-to-operation mappings: `L` draws,
    /// `+` and `-` turn, `[` and `]` push and pop. Every other symbol stays
    /// a no-op.
    ///
    /// The classic pen-up `f` and about-turn `|` symbols are not bound here;
    /// register them with [`set_op`](Self::set_op) when a grammar uses them.
    /// See the crate README for the full symbol table.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('L', TurtleOp::Draw),
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// The operation bound to `symbol`, falling back to [`TurtleOp::Ignore`].
    pub fn op(&self, symbol: Symbol) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Interprets `symbols` and returns the resulting [`Skeleton`].
    ///
    /// Walks every symbol in order, dispatching each to its registered
    /// [`TurtleOp`]. The turtle starts at `start` facing `heading`. Symbols
    /// with no registered mapping are silently ignored.
    ///
    /// # Segment placement
    ///
    /// When a draw symbol is encountered:
    /// 1. The end point is computed from the heading:
    ///    `end = position + (sin h, -cos h) * step_length`.
    /// 2. A [`Segment`] from the current position to the end point is
    ///    appended to the skeleton, parented to the segment most recently
    ///    drawn on the current branch (the synthetic root if none).
    /// 3. The turtle advances to the end point.
    ///
    /// # Push / Pop
    ///
    /// `[` saves the turtle state and the current parent anchor onto a
    /// stack. `]` restores both, so drawing resumes from the saved point
    /// and heading rather than from wherever the nested branch left off.
    /// A stray `]` with nothing saved is a no-op; the walk never fails.
    pub fn build_skeleton(&self, symbols: &str, start: Vec2, heading: f32) -> Skeleton {
        let mut skeleton = Skeleton::new(start, heading);
        let mut turtle = TurtleState::new(start, heading);
        let mut anchor = skeleton.root();
        let mut stack: Vec<(TurtleState, SegmentId)> = Vec::new();

        for symbol in symbols.chars() {
            match self.op(symbol) {
                TurtleOp::Draw => {
                    let segment = turtle.advance(self.config.step_length);
                    anchor = skeleton.push_segment(anchor, segment);
                }
                TurtleOp::Move => turtle.slide(self.config.step_length),
                TurtleOp::Turn(sign) => turtle.turn(sign * self.config.angle_increment),
                TurtleOp::TurnAround => turtle.turn_around(),
                TurtleOp::Push => stack.push((turtle, anchor)),
                TurtleOp::Pop => {
                    if let Some((saved, saved_anchor)) = stack.pop() {
                        turtle = saved;
                        anchor = saved_anchor;
                    }
                }
                TurtleOp::Ignore => {}
            }
        }

        skeleton
    }

    /// Interprets `symbols` into a flat list of drawn segments in emission
    /// order, for renderers that don't need the branch hierarchy.
    pub fn trace(&self, symbols: &str, start: Vec2, heading: f32) -> Vec<Segment> {
        self.build_skeleton(symbols, start, heading).into_trace()
    }

    /// Checks that every pop symbol in `symbols` has a matching push and
    /// that no branch is left open, without interpreting anything.
    ///
    /// This is the strict counterpart to the tolerant walk: display
    /// callers can skip it and let interpretation degrade gracefully,
    /// batch callers can reject malformed strings up front.
    pub fn validate(&self, symbols: &str) -> Result<(), BracketError> {
        let mut open = 0usize;
        for (index, symbol) in symbols.char_indices() {
            match self.op(symbol) {
                TurtleOp::Push => open += 1,
                TurtleOp::Pop => {
                    if open == 0 {
                        return Err(BracketError::StrayPop { index });
                    }
                    open -= 1;
                }
                _ => {}
            }
        }
        if open > 0 {
            return Err(BracketError::UnclosedPush { count: open });
        }
        Ok(())
    }
}

/// Strict-validation failure for a symbol string's branch brackets.
///
/// Interpretation itself never fails; a stray pop is ignored and drawing
/// continues. [`TurtleInterpreter::validate`] surfaces the strict view for
/// callers that prefer to reject malformed strings before interpreting them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BracketError {
    /// A pop symbol appeared with no unmatched push before it.
    #[error("branch pop at byte {index} has no matching push")]
    StrayPop {
        /// Byte offset of the offending symbol in the input string.
        index: usize,
    },

    /// The string ended with one or more branches still open.
    #[error("input ends with {count} unclosed branch push(es)")]
    UnclosedPush {
        /// How many pushes were never matched by a pop.
        count: usize,
    },
}
