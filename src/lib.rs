//! # ramify
//!
//! An L-System rewriting engine and 2D turtle interpreter that grows
//! branching skeletons for rendering.
//!
//! It decouples the *Genotype* (the L-System string) from the *Phenotype*
//! (the drawn structure), producing a [`Skeleton`] of line segments that can
//! be handed to any renderer (canvas, SVG, plotters, game engines) without
//! this crate knowing how to draw.
//!
//! ## Quick start
//!
//! ```
//! use glam::Vec2;
//! use ramify::{Derivation, RuleSet, TurtleConfig, TurtleInterpreter};
//!
//! // Genotype: grow the string one generation.
//! let rules = RuleSet::from_iter([('X', "L[+LX]")]);
//! let mut derivation = Derivation::new("X");
//! derivation.grow(&rules);
//! assert_eq!(derivation.latest(), "L[+LX]");
//!
//! // Phenotype: interpret the string into a branch skeleton.
//! let mut interpreter = TurtleInterpreter::new(TurtleConfig::default());
//! interpreter.populate_standard_symbols();
//! let skeleton = interpreter.build_skeleton(derivation.latest(), Vec2::new(700.0, 590.0), 0.0);
//! assert_eq!(skeleton.segment_count(), 2);
//! ```

pub mod grammar;
pub mod interpreter;
pub mod skeleton;
pub mod turtle;

pub use grammar::*;
pub use interpreter::*;
pub use skeleton::*;
pub use turtle::*;
