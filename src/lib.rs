//! # lsys-pen
//!
//! A sovereign L-System crate that rewrites symbol sequences through
//! generations of production rules and interprets the result as 2D turtle-pen
//! movements, producing an ordered list of drawable line segments.
//!
//! It decouples the *grammar* (production rules over [`Atom`] sequences) from
//! the *figure* (the [`LineSegment`] list accumulated in a [`PenState`]),
//! so renderers, image exporters, and plotters can consume the geometry
//! without knowing anything about L-Systems.
//!
//! ```
//! use lsys_pen::{
//!     Atom, PenState, ProductionTable, SketchConfig, TurtleInterpreter, Viewport,
//! };
//!
//! // Koch curve: F -> F+F-F-F+F, 90 degree turns.
//! let table = ProductionTable::new().rule(Atom::Char('F'), "F+F-F-F+F");
//! let sequence = table.nth_step(Atom::Char('F'), 3);
//!
//! let mut interpreter = TurtleInterpreter::new(SketchConfig::default());
//! interpreter.populate_standard_symbols();
//! let pen = interpreter.execute(&sequence, PenState::default()).unwrap();
//!
//! let fitted = Viewport::new(512.0, 512.0, 16.0).unwrap().fit(&pen.lines).unwrap();
//! assert!(!fitted.is_empty());
//! ```

pub mod atom;
pub mod fitter;
pub mod interpreter;
pub mod production;
pub mod turtle;

pub use atom::*;
pub use fitter::*;
pub use interpreter::*;
pub use production::*;
pub use turtle::*;
