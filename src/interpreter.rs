//! Interpreter that walks an L-System symbol sequence and drives a [`PenState`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`SketchConfig`], register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::execute`] with a [`SymbolSequence`] and an initial
//! [`PenState`].

use crate::atom::{Atom, SymbolSequence};
use crate::turtle::{PenOp, PenState};
use std::collections::HashMap;
use std::fmt;

/// Configuration for sequence interpretation.
#[derive(Clone, Debug)]
pub struct SketchConfig {
    /// Distance covered by one standard forward symbol.
    pub step_length: f64,
    /// Turn angle in degrees for the standard `+` / `-` symbols.
    pub turn_angle: f64,
    /// Maximum depth of the push/pop stack before interpretation aborts.
    pub max_stack_depth: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            step_length: 10.0,
            turn_angle: 90.0,
            max_stack_depth: 1024,
        }
    }
}

/// Interpretation failure, carrying the offending symbol and its position in
/// the sequence.
///
/// Both variants mean the rule grammar itself is malformed: re-running the
/// same inputs would fail identically, so there is no partial result to
/// salvage.
#[derive(Clone, Debug, PartialEq)]
pub enum TurtleError {
    /// A pop symbol was reached with no matching push on the stack.
    StackUnderflow { index: usize, symbol: Atom },
    /// A push symbol would exceed [`SketchConfig::max_stack_depth`].
    StackOverflow {
        index: usize,
        symbol: Atom,
        depth: usize,
    },
}

impl fmt::Display for TurtleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurtleError::StackUnderflow { index, symbol } => write!(
                f,
                "pop symbol `{symbol}` at sequence index {index} with no matching push"
            ),
            TurtleError::StackOverflow {
                index,
                symbol,
                depth,
            } => write!(
                f,
                "push symbol `{symbol}` at sequence index {index} exceeds stack depth {depth}"
            ),
        }
    }
}

impl std::error::Error for TurtleError {}

/// Interprets L-System output to drive a pen and accumulate line segments.
pub struct TurtleInterpreter {
    op_map: HashMap<Atom, PenOp>,
    config: SketchConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before
    /// calling [`execute`](Self::execute).
    pub fn new(config: SketchConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern). Any atom absent from the map is treated as [`PenOp::Ignore`].
    pub fn with_map(mut self, map: HashMap<Atom, PenOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`PenOp`] to a symbol.
    pub fn set_op(&mut self, symbol: Atom, op: PenOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional drawing alphabet:
    ///
    /// | Symbol | Operation |
    /// |--------|-----------|
    /// | `F` | forward by [`SketchConfig::step_length`] |
    /// | `+` | turn clockwise by [`SketchConfig::turn_angle`] |
    /// | `-` | turn counter-clockwise by [`SketchConfig::turn_angle`] |
    /// | `[` | push position and facing |
    /// | `]` | pop position and facing |
    pub fn populate_standard_symbols(&mut self) {
        let d = self.config.step_length;
        let delta = self.config.turn_angle;
        let mappings = [
            ('F', PenOp::Forward(d)),
            ('+', PenOp::Turn(delta)),
            ('-', PenOp::Turn(-delta)),
            ('[', PenOp::Push),
            (']', PenOp::Pop),
        ];
        for (sym, op) in mappings {
            self.set_op(Atom::Char(sym), op);
        }
    }

    /// Executes `sequence` against `start`, returning the final [`PenState`]
    /// with its accumulated `lines`.
    ///
    /// Every atom is processed strictly in order in a plain loop, so sequence
    /// length is bounded by memory, not call-stack depth. Atoms with no
    /// registered operation are silently skipped: sparse maps are the normal
    /// case, since most L-System alphabets carry bookkeeping symbols with no
    /// drawing meaning.
    ///
    /// Fails on a mismatched push/pop (see [`TurtleError`]); the error names
    /// the symbol and its index so the rule table can be diagnosed.
    pub fn execute(
        &self,
        sequence: &SymbolSequence,
        start: PenState,
    ) -> Result<PenState, TurtleError> {
        let mut pen = start;
        for (index, atom) in sequence.iter().enumerate() {
            let op = self.op_map.get(atom).unwrap_or(&PenOp::Ignore);
            pen = match op {
                PenOp::Forward(distance) => pen.forward(*distance),
                PenOp::Turn(degrees) => pen.rotate(*degrees),
                PenOp::PenUp => pen.pen_up(),
                PenOp::PenDown => pen.pen_down(),
                PenOp::Push => {
                    if pen.stack.len() >= self.config.max_stack_depth {
                        return Err(TurtleError::StackOverflow {
                            index,
                            symbol: atom.clone(),
                            depth: self.config.max_stack_depth,
                        });
                    }
                    pen.push_pos_and_angle()
                }
                PenOp::Pop => {
                    pen.pop_pos_and_angle()
                        .ok_or_else(|| TurtleError::StackUnderflow {
                            index,
                            symbol: atom.clone(),
                        })?
                }
                PenOp::Ignore => pen,
            };
        }
        Ok(pen)
    }
}
