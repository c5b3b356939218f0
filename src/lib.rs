//! This crate provides the core logic for a Mars rover simulator.
//! It includes modules for parsing the line protocol that describes a plateau and its rovers,
//! driving rovers across the plateau, and loading whole missions from files or strings.

pub mod loader;
pub mod parser;
pub mod processor;
pub mod rover;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the mission loading types from the loader module.
pub use loader::{ErrorPolicy, Mission, MissionLoader, SkippedLine};
/// Re-exports the `parse_line` function and `ParsedLine` enum from the parser module.
pub use parser::{parse_line, ParsedLine};
/// Re-exports the `LineProcessor` struct from the processor module.
pub use processor::LineProcessor;
/// Re-exports the `Rover` struct from the rover module.
pub use rover::Rover;
/// Re-exports the protocol types from the types module.
pub use types::{Direction, Instruction, LineKind, Plateau, Position, RoverError};
