//! Headless simulation.
//!
//! Plays complete games with a pluggable `MoveSource` standing in for the
//! human seat. Used by the `cincuentazo_sim` binary, the benchmarks and
//! the property tests.

pub mod runner;
pub mod source;

pub use runner::{drive, play_game, run, GameRecord, Outcome, SimConfig, SimulationSummary};
pub use source::{FirstLegal, MoveSource, Scripted, UniformMoves};
