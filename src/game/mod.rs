//! Immutable game description shared by the rules engine and both
//! abstraction hierarchies.
mod betting;
mod config;

pub use betting::*;
pub use config::*;
