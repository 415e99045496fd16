//! Betting-side abstraction: which actions the solver may take at a node.
//!
//! - [`Rules`]: read-only queries answered by the external rules engine
//! - [`Spot`]: an owned projection of one betting node implementing [`Rules`]
//! - [`Action`] / [`Kind`]: abstract actions and their fixed enumeration order
//! - [`Actions`]: fixed-capacity, ordered set returned per node
//! - [`Size`]: min-raise, pot-fraction and all-in raise targets
//! - [`ActionAbstraction`]: the six policies, from exhaustive to fold/all-in
mod abstraction;
mod action;
mod actions;
mod kind;
mod rules;
mod size;
mod spot;

pub use abstraction::*;
pub use action::*;
pub use actions::*;
pub use kind::*;
pub use rules::*;
pub use size::*;
pub use spot::*;
