//! Suit-isomorphic canonical hand indexing.
//!
//! Two deals that differ only by a relabeling of suits are strategically
//! identical. [`Indexer`] ranks the equivalence classes of a multi-round
//! deal densely, round by round, without ever materializing them:
//!
//! - each suit's ranks are ranked in colexicographic order, round after round
//! - per-suit card counts form a [`Configuration`]; suits that share one are
//!   interchangeable and get ranked together as a multiset
//! - every configuration owns a contiguous block of the round's index space
//!
//! [`Cursor`] carries the per-suit work from one round to the next, so a
//! deal indexed through every round pays for its hole cards once.
mod binomial;
mod configuration;
mod cursor;
mod indexer;

pub use binomial::*;
pub use configuration::*;
pub use cursor::*;
pub use indexer::*;
