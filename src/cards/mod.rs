//! Card primitives shared by both abstraction hierarchies.
//!
//! - [`Card`]: a `(Rank, Suit)` pair encoded in one byte as `rank * 4 + suit`
//! - [`Hand`]: an unordered set of cards as a 64-bit bitmask
//! - [`Hole`]: one player's private cards
//! - [`Board`]: public cards in the order they were revealed
//! - [`Deck`]: the undealt remainder of a configured deck
//! - [`Permutation`]: a suit relabeling, the symmetry the isomorphic
//!   card abstraction quotients out
mod board;
mod card;
mod deck;
mod hand;
mod hole;
mod permutation;
mod rank;
mod suit;

pub use board::*;
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use hole::*;
pub use permutation::*;
pub use rank::*;
pub use suit::*;
