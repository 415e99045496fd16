//! Card-side abstraction: which information set a player is in.
//!
//! - [`Encoder`]: bucket counts per round, bucket queries, and batch
//!   precomputation over a [`Deal`]
//! - [`NullAbstraction`]: every distinguishable deal is its own bucket
//! - [`SuitAbstraction`]: deals equal up to a suit relabeling share a bucket
//! - [`BlindAbstraction`]: one bucket, no card information at all
//! - [`CardAbstraction`]: the three above behind one statically dispatched
//!   value, chosen by [`CardPolicy`]
mod blind;
mod deal;
mod encoder;
mod null;
mod policy;
mod suit;

pub use blind::*;
pub use deal::*;
pub use encoder::*;
pub use null::*;
pub use policy::*;
pub use suit::*;
