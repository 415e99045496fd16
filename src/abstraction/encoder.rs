use super::deal::Deal;
use crate::Bucket;
use crate::Position;
use crate::cards::Board;
use crate::cards::Hole;
use rayon::prelude::*;

/// Maps what a player has seen to a dense bucket, per round.
///
/// Implementations are immutable after construction and shared by every
/// solver thread. Asking about a round the game does not have is a
/// wiring error and panics.
pub trait Encoder {
    /// Distinct buckets in `round`, i.e. the rows a regret table needs.
    fn num_buckets(&self, round: usize) -> u64;

    /// Bucket of `player` in `round`, given every hole and a board holding
    /// at least the cards revealed through `round`.
    fn bucket(&self, player: Position, round: usize, board: &Board, holes: &[Hole]) -> Bucket;

    /// Fills `deal`'s cache for every player and every round up to the
    /// deal's current one, one [`Encoder::bucket`] call at a time.
    /// Implementations that can share work between rounds override it.
    fn precompute(&self, deal: &mut Deal) {
        deal.reset();
        for player in 0..deal.players() {
            for round in 0..=deal.round() {
                let bucket = self.bucket(player, round, deal.board(), deal.holes());
                deal.record(player, round, bucket);
            }
        }
    }

    /// Precomputes a batch of independent deals across the rayon pool.
    fn precompute_all(&self, deals: &mut [Deal])
    where
        Self: Sync,
    {
        log::debug!("precomputing buckets for {} deals", deals.len());
        deals.par_iter_mut().for_each(|deal| self.precompute(deal));
    }
}
