use crate::Bucket;
use crate::Position;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hole;
use crate::game::Config;
use rand::Rng;

/// One dealt or sampled hand: every player's hole, the public board so
/// far, and the bucket cache a solver reads for the rest of the sample.
///
/// A `Deal` is owned by whichever worker is playing it out. The cache is
/// empty until an [`Encoder`](super::Encoder) precomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    holes: Vec<Hole>,
    board: Board,
    round: usize,
    buckets: Vec<Vec<Bucket>>,
}

impl Deal {
    pub fn new(holes: Vec<Hole>, board: Board, round: usize) -> Self {
        let buckets = vec![Vec::new(); holes.len()];
        Self {
            holes,
            board,
            round,
            buckets,
        }
    }
    /// Deals every player's hole and the board through `round` from a
    /// fresh deck of `config`.
    pub fn random<R: Rng>(config: &Config, round: usize, rng: &mut R) -> Self {
        let mut deck = Deck::new(config.suits(), config.ranks());
        let holes = (0..config.players())
            .map(|_| deck.hole(config.hole(), rng))
            .collect::<Vec<Hole>>();
        let board = (0..config.revealed(round))
            .map(|_| deck.draw(rng))
            .collect::<Vec<_>>();
        Self::new(holes, Board::from(board), round)
    }
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Latest round the board covers.
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn players(&self) -> usize {
        self.holes.len()
    }
    /// Precomputed bucket of `player` in `round`.
    pub fn bucket(&self, player: Position, round: usize) -> Bucket {
        assert!(
            round <= self.round,
            "round {} is out of range for a deal at round {}",
            round,
            self.round
        );
        self.buckets[player]
            .get(round)
            .copied()
            .unwrap_or_else(|| panic!("buckets of player {} were never precomputed", player))
    }
    /// Whether every bucket up to the current round is cached.
    pub fn is_precomputed(&self) -> bool {
        self.buckets.iter().all(|b| b.len() == self.round + 1)
    }

    /// Drops every cached bucket.
    pub fn reset(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
    }
    /// Caches one bucket. Rounds are recorded in order, per player.
    pub fn record(&mut self, player: Position, round: usize, bucket: Bucket) {
        let cache = &mut self.buckets[player];
        assert!(
            cache.len() == round,
            "player {} records round {} after {} rounds",
            player,
            round,
            cache.len()
        );
        cache.push(bucket);
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (player, hole) in self.holes.iter().enumerate() {
            write!(f, "P{} {} ", player, hole)?;
        }
        write!(f, "| {}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    #[test]
    fn random_deals_are_disjoint() {
        let config = Config::holdem().seated(6);
        let ref mut rng = rand::rng();
        for round in 0..config.rounds() {
            let deal = Deal::random(&config, round, rng);
            assert_eq!(deal.players(), 6);
            assert_eq!(deal.board().len(), config.revealed(round));
            let mut seen = Hand::empty();
            for hole in deal.holes() {
                assert_eq!(hole.size(), config.hole());
                seen = Hand::add(seen, Hand::from(*hole));
            }
            for card in deal.board().cards() {
                assert!(!seen.contains(card));
                seen.insert(*card);
            }
            assert_eq!(seen.size(), 6 * 2 + config.revealed(round));
        }
    }

    #[test]
    fn random_deals_stay_in_reduced_deck() {
        let config = Config::leduc();
        let ref mut rng = rand::rng();
        for _ in 0..100 {
            let deal = Deal::random(&config, 1, rng);
            let deck = Hand::from(Deck::new(2, 3));
            assert!(deal.board().cards().iter().all(|c| deck.contains(c)));
            assert!(deal.holes().iter().flat_map(|h| h.cards()).all(|c| deck.contains(&c)));
        }
    }

    #[test]
    fn record_then_read() {
        let mut deal = Deal::random(&Config::leduc(), 1, &mut rand::rng());
        assert!(!deal.is_precomputed());
        for player in 0..2 {
            deal.record(player, 0, 7);
            deal.record(player, 1, 11);
        }
        assert!(deal.is_precomputed());
        assert_eq!(deal.bucket(1, 1), 11);
        deal.reset();
        assert!(!deal.is_precomputed());
    }

    #[test]
    #[should_panic(expected = "never precomputed")]
    fn unprecomputed_read_is_fatal() {
        let deal = Deal::random(&Config::leduc(), 1, &mut rand::rng());
        deal.bucket(0, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn future_round_is_fatal() {
        let deal = Deal::random(&Config::leduc(), 0, &mut rand::rng());
        deal.bucket(0, 1);
    }
}
