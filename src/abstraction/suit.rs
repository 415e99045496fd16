use super::deal::Deal;
use super::encoder::Encoder;
use crate::Bucket;
use crate::Position;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hole;
use crate::game::Config;
use crate::isomorphism::Indexer;

/// Lossless up to suit relabeling.
///
/// Round 0 indexes a player's hole cards together with any board dealt
/// before the first betting round; every later round adds its street.
/// Deals related by a permutation of suits share every bucket, anything
/// else keeps them apart. Hold'em pre-flop collapses to 169 buckets.
#[derive(Debug, Clone)]
pub struct SuitAbstraction {
    config: Config,
    indexer: Indexer,
}

impl SuitAbstraction {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let cards = (0..config.rounds())
            .map(|round| match round {
                0 => config.hole() + config.board(0),
                r => config.board(r),
            })
            .collect::<Vec<usize>>();
        let indexer = Indexer::new(config.suits(), config.ranks(), &cards)?;
        log::info!(
            "suit isomorphic card abstraction for {}: {:?} buckets",
            config,
            (0..config.rounds())
                .map(|r| indexer.size(r))
                .collect::<Vec<_>>()
        );
        Ok(Self {
            config: config.clone(),
            indexer,
        })
    }
    pub fn indexer(&self) -> &Indexer {
        &self.indexer
    }
    /// Feeds `hole` and the board through `last` into one cursor, calling
    /// `observe` with every round's bucket.
    fn walk<F>(&self, hole: &Hole, board: &Board, last: usize, mut observe: F)
    where
        F: FnMut(usize, Bucket),
    {
        let mut cursor = self.indexer.cursor();
        let flop = board.revealed(self.config.revealed(0));
        let first = hole.cards().chain(flop.iter().copied()).collect::<Vec<Card>>();
        observe(0, cursor.next_round(&first));
        let shown = board.revealed(self.config.revealed(last));
        for round in 1..=last {
            let street = &shown[self.config.round_start(round)..self.config.revealed(round)];
            observe(round, cursor.next_round(street));
        }
    }
}

impl Encoder for SuitAbstraction {
    fn num_buckets(&self, round: usize) -> u64 {
        self.config.check(round);
        self.indexer.size(round)
    }
    fn bucket(&self, player: Position, round: usize, board: &Board, holes: &[Hole]) -> Bucket {
        self.config.check(round);
        let mut bucket = 0;
        self.walk(&holes[player], board, round, |_, b| bucket = b);
        bucket
    }
    /// One cursor per player covers every round, so hole cards are
    /// ranked once per deal.
    fn precompute(&self, deal: &mut Deal) {
        self.config.check(deal.round());
        deal.reset();
        for player in 0..deal.players() {
            let mut buckets = Vec::with_capacity(deal.round() + 1);
            self.walk(&deal.holes()[player], deal.board(), deal.round(), |_, b| {
                buckets.push(b)
            });
            for (round, bucket) in buckets.into_iter().enumerate() {
                deal.record(player, round, bucket);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::Deck;
    use crate::cards::Hand;
    use crate::cards::Permutation;
    use std::collections::HashSet;

    fn relabel(deal: &Deal, permutation: &Permutation) -> Deal {
        let holes = deal
            .holes()
            .iter()
            .map(|h| h.cards().map(|c| permutation.card(&c)).collect::<Hand>())
            .map(Hole::from)
            .collect();
        let board = deal
            .board()
            .cards()
            .iter()
            .map(|c| permutation.card(c))
            .collect::<Vec<_>>();
        Deal::new(holes, Board::from(board), deal.round())
    }

    #[test]
    fn holdem_bucket_counts() {
        let suit = SuitAbstraction::new(&Config::holdem()).unwrap();
        assert_eq!(suit.num_buckets(0), 169);
        assert_eq!(suit.num_buckets(1), 1_286_792);
        assert_eq!(suit.num_buckets(2), 55_190_538);
        assert_eq!(suit.num_buckets(3), 2_428_287_420);
    }

    #[test]
    fn leduc_bucket_counts() {
        // 3 private ranks, then 3 pairs plus 6 rank pairs either suited or not
        let suit = SuitAbstraction::new(&Config::leduc()).unwrap();
        assert_eq!(suit.num_buckets(0), 3);
        assert_eq!(suit.num_buckets(1), 3 + 6 * 2);
    }

    #[test]
    fn holdem_preflop_has_169_classes() {
        let suit = SuitAbstraction::new(&Config::holdem()).unwrap();
        let deck = Vec::<Card>::from(Hand::from(Deck::new(4, 13)));
        let board = Board::empty();
        let mut buckets = HashSet::new();
        for (i, a) in deck.iter().enumerate() {
            for b in deck.iter().skip(i + 1) {
                let hole = Hole::from((*a, *b));
                let bucket = suit.bucket(0, 0, &board, &[hole]);
                assert!(bucket < 169);
                buckets.insert(bucket);
            }
        }
        assert_eq!(buckets.len(), 169);
    }

    #[test]
    fn suited_and_offsuit_differ() {
        let suit = SuitAbstraction::new(&Config::holdem()).unwrap();
        let board = Board::empty();
        let bucket = |s: &str| suit.bucket(0, 0, &board, &[Hole::try_from(s).unwrap()]);
        assert_eq!(bucket("AsKs"), bucket("AhKh"));
        assert_eq!(bucket("AsKh"), bucket("AdKc"));
        assert_ne!(bucket("AsKs"), bucket("AsKh"));
        assert_eq!(bucket("7c7d"), bucket("7h7s"));
    }

    #[test]
    fn invariant_under_suit_relabeling() {
        let config = Config::holdem().seated(3);
        let suit = SuitAbstraction::new(&config).unwrap();
        let ref mut rng = rand::rng();
        for _ in 0..500 {
            let mut deal = Deal::random(&config, 3, rng);
            let mut image = relabel(&deal, &Permutation::random());
            suit.precompute(&mut deal);
            suit.precompute(&mut image);
            for player in 0..3 {
                for round in 0..=3 {
                    assert_eq!(deal.bucket(player, round), image.bucket(player, round));
                }
            }
        }
    }

    #[test]
    fn precompute_matches_direct_queries() {
        let config = Config::holdem().seated(4);
        let suit = SuitAbstraction::new(&config).unwrap();
        let ref mut rng = rand::rng();
        for round in 0..config.rounds() {
            for _ in 0..100 {
                let mut deal = Deal::random(&config, round, rng);
                suit.precompute(&mut deal);
                assert!(deal.is_precomputed());
                for player in 0..4 {
                    for r in 0..=round {
                        let direct = suit.bucket(player, r, deal.board(), deal.holes());
                        assert_eq!(deal.bucket(player, r), direct);
                        assert!(direct < suit.num_buckets(r));
                    }
                }
            }
        }
    }

    #[test]
    fn board_before_first_round_joins_the_hole() {
        let config = serde_json::from_value::<Config>(serde_json::json!({
            "players": 2,
            "suits": 4,
            "ranks": 13,
            "rounds": 2,
            "hole": 2,
            "board": [1, 1],
            "betting": "nolimit",
            "stacks": [1000, 1000],
            "blinds": [10, 5],
            "raises": [3, 3]
        }))
        .unwrap();
        let suit = SuitAbstraction::new(&config).unwrap();
        assert_eq!(suit.indexer().cards(0), 3);
        let holes = [Hole::try_from("AsKs").unwrap()];
        let a = Board::try_from("Qs 2c").unwrap();
        let b = Board::try_from("Qh 2c").unwrap();
        assert_ne!(suit.bucket(0, 0, &a, &holes), suit.bucket(0, 0, &b, &holes));
    }

    #[test]
    fn rejects_invalid_games() {
        let mut json = serde_json::to_value(Config::holdem()).unwrap();
        json["board"] = serde_json::json!([0, 3]);
        let config = serde_json::from_value::<Config>(json).unwrap();
        assert!(SuitAbstraction::new(&config).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn round_out_of_range_is_fatal() {
        let suit = SuitAbstraction::new(&Config::leduc()).unwrap();
        suit.bucket(0, 2, &Board::empty(), &[Hole::try_from("2c").unwrap()]);
    }
}
