use super::deal::Deal;
use super::encoder::Encoder;
use crate::Bucket;
use crate::Position;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hole;
use crate::game::Config;

/// Lossless card abstraction: the bucket *is* the deal.
///
/// A player's hole cards, then the board in deal order, are read as digits
/// of a mixed-radix number in base `suits * ranks`, each digit being the
/// card's [`Card::digit`]. Hole cards are an unordered set and contribute
/// lowest card first. Bucket counts grow as a power of the deck size per
/// card seen, so this only suits small games.
#[derive(Debug, Clone)]
pub struct NullAbstraction {
    config: Config,
    sizes: Vec<u64>,
}

impl NullAbstraction {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        let deck = config.deck() as u64;
        let sizes = (0..config.rounds())
            .map(|round| {
                deck.checked_pow(config.visible(round) as u32)
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "{} cards of a {} card deck overflow a bucket in round {}",
                            config.visible(round),
                            deck,
                            round
                        )
                    })
            })
            .collect::<anyhow::Result<Vec<u64>>>()?;
        log::info!("null card abstraction for {}: {:?} buckets", config, sizes);
        Ok(Self {
            config: config.clone(),
            sizes,
        })
    }
    fn push(&self, bucket: Bucket, card: &Card) -> Bucket {
        bucket * self.config.deck() as Bucket + card.digit(self.config.suits())
    }
    fn hole(&self, hole: &Hole) -> Bucket {
        assert!(
            hole.size() == self.config.hole(),
            "hole of {} cards in a game dealing {}",
            hole.size(),
            self.config.hole()
        );
        hole.cards().fold(0, |bucket, card| self.push(bucket, &card))
    }
    /// Board cards first revealed in `round`.
    fn street<'b>(&self, board: &'b Board, round: usize) -> &'b [Card] {
        &board.revealed(self.config.revealed(round))[self.config.round_start(round)..]
    }
}

impl Encoder for NullAbstraction {
    fn num_buckets(&self, round: usize) -> u64 {
        self.config.check(round);
        self.sizes[round]
    }
    fn bucket(&self, player: Position, round: usize, board: &Board, holes: &[Hole]) -> Bucket {
        self.config.check(round);
        board
            .revealed(self.config.revealed(round))
            .iter()
            .fold(self.hole(&holes[player]), |bucket, card| self.push(bucket, card))
    }
    /// Each round appends its street's digits to the previous bucket.
    fn precompute(&self, deal: &mut Deal) {
        self.config.check(deal.round());
        deal.reset();
        for player in 0..deal.players() {
            let mut bucket = self.hole(&deal.holes()[player]);
            for round in 0..=deal.round() {
                bucket = self
                    .street(deal.board(), round)
                    .iter()
                    .fold(bucket, |bucket, card| self.push(bucket, card));
                deal.record(player, round, bucket);
            }
        }
    }
}
