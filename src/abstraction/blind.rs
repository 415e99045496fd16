use super::encoder::Encoder;
use crate::Bucket;
use crate::Position;
use crate::cards::Board;
use crate::cards::Hole;
use crate::game::Config;

/// Ignores the cards entirely. One bucket per round, always bucket 0.
#[derive(Debug, Clone)]
pub struct BlindAbstraction {
    config: Config,
}

impl BlindAbstraction {
    pub fn new(config: &Config) -> Self {
        log::info!("blind card abstraction for {}", config);
        Self {
            config: config.clone(),
        }
    }
}

impl Encoder for BlindAbstraction {
    fn num_buckets(&self, round: usize) -> u64 {
        self.config.check(round);
        1
    }
    fn bucket(&self, _: Position, round: usize, _: &Board, _: &[Hole]) -> Bucket {
        self.config.check(round);
        0
    }
}
