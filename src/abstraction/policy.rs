use super::blind::BlindAbstraction;
use super::deal::Deal;
use super::encoder::Encoder;
use super::null::NullAbstraction;
use super::suit::SuitAbstraction;
use crate::Bucket;
use crate::Position;
use crate::cards::Board;
use crate::cards::Hole;
use crate::game::Config;
use serde::Deserialize;
use serde::Serialize;

/// Which card abstraction to build.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPolicy {
    Null,
    #[default]
    Suit,
    Blind,
}

impl CardPolicy {
    pub const fn all() -> [Self; 3] {
        [Self::Null, Self::Suit, Self::Blind]
    }
}

/// str isomorphism
impl TryFrom<&str> for CardPolicy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "suit" => Ok(Self::Suit),
            "blind" => Ok(Self::Blind),
            _ => Err(anyhow::anyhow!("unknown card abstraction: {}", s)),
        }
    }
}

impl std::fmt::Display for CardPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Suit => write!(f, "suit"),
            Self::Blind => write!(f, "blind"),
        }
    }
}

/// A card abstraction chosen at configuration time.
///
/// Dispatches statically over the closed set of implementations, so the
/// solver's inner loop pays for a match, not a vtable.
#[derive(Debug, Clone)]
pub enum CardAbstraction {
    Null(NullAbstraction),
    Suit(SuitAbstraction),
    Blind(BlindAbstraction),
}

impl CardAbstraction {
    /// Builds every table `policy` needs for `config` up front.
    pub fn new(policy: CardPolicy, config: &Config) -> anyhow::Result<Self> {
        config.validate()?;
        match policy {
            CardPolicy::Null => NullAbstraction::new(config).map(Self::Null),
            CardPolicy::Suit => SuitAbstraction::new(config).map(Self::Suit),
            CardPolicy::Blind => Ok(Self::Blind(BlindAbstraction::new(config))),
        }
    }
    pub fn policy(&self) -> CardPolicy {
        match self {
            Self::Null(_) => CardPolicy::Null,
            Self::Suit(_) => CardPolicy::Suit,
            Self::Blind(_) => CardPolicy::Blind,
        }
    }
}

impl Encoder for CardAbstraction {
    fn num_buckets(&self, round: usize) -> u64 {
        match self {
            Self::Null(null) => null.num_buckets(round),
            Self::Suit(suit) => suit.num_buckets(round),
            Self::Blind(blind) => blind.num_buckets(round),
        }
    }
    fn bucket(&self, player: Position, round: usize, board: &Board, holes: &[Hole]) -> Bucket {
        match self {
            Self::Null(null) => null.bucket(player, round, board, holes),
            Self::Suit(suit) => suit.bucket(player, round, board, holes),
            Self::Blind(blind) => blind.bucket(player, round, board, holes),
        }
    }
    fn precompute(&self, deal: &mut Deal) {
        match self {
            Self::Null(null) => null.precompute(deal),
            Self::Suit(suit) => suit.precompute(deal),
            Self::Blind(blind) => blind.precompute(deal),
        }
    }
}
