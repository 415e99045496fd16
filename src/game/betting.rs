use serde::Deserialize;
use serde::Serialize;

/// Betting structure of a game.
///
/// Under `Limit` every legal raise has exactly one size, so even the
/// exhaustive action abstraction stays tiny. Under `NoLimit` any size
/// between the minimum raise and the actor's stack is legal.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Betting {
    Limit,
    #[default]
    NoLimit,
}

impl TryFrom<&str> for Betting {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "limit" => Ok(Self::Limit),
            "nolimit" => Ok(Self::NoLimit),
            _ => Err(anyhow::anyhow!("unknown betting structure {}", s)),
        }
    }
}

impl std::fmt::Display for Betting {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::NoLimit => write!(f, "nolimit"),
        }
    }
}
