use super::betting::Betting;
use crate::Chips;
use crate::MAX_PLAYERS;
use crate::MAX_RANKS;
use crate::MAX_ROUNDS;
use crate::MAX_SUITS;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// Immutable description of a poker game.
///
/// Both abstraction hierarchies derive everything they need from a `Config`
/// exactly once, at construction. Nothing here changes over a solver run.
///
/// # Fields
///
/// - `players`: seats at the table
/// - `suits`, `ranks`: deck dimensions, deck size is their product
/// - `rounds`: betting rounds per hand
/// - `hole`: private cards dealt to each player before round 0
/// - `board`: public cards revealed at the start of each round
/// - `betting`: limit or no-limit raise sizing
/// - `stacks`, `blinds`: per-seat starting chips and forced bets
/// - `raises`: maximum raises allowed in each round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    players: usize,
    suits: usize,
    ranks: usize,
    rounds: usize,
    hole: usize,
    board: Vec<usize>,
    betting: Betting,
    stacks: Vec<Chips>,
    blinds: Vec<Chips>,
    raises: Vec<u8>,
}

/// Presets.
impl Config {
    /// Three-card Kuhn poker.
    pub fn kuhn() -> Self {
        Self {
            players: 2,
            suits: 1,
            ranks: 3,
            rounds: 1,
            hole: 1,
            board: vec![0],
            betting: Betting::Limit,
            stacks: vec![2, 2],
            blinds: vec![1, 1],
            raises: vec![1],
        }
    }
    /// Six-card Leduc hold'em.
    pub fn leduc() -> Self {
        Self {
            players: 2,
            suits: 2,
            ranks: 3,
            rounds: 2,
            hole: 1,
            board: vec![0, 1],
            betting: Betting::Limit,
            stacks: vec![100, 100],
            blinds: vec![1, 1],
            raises: vec![2, 2],
        }
    }
    /// Heads-up limit Texas hold'em.
    pub fn limit() -> Self {
        Self {
            players: 2,
            suits: 4,
            ranks: 13,
            rounds: 4,
            hole: 2,
            board: vec![0, 3, 1, 1],
            betting: Betting::Limit,
            stacks: vec![20000, 20000],
            blinds: vec![10, 5],
            raises: vec![3, 4, 4, 4],
        }
    }
    /// Heads-up no-limit Texas hold'em, 200 big blinds deep.
    pub fn holdem() -> Self {
        Self {
            players: 2,
            suits: 4,
            ranks: 13,
            rounds: 4,
            hole: 2,
            board: vec![0, 3, 1, 1],
            betting: Betting::NoLimit,
            stacks: vec![20000, 20000],
            blinds: vec![100, 50],
            raises: vec![u8::MAX; 4],
        }
    }
    /// The same game with a different number of seats. Stacks and blinds
    /// are extended from the last seat or truncated.
    pub fn seated(mut self, players: usize) -> Self {
        let stack = self.stacks.last().copied().unwrap_or_default();
        let blind = self.blinds.last().copied().unwrap_or_default();
        self.stacks.resize(players, stack);
        self.blinds.resize(players, blind);
        self.players = players;
        self
    }
}

/// Loading and validation.
impl Config {
    /// Reads a JSON game description from disk.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read game config {}", path.display()))?;
        Self::try_from(json.as_str()).with_context(|| format!("parse {}", path.display()))
    }
    /// Rejects any game the abstractions cannot represent.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (2..=MAX_PLAYERS).contains(&self.players),
            "players must be within 2..={}, found {}",
            MAX_PLAYERS,
            self.players
        );
        anyhow::ensure!(
            (1..=MAX_SUITS).contains(&self.suits),
            "suits must be within 1..={}, found {}",
            MAX_SUITS,
            self.suits
        );
        anyhow::ensure!(
            (1..=MAX_RANKS).contains(&self.ranks),
            "ranks must be within 1..={}, found {}",
            MAX_RANKS,
            self.ranks
        );
        anyhow::ensure!(
            (1..=MAX_ROUNDS).contains(&self.rounds),
            "rounds must be within 1..={}, found {}",
            MAX_ROUNDS,
            self.rounds
        );
        anyhow::ensure!(
            self.board.len() == self.rounds,
            "board describes {} rounds, game has {}",
            self.board.len(),
            self.rounds
        );
        anyhow::ensure!(
            self.raises.len() == self.rounds,
            "raises describes {} rounds, game has {}",
            self.raises.len(),
            self.rounds
        );
        anyhow::ensure!(
            self.hole + self.board[0] > 0,
            "no cards are visible in the first round"
        );
        anyhow::ensure!(
            self.stacks.len() == self.players && self.blinds.len() == self.players,
            "stacks and blinds must list one entry per player"
        );
        anyhow::ensure!(
            self.stacks.iter().all(|s| *s > 0),
            "every stack must be positive"
        );
        anyhow::ensure!(
            self.dealt() <= self.deck(),
            "dealing {} cards from a {} card deck",
            self.dealt(),
            self.deck()
        );
        Ok(())
    }
}

/// Derived quantities.
impl Config {
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn suits(&self) -> usize {
        self.suits
    }
    pub fn ranks(&self) -> usize {
        self.ranks
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn hole(&self) -> usize {
        self.hole
    }
    pub fn betting(&self) -> Betting {
        self.betting
    }
    pub fn stacks(&self) -> &[Chips] {
        &self.stacks
    }
    pub fn blinds(&self) -> &[Chips] {
        &self.blinds
    }
    /// Cards in the deck.
    pub fn deck(&self) -> usize {
        self.suits * self.ranks
    }
    /// Public cards revealed at the start of `round`.
    pub fn board(&self, round: usize) -> usize {
        self.check(round);
        self.board[round]
    }
    /// Maximum raises allowed during `round`.
    pub fn raises(&self, round: usize) -> u8 {
        self.check(round);
        self.raises[round]
    }
    /// Public cards revealed before `round` starts.
    pub fn round_start(&self, round: usize) -> usize {
        self.check(round);
        self.board[..round].iter().sum()
    }
    /// Public cards visible during `round`.
    pub fn revealed(&self, round: usize) -> usize {
        self.check(round);
        self.board[..=round].iter().sum()
    }
    /// Cards visible to a single player during `round`.
    pub fn visible(&self, round: usize) -> usize {
        self.hole + self.revealed(round)
    }
    /// Total cards leaving the deck over a complete hand.
    pub fn dealt(&self) -> usize {
        self.hole * self.players + self.board.iter().sum::<usize>()
    }
    /// Fails fast on a round this game does not have. A solver asking for
    /// one is wired to the wrong configuration.
    pub fn check(&self, round: usize) {
        assert!(
            round < self.rounds,
            "round {} is out of range for a {} round game",
            round,
            self.rounds
        );
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::holdem()
    }
}

/// JSON isomorphism
impl TryFrom<&str> for Config {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        let config = serde_json::from_str::<Self>(json).context("malformed game config")?;
        config.validate()?;
        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}p {} {}x{} deck, {} hole, board {:?}",
            self.players, self.betting, self.ranks, self.suits, self.hole, self.board
        )
    }
}
