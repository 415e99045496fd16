use super::card::Card;

/// Public cards, kept in the order they were revealed.
///
/// Unlike [`Hole`](super::hole::Hole) the order matters here: a card that
/// arrived on a later round carries different information than one that
/// arrived earlier, and the exhaustive card abstraction encodes that.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn push(&mut self, card: Card) {
        debug_assert!(!self.0.contains(&card));
        self.0.push(card);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// the first `n` cards, i.e. everything visible once `n` public cards
    /// have been dealt
    pub fn revealed(&self, n: usize) -> &[Card] {
        assert!(
            n <= self.0.len(),
            "board has {} cards, {} requested",
            self.0.len(),
            n
        );
        &self.0[..n]
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
