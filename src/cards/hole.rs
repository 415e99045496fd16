use super::card::Card;
use super::hand::Hand;

/// A player's private cards.
///
/// Wraps a [`Hand`], so the cards are unordered and always iterate from
/// lowest to highest. Hold'em has two of them, Kuhn and Leduc one.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<Card> for Hole {
    fn from(card: Card) -> Self {
        Self(Hand::from(card))
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        debug_assert!(a != b);
        Self(Hand::from(a | b))
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let hand = Hand::from(cards.as_slice());
        match hand.size() {
            0 => Err("hole must contain at least one card".into()),
            n if n != cards.len() => Err("hole contains a duplicate card".into()),
            _ => Ok(Self(hand)),
        }
    }
}
