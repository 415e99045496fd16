use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;

/// The undealt remainder of a `suits × ranks` deck.
///
/// Wraps a [`Hand`] representing the remaining cards, with methods for
/// randomly drawing cards and dealing holes. Used for Monte Carlo sampling
/// of deals and for test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    /// Creates a fresh deck holding the lowest `ranks` ranks of the first
    /// `suits` suits.
    pub fn new(suits: usize, ranks: usize) -> Self {
        Self(
            (0..ranks as u8)
                .map(Rank::from)
                .flat_map(|r| Suit::first(suits).iter().map(move |s| Card::from((r, *s))))
                .collect(),
        )
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.0.size() > 0, "deck is exhausted");
        let i = rng.random_range(0..self.0.size());
        let card = self.0.into_iter().nth(i).expect("index within deck");
        self.0.remove(card);
        card
    }
    /// Deals `n` cards as one player's hole.
    pub fn hole<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hole {
        Hole::from((0..n).map(|_| self.draw(rng)).collect::<Hand>())
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck() {
        assert_eq!(Deck::new(4, 13).size(), 52);
        assert_eq!(Hand::from(Deck::new(4, 13)), Hand::from(Hand::mask()));
    }

    #[test]
    fn reduced_deck() {
        let deck = Deck::new(2, 3);
        assert_eq!(deck.size(), 6);
        assert!(deck.contains(&Card::try_from("4d").unwrap()));
        assert!(!deck.contains(&Card::try_from("4h").unwrap()));
        assert!(!deck.contains(&Card::try_from("5c").unwrap()));
    }

    #[test]
    fn draws_without_replacement() {
        let ref mut rng = rand::rng();
        let mut deck = Deck::new(4, 13);
        let mut seen = Hand::empty();
        for _ in 0..52 {
            let card = deck.draw(rng);
            assert!(!seen.contains(&card));
            seen.insert(card);
        }
        assert_eq!(deck.size(), 0);
    }
}
