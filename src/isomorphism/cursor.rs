use super::binomial::choose;
use super::indexer::Indexer;
use crate::MAX_SUITS;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

/// Incremental indexing state for one deal.
///
/// Each suit keeps the colex rank of its ranks so far and the size of the
/// space that rank lives in; a new round only ranks the cards it adds.
/// Indexing hole cards then every board street through one cursor costs
/// one pass over the cards instead of one pass per round.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    indexer: &'a Indexer,
    round: usize,
    used: [u16; MAX_SUITS],
    index: [u64; MAX_SUITS],
    scale: [u64; MAX_SUITS],
    slot: usize,
    radix: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(indexer: &'a Indexer) -> Self {
        Self {
            indexer,
            round: 0,
            used: [0; MAX_SUITS],
            index: [0; MAX_SUITS],
            scale: [1; MAX_SUITS],
            slot: 0,
            radix: 1,
        }
    }
    /// Rounds indexed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Deals the next round's `cards` and returns the deal's index for
    /// that round. Panics past the last round, on a wrong card count, or
    /// on a card outside the deck or dealt twice.
    pub fn next_round(&mut self, cards: &[Card]) -> u64 {
        let indexer = self.indexer;
        let round = self.round;
        let suits = indexer.suits();
        assert!(
            round < indexer.rounds(),
            "round {} is out of range for a {} round indexer",
            round,
            indexer.rounds()
        );
        assert!(
            cards.len() == indexer.cards(round),
            "round {} deals {} cards, got {}",
            round,
            indexer.cards(round),
            cards.len()
        );

        let mut hand = Hand::empty();
        for card in cards {
            assert!(
                (u8::from(card.suit()) as usize) < suits
                    && (u8::from(card.rank()) as usize) < indexer.ranks(),
                "{} is not in a {}x{} deck",
                card,
                indexer.ranks(),
                suits
            );
            assert!(!hand.contains(card), "{} dealt twice", card);
            hand.insert(*card);
        }

        // drop the ranks a suit already used, so each suit ranks densely
        let mut ranks = [0u16; MAX_SUITS];
        let mut shifted = [0u16; MAX_SUITS];
        for (i, suit) in Suit::first(suits).iter().enumerate() {
            ranks[i] = hand.ranks(suit);
            let twice = ranks[i] & self.used[i];
            assert!(
                twice == 0,
                "{} dealt twice",
                Card::from((Rank::from(twice.trailing_zeros() as u8), *suit))
            );
            let mut rest = ranks[i];
            while rest > 0 {
                let bit = rest & rest.wrapping_neg();
                shifted[i] |= bit >> (self.used[i] & (bit - 1)).count_ones();
                rest &= rest - 1;
            }
        }

        // extend each suit's rank within the ranks it has left
        for suit in 0..suits {
            let left = (indexer.ranks() as u32 - self.used[suit].count_ones()) as u64;
            let dealt = ranks[suit].count_ones() as u64;
            self.index[suit] += self.scale[suit] * indexer.colex(shifted[suit]);
            self.scale[suit] *= choose(left, dealt);
            self.used[suit] |= ranks[suit];
        }
        let mut remaining = cards.len();
        for set in ranks.iter().take(suits - 1) {
            let dealt = set.count_ones() as usize;
            self.slot += self.radix * dealt;
            self.radix *= remaining + 1;
            remaining -= dealt;
        }
        self.round += 1;

        let pattern = indexer.pattern(round, self.slot);
        let shape = indexer.configuration(round, pattern.configuration);
        let mut index = [0u64; MAX_SUITS];
        let mut scale = [0u64; MAX_SUITS];
        for (i, suit) in pattern.pi.iter().enumerate().take(suits) {
            index[i] = self.index[*suit as usize];
            scale[i] = self.scale[*suit as usize];
        }

        // tied suits rank as a multiset of their per-suit indices
        let mut hand = shape.offset();
        let mut multiplier = 1;
        let mut suit = 0;
        while suit < suits {
            let end = shape.group(suit, suits);
            let k = (end - suit) as u64;
            let group = &mut index[suit..end];
            group.sort_unstable();
            let part = group
                .iter()
                .enumerate()
                .map(|(t, i)| choose(i + t as u64, t as u64 + 1))
                .sum::<u64>();
            hand += multiplier * part;
            multiplier *= choose(scale[suit] + k - 1, k);
            suit = end;
        }
        hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_holdem_streets() {
        let indexer = Indexer::new(4, 13, &[2, 3, 1, 1]).unwrap();
        let mut cursor = indexer.cursor();
        let cards = Card::parse("AsKs 2d7hTc 9c 3s").unwrap();
        let streets = [&cards[..2], &cards[2..5], &cards[5..6], &cards[6..7]];
        for (round, street) in streets.iter().enumerate() {
            assert_eq!(cursor.round(), round);
            let index = cursor.next_round(street);
            assert!(index < indexer.size(round));
        }
        assert_eq!(cursor.round(), 4);
    }

    #[test]
    fn order_within_round_is_irrelevant() {
        let indexer = Indexer::new(4, 13, &[2, 3]).unwrap();
        let mut a = indexer.cursor();
        let mut b = indexer.cursor();
        a.next_round(&Card::parse("AsKh").unwrap());
        b.next_round(&Card::parse("KhAs").unwrap());
        assert_eq!(
            a.next_round(&Card::parse("2c7dQs").unwrap()),
            b.next_round(&Card::parse("Qs2c7d").unwrap())
        );
    }

    #[test]
    fn cursor_is_cloneable_midway() {
        let indexer = Indexer::new(4, 13, &[2, 3, 1]).unwrap();
        let mut cursor = indexer.cursor();
        cursor.next_round(&Card::parse("8s8h").unwrap());
        let mut fork = cursor.clone();
        let flop = Card::parse("2c7dQs").unwrap();
        assert_eq!(cursor.next_round(&flop), fork.next_round(&flop));
    }

    #[test]
    #[should_panic(expected = "dealt twice")]
    fn duplicate_card_is_fatal() {
        let indexer = Indexer::new(4, 13, &[2, 3]).unwrap();
        let mut cursor = indexer.cursor();
        cursor.next_round(&Card::parse("AsKs").unwrap());
        cursor.next_round(&Card::parse("As2c3c").unwrap());
    }

    #[test]
    #[should_panic(expected = "not in a")]
    fn card_outside_reduced_deck_is_fatal() {
        let indexer = Indexer::new(2, 3, &[1]).unwrap();
        indexer.cursor().next_round(&Card::parse("Ah").unwrap());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn past_last_round_is_fatal() {
        let indexer = Indexer::new(2, 3, &[1]).unwrap();
        let mut cursor = indexer.cursor();
        cursor.next_round(&Card::parse("2c").unwrap());
        cursor.next_round(&[]);
    }
}
