use super::card::Card;
use super::suit::Suit;
use crate::Arbitrary;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
///
/// two deals related by a Permutation are strategically identical,
/// which is exactly the equivalence the isomorphic card abstraction
/// collapses into a single bucket.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Permutation([Suit; 4]);

impl Permutation {
    /// every relabeling of the first `n` suits. suits outside a reduced
    /// deck stay fixed, so reduced-deck cards never map outside of it.
    pub fn exhaust(n: usize) -> Vec<Self> {
        let mut all = Vec::new();
        let mut suits = Suit::all();
        Self::heap(n.min(4), &mut suits, &mut all);
        all
    }
    /// Heap's algorithm over the first k positions
    fn heap(k: usize, suits: &mut [Suit; 4], all: &mut Vec<Self>) {
        if k <= 1 {
            all.push(Self(*suits));
            return;
        }
        for i in 0..k - 1 {
            Self::heap(k - 1, suits, all);
            if k % 2 == 0 {
                suits.swap(i, k - 1);
            } else {
                suits.swap(0, k - 1);
            }
        }
        Self::heap(k - 1, suits, all);
    }

    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }
    /// the image of a single card keeps its rank and relabels its suit
    pub fn card(&self, card: &Card) -> Card {
        Card::from((card.rank(), self.map(&card.suit())))
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::exhaust(4)
            .choose(rng)
            .copied()
            .expect("suit group is never empty")
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all().iter() {
            writeln!(f, "{} -> {}", suit, self.map(suit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    #[test]
    fn map_identity() {
        let identity = Permutation(Suit::all());
        assert!(identity.map(&Suit::C) == Suit::C);
        assert!(identity.map(&Suit::D) == Suit::D);
        assert!(identity.map(&Suit::H) == Suit::H);
        assert!(identity.map(&Suit::S) == Suit::S);
    }

    #[test]
    fn map_arbitrary() {
        let permutation = Permutation([Suit::H, Suit::S, Suit::C, Suit::D]);
        assert!(permutation.map(&Suit::C) == Suit::H);
        assert!(permutation.map(&Suit::D) == Suit::S);
        assert!(permutation.map(&Suit::H) == Suit::C);
        assert!(permutation.map(&Suit::S) == Suit::D);
    }

    #[test]
    fn exhaust_group_orders() {
        assert_eq!(Permutation::exhaust(1).len(), 1);
        assert_eq!(Permutation::exhaust(2).len(), 2);
        assert_eq!(Permutation::exhaust(3).len(), 6);
        assert_eq!(Permutation::exhaust(4).len(), 24);
        let unique = Permutation::exhaust(4)
            .into_iter()
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(unique.len(), 24);
    }

    #[test]
    fn exhaust_fixes_unused_suits() {
        for p in Permutation::exhaust(2) {
            assert!(p.map(&Suit::H) == Suit::H);
            assert!(p.map(&Suit::S) == Suit::S);
        }
    }

    fn image(permutation: &Permutation, hand: Hand) -> Hand {
        hand.map(|c| permutation.card(&c)).collect()
    }

    #[test]
    fn permute_rotation() {
        let permutation = Permutation([Suit::S, Suit::C, Suit::D, Suit::H]);
        let original = Hand::try_from("Ac Kd Qh Js").unwrap();
        let permuted = Hand::try_from("As Kc Qd Jh").unwrap();
        assert!(image(&permutation, original) == permuted);
    }

    #[test]
    fn permute_unique() {
        let hand = Hand::try_from("Ac Kd Qh Js").unwrap();
        let mut unique = std::collections::HashSet::new();
        let n = Permutation::exhaust(4)
            .into_iter()
            .map(|p| image(&p, hand))
            .inspect(|h| assert!(unique.insert(*h)))
            .count();
        assert!(n == 24);
    }

    #[test]
    fn card_keeps_rank() {
        let permutation = Permutation::random();
        for card in Hand::try_from("2c 7d 9h Ks As").unwrap() {
            assert_eq!(permutation.card(&card).rank(), card.rank());
        }
    }
}
