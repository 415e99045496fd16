use super::binomial::colex;
use super::configuration::Configuration;
use super::configuration::Counts;
use super::configuration::MAX_ROUND_CARDS;
use super::configuration::Shapes;
use super::configuration::count;
use super::cursor::Cursor;
use crate::MAX_RANKS;
use crate::MAX_ROUNDS;
use crate::MAX_SUITS;
use crate::cards::Card;

/// Where a raw per-suit count vector lands: the canonical configuration
/// it is a relabeling of, and the suit order that relabels it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pattern {
    pub(crate) configuration: usize,
    pub(crate) pi: [u8; MAX_SUITS],
}

/// Dense, suit-isomorphic ranking of multi-round deals.
///
/// Built for a deck of `suits × ranks` cards and a fixed number of cards
/// per round (hold'em: `[2, 3, 1, 1]`). Round `r` indexes every card dealt
/// through round `r`, with cards inside a round unordered. Two deals get the
/// same index for a round exactly when some relabeling of suits maps one
/// onto the other, and indices cover `0..size(r)` without gaps.
///
/// All tables are built here, once; indexing afterwards only reads them,
/// so one instance serves any number of threads.
#[derive(Debug, Clone)]
pub struct Indexer {
    suits: usize,
    ranks: usize,
    cards: Vec<usize>,
    sizes: Vec<u64>,
    colex: Vec<u64>,
    configurations: Vec<Vec<Configuration>>,
    patterns: Vec<Vec<Pattern>>,
}

impl Indexer {
    pub fn new(suits: usize, ranks: usize, cards: &[usize]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (1..=MAX_SUITS).contains(&suits),
            "indexer needs 1..={} suits, found {}",
            MAX_SUITS,
            suits
        );
        anyhow::ensure!(
            (1..=MAX_RANKS).contains(&ranks),
            "indexer needs 1..={} ranks, found {}",
            MAX_RANKS,
            ranks
        );
        anyhow::ensure!(
            (1..=MAX_ROUNDS).contains(&cards.len()),
            "indexer needs 1..={} rounds, found {}",
            MAX_ROUNDS,
            cards.len()
        );
        anyhow::ensure!(
            cards.iter().all(|n| *n <= MAX_ROUND_CARDS),
            "at most {} cards per round, found {:?}",
            MAX_ROUND_CARDS,
            cards
        );
        anyhow::ensure!(
            cards.iter().sum::<usize>() <= suits * ranks,
            "cannot deal {:?} from a {}x{} deck",
            cards,
            ranks,
            suits
        );
        let configurations = Configuration::tabulate(suits, ranks, cards);
        let patterns = Self::patterns(suits, ranks, cards, &configurations);
        let sizes = configurations
            .iter()
            .map(|shapes| {
                shapes
                    .last()
                    .map(|last| last.offset() + last.span(suits))
                    .unwrap_or_default()
            })
            .collect::<Vec<u64>>();
        let colex = (0..1u32 << ranks).map(|set| colex(set as u16)).collect();
        log::debug!(
            "indexer {}x{} {:?} spans {:?}",
            ranks,
            suits,
            cards,
            sizes
        );
        Ok(Self {
            suits,
            ranks,
            cards: cards.to_vec(),
            sizes,
            colex,
            configurations,
            patterns,
        })
    }

    /// Maps every raw count vector of every round to its configuration
    /// and canonical suit order.
    fn patterns(
        suits: usize,
        ranks: usize,
        cards: &[usize],
        configurations: &[Vec<Configuration>],
    ) -> Vec<Vec<Pattern>> {
        let rounds = cards.len();
        let mut patterns = (0..rounds)
            .map(|round| {
                let radix = (0..=round)
                    .map(|r| (cards[r] + 1).pow(suits as u32 - 1))
                    .product::<usize>();
                vec![Pattern::default(); radix]
            })
            .collect::<Vec<_>>();
        Shapes::new(suits, ranks, cards, false).walk(&mut |round, counts| {
            let slot = Self::slot(suits, cards, round, counts);
            let mut pi = [0, 1, 2, 3];
            pi[..suits].sort_by(|a, b| counts[*b as usize].cmp(&counts[*a as usize]));
            let mut sorted = Counts::default();
            for (i, suit) in pi.iter().enumerate().take(suits) {
                sorted[i] = counts[*suit as usize];
            }
            let configuration = configurations[round]
                .binary_search_by(|shape| sorted.cmp(shape.counts()))
                .unwrap_or_else(|_| unreachable!("every count vector sorts onto a configuration"));
            patterns[round][slot] = Pattern { configuration, pi };
        });
        patterns
    }

    /// Mixed-radix slot of a raw count vector. The last suit is implied
    /// by the others, so each round contributes `suits - 1` digits.
    fn slot(suits: usize, cards: &[usize], round: usize, counts: &Counts) -> usize {
        let mut slot = 0;
        let mut radix = 1;
        for r in 0..=round {
            let mut remaining = cards[r];
            for packed in counts.iter().take(suits - 1) {
                let n = count(*packed, cards.len(), r);
                slot += radix * n;
                radix *= remaining + 1;
                remaining -= n;
            }
        }
        slot
    }
}

/// Queries.
impl Indexer {
    pub fn suits(&self) -> usize {
        self.suits
    }
    pub fn ranks(&self) -> usize {
        self.ranks
    }
    pub fn rounds(&self) -> usize {
        self.cards.len()
    }
    /// Cards dealt in `round`.
    pub fn cards(&self, round: usize) -> usize {
        self.cards[round]
    }
    /// Distinct indices of `round`.
    pub fn size(&self, round: usize) -> u64 {
        assert!(
            round < self.rounds(),
            "round {} is out of range for a {} round indexer",
            round,
            self.rounds()
        );
        self.sizes[round]
    }
    /// Fresh incremental state, positioned before round 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }
    /// Index of the last round `cards` completes.
    pub fn index(&self, cards: &[Card]) -> u64 {
        let last = self.round_of(cards.len());
        let mut cursor = self.cursor();
        let mut start = 0;
        let mut index = 0;
        for round in 0..=last {
            let end = start + self.cards[round];
            index = cursor.next_round(&cards[start..end]);
            start = end;
        }
        index
    }
    /// Index of every round `cards` completes, in round order.
    pub fn index_all(&self, cards: &[Card]) -> Vec<u64> {
        let last = self.round_of(cards.len());
        let mut cursor = self.cursor();
        let mut start = 0;
        (0..=last)
            .map(|round| {
                let end = start + self.cards[round];
                let index = cursor.next_round(&cards[start..end]);
                start = end;
                index
            })
            .collect()
    }
    fn round_of(&self, n: usize) -> usize {
        self.cards
            .iter()
            .scan(0, |dealt, cards| {
                *dealt += cards;
                Some(*dealt)
            })
            .position(|dealt| dealt == n)
            .unwrap_or_else(|| panic!("{} cards do not complete a round of {:?}", n, self.cards))
    }
}

/// Table access for [`Cursor`].
impl Indexer {
    pub(crate) fn colex(&self, set: u16) -> u64 {
        self.colex[set as usize]
    }
    pub(crate) fn pattern(&self, round: usize, slot: usize) -> &Pattern {
        &self.patterns[round][slot]
    }
    pub(crate) fn configuration(&self, round: usize, id: usize) -> &Configuration {
        &self.configurations[round][id]
    }
}
