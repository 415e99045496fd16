use super::binomial::choose;
use crate::MAX_SUITS;

/// Per-suit card counts over the rounds dealt so far.
///
/// Each suit's counts are packed one nibble per round, round 0 in the
/// highest nibble of the deal, so comparing packed values compares
/// count histories lexicographically.
pub type Counts = [u32; MAX_SUITS];

/// Bits per round in a packed [`Counts`] entry.
const NIBBLE: usize = 4;

/// Largest card count a single round can pack.
pub const MAX_ROUND_CARDS: usize = (1 << NIBBLE) - 1;

/// Cards of one suit dealt in `round` of a `rounds`-round deal.
pub(crate) fn count(packed: u32, rounds: usize, round: usize) -> usize {
    (packed >> (NIBBLE * (rounds - round - 1)) & MAX_ROUND_CARDS as u32) as usize
}

/// One canonical shape of a deal up to some round: suits sorted by
/// descending count history, with the size of each suit's rank space
/// and the first index of the block this shape owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    counts: Counts,
    sizes: [u64; MAX_SUITS],
    offset: u64,
}

impl Configuration {
    /// Sizes each suit's rank space through `round`. The offset is filled
    /// in once the whole round has been tabulated.
    fn new(counts: Counts, suits: usize, ranks: usize, rounds: usize, round: usize) -> Self {
        let mut sizes = [1; MAX_SUITS];
        for (suit, size) in sizes.iter_mut().enumerate().take(suits) {
            let mut remaining = ranks as u64;
            for r in 0..=round {
                let n = count(counts[suit], rounds, r) as u64;
                *size *= choose(remaining, n);
                remaining -= n;
            }
        }
        Self {
            counts,
            sizes,
            offset: 0,
        }
    }
    pub fn counts(&self) -> &Counts {
        &self.counts
    }
    /// Colex rank spaces per suit, in canonical suit order.
    pub fn sizes(&self) -> &[u64; MAX_SUITS] {
        &self.sizes
    }
    pub fn offset(&self) -> u64 {
        self.offset
    }
    /// Exclusive end of the run of suits tied with `suit`.
    pub fn group(&self, suit: usize, suits: usize) -> usize {
        (suit + 1..suits)
            .find(|s| self.counts[*s] != self.counts[suit])
            .unwrap_or(suits)
    }
    /// Indices this shape contributes: tied suits of rank space `size`
    /// are an unordered multiset, so a run of `k` contributes C(size + k - 1, k).
    pub fn span(&self, suits: usize) -> u64 {
        let mut span = 1;
        let mut suit = 0;
        while suit < suits {
            let end = self.group(suit, suits);
            let k = (end - suit) as u64;
            span *= choose(self.sizes[suit] + k - 1, k);
            suit = end;
        }
        span
    }

    /// Canonical shapes of every round, each round sorted in descending
    /// count order with offsets assigned.
    pub fn tabulate(suits: usize, ranks: usize, cards: &[usize]) -> Vec<Vec<Self>> {
        let rounds = cards.len();
        let mut table = vec![Vec::new(); rounds];
        Shapes::new(suits, ranks, cards, true).walk(&mut |round, counts| {
            table[round].push(Self::new(*counts, suits, ranks, rounds, round))
        });
        for (round, shapes) in table.iter_mut().enumerate() {
            shapes.sort_by(|a, b| b.counts.cmp(&a.counts));
            let mut offset = 0;
            for shape in shapes.iter_mut() {
                shape.offset = offset;
                offset += shape.span(suits);
            }
            log::debug!(
                "round {} has {} suit configurations over {} indices",
                round,
                shapes.len(),
                offset
            );
        }
        table
    }
}

/// Depth-first walk over per-suit count vectors.
///
/// Every round deals its cards among the suits without overfilling any
/// suit's ranks. When `canonical`, a suit may never exceed the count
/// history of the suit before it, which yields one representative per
/// suit relabeling.
pub struct Shapes<'a> {
    suits: usize,
    ranks: usize,
    cards: &'a [usize],
    canonical: bool,
}

impl<'a> Shapes<'a> {
    pub fn new(suits: usize, ranks: usize, cards: &'a [usize], canonical: bool) -> Self {
        Self {
            suits,
            ranks,
            cards,
            canonical,
        }
    }
    /// Calls `observe(round, counts)` once per shape of every round.
    pub fn walk<F: FnMut(usize, &Counts)>(&self, observe: &mut F) {
        let tied = (1u32 << self.suits) - 2;
        let mut used = [0; MAX_SUITS];
        let mut counts = [0; MAX_SUITS];
        self.descend(0, self.cards[0], 0, tied, &mut used, &mut counts, observe);
    }

    #[allow(clippy::too_many_arguments)]
    fn descend<F: FnMut(usize, &Counts)>(
        &self,
        round: usize,
        remaining: usize,
        suit: usize,
        tied: u32,
        used: &mut [usize; MAX_SUITS],
        counts: &mut Counts,
        observe: &mut F,
    ) {
        if suit == self.suits {
            observe(round, counts);
            if round + 1 < self.cards.len() {
                let next = self.cards[round + 1];
                self.descend(round + 1, next, 0, tied, used, counts, observe);
            }
            return;
        }
        let rounds = self.cards.len();
        let shift = NIBBLE * (rounds - round - 1);
        let min = if suit == self.suits - 1 { remaining } else { 0 };
        let mut max = remaining.min(self.ranks - used[suit]);
        let equal = self.canonical && tied & (1 << suit) != 0;
        let previous = if equal {
            count(counts[suit - 1], rounds, round)
        } else {
            usize::MAX
        };
        max = max.min(previous);
        let (packed, spent) = (counts[suit], used[suit]);
        for n in min..=max {
            let still = (equal && n == previous) as u32;
            let tied = (tied & !(1 << suit)) | still << suit;
            counts[suit] = packed | (n as u32) << shift;
            used[suit] = spent + n;
            self.descend(round, remaining - n, suit + 1, tied, used, counts, observe);
        }
        counts[suit] = packed;
        used[suit] = spent;
    }
}
