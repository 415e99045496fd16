use super::kind::Kind;
use super::rules::Rules;
use crate::Chips;
use crate::Position;
use crate::game::Betting;
use crate::game::Config;

/// An owned snapshot of one betting node.
///
/// This is the projection a caller builds from its own engine state to ask
/// for abstract actions. By default folding is legal exactly when there is
/// something to call, calling is always legal, and raising is not; the
/// builder methods override each of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    spent: Vec<Chips>,
    actor: Position,
    round: usize,
    bounds: Option<(Chips, Chips)>,
    fold: bool,
    call: bool,
}

impl Spot {
    pub fn new(spent: Vec<Chips>, actor: Position) -> Self {
        assert!(actor < spent.len(), "actor {} is not seated", actor);
        let fold = spent.iter().copied().max().unwrap_or_default() > spent[actor];
        Self {
            spent,
            actor,
            round: 0,
            bounds: None,
            fold,
            call: true,
        }
    }
    /// Allows raises to any total commitment in `min..=max`.
    pub fn raising(mut self, min: Chips, max: Chips) -> Self {
        assert!(min <= max, "raise bounds {}..={} are inverted", min, max);
        self.bounds = Some((min, max));
        self
    }
    pub fn during(mut self, round: usize) -> Self {
        self.round = round;
        self
    }
    pub fn folding(mut self, legal: bool) -> Self {
        self.fold = legal;
        self
    }
    pub fn calling(mut self, legal: bool) -> Self {
        self.call = legal;
        self
    }
    /// Raise bounds a standard engine would report for `config`: the
    /// minimum re-raise adds at least the larger of the last increment and
    /// the big blind, the maximum is the actor's whole stack. Under limit
    /// betting both bounds collapse onto the minimum.
    pub fn standard(self, config: &Config, increment: Chips) -> Self {
        let stack = config.stacks()[self.actor];
        let blind = config.blinds().iter().copied().max().unwrap_or_default();
        let min = self.max_spent() + increment.max(blind);
        match config.betting() {
            _ if self.max_spent() >= stack => self,
            Betting::NoLimit => self.raising(min.min(stack), stack),
            Betting::Limit if min <= stack => self.raising(min, min),
            Betting::Limit => self,
        }
    }
}

impl Rules for Spot {
    fn spent(&self) -> &[Chips] {
        &self.spent
    }
    fn actor(&self) -> Position {
        self.actor
    }
    fn round(&self) -> usize {
        self.round
    }
    fn raise_bounds(&self) -> Option<(Chips, Chips)> {
        self.bounds
    }
    fn is_legal(&self, kind: Kind) -> bool {
        match kind {
            Kind::Fold => self.fold,
            Kind::Call => self.call,
            Kind::Raise => self.bounds.is_some(),
        }
    }
}
