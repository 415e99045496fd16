use super::kind::Kind;
use crate::Chips;
use crate::Position;

/// Read-only queries an action abstraction asks of the rules engine.
///
/// The engine owns the authoritative game state; abstractions only ever see
/// it through this projection and never mutate it. Raise legality and bounds
/// are the engine's business: an abstraction treats `None` from
/// [`Rules::raise_bounds`] as "offer no raise", never as an error.
pub trait Rules {
    /// Chips each seat has committed this hand, over every round so far.
    fn spent(&self) -> &[Chips];
    /// Seat to act.
    fn actor(&self) -> Position;
    /// Current betting round.
    fn round(&self) -> usize;
    /// Minimum and maximum legal total commitment after a raise,
    /// or `None` if the actor may not raise.
    fn raise_bounds(&self) -> Option<(Chips, Chips)>;
    /// Whether a sizeless action of this kind is legal.
    fn is_legal(&self, kind: Kind) -> bool;

    /// Largest commitment of any seat.
    fn max_spent(&self) -> Chips {
        self.spent().iter().copied().max().unwrap_or_default()
    }
    /// Chips the actor must add to match the largest commitment.
    fn to_call(&self) -> Chips {
        self.max_spent() - self.spent()[self.actor()]
    }
    /// Chips in the middle, summed over every seat.
    fn pot(&self) -> Chips {
        self.spent().iter().sum()
    }
}
