use super::action::Action;
use super::actions::Actions;
use super::kind::Kind;
use super::rules::Rules;
use super::size::Size;
use crate::Chips;
use crate::MAX_ABSTRACT_ACTIONS;
use crate::game::Betting;
use crate::game::Config;
use serde::Deserialize;
use serde::Serialize;

/// Betting abstraction policy, from exhaustive to fold/all-in.
///
/// Every policy walks [`Kind::all`] in order, emits each legal sizeless
/// action it admits once, then expands a legal raise into its ascending
/// size ladder. Pot fractions are kept only when they land in
/// `min..max` and exceed the previous size; the all-in is always offered
/// when any raise is.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionAbstraction {
    /// One raise per legal chip amount. Only viable when raise ranges
    /// are tiny, as in limit games.
    Null,
    /// Fold, all-in.
    Fa,
    /// Fold, call, pot, all-in.
    #[default]
    Fcpa,
    /// Fold, call, half pot, all-in.
    Fcha,
    /// Fold, call, min, half pot, pot, all-in.
    Fcmhpa,
    /// Fold, call, min, quarter, half, three quarter pot, pot, all-in.
    Fcmqhtpa,
}

impl ActionAbstraction {
    pub const fn all() -> [Self; 6] {
        [
            Self::Null,
            Self::Fa,
            Self::Fcpa,
            Self::Fcha,
            Self::Fcmhpa,
            Self::Fcmqhtpa,
        ]
    }
    /// Ascending raise ladder. Empty for `Null`, which raises to every
    /// legal amount instead.
    pub fn sizes(&self) -> &'static [Size] {
        match self {
            Self::Null => &[],
            Self::Fa => &Size::FA,
            Self::Fcpa => &Size::FCPA,
            Self::Fcha => &Size::FCHA,
            Self::Fcmhpa => &Size::FCMHPA,
            Self::Fcmqhtpa => &Size::FCMQHTPA,
        }
    }
    /// Whether this policy ever offers an action of this kind.
    pub fn admits(&self, kind: Kind) -> bool {
        !matches!((self, kind), (Self::Fa, Kind::Call))
    }

    /// Abstract actions at the node described by `rules`, in
    /// fold, call, ascending raise order.
    pub fn actions<R: Rules + ?Sized>(&self, rules: &R) -> Actions {
        let mut actions = Actions::default();
        for kind in Kind::all()
            .into_iter()
            .filter(|k| self.admits(*k))
            .filter(|k| rules.is_legal(*k))
        {
            match kind {
                Kind::Fold => actions.push(Action::Fold),
                Kind::Call => actions.push(Action::Call),
                Kind::Raise => match rules.raise_bounds() {
                    Some(bounds) => self.raise(rules, bounds, &mut actions),
                    None => continue,
                },
            }
        }
        actions
    }

    fn raise<R: Rules + ?Sized>(&self, rules: &R, (min, max): (Chips, Chips), actions: &mut Actions) {
        if let Self::Null = self {
            return (min..=max).for_each(|chips| actions.push(Action::Raise(chips)));
        }
        let mut last = None::<Chips>;
        for size in self.sizes().iter().copied() {
            let chips = size.into_chips(rules, (min, max));
            match size {
                Size::Shove => actions.push(Action::Raise(max)),
                _ if chips < min || chips >= max => continue,
                _ if last.is_some_and(|prev| chips <= prev) => continue,
                _ => {
                    actions.push(Action::Raise(chips));
                    last = Some(chips);
                }
            }
        }
    }
}

/// Deployment checks.
impl ActionAbstraction {
    /// Most actions this policy can emit at any node of `config`.
    pub fn capacity(&self, config: &Config) -> usize {
        let sizeless = [Kind::Fold, Kind::Call]
            .into_iter()
            .filter(|k| self.admits(*k))
            .count();
        let raising = (0..config.rounds()).any(|r| config.raises(r) > 0);
        match (self, raising) {
            (_, false) => sizeless,
            (Self::Null, true) => sizeless + Self::range(config),
            (_, true) => sizeless + self.sizes().len(),
        }
    }
    /// Fails when some node of `config` could overflow [`Actions`].
    /// Run once before a policy is paired with a game.
    pub fn validate(&self, config: &Config) -> anyhow::Result<()> {
        let capacity = self.capacity(config);
        log::debug!("{} emits at most {} actions in {}", self, capacity, config);
        if capacity > MAX_ABSTRACT_ACTIONS {
            anyhow::bail!(
                "{} may emit {} actions in {}, capacity is {}: coarsen the action abstraction",
                self,
                capacity,
                config,
                MAX_ABSTRACT_ACTIONS
            );
        }
        Ok(())
    }
    /// Widest legal raise range in chips. Limit bounds collapse to a single
    /// amount; no-limit bounds can span a whole stack.
    fn range(config: &Config) -> usize {
        match config.betting() {
            Betting::Limit => 1,
            Betting::NoLimit => config.stacks().iter().copied().max().unwrap_or_default().max(1) as usize,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for ActionAbstraction {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "fa" => Ok(Self::Fa),
            "fcpa" => Ok(Self::Fcpa),
            "fcha" => Ok(Self::Fcha),
            "fcmhpa" => Ok(Self::Fcmhpa),
            "fcmqhtpa" => Ok(Self::Fcmqhtpa),
            _ => Err(anyhow::anyhow!("unknown action abstraction: {}", s)),
        }
    }
}

impl std::fmt::Display for ActionAbstraction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Fa => write!(f, "fa"),
            Self::Fcpa => write!(f, "fcpa"),
            Self::Fcha => write!(f, "fcha"),
            Self::Fcmhpa => write!(f, "fcmhpa"),
            Self::Fcmqhtpa => write!(f, "fcmqhtpa"),
        }
    }
}
