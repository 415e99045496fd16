use super::kind::Kind;
use crate::Chips;

/// An abstract action offered to the solver.
///
/// `Raise` carries the *total* chips the actor will have committed over the
/// whole hand once the raise completes, not the increment.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Fold,
    Call,
    Raise(Chips),
}

impl Action {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Fold => Kind::Fold,
            Self::Call => Kind::Call,
            Self::Raise(_) => Kind::Raise,
        }
    }
    /// Total commitment after the action, meaningful only for raises.
    pub fn size(&self) -> Chips {
        match self {
            Self::Raise(size) => *size,
            _ => 0,
        }
    }
    pub fn is_raise(&self) -> bool {
        matches!(self, Self::Raise(_))
    }
}

/// the sizeless action of a given kind. raises start at zero and are
/// expected to be sized by the caller.
impl From<Kind> for Action {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Fold => Self::Fold,
            Kind::Call => Self::Call,
            Kind::Raise => Self::Raise(0),
        }
    }
}

/// str isomorphism, in the compact f / c / r<size> notation
impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().next() {
            Some('f') if s.len() == 1 => Ok(Self::Fold),
            Some('c') if s.len() == 1 => Ok(Self::Call),
            Some('r') => s[1..]
                .parse::<Chips>()
                .map(Self::Raise)
                .map_err(|e| anyhow::anyhow!("invalid raise size in {}: {}", s, e)),
            _ => Err(anyhow::anyhow!("invalid action {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "f"),
            Self::Call => write!(f, "c"),
            Self::Raise(size) => write!(f, "r{}", size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for action in [Action::Fold, Action::Call, Action::Raise(140)] {
            let s = action.to_string();
            assert_eq!(action, Action::try_from(s.as_str()).unwrap());
        }
        assert!(Action::try_from("x").is_err());
        assert!(Action::try_from("r").is_err());
        assert!(Action::try_from("fold").is_err());
    }

    #[test]
    fn kinds() {
        assert_eq!(Action::Raise(5).kind(), Kind::Raise);
        assert_eq!(Action::from(Kind::Call), Action::Call);
        assert_eq!(Action::Fold.size(), 0);
        assert_eq!(Action::Raise(5).size(), 5);
    }
}
