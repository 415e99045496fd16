/// The three kinds of action a player can choose.
///
/// The declaration order is the enumeration order every action abstraction
/// follows: a node's fold comes first, then its call, then raises.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    Fold = 0,
    Call = 1,
    Raise = 2,
}

impl Kind {
    pub const fn all() -> [Self; 3] {
        [Self::Fold, Self::Call, Self::Raise]
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "raise"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order() {
        let all = Kind::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all[0], Kind::Fold);
        assert_eq!(all[2], Kind::Raise);
    }
}
