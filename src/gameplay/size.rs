use super::rules::Rules;
use crate::Chips;

/// Abstract raise target.
///
/// - `Min`: the smallest legal raise
/// - `SPR(n, d)`: pot-relative sizing as fraction n/d of a pot-sized raise
///   (e.g. `SPR(1, 2)` = half pot)
/// - `Shove`: the largest legal raise, i.e. all-in
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Size {
    Min,
    SPR(Chips, Chips),
    Shove,
}

impl Size {
    /// Total commitment of a pot-sized raise: call, then raise by the pot
    /// that results, i.e. `pot_after_call + spent[actor] + to_call`.
    pub fn pot<R: Rules + ?Sized>(rules: &R) -> Chips {
        let call = rules.to_call();
        let pot = rules.pot() + call;
        pot + rules.spent()[rules.actor()] + call
    }
    /// Converts Size to a total commitment, given legal `(min, max)` bounds.
    ///
    /// Pot fractions are scaled in f64 and truncated toward zero, so an
    /// abstraction built here reproduces chip-for-chip across
    /// implementations that do the same.
    pub fn into_chips<R: Rules + ?Sized>(self, rules: &R, (min, max): (Chips, Chips)) -> Chips {
        match self {
            Self::Min => min,
            Self::Shove => max,
            Self::SPR(n, d) => (Self::pot(rules) as f64 * (n as f64 / d as f64)) as Chips,
        }
    }
}

/// Sizes order by the raise they describe: `Min` below every pot
/// fraction, `Shove` above them all. Equal fractions written with
/// different terms fall back to their terms, keeping the order total.
impl Ord for Size {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (Self::SPR(n1, d1), Self::SPR(n2, d2)) => (*n1 as i64 * *d2 as i64)
                .cmp(&(*n2 as i64 * *d1 as i64))
                .then(n1.cmp(n2))
                .then(d1.cmp(d2)),
            _ => self.tier().cmp(&other.tier()),
        }
    }
}
impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Size {
    fn tier(&self) -> u8 {
        match self {
            Self::Min => 0,
            Self::SPR(..) => 1,
            Self::Shove => 2,
        }
    }
}

#[rustfmt::skip]
impl Size {
    pub const FA      : [Self; 1] = [Self::Shove];                                                                                         // Fold, all-in
    pub const FCPA    : [Self; 2] = [Self::SPR(1, 1), Self::Shove];                                                                        // Fold, call, pot, all-in
    pub const FCHA    : [Self; 2] = [Self::SPR(1, 2), Self::Shove];                                                                        // Fold, call, half pot, all-in
    pub const FCMHPA  : [Self; 4] = [Self::Min, Self::SPR(1, 2), Self::SPR(1, 1), Self::Shove];                                            // Fold, call, min, half pot, pot, all-in
    pub const FCMQHTPA: [Self; 6] = [Self::Min, Self::SPR(1, 4), Self::SPR(1, 2), Self::SPR(3, 4), Self::SPR(1, 1), Self::Shove];          // Fold, call, min, 1/4, 1/2, 3/4, pot, all-in
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::SPR(n, d) => write!(f, "{}:{}", n, d),
            Self::Shove => write!(f, "allin"),
        }
    }
}

impl TryFrom<&str> for Size {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "min" => Ok(Self::Min),
            "allin" => Ok(Self::Shove),
            s => {
                let (n, d) = s
                    .split_once(':')
                    .ok_or_else(|| anyhow::anyhow!("invalid size format: {}", s))?;
                let n = n
                    .parse::<Chips>()
                    .map_err(|e| anyhow::anyhow!("invalid SPR numerator: {}", e))?;
                let d = d
                    .parse::<Chips>()
                    .map_err(|e| anyhow::anyhow!("invalid SPR denominator: {}", e))?;
                anyhow::ensure!(d > 0, "zero SPR denominator");
                Ok(Self::SPR(n, d))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Spot;

    /// pot after call 110, actor commits 20 + 10 more
    #[test]
    fn pot_sized_raise() {
        let spot = Spot::new(vec![20, 30, 30, 20], 0);
        assert_eq!(Size::pot(&spot), 140);
    }

    #[test]
    fn into_chips_bounds() {
        let spot = Spot::new(vec![20, 30, 30, 20], 0);
        assert_eq!(Size::Min.into_chips(&spot, (50, 500)), 50);
        assert_eq!(Size::Shove.into_chips(&spot, (50, 500)), 500);
    }

    #[test]
    fn into_chips_spr() {
        let spot = Spot::new(vec![20, 30, 30, 20], 0);
        assert_eq!(Size::SPR(1, 1).into_chips(&spot, (50, 500)), 140);
        assert_eq!(Size::SPR(1, 2).into_chips(&spot, (50, 500)), 70);
        assert_eq!(Size::SPR(1, 4).into_chips(&spot, (50, 500)), 35);
        assert_eq!(Size::SPR(3, 4).into_chips(&spot, (50, 500)), 105);
    }

    /// pot-sized raise of 9 chips: 2.25, 4.5 and 6.75 all round down
    #[test]
    fn into_chips_truncates() {
        let spot = Spot::new(vec![2, 3], 0);
        assert_eq!(Size::pot(&spot), 9);
        assert_eq!(Size::SPR(1, 4).into_chips(&spot, (1, 100)), 2);
        assert_eq!(Size::SPR(1, 2).into_chips(&spot, (1, 100)), 4);
        assert_eq!(Size::SPR(3, 4).into_chips(&spot, (1, 100)), 6);
    }

    #[test]
    fn ladders_ascend() {
        for ladder in [
            &Size::FA[..],
            &Size::FCPA[..],
            &Size::FCHA[..],
            &Size::FCMHPA[..],
            &Size::FCMQHTPA[..],
        ] {
            assert!(ladder.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(ladder.last(), Some(&Size::Shove));
        }
    }

    #[test]
    fn fractions_order_by_value() {
        assert!(Size::SPR(1, 4) < Size::SPR(1, 2));
        assert!(Size::SPR(1, 2) < Size::SPR(3, 4));
        assert!(Size::SPR(3, 4) < Size::SPR(1, 1));
        assert!(Size::SPR(1, 1) < Size::SPR(3, 2));
        assert!(Size::Min < Size::SPR(1, 4));
        assert!(Size::SPR(10, 1) < Size::Shove);
        assert_ne!(Size::SPR(1, 2).cmp(&Size::SPR(2, 4)), std::cmp::Ordering::Equal);
        assert_eq!(Size::FCMQHTPA.iter().max(), Some(&Size::Shove));
        assert_eq!(Size::FCMQHTPA[..5].iter().max(), Some(&Size::SPR(1, 1)));
    }

    #[test]
    fn string_roundtrip() {
        for size in Size::FCMQHTPA {
            let s = size.to_string();
            assert_eq!(Size::try_from(s.as_str()).unwrap(), size);
        }
        assert!(Size::try_from("1:0").is_err());
        assert!(Size::try_from("pot").is_err());
    }
}
