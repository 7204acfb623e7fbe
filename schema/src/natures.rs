use crate::stat_data::StatName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Personality trait rolled once at creature creation. A non-neutral nature
/// raises exactly one stat by 10% and lowers exactly one other by 10%;
/// neither is ever HP. Bashful, Docile, and Hardy are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Adamant,
    Bashful,
    Bold,
    Brave,
    Calm,
    Careful,
    Docile,
    Gentle,
    Hardy,
    Hasty,
    Impish,
    Jolly,
    Lax,
    Lonely,
    Mild,
    Modest,
    Naive,
    Naughty,
    Quiet,
    Rash,
    Relaxed,
    Sassy,
    Timid,
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Nature {
    /// Every nature in declaration order, indexable for uniform selection.
    pub const ALL: [Nature; 23] = [
        Nature::Adamant,
        Nature::Bashful,
        Nature::Bold,
        Nature::Brave,
        Nature::Calm,
        Nature::Careful,
        Nature::Docile,
        Nature::Gentle,
        Nature::Hardy,
        Nature::Hasty,
        Nature::Impish,
        Nature::Jolly,
        Nature::Lax,
        Nature::Lonely,
        Nature::Mild,
        Nature::Modest,
        Nature::Naive,
        Nature::Naughty,
        Nature::Quiet,
        Nature::Rash,
        Nature::Relaxed,
        Nature::Sassy,
        Nature::Timid,
    ];

    /// The stat this nature boosts by 10%, if any.
    pub fn increased_stat(&self) -> Option<StatName> {
        use Nature::*;
        match self {
            Adamant | Brave | Lonely | Naughty => Some(StatName::Attack),
            Bold | Impish | Lax | Relaxed => Some(StatName::Defense),
            Mild | Modest | Quiet | Rash => Some(StatName::SpAttack),
            Calm | Careful | Gentle | Sassy => Some(StatName::SpDefense),
            Hasty | Jolly | Naive | Timid => Some(StatName::Speed),
            Bashful | Docile | Hardy => None,
        }
    }

    /// The stat this nature cuts by 10%, if any.
    pub fn decreased_stat(&self) -> Option<StatName> {
        use Nature::*;
        match self {
            Bold | Calm | Modest | Timid => Some(StatName::Attack),
            Gentle | Hasty | Lonely | Mild => Some(StatName::Defense),
            Adamant | Careful | Impish | Jolly => Some(StatName::SpAttack),
            Lax | Naive | Naughty | Rash => Some(StatName::SpDefense),
            Brave | Quiet | Relaxed | Sassy => Some(StatName::Speed),
            Bashful | Docile | Hardy => None,
        }
    }

    /// Multiplier this nature applies to the given stat: 1.1, 0.9, or 1.0.
    pub fn multiplier_for(&self, stat: StatName) -> f64 {
        if self.increased_stat() == Some(stat) {
            1.1
        } else if self.decreased_stat() == Some(stat) {
            0.9
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn there_are_exactly_twenty_three_natures() {
        assert_eq!(Nature::ALL.len(), 23);
    }

    #[test]
    fn boost_and_cut_are_distinct_and_never_hp() {
        for nature in Nature::ALL {
            let up = nature.increased_stat();
            let down = nature.decreased_stat();
            // A nature is either fully neutral or shifts exactly two stats.
            assert_eq!(up.is_some(), down.is_some(), "{} is half-neutral", nature);
            if let (Some(up), Some(down)) = (up, down) {
                assert_ne!(up, down, "{} boosts and cuts the same stat", nature);
                assert_ne!(up, StatName::Hp);
                assert_ne!(down, StatName::Hp);
            }
        }
    }

    #[test]
    fn multiplier_reflects_the_designated_stats() {
        assert_eq!(Nature::Adamant.multiplier_for(StatName::Attack), 1.1);
        assert_eq!(Nature::Adamant.multiplier_for(StatName::SpAttack), 0.9);
        assert_eq!(Nature::Adamant.multiplier_for(StatName::Speed), 1.0);
        assert_eq!(Nature::Adamant.multiplier_for(StatName::Hp), 1.0);
        for stat in StatName::iter() {
            assert_eq!(Nature::Hardy.multiplier_for(stat), 1.0);
        }
    }
}
