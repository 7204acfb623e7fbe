use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Complete (attacking, defending) multiplier table. Built once with every
/// pair defaulted to 1.0, then the exceptional matchups written over it, so
/// lookups are total and an unlisted pair can never fall through to a
/// surprise value.
static TYPE_CHART: LazyLock<[[f32; ElementType::COUNT]; ElementType::COUNT]> =
    LazyLock::new(|| {
        use ElementType::*;

        let mut chart = [[1.0; ElementType::COUNT]; ElementType::COUNT];
        {
            let mut set = |attacking: ElementType, defending: ElementType, multiplier: f32| {
                chart[attacking.index()][defending.index()] = multiplier;
            };

            // Normal
            set(Normal, Rock, 0.5);
            set(Normal, Ghost, 0.0);

            // Fire
            set(Fire, Fire, 0.5);
            set(Fire, Water, 0.5);
            set(Fire, Rock, 0.5);
            set(Fire, Dragon, 0.5);
            set(Fire, Grass, 2.0);
            set(Fire, Ice, 2.0);
            set(Fire, Bug, 2.0);

            // Water
            set(Water, Water, 0.5);
            set(Water, Grass, 0.5);
            set(Water, Dragon, 0.5);
            set(Water, Fire, 2.0);
            set(Water, Ground, 2.0);
            set(Water, Rock, 2.0);

            // Electric
            set(Electric, Electric, 0.5);
            set(Electric, Grass, 0.5);
            set(Electric, Dragon, 0.5);
            set(Electric, Ground, 0.0);
            set(Electric, Water, 2.0);
            set(Electric, Flying, 2.0);

            // Grass
            set(Grass, Fire, 0.5);
            set(Grass, Grass, 0.5);
            set(Grass, Poison, 0.5);
            set(Grass, Flying, 0.5);
            set(Grass, Bug, 0.5);
            set(Grass, Dragon, 0.5);
            set(Grass, Water, 2.0);
            set(Grass, Ground, 2.0);
            set(Grass, Rock, 2.0);

            // Ice
            set(Ice, Fire, 0.5);
            set(Ice, Water, 0.5);
            set(Ice, Ice, 0.5);
            set(Ice, Grass, 2.0);
            set(Ice, Ground, 2.0);
            set(Ice, Flying, 2.0);
            set(Ice, Dragon, 2.0);

            // Fighting
            set(Fighting, Poison, 0.5);
            set(Fighting, Flying, 0.5);
            set(Fighting, Psychic, 0.5);
            set(Fighting, Bug, 0.5);
            set(Fighting, Ghost, 0.0);
            set(Fighting, Normal, 2.0);
            set(Fighting, Ice, 2.0);
            set(Fighting, Rock, 2.0);

            // Poison
            set(Poison, Poison, 0.5);
            set(Poison, Ground, 0.5);
            set(Poison, Rock, 0.5);
            set(Poison, Ghost, 0.5);
            set(Poison, Grass, 2.0);

            // Ground
            set(Ground, Grass, 0.5);
            set(Ground, Bug, 0.5);
            set(Ground, Flying, 0.0);
            set(Ground, Fire, 2.0);
            set(Ground, Electric, 2.0);
            set(Ground, Poison, 2.0);
            set(Ground, Rock, 2.0);

            // Flying
            set(Flying, Electric, 0.5);
            set(Flying, Rock, 0.5);
            set(Flying, Grass, 2.0);
            set(Flying, Fighting, 2.0);
            set(Flying, Bug, 2.0);

            // Psychic
            set(Psychic, Psychic, 0.5);
            set(Psychic, Fighting, 2.0);
            set(Psychic, Poison, 2.0);

            // Bug
            set(Bug, Fire, 0.5);
            set(Bug, Fighting, 0.5);
            set(Bug, Poison, 0.5);
            set(Bug, Flying, 0.5);
            set(Bug, Ghost, 0.5);
            set(Bug, Grass, 2.0);
            set(Bug, Psychic, 2.0);

            // Rock
            set(Rock, Fighting, 0.5);
            set(Rock, Ground, 0.5);
            set(Rock, Fire, 2.0);
            set(Rock, Ice, 2.0);
            set(Rock, Flying, 2.0);
            set(Rock, Bug, 2.0);

            // Ghost
            set(Ghost, Normal, 0.0);
            set(Ghost, Psychic, 0.5);
            set(Ghost, Ghost, 2.0);

            // Dragon
            set(Dragon, Dragon, 2.0);
        }
        chart
    });

impl ElementType {
    pub const COUNT: usize = 15;

    fn index(self) -> usize {
        self as usize
    }

    /// Effectiveness multiplier for one attacking type against one defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn effectiveness(attacking: ElementType, defending: ElementType) -> f32 {
        TYPE_CHART[attacking.index()][defending.index()]
    }

    /// Combined multiplier against a defender's full typing. Dual-typed
    /// defenders multiply twice, so 4.0, 0.25, and 0.0 are all reachable.
    pub fn effectiveness_against(attacking: ElementType, defending: &[ElementType]) -> f32 {
        defending
            .iter()
            .map(|defend| Self::effectiveness(attacking, *defend))
            .product()
    }
}

/// Coarse label for a type multiplier, for battle messages and hosts that
/// only care which bucket a hit landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    Immune,
    NotVery,
    Normal,
    Super,
}

impl Effectiveness {
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Effectiveness::Immune
        } else if multiplier < 1.0 {
            Effectiveness::NotVery
        } else if multiplier > 1.0 {
            Effectiveness::Super
        } else {
            Effectiveness::Normal
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effectiveness::Immune => write!(f, "immune"),
            Effectiveness::NotVery => write!(f, "not very effective"),
            Effectiveness::Normal => write!(f, "normal"),
            Effectiveness::Super => write!(f, "super effective"),
        }
    }
}
