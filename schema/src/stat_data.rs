use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The six persistent stats every creature carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatName::Hp => write!(f, "HP"),
            StatName::Attack => write!(f, "Attack"),
            StatName::Defense => write!(f, "Defense"),
            StatName::SpAttack => write!(f, "Special Attack"),
            StatName::SpDefense => write!(f, "Special Defense"),
            StatName::Speed => write!(f, "Speed"),
        }
    }
}

/// Species-level stat foundation, supplied by the species catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn get(&self, stat: StatName) -> u8 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpAttack => self.sp_attack,
            StatName::SpDefense => self.sp_defense,
            StatName::Speed => self.speed,
        }
    }
}

/// Concrete derived stats for one creature at its current level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl StatBlock {
    pub fn get(&self, stat: StatName) -> u16 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpAttack => self.sp_attack,
            StatName::SpDefense => self.sp_defense,
            StatName::Speed => self.speed,
        }
    }
}

/// Hidden per-stat quality rolls, fixed at creature creation.
/// Each component is constrained to [0, 31].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvSet {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl IvSet {
    pub fn get(&self, stat: StatName) -> u8 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpAttack => self.sp_attack,
            StatName::SpDefense => self.sp_defense,
            StatName::Speed => self.speed,
        }
    }

    /// Uniform IV set, mostly useful for tests and prefab rosters.
    pub fn uniform(value: u8) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            sp_attack: value,
            sp_defense: value,
            speed: value,
        }
    }
}
