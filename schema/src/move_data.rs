use crate::element_types::ElementType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

/// Battle-local ailment a status move can inflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusAilment {
    Sleep,
    Poison,
    Burn,
    Freeze,
    Paralysis,
}

impl fmt::Display for StatusAilment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusAilment::Sleep => write!(f, "fell asleep"),
            StatusAilment::Poison => write!(f, "was poisoned"),
            StatusAilment::Burn => write!(f, "was burned"),
            StatusAilment::Freeze => write!(f, "was frozen solid"),
            StatusAilment::Paralysis => write!(f, "was paralyzed"),
        }
    }
}

/// What a move does when it resolves. Closed on purpose: resolution matches
/// this exhaustively, so a new move kind cannot be added without deciding
/// its battle behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEffect {
    Damage { power: u8 },
    Heal { amount: u16 },
    Status { effect: StatusAilment },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub move_type: ElementType,
    pub category: MoveCategory,
    pub accuracy: u8,
    pub max_uses: u8,
    pub effect: MoveEffect,
}

impl MoveData {
    /// Damaging move. `category` should be Physical or Special; it selects
    /// the attack/defense stat pair at resolution time.
    pub fn damage(
        name: &str,
        move_type: ElementType,
        category: MoveCategory,
        power: u8,
        accuracy: u8,
        max_uses: u8,
    ) -> Self {
        Self {
            name: name.to_string(),
            move_type,
            category,
            accuracy,
            max_uses,
            effect: MoveEffect::Damage { power },
        }
    }

    /// Self-targeted recovery move. Never rolls accuracy.
    pub fn heal(name: &str, move_type: ElementType, amount: u16, max_uses: u8) -> Self {
        Self {
            name: name.to_string(),
            move_type,
            category: MoveCategory::Status,
            accuracy: 100,
            max_uses,
            effect: MoveEffect::Heal { amount },
        }
    }

    /// Ailment-inflicting move.
    pub fn status(
        name: &str,
        move_type: ElementType,
        effect: StatusAilment,
        accuracy: u8,
        max_uses: u8,
    ) -> Self {
        Self {
            name: name.to_string(),
            move_type,
            category: MoveCategory::Status,
            accuracy,
            max_uses,
            effect: MoveEffect::Status { effect },
        }
    }

    /// Base power, 0 for non-damaging moves.
    pub fn power(&self) -> u8 {
        match self.effect {
            MoveEffect::Damage { power } => power,
            MoveEffect::Heal { .. } | MoveEffect::Status { .. } => 0,
        }
    }
}
