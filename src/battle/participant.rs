use crate::creature::CreatureInstance;
use schema::{ElementType, MoveData, SpeciesData, SpeciesId, StatBlock, StatusAilment};
use serde::{Deserialize, Serialize};

/// One assigned move and its remaining uses for a single battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub move_data: MoveData,
    pub uses_left: u8,
}

impl MoveSlot {
    pub fn new(move_data: MoveData) -> Self {
        let uses_left = move_data.max_uses;
        Self {
            move_data,
            uses_left,
        }
    }

    /// Spend one use. Returns false when the slot is already empty.
    pub fn spend_use(&mut self) -> bool {
        if self.uses_left == 0 {
            return false;
        }
        self.uses_left -= 1;
        true
    }
}

/// Creature snapshot used for one battle. Copies everything combat needs at
/// session start; the owning CreatureInstance is untouched for the whole
/// fight, so a battle can never corrupt a stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleParticipant {
    pub owner_id: String,
    pub species: SpeciesId,
    pub name: String,
    pub level: u8,
    pub types: Vec<ElementType>,
    pub stats: StatBlock,
    pub current_hp: u16,
    /// Battle-local ailment; the first one to land sticks.
    pub status: Option<StatusAilment>,
    pub moves: Vec<MoveSlot>,
}

impl BattleParticipant {
    /// Snapshot a creature for battle. Enters at the creature's current HP;
    /// the display name prefers the nickname over the species name.
    pub fn from_creature(
        owner_id: &str,
        creature: &CreatureInstance,
        species: &SpeciesData,
        moves: Vec<MoveData>,
    ) -> Self {
        Self {
            owner_id: owner_id.to_string(),
            species: species.id,
            name: creature
                .nickname
                .clone()
                .unwrap_or_else(|| species.name.clone()),
            level: creature.level,
            types: species.types.clone(),
            stats: creature.stats.clone(),
            current_hp: creature.current_hp,
            status: None,
            moves: moves.into_iter().map(MoveSlot::new).collect(),
        }
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn apply_damage(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Restore HP, clamped to the snapshot's max.
    pub fn heal(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.stats.hp);
    }
}
