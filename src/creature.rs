use crate::rng::RandomSource;
use crate::stats::{calculate_stat_block, generate_ivs, MAX_LEVEL};
use schema::{IvSet, Nature, SpeciesData, SpeciesId, StatBlock};
use serde::{Deserialize, Serialize};

/// One owned creature. Created once with random hidden traits, then mutated
/// only by training (level, experience, stats) or evolution (species,
/// stats). The hosting application owns persistence and identity; the
/// engine never keeps long-lived references to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureInstance {
    pub species: SpeciesId,
    pub nickname: Option<String>,
    pub level: u8,
    pub experience: u32,
    pub ivs: IvSet,
    pub nature: Nature,
    pub stats: StatBlock,
    pub current_hp: u16,
    /// Free stat points earned separately from leveling. The engine only
    /// tracks the pool; what spending one buys is the host's rule.
    pub stat_points: u8,
}

impl CreatureInstance {
    /// Roll a brand-new creature: triangular IVs, a uniformly random
    /// nature, and a full stat block at the requested level.
    pub fn generate(species: &SpeciesData, level: u8, rng: &mut dyn RandomSource) -> Self {
        let ivs = generate_ivs(rng);
        let nature = random_nature(rng);
        Self::with_traits(species, level, ivs, nature)
    }

    /// Build a creature whose hidden traits are already known. Used by
    /// hosts rehydrating records and by tests that need fixed stats.
    pub fn with_traits(species: &SpeciesData, level: u8, ivs: IvSet, nature: Nature) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        let stats = calculate_stat_block(&species.base_stats, &ivs, level, nature);
        let current_hp = stats.hp;

        Self {
            species: species.id,
            nickname: None,
            level,
            experience: 0,
            ivs,
            nature,
            stats,
            current_hp,
            stat_points: 0,
        }
    }

    /// Clamp-set current HP into [0, max HP].
    pub fn set_current_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.stats.hp);
    }

    pub fn grant_stat_points(&mut self, amount: u8) {
        self.stat_points = self.stat_points.saturating_add(amount);
    }

    /// Withdraw from the free stat point pool. Returns false and leaves the
    /// pool untouched when it cannot cover the amount.
    pub fn take_stat_points(&mut self, amount: u8) -> bool {
        if self.stat_points >= amount {
            self.stat_points -= amount;
            true
        } else {
            false
        }
    }
}

/// Uniform pick over the full nature table.
fn random_nature(rng: &mut dyn RandomSource) -> Nature {
    let index = (rng.unit("Nature selection") * Nature::ALL.len() as f32) as usize;
    Nature::ALL[index.min(Nature::ALL.len() - 1)]
}
