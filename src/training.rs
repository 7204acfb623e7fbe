use crate::creature::CreatureInstance;
use crate::stats::{calculate_stat_block, rescale_hp, MAX_LEVEL};
use schema::{SpeciesData, StatBlock};

/// Experience needed to advance one level. The curve is flat: every level
/// costs the same.
pub const XP_PER_LEVEL: u32 = 100;

/// Record of one training application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingResult {
    pub previous_level: u8,
    pub new_level: u8,
    pub levels_gained: u8,
    pub stats: StatBlock,
}

/// Applies experience gains and recomputes stats when a level is crossed.
pub struct TrainingResolver;

impl TrainingResolver {
    /// Advance a (level, experience) pair by a gain along the flat curve.
    ///
    /// Each crossed level resets the running counter to 0 before the
    /// remainder accumulates. At MAX_LEVEL the counter pins to 0 and
    /// further gain is inert, so a capped creature never shows partial
    /// progress toward a level that cannot exist.
    pub fn apply_experience(level: u8, experience: u32, xp_gain: u32) -> (u8, u32) {
        let mut level = level.clamp(1, MAX_LEVEL);
        let mut experience = experience.min(XP_PER_LEVEL - 1);
        if level == MAX_LEVEL {
            return (MAX_LEVEL, 0);
        }

        let mut remaining = xp_gain;
        while remaining > 0 && level < MAX_LEVEL {
            let needed = XP_PER_LEVEL - experience;
            if remaining >= needed {
                remaining -= needed;
                level += 1;
                experience = 0;
            } else {
                experience += remaining;
                remaining = 0;
            }
        }
        if level == MAX_LEVEL {
            experience = 0;
        }

        (level, experience)
    }

    /// Grant experience to a creature. On level-up the stat block is
    /// recomputed from base stats, IVs and nature at the new level, and
    /// current HP is carried over proportionally to the new maximum.
    pub fn train(
        creature: &mut CreatureInstance,
        species: &SpeciesData,
        xp_gain: u32,
    ) -> TrainingResult {
        let previous_level = creature.level;
        let (new_level, new_experience) =
            Self::apply_experience(creature.level, creature.experience, xp_gain);
        creature.level = new_level;
        creature.experience = new_experience;

        if new_level > previous_level {
            let old_max = creature.stats.hp;
            creature.stats =
                calculate_stat_block(&species.base_stats, &creature.ivs, new_level, creature.nature);
            creature.current_hp = rescale_hp(creature.current_hp, old_max, creature.stats.hp);
        }

        TrainingResult {
            previous_level,
            new_level,
            levels_gained: new_level - previous_level,
            stats: creature.stats.clone(),
        }
    }
}
