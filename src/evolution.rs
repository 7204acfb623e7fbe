use crate::creature::CreatureInstance;
use crate::errors::EvolutionIneligible;
use crate::stats::{calculate_stat_block, rescale_hp};
use schema::{SpeciesData, SpeciesId, StatBlock};

/// A cleared evolution: which species the creature becomes, which duplicate
/// burns as fuel, and what it will cost. The plan only reports the cost;
/// debiting the owner's funds is the host's side of the bargain, as is
/// removing the fuel creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionPlan {
    pub evolves_into: SpeciesId,
    /// Index into the duplicate list passed to `plan_evolution`.
    pub fuel_index: usize,
    pub cost: u32,
}

/// Record of an executed evolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionReport {
    pub previous_species: SpeciesId,
    pub new_species: SpeciesId,
    pub stats: StatBlock,
}

/// Checks evolution eligibility and rewrites a creature into its successor
/// species. Collection state (duplicates, funds) comes in as arguments; the
/// resolver holds none of it.
pub struct EvolutionResolver;

impl EvolutionResolver {
    /// Check every gate for evolving `creature` and produce a plan.
    ///
    /// Gates are checked in a fixed order and the first failure wins:
    /// successor configured, level reached, duplicate available, funds
    /// sufficient. `duplicates` lists the owner's other instances of the
    /// same species, oldest first. Without a designated fuel index the
    /// newest duplicate burns; a designated index outside the list is
    /// treated as having no duplicate to give.
    pub fn plan_evolution(
        creature: &CreatureInstance,
        species: &SpeciesData,
        duplicates: &[&CreatureInstance],
        designated_fuel: Option<usize>,
        available_funds: u32,
    ) -> Result<EvolutionPlan, EvolutionIneligible> {
        let evolution = species
            .evolution
            .as_ref()
            .ok_or(EvolutionIneligible::NoSuccessor)?;

        if creature.level < evolution.min_level {
            return Err(EvolutionIneligible::LevelTooLow {
                required: evolution.min_level,
                actual: creature.level,
            });
        }

        if duplicates.is_empty() {
            return Err(EvolutionIneligible::NoDuplicate);
        }
        let fuel_index = match designated_fuel {
            Some(index) if index < duplicates.len() => index,
            Some(_) => return Err(EvolutionIneligible::NoDuplicate),
            None => duplicates.len() - 1,
        };

        if available_funds < evolution.cost {
            return Err(EvolutionIneligible::InsufficientFunds {
                required: evolution.cost,
                available: available_funds,
            });
        }

        Ok(EvolutionPlan {
            evolves_into: evolution.evolves_into,
            fuel_index,
            cost: evolution.cost,
        })
    }

    /// Rewrite `creature` into `target`. Level, experience, IVs, nature,
    /// nickname and banked stat points all survive; the stat block is
    /// recomputed from the target's bases and current HP carries over
    /// proportionally.
    pub fn evolve(creature: &mut CreatureInstance, target: &SpeciesData) -> EvolutionReport {
        let previous_species = creature.species;
        let old_max = creature.stats.hp;

        creature.species = target.id;
        creature.stats =
            calculate_stat_block(&target.base_stats, &creature.ivs, creature.level, creature.nature);
        creature.current_hp = rescale_hp(creature.current_hp, old_max, creature.stats.hp);

        EvolutionReport {
            previous_species,
            new_species: target.id,
            stats: creature.stats.clone(),
        }
    }
}
