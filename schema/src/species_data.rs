use crate::element_types::ElementType;
use crate::stat_data::BaseStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque species identifier. The engine never interprets it; the species
/// catalog collaborator owns the numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u16);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

/// Level-gated transition into a successor species. The cost is the currency
/// price the hosting application collects; the engine only reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionData {
    pub evolves_into: SpeciesId,
    pub min_level: u8,
    pub cost: u32,
}

/// Immutable species definition, supplied by the catalog collaborator.
/// `types` holds one or two elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: SpeciesId,
    pub name: String,
    pub types: Vec<ElementType>,
    pub base_stats: BaseStats,
    pub evolution: Option<EvolutionData>,
}
