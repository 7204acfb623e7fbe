use crate::errors::{CatalogError, CatalogResult};
use schema::{SpeciesData, SpeciesId};
use std::collections::HashMap;

/// Species lookup consumed by the engine. Implemented by the hosting
/// application; a missing id is its configuration error, and the engine
/// never substitutes invented stats for one.
pub trait SpeciesCatalog {
    fn species(&self, id: SpeciesId) -> CatalogResult<&SpeciesData>;
}

/// Map-backed catalog for hosts that keep the species table in memory, and
/// for tests. The engine performs no I/O; callers that store species as RON
/// hand the text to `from_ron_str`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    species: HashMap<SpeciesId, SpeciesData>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            species: HashMap::new(),
        }
    }

    pub fn from_species(entries: Vec<SpeciesData>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Parse a RON list of species definitions.
    pub fn from_ron_str(text: &str) -> CatalogResult<Self> {
        let entries: Vec<SpeciesData> =
            ron::from_str(text).map_err(|err| CatalogError::DataParseError(err.to_string()))?;
        Ok(Self::from_species(entries))
    }

    /// Insert or replace one species, keyed by its id.
    pub fn insert(&mut self, species: SpeciesData) {
        self.species.insert(species.id, species);
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl SpeciesCatalog for InMemoryCatalog {
    fn species(&self, id: SpeciesId) -> CatalogResult<&SpeciesData> {
        self.species.get(&id).ok_or(CatalogError::UnknownSpecies(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_RON: &str = r#"[
        (
            id: 1,
            name: "Emberling",
            types: [Fire],
            base_stats: (hp: 39, attack: 52, defense: 43, sp_attack: 60, sp_defense: 50, speed: 65),
            evolution: Some((evolves_into: 2, min_level: 16, cost: 500)),
        ),
        (
            id: 2,
            name: "Pyrewing",
            types: [Fire, Flying],
            base_stats: (hp: 58, attack: 64, defense: 58, sp_attack: 80, sp_defense: 65, speed: 80),
            evolution: None,
        ),
    ]"#;

    #[test]
    fn ron_catalog_round_trips_through_lookup() {
        let catalog = InMemoryCatalog::from_ron_str(CATALOG_RON).unwrap();

        assert_eq!(catalog.len(), 2);

        let emberling = catalog.species(SpeciesId(1)).unwrap();
        assert_eq!(emberling.name, "Emberling");
        assert_eq!(emberling.base_stats.speed, 65);
        let evolution = emberling.evolution.as_ref().unwrap();
        assert_eq!(evolution.evolves_into, SpeciesId(2));
        assert_eq!(evolution.min_level, 16);
        assert_eq!(evolution.cost, 500);

        let pyrewing = catalog.species(SpeciesId(2)).unwrap();
        assert_eq!(pyrewing.types.len(), 2);
    }

    #[test]
    fn unknown_species_is_a_structured_error() {
        let catalog = InMemoryCatalog::from_ron_str(CATALOG_RON).unwrap();

        let err = catalog.species(SpeciesId(99)).unwrap_err();
        assert_eq!(err, CatalogError::UnknownSpecies(SpeciesId(99)));
    }

    #[test]
    fn malformed_ron_reports_a_parse_error() {
        let err = InMemoryCatalog::from_ron_str("[(id: 1,").unwrap_err();
        assert!(matches!(err, CatalogError::DataParseError(_)));
    }

    #[test]
    fn insert_replaces_an_existing_entry() {
        let mut catalog = InMemoryCatalog::from_ron_str(CATALOG_RON).unwrap();
        let mut renamed = catalog.species(SpeciesId(1)).unwrap().clone();
        renamed.name = "Cinderling".to_string();

        catalog.insert(renamed);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.species(SpeciesId(1)).unwrap().name, "Cinderling");
    }
}
