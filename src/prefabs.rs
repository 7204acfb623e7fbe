use crate::catalog::InMemoryCatalog;
use schema::{
    BaseStats, ElementType, EvolutionData, MoveCategory, MoveData, SpeciesData, SpeciesId,
    StatusAilment,
};

/// Built-in species roster for demos and tests. Hosts with a real data
/// source load their own catalog instead; nothing in the engine depends on
/// these particular entries.
///
/// Emberling's line is the reference evolution ladder; the rest cover the
/// type-chart corners (a dual type, an Electric immunity, a Ghost
/// immunity).

pub fn emberling() -> SpeciesData {
    SpeciesData {
        id: SpeciesId(1),
        name: "Emberling".to_string(),
        types: vec![ElementType::Fire],
        base_stats: BaseStats {
            hp: 39,
            attack: 52,
            defense: 43,
            sp_attack: 60,
            sp_defense: 50,
            speed: 65,
        },
        evolution: Some(EvolutionData {
            evolves_into: SpeciesId(2),
            min_level: 16,
            cost: 500,
        }),
    }
}

pub fn pyrewing() -> SpeciesData {
    SpeciesData {
        id: SpeciesId(2),
        name: "Pyrewing".to_string(),
        types: vec![ElementType::Fire, ElementType::Flying],
        base_stats: BaseStats {
            hp: 58,
            attack: 64,
            defense: 58,
            sp_attack: 80,
            sp_defense: 65,
            speed: 80,
        },
        evolution: None,
    }
}

pub fn aquatoad() -> SpeciesData {
    SpeciesData {
        id: SpeciesId(7),
        name: "Aquatoad".to_string(),
        types: vec![ElementType::Water],
        base_stats: BaseStats {
            hp: 44,
            attack: 48,
            defense: 65,
            sp_attack: 50,
            sp_defense: 64,
            speed: 43,
        },
        evolution: None,
    }
}

pub fn terralith() -> SpeciesData {
    SpeciesData {
        id: SpeciesId(9),
        name: "Terralith".to_string(),
        types: vec![ElementType::Ground, ElementType::Rock],
        base_stats: BaseStats {
            hp: 70,
            attack: 84,
            defense: 100,
            sp_attack: 35,
            sp_defense: 45,
            speed: 28,
        },
        evolution: None,
    }
}

pub fn stormray() -> SpeciesData {
    SpeciesData {
        id: SpeciesId(12),
        name: "Stormray".to_string(),
        types: vec![ElementType::Electric, ElementType::Flying],
        base_stats: BaseStats {
            hp: 52,
            attack: 45,
            defense: 50,
            sp_attack: 78,
            sp_defense: 62,
            speed: 91,
        },
        evolution: None,
    }
}

pub fn duskwisp() -> SpeciesData {
    SpeciesData {
        id: SpeciesId(20),
        name: "Duskwisp".to_string(),
        types: vec![ElementType::Ghost],
        base_stats: BaseStats {
            hp: 38,
            attack: 30,
            defense: 35,
            sp_attack: 72,
            sp_defense: 58,
            speed: 80,
        },
        evolution: None,
    }
}

pub fn tackle() -> MoveData {
    MoveData::damage("Tackle", ElementType::Normal, MoveCategory::Physical, 40, 100, 35)
}

pub fn ember() -> MoveData {
    MoveData::damage("Ember", ElementType::Fire, MoveCategory::Special, 40, 100, 25)
}

pub fn water_gun() -> MoveData {
    MoveData::damage("Water Gun", ElementType::Water, MoveCategory::Special, 40, 100, 25)
}

pub fn thunder_shock() -> MoveData {
    MoveData::damage(
        "Thunder Shock",
        ElementType::Electric,
        MoveCategory::Special,
        40,
        100,
        30,
    )
}

pub fn rock_hurl() -> MoveData {
    MoveData::damage("Rock Hurl", ElementType::Rock, MoveCategory::Physical, 75, 90, 15)
}

pub fn mend() -> MoveData {
    MoveData::heal("Mend", ElementType::Normal, 20, 10)
}

pub fn toxin_spray() -> MoveData {
    MoveData::status("Toxin Spray", ElementType::Poison, StatusAilment::Poison, 100, 20)
}

/// Catalog holding the whole built-in roster.
pub fn demo_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_species(vec![
        emberling(),
        pyrewing(),
        aquatoad(),
        terralith(),
        stormray(),
        duskwisp(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpeciesCatalog;

    #[test]
    fn catalog_contains_the_whole_roster() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 6);
        for species in [emberling(), pyrewing(), aquatoad(), terralith(), stormray(), duskwisp()] {
            assert_eq!(catalog.species(species.id).unwrap().name, species.name);
        }
    }

    #[test]
    fn every_evolution_points_at_a_cataloged_species() {
        let catalog = demo_catalog();
        for species in [emberling(), pyrewing(), aquatoad(), terralith(), stormray(), duskwisp()] {
            if let Some(evolution) = species.evolution {
                assert!(
                    catalog.species(evolution.evolves_into).is_ok(),
                    "{} evolves into an unknown species",
                    species.name
                );
                assert!(evolution.min_level > 0);
            }
        }
    }

    #[test]
    fn move_accuracy_and_uses_are_sane() {
        for move_data in [
            tackle(),
            ember(),
            water_gun(),
            thunder_shock(),
            rock_hurl(),
            mend(),
            toxin_spray(),
        ] {
            assert!(move_data.accuracy >= 1 && move_data.accuracy <= 100, "{}", move_data.name);
            assert!(move_data.max_uses > 0, "{}", move_data.name);
        }
    }
}
