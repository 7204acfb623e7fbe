use creature_arena::{
    execute_turn, prefabs, BattleParticipant, BattleRegistry, BattleSession, CreatureInstance,
    EntropyRng, EvolutionResolver, SpeciesCatalog, SpeciesId, TrainingResolver,
};

fn main() {
    // A fixed seed keeps the demo narration reproducible run to run.
    let mut rng = EntropyRng::seeded(42);
    let catalog = prefabs::demo_catalog();

    // Example 1: Generate creatures with rolled IVs and natures
    let emberling_species = match catalog.species(SpeciesId(1)) {
        Ok(species) => species.clone(),
        Err(e) => {
            println!("Error loading species: {}", e);
            return;
        }
    };
    let aquatoad_species = match catalog.species(SpeciesId(7)) {
        Ok(species) => species.clone(),
        Err(e) => {
            println!("Error loading species: {}", e);
            return;
        }
    };

    let mut ember = CreatureInstance::generate(&emberling_species, 14, &mut rng);
    ember.nickname = Some("Cinder".to_string());
    let mut toad = CreatureInstance::generate(&aquatoad_species, 15, &mut rng);
    toad.nickname = Some("Puddles".to_string());

    for (creature, species) in [(&ember, &emberling_species), (&toad, &aquatoad_species)] {
        println!(
            "Generated {} the {} (level {}, {:?} nature):",
            creature.nickname.as_deref().unwrap_or(&species.name),
            species.name,
            creature.level,
            creature.nature
        );
        println!(
            "  Stats: HP:{} ATK:{} DEF:{} SP.ATK:{} SP.DEF:{} SPD:{}",
            creature.stats.hp,
            creature.stats.attack,
            creature.stats.defense,
            creature.stats.sp_attack,
            creature.stats.sp_defense,
            creature.stats.speed,
        );
        println!(
            "  IVs:   HP:{} ATK:{} DEF:{} SP.ATK:{} SP.DEF:{} SPD:{}",
            creature.ivs.hp,
            creature.ivs.attack,
            creature.ivs.defense,
            creature.ivs.sp_attack,
            creature.ivs.sp_defense,
            creature.ivs.speed,
        );
    }

    println!();

    // Example 2: Training toward the evolution threshold
    println!("=== Training ===");
    let result = TrainingResolver::train(&mut ember, &emberling_species, 250);
    println!(
        "Cinder trained from level {} to level {} ({} XP banked toward the next level)",
        result.previous_level, result.new_level, ember.experience
    );

    println!();

    // Example 3: A full battle through the registry
    println!("=== Battle: Cinder vs Puddles ===");
    run_battle_demo(&ember, &toad);

    println!();

    // Example 4: Evolution, fueled by a spare duplicate
    println!("=== Evolution ===");
    let spare = CreatureInstance::generate(&emberling_species, 5, &mut rng);
    let duplicates = [&spare];
    match EvolutionResolver::plan_evolution(&ember, &emberling_species, &duplicates, None, 1_000) {
        Ok(plan) => {
            println!(
                "Cinder can evolve into species {} for {} (consuming duplicate #{})",
                plan.evolves_into, plan.cost, plan.fuel_index
            );
            let target = match catalog.species(plan.evolves_into) {
                Ok(species) => species.clone(),
                Err(e) => {
                    println!("Error loading evolution target: {}", e);
                    return;
                }
            };
            let report = EvolutionResolver::evolve(&mut ember, &target);
            println!(
                "Cinder evolved from {} into {} ({})!",
                report.previous_species, report.new_species, target.name
            );
            println!(
                "  Stats: HP:{} ATK:{} DEF:{} SP.ATK:{} SP.DEF:{} SPD:{}",
                report.stats.hp,
                report.stats.attack,
                report.stats.defense,
                report.stats.sp_attack,
                report.stats.sp_defense,
                report.stats.speed,
            );
        }
        Err(reason) => println!("Cinder cannot evolve yet: {}", reason),
    }

    println!();

    // Example 5: The evolved creature as a portable JSON record
    println!("=== Stored record ===");
    match serde_json::to_string_pretty(&ember) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("Error serializing creature: {}", e),
    }
}

fn run_battle_demo(ember: &CreatureInstance, toad: &CreatureInstance) {
    let mut rng = EntropyRng::seeded(7);
    let mut registry = BattleRegistry::new();

    let red = BattleParticipant::from_creature(
        "trainer_red",
        ember,
        &prefabs::emberling(),
        vec![prefabs::ember(), prefabs::tackle(), prefabs::mend()],
    );
    let blue = BattleParticipant::from_creature(
        "trainer_blue",
        toad,
        &prefabs::aquatoad(),
        vec![prefabs::water_gun(), prefabs::tackle(), prefabs::toxin_spray()],
    );

    let session = BattleSession::new("demo_battle", red, blue);
    if let Err(e) = registry.register(session) {
        println!("Error registering battle: {}", e);
        return;
    }

    let mut execution_count = 0;
    loop {
        let session = match registry.get_mut("demo_battle") {
            Ok(session) => session,
            Err(e) => {
                println!("Error fetching battle: {}", e);
                return;
            }
        };
        if session.is_finished() {
            break;
        }

        let actor_id = match session.active_id() {
            Some(id) => id.to_string(),
            None => break,
        };
        println!("--- Turn {} ---", session.turn_number);
        for participant in &session.participants {
            println!(
                "  {}: {} (HP: {}/{})",
                participant.owner_id,
                participant.name,
                participant.current_hp,
                participant.max_hp()
            );
        }

        let move_index = match choose_move(&session.participants, &actor_id) {
            Some(index) => index,
            None => {
                println!("  {} has nothing left to throw and concedes!", actor_id);
                if let Err(e) = session.forfeit(&actor_id) {
                    println!("Error forfeiting: {}", e);
                }
                continue;
            }
        };

        match execute_turn(session, &actor_id, move_index, &mut rng) {
            Ok(record) => println!("  {}", record.summary),
            Err(e) => {
                println!("Error executing turn: {}", e);
                return;
            }
        }
        println!();

        // Safety check to prevent infinite loops
        execution_count += 1;
        if execution_count > 50 {
            println!("Battle reached execution limit - ending demo");
            break;
        }
    }

    let archived = match registry.end("demo_battle") {
        Ok(session) => session,
        Err(e) => {
            println!("Error archiving battle: {}", e);
            return;
        }
    };

    match archived.outcome() {
        Some(creature_arena::BattleOutcome::Winner { winner_id }) => {
            println!("{} wins the battle!", winner_id)
        }
        Some(creature_arena::BattleOutcome::Draw) => println!("The battle ended in a draw!"),
        None => println!("Battle ended without an outcome (execution limit reached)"),
    }
    println!(
        "Battle archived after {} record(s) in the log.",
        archived.log.len()
    );
}

/// Pick the first move that still has uses left.
fn choose_move(participants: &[BattleParticipant; 2], actor_id: &str) -> Option<usize> {
    let actor = participants
        .iter()
        .find(|participant| participant.owner_id == actor_id)?;
    actor
        .moves
        .iter()
        .position(|slot| slot.uses_left > 0)
}
