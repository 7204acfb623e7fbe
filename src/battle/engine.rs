use crate::battle::participant::BattleParticipant;
use crate::battle::state::{BattleOutcome, BattleSession, SessionState, TurnResult};
use crate::errors::{BattleError, BattleResult};
use crate::rng::RandomSource;
use schema::{Effectiveness, ElementType, MoveCategory, MoveData, MoveEffect};

/// Chance for any damaging hit to be a critical hit.
pub const CRIT_CHANCE: f32 = 0.0625;
/// Damage multiplier applied on a critical hit.
pub const CRIT_MULTIPLIER: f32 = 1.5;
/// Same-type attack bonus for a move matching one of the user's types.
pub const STAB_MULTIPLIER: f32 = 1.5;
/// Lower bound of the uniform damage variance factor.
pub const VARIANCE_MIN: f32 = 0.85;

/// Structured result of resolving a single move use, before any of it is
/// applied to the session. Damage and healing are amounts, not commands;
/// the turn executor owns the mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub damage: u16,
    pub healed: u16,
    pub status_applied: Option<schema::StatusAilment>,
    pub effectiveness: Effectiveness,
    pub critical: bool,
    pub missed: bool,
    pub fainted: bool,
}

impl MoveOutcome {
    fn missed() -> Self {
        Self {
            damage: 0,
            healed: 0,
            status_applied: None,
            effectiveness: Effectiveness::Normal,
            critical: false,
            missed: true,
            fainted: false,
        }
    }
}

/// Resolve one use of a move against a defender. Pure with respect to the
/// participants; all randomness comes through `rng`.
///
/// Roll order for damaging moves is fixed: accuracy, then critical, then
/// variance. A miss consumes only the accuracy roll. Heal and Status moves
/// consume no rolls at all and cannot miss.
pub fn resolve_move_use(
    attacker: &BattleParticipant,
    defender: &BattleParticipant,
    move_data: &MoveData,
    rng: &mut dyn RandomSource,
) -> MoveOutcome {
    match move_data.effect {
        MoveEffect::Damage { power } => resolve_damage(attacker, defender, move_data, power, rng),
        MoveEffect::Heal { amount } => {
            let missing = attacker.max_hp().saturating_sub(attacker.current_hp);
            MoveOutcome {
                damage: 0,
                healed: amount.min(missing),
                status_applied: None,
                effectiveness: Effectiveness::Normal,
                critical: false,
                missed: false,
                fainted: false,
            }
        }
        MoveEffect::Status { effect } => {
            // First ailment sticks. A second one fails without replacing it.
            let applied = if defender.status.is_none() {
                Some(effect)
            } else {
                None
            };
            MoveOutcome {
                damage: 0,
                healed: 0,
                status_applied: applied,
                effectiveness: Effectiveness::Normal,
                critical: false,
                missed: false,
                fainted: false,
            }
        }
    }
}

fn resolve_damage(
    attacker: &BattleParticipant,
    defender: &BattleParticipant,
    move_data: &MoveData,
    power: u8,
    rng: &mut dyn RandomSource,
) -> MoveOutcome {
    let accuracy_roll = rng.percent("Move accuracy check");
    if accuracy_roll > move_data.accuracy {
        return MoveOutcome::missed();
    }

    let (attack, defense) = match move_data.category {
        MoveCategory::Special => (attacker.stats.sp_attack, defender.stats.sp_defense),
        _ => (attacker.stats.attack, defender.stats.defense),
    };

    let level_factor = (2.0 * attacker.level as f32 / 5.0) + 2.0;
    let mut damage =
        (level_factor * power as f32 * attack as f32 / defense.max(1) as f32) / 50.0 + 2.0;

    let type_multiplier = ElementType::effectiveness_against(move_data.move_type, &defender.types);
    damage *= type_multiplier;

    if attacker.types.contains(&move_data.move_type) {
        damage *= STAB_MULTIPLIER;
    }

    let critical = rng.unit("Critical hit check") < CRIT_CHANCE;
    if critical {
        damage *= CRIT_MULTIPLIER;
    }

    let variance = VARIANCE_MIN + (1.0 - VARIANCE_MIN) * rng.unit("Damage variance");
    damage *= variance;

    // A connecting hit always deals at least 1, immunity included.
    let damage = (damage.floor() as u16).max(1);

    MoveOutcome {
        damage,
        healed: 0,
        status_applied: None,
        effectiveness: Effectiveness::from_multiplier(type_multiplier),
        critical,
        missed: false,
        fainted: damage >= defender.current_hp,
    }
}

/// Execute one full turn of `session`: validate the action, spend the use,
/// resolve the move, apply its outcome, log a record, and advance or finish
/// the state machine.
///
/// Validation order is fixed and observable through the error returned:
/// membership, then liveness, then turn, then move index, then uses.
/// A use is spent on the attempt, so a miss still costs one.
pub fn execute_turn(
    session: &mut BattleSession,
    actor_id: &str,
    move_index: usize,
    rng: &mut dyn RandomSource,
) -> BattleResult<TurnResult> {
    let actor_index = session
        .index_of(actor_id)
        .ok_or_else(|| BattleError::NotInBattle(actor_id.to_string()))?;

    let active = match session.state {
        SessionState::InProgress { active } => active,
        SessionState::Finished { .. } => return Err(BattleError::BattleAlreadyFinished),
    };
    if active != actor_index {
        return Err(BattleError::NotYourTurn(actor_id.to_string()));
    }

    let move_count = session.participants[actor_index].moves.len();
    if move_index >= move_count {
        return Err(BattleError::InvalidMoveIndex {
            index: move_index,
            move_count,
        });
    }
    if session.participants[actor_index].moves[move_index].uses_left == 0 {
        return Err(BattleError::MoveExhausted {
            move_name: session.participants[actor_index].moves[move_index]
                .move_data
                .name
                .clone(),
        });
    }

    let defender_index = 1 - actor_index;

    session.participants[actor_index].moves[move_index].spend_use();
    let move_data = session.participants[actor_index].moves[move_index]
        .move_data
        .clone();

    let outcome = resolve_move_use(
        &session.participants[actor_index],
        &session.participants[defender_index],
        &move_data,
        rng,
    );

    if outcome.damage > 0 {
        session.participants[defender_index].apply_damage(outcome.damage);
    }
    if outcome.healed > 0 {
        session.participants[actor_index].heal(outcome.healed);
    }
    if let Some(ailment) = outcome.status_applied {
        session.participants[defender_index].status = Some(ailment);
    }

    let summary = compose_summary(
        &session.participants[actor_index],
        &session.participants[defender_index],
        &move_data,
        &outcome,
    );
    let record = TurnResult {
        attacker_id: actor_id.to_string(),
        defender_id: session.participants[defender_index].owner_id.clone(),
        move_used: Some(move_data.name.clone()),
        damage: outcome.damage,
        healed: outcome.healed,
        effectiveness: outcome.effectiveness,
        critical: outcome.critical,
        missed: outcome.missed,
        status_applied: outcome.status_applied,
        fainted: outcome.fainted,
        forfeit: false,
        summary,
    };
    session.log.push(record.clone());

    if outcome.fainted {
        let winner_id = session.participants[actor_index].owner_id.clone();
        session.state = SessionState::Finished {
            outcome: BattleOutcome::Winner { winner_id },
        };
    } else {
        session.state = SessionState::InProgress {
            active: defender_index,
        };
        session.turn_number += 1;
    }

    Ok(record)
}

/// Build the battle-log line for one resolved move, in event order.
fn compose_summary(
    attacker: &BattleParticipant,
    defender: &BattleParticipant,
    move_data: &MoveData,
    outcome: &MoveOutcome,
) -> String {
    let mut lines = vec![format!("{} used {}!", attacker.name, move_data.name)];

    if outcome.missed {
        lines.push(format!("{}'s attack missed!", attacker.name));
        return lines.join(" ");
    }

    match move_data.effect {
        MoveEffect::Damage { .. } => {
            if outcome.critical {
                lines.push("A critical hit!".to_string());
            }
            match outcome.effectiveness {
                Effectiveness::Super => lines.push("It's super effective!".to_string()),
                Effectiveness::NotVery => lines.push("It's not very effective...".to_string()),
                Effectiveness::Immune => lines.push("It had no effect!".to_string()),
                Effectiveness::Normal => {}
            }
            lines.push(format!("{} took {} damage!", defender.name, outcome.damage));
            if outcome.fainted {
                lines.push(format!("{} fainted!", defender.name));
            }
        }
        MoveEffect::Heal { .. } => {
            lines.push(format!(
                "{} recovered {} HP!",
                attacker.name, outcome.healed
            ));
        }
        MoveEffect::Status { .. } => match outcome.status_applied {
            Some(ailment) => lines.push(format!("{} {}!", defender.name, ailment)),
            None => lines.push("But it failed!".to_string()),
        },
    }

    lines.join(" ")
}
