use crate::battle::participant::BattleParticipant;
use crate::errors::{BattleError, BattleResult};
use schema::{Effectiveness, StatusAilment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of a session. The engine's own transitions only ever
/// produce winners; Draw exists for hosts that adjudicate stalemates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Winner { winner_id: String },
    Draw,
}

/// Session lifecycle. There is no setup state: a session starts in
/// InProgress with the turn already assigned, and Finished is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress { active: usize },
    Finished { outcome: BattleOutcome },
}

/// What one turn did, in collaborator-facing terms. Appended to the session
/// log and returned to the caller; `summary` is the composed battle-log
/// line for direct display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub attacker_id: String,
    pub defender_id: String,
    /// None for forfeit records.
    pub move_used: Option<String>,
    pub damage: u16,
    pub healed: u16,
    pub effectiveness: Effectiveness,
    pub critical: bool,
    pub missed: bool,
    pub status_applied: Option<StatusAilment>,
    pub fainted: bool,
    pub forfeit: bool,
    pub summary: String,
}

/// Append-only record of everything that happened in one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnLog {
    records: Vec<TurnResult>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: TurnResult) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TurnResult] {
        &self.records
    }

    pub fn last(&self) -> Option<&TurnResult> {
        self.records.last()
    }

    /// Return the number of records in the log.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for TurnLog {
    /// Format the log for printing, one summary line per record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{}", record.summary)?;
        }
        Ok(())
    }
}

/// The turn-based state machine wrapping two participants. One caller
/// mutates a session at a time; independent sessions share nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSession {
    pub session_id: String,
    pub participants: [BattleParticipant; 2],
    pub turn_number: u32,
    pub state: SessionState,
    pub log: TurnLog,
}

impl BattleSession {
    /// Open a session. The side with the strictly higher Speed acts first;
    /// equal Speed resolves to the first-listed participant. That tiebreak
    /// is a fixed convention callers may rely on.
    pub fn new(session_id: &str, first: BattleParticipant, second: BattleParticipant) -> Self {
        let active = if second.stats.speed > first.stats.speed {
            1
        } else {
            0
        };

        Self {
            session_id: session_id.to_string(),
            participants: [first, second],
            turn_number: 1,
            state: SessionState::InProgress { active },
            log: TurnLog::new(),
        }
    }

    /// Index of the participant owned by `owner_id`, if they are in this
    /// session.
    pub fn index_of(&self, owner_id: &str) -> Option<usize> {
        self.participants
            .iter()
            .position(|participant| participant.owner_id == owner_id)
    }

    pub fn participant(&self, owner_id: &str) -> Option<&BattleParticipant> {
        self.index_of(owner_id)
            .map(|index| &self.participants[index])
    }

    /// Owner id of the side holding the turn. None once the session is
    /// terminal: a finished battle has no acting side.
    pub fn active_id(&self) -> Option<&str> {
        match &self.state {
            SessionState::InProgress { active } => {
                Some(self.participants[*active].owner_id.as_str())
            }
            SessionState::Finished { .. } => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished { .. })
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        match &self.state {
            SessionState::Finished { outcome } => Some(outcome),
            SessionState::InProgress { .. } => None,
        }
    }

    /// Concede the battle. The other participant wins regardless of whose
    /// turn it is. Forfeiting a finished session is an error; callers that
    /// want idempotence must check `is_finished` first.
    pub fn forfeit(&mut self, actor_id: &str) -> BattleResult<()> {
        let actor_index = self
            .index_of(actor_id)
            .ok_or_else(|| BattleError::NotInBattle(actor_id.to_string()))?;
        if self.is_finished() {
            return Err(BattleError::BattleAlreadyFinished);
        }

        let winner_index = 1 - actor_index;
        let winner_id = self.participants[winner_index].owner_id.clone();
        let summary = format!(
            "{} forfeited the battle! {} wins!",
            self.participants[actor_index].name, self.participants[winner_index].name
        );

        self.log.push(TurnResult {
            attacker_id: actor_id.to_string(),
            defender_id: winner_id.clone(),
            move_used: None,
            damage: 0,
            healed: 0,
            effectiveness: Effectiveness::Normal,
            critical: false,
            missed: false,
            status_applied: None,
            fainted: false,
            forfeit: true,
            summary,
        });
        self.state = SessionState::Finished {
            outcome: BattleOutcome::Winner { winner_id },
        };
        Ok(())
    }
}
