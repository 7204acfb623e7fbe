use crate::battle::state::BattleSession;
use crate::errors::{RegistryError, RegistryResult};
use std::collections::HashMap;

/// Host-side bookkeeping of open sessions. The registry owns every session
/// registered with it and enforces one battle per participant; it never
/// drives turns itself.
#[derive(Debug, Default)]
pub struct BattleRegistry {
    sessions: HashMap<String, BattleSession>,
    // owner id -> session id, maintained alongside `sessions`
    participants: HashMap<String, String>,
}

impl BattleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a session. Rejects a reused session id and rejects
    /// any participant already fighting elsewhere, without registering
    /// anything in either case.
    pub fn register(&mut self, session: BattleSession) -> RegistryResult<()> {
        if self.sessions.contains_key(&session.session_id) {
            return Err(RegistryError::DuplicateSession(session.session_id.clone()));
        }
        for participant in &session.participants {
            if let Some(existing) = self.participants.get(&participant.owner_id) {
                return Err(RegistryError::ParticipantBusy {
                    participant: participant.owner_id.clone(),
                    session: existing.clone(),
                });
            }
        }

        for participant in &session.participants {
            self.participants
                .insert(participant.owner_id.clone(), session.session_id.clone());
        }
        self.sessions.insert(session.session_id.clone(), session);
        Ok(())
    }

    pub fn get(&self, session_id: &str) -> RegistryResult<&BattleSession> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| RegistryError::SessionNotFound(session_id.to_string()))
    }

    pub fn get_mut(&mut self, session_id: &str) -> RegistryResult<&mut BattleSession> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| RegistryError::SessionNotFound(session_id.to_string()))
    }

    /// Remove a session and free its participants for new battles. Returns
    /// the session so the host can archive the log or settle rewards.
    pub fn end(&mut self, session_id: &str) -> RegistryResult<BattleSession> {
        let session = self
            .sessions
            .remove(session_id)
            .ok_or_else(|| RegistryError::SessionNotFound(session_id.to_string()))?;
        for participant in &session.participants {
            self.participants.remove(&participant.owner_id);
        }
        Ok(session)
    }

    pub fn find_by_participant(&self, owner_id: &str) -> Option<&BattleSession> {
        self.participants
            .get(owner_id)
            .and_then(|session_id| self.sessions.get(session_id))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
