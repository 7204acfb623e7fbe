use crate::battle::participant::BattleParticipant;
use crate::battle::state::BattleSession;
use crate::creature::CreatureInstance;
use crate::rng::ScriptedRng;
use schema::{IvSet, MoveData, Nature, SpeciesData, StatusAilment};

/// A builder for creating test participants with common defaults.
///
/// # Example
/// ```
/// let participant = TestCreatureBuilder::new(prefabs::aquatoad(), 25)
///     .with_moves(vec![prefabs::tackle()])
///     .build("p1");
/// ```
pub struct TestCreatureBuilder {
    species: SpeciesData,
    level: u8,
    ivs: IvSet,
    nature: Nature,
    moves: Vec<MoveData>,
    status: Option<StatusAilment>,
    current_hp: Option<u16>,
}

impl TestCreatureBuilder {
    /// Creates a new builder for a given species and level. Defaults to
    /// uniform IVs of 15 and a neutral nature so derived stats are easy to
    /// compute by hand.
    pub fn new(species: SpeciesData, level: u8) -> Self {
        Self {
            species,
            level,
            ivs: IvSet::uniform(15),
            nature: Nature::Hardy,
            moves: Vec::new(),
            status: None,
            current_hp: None,
        }
    }

    /// Sets the moves for the test participant.
    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the status ailment for the test participant.
    pub fn with_status(mut self, status: StatusAilment) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current HP. If not set, the participant enters at max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Builds the `BattleParticipant` owned by `owner_id`.
    pub fn build(self, owner_id: &str) -> BattleParticipant {
        let creature =
            CreatureInstance::with_traits(&self.species, self.level, self.ivs, self.nature);
        let mut participant =
            BattleParticipant::from_creature(owner_id, &creature, &self.species, self.moves);

        participant.status = self.status;
        if let Some(hp) = self.current_hp {
            participant.current_hp = hp.min(participant.max_hp());
        }

        participant
    }
}

/// Creates a standard 1v1 session for testing.
pub fn create_test_session(first: BattleParticipant, second: BattleParticipant) -> BattleSession {
    BattleSession::new("test_battle", first, second)
}

/// Rolls for one clean damaging hit: mid accuracy roll, no critical,
/// maximum variance. Useful when the exact numbers are what the test is
/// about.
pub fn clean_hit_rng() -> ScriptedRng {
    ScriptedRng::new(vec![50], vec![0.5, 1.0])
}

/// A generous buffer of unremarkable rolls, for tests where the specific
/// RNG outcome is not important. Every hit lands, nothing crits.
pub fn generous_rng() -> ScriptedRng {
    ScriptedRng::new(vec![50; 20], vec![0.5; 40])
}
