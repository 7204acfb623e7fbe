use schema::SpeciesId;
use std::fmt;

/// Main error type for the creature arena engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error related to battle session operations
    Battle(BattleError),
    /// Error related to species catalog lookups
    Catalog(CatalogError),
    /// Error related to battle registry bookkeeping
    Registry(RegistryError),
    /// An evolution attempt that did not qualify
    Evolution(EvolutionIneligible),
}

/// Errors raised by battle session operations. None of these mutate the
/// session; the caller can retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    /// The acting id does not belong to either participant
    NotInBattle(String),
    /// The session already reached a terminal outcome
    BattleAlreadyFinished,
    /// The acting id is a participant but does not hold the turn
    NotYourTurn(String),
    /// Move index is out of bounds for the actor's move list
    InvalidMoveIndex { index: usize, move_count: usize },
    /// The chosen move has no uses left
    MoveExhausted { move_name: String },
}

/// Errors related to species catalog lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The specified species was not found; the engine never substitutes
    /// invented stats for a missing entry
    UnknownSpecies(SpeciesId),
    /// Catalog source text is malformed or incomplete
    DataParseError(String),
}

/// Errors related to battle registry bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A session with this id is already registered
    DuplicateSession(String),
    /// A participant is already fighting in another open session
    ParticipantBusy { participant: String, session: String },
    /// No session registered under this id
    SessionNotFound(String),
}

/// Reason codes for an evolution that cannot proceed. Ineligibility is an
/// expected, frequent outcome of normal play, so callers get a structured
/// reason rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvolutionIneligible {
    /// The species has no configured successor
    NoSuccessor,
    /// The creature has not reached the successor's minimum level
    LevelTooLow { required: u8, actual: u8 },
    /// The owner has no other instance of the species to consume as fuel
    NoDuplicate,
    /// The owner cannot cover the evolution cost
    InsufficientFunds { required: u32, available: u32 },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Battle(err) => write!(f, "Battle error: {}", err),
            EngineError::Catalog(err) => write!(f, "Catalog error: {}", err),
            EngineError::Registry(err) => write!(f, "Registry error: {}", err),
            EngineError::Evolution(err) => write!(f, "Evolution error: {}", err),
        }
    }
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::NotInBattle(actor) => write!(f, "Not a participant: {}", actor),
            BattleError::BattleAlreadyFinished => write!(f, "Battle is already finished"),
            BattleError::NotYourTurn(actor) => write!(f, "Not this side's turn: {}", actor),
            BattleError::InvalidMoveIndex { index, move_count } => {
                write!(f, "Invalid move index {} (knows {} moves)", index, move_count)
            }
            BattleError::MoveExhausted { move_name } => {
                write!(f, "No uses left for {}", move_name)
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownSpecies(id) => write!(f, "Unknown species: {}", id),
            CatalogError::DataParseError(details) => {
                write!(f, "Malformed catalog data: {}", details)
            }
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateSession(id) => {
                write!(f, "Session already registered: {}", id)
            }
            RegistryError::ParticipantBusy { participant, session } => {
                write!(f, "{} is already fighting in session {}", participant, session)
            }
            RegistryError::SessionNotFound(id) => write!(f, "Session not found: {}", id),
        }
    }
}

impl fmt::Display for EvolutionIneligible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionIneligible::NoSuccessor => write!(f, "Species has no evolution"),
            EvolutionIneligible::LevelTooLow { required, actual } => {
                write!(f, "Level too low: needs {}, is {}", required, actual)
            }
            EvolutionIneligible::NoDuplicate => {
                write!(f, "No duplicate of this species to consume")
            }
            EvolutionIneligible::InsufficientFunds { required, available } => {
                write!(f, "Insufficient funds: needs {}, has {}", required, available)
            }
        }
    }
}

impl std::error::Error for EngineError {}
impl std::error::Error for BattleError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for RegistryError {}
impl std::error::Error for EvolutionIneligible {}

impl From<BattleError> for EngineError {
    fn from(err: BattleError) -> Self {
        EngineError::Battle(err)
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        EngineError::Catalog(err)
    }
}

impl From<RegistryError> for EngineError {
    fn from(err: RegistryError) -> Self {
        EngineError::Registry(err)
    }
}

impl From<EvolutionIneligible> for EngineError {
    fn from(err: EvolutionIneligible) -> Self {
        EngineError::Evolution(err)
    }
}

/// Type alias for Results using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;
