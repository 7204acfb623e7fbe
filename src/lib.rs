// In: src/lib.rs

//! Creature Arena Battle Engine
//!
//! A stat-and-battle simulation engine for collectible creatures: derived
//! stats from hidden quality rolls and natures, a turn-based battle state
//! machine with an auditable log, and the evolution and training resolvers
//! that grow a collection over time.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod battle;
pub mod catalog;
pub mod creature;
pub mod errors;
pub mod evolution;
pub mod prefabs;
pub mod registry;
pub mod rng;
pub mod stats;
pub mod training;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `creature-arena` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export all core data definitions and static enums.
pub use schema::{
    // Supporting Types & Enums
    BaseStats,
    Effectiveness,
    // Core Enums
    ElementType,
    EvolutionData,
    IvSet,
    MoveCategory,
    // Core Data Structs
    MoveData,
    MoveEffect,
    Nature,
    SpeciesData,
    SpeciesId,
    StatBlock,
    StatName,
    StatusAilment,
};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{execute_turn, resolve_move_use, MoveOutcome};
pub use battle::participant::{BattleParticipant, MoveSlot};
pub use battle::state::{BattleOutcome, BattleSession, SessionState, TurnLog, TurnResult};

// Creature construction and growth.
pub use creature::CreatureInstance;
pub use evolution::{EvolutionPlan, EvolutionReport, EvolutionResolver};
pub use stats::{calculate_stat, calculate_stat_block, generate_ivs, MAX_LEVEL};
pub use training::{TrainingResolver, TrainingResult, XP_PER_LEVEL};

// Data access and session bookkeeping.
pub use catalog::{InMemoryCatalog, SpeciesCatalog};
pub use registry::BattleRegistry;
pub use rng::{EntropyRng, RandomSource, ScriptedRng};

// Crate-specific error and result types.
pub use errors::{
    BattleError, BattleResult, CatalogError, CatalogResult, EngineError, EngineResult,
    EvolutionIneligible, RegistryError, RegistryResult,
};
