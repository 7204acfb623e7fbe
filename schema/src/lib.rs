// Creature Arena Schema - Shared type definitions
// This crate contains the data-model types shared between the engine crate
// and any hosting application: elements and the effectiveness chart, stats,
// natures, species records, and move definitions.

// Re-export the main types
pub use element_types::*;
pub use move_data::*;
pub use natures::*;
pub use species_data::*;
pub use stat_data::*;

pub mod element_types;
pub mod move_data;
pub mod natures;
pub mod species_data;
pub mod stat_data;
