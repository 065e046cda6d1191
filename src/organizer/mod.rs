//! # Organizer Module
//!
//! Modulo che separa le responsabilità in sottomoduli:
//! - `engine`: Motore di classificazione e spostamento
//! - `rule_index`: Indice estensione → categoria
//! - `collision`: Risoluzione deterministica delle collisioni di path

pub mod collision;
pub mod engine;
pub mod rule_index;

pub use engine::{MoveOutcome, MoveStatus, Organizer};
pub use rule_index::RuleIndex;
