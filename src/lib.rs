//! # Smart Organizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Caricamento e validazione delle regole categoria → estensioni
//! - `error`: Tipi di errore custom per diverse operazioni
//! - `organizer`: Motore di classificazione e spostamento file
//! - `scanner`: Traversal ricorsivo e aggregazione per estensione
//! - `progress`: Progress tracking con `indicatif`
//! - `report`: Formattazione tabelle, dimensioni e riepiloghi
//!
//! ## Utilizzo:
//! ```rust,no_run
//! use smart_organizer::{CategoryRules, Organizer};
//!
//! # fn main() -> anyhow::Result<()> {
//! let rules = CategoryRules::from_file(std::path::Path::new("config.json"))?;
//! let organizer = Organizer::new(&rules)?;
//! let outcomes = organizer.organize(std::path::Path::new("/tmp/downloads"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod organizer;
pub mod progress;
pub mod report;
pub mod scanner;

pub use config::CategoryRules;
pub use error::OrganizeError;
pub use organizer::{MoveOutcome, MoveStatus, Organizer, RuleIndex};
pub use scanner::{scan, Analytics};
