//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `OrganizeError` enum per categorizzare tutti gli errori possibili
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (directory non leggibili, permessi, etc.)
//! - `Config`: File di regole mancante o non parsabile
//! - `InvalidRules`: Regole che non passano la validazione
//! - `Collision`: Destinazione occupata anche dopo il rename deterministico
//! - `InvalidPath`: Path che non è una directory esistente
//!
//! ## Vantaggi:
//! - Errori tipizzati per handling specifico
//! - Automatic conversion da errori standard
//! - Integration con `anyhow` per error propagation

use std::path::PathBuf;

/// Custom error types for file organization
#[derive(thiserror::Error, Debug)]
pub enum OrganizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid rules: {0}")]
    InvalidRules(String),

    #[error("Destination already occupied: {0}")]
    Collision(PathBuf),

    #[error("Invalid directory path: {0}")]
    InvalidPath(PathBuf),
}
