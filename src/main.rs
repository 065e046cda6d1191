//! # Smart File Organizer - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Validazione degli input dell'utente (path esistente ed è una directory)
//! - Caricamento delle regole e dispatch ai due motori
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (subcommand, path, config, verbose)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. `organize`: carica le regole, sposta i file, stampa il riepilogo
//! 4. `scan`: aggrega l'albero e stampa la tabella per estensione
//!
//! ## Esempio di utilizzo:
//! ```bash
//! sfo organize ~/Downloads --config rules.json
//! sfo scan ~/Downloads
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;

use smart_organizer::organizer::MoveStatus;
use smart_organizer::report::{render_table, summarize_outcomes};
use smart_organizer::{scan, CategoryRules, OrganizeError, Organizer};

#[derive(Parser)]
#[command(name = "sfo")]
#[command(about = "Smart File Organizer CLI")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Organize files in the specified directory
    Organize {
        /// Directory to organize
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Scan directory and show file analytics
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Resolve the argument to an absolute path and require a directory
fn validate_directory(path: &Path) -> Result<PathBuf> {
    let absolute = path.canonicalize().map_err(|_| {
        OrganizeError::InvalidPath(path.to_path_buf())
    })?;
    if !absolute.is_dir() {
        return Err(OrganizeError::InvalidPath(absolute).into());
    }
    Ok(absolute)
}

fn run_organize(path: &Path, config: Option<&Path>) -> Result<()> {
    let source_dir = validate_directory(path)?;
    let rules = CategoryRules::discover(config)?;

    println!("Organizing files in: {}", source_dir.display());

    let organizer = Organizer::new(&rules)?;
    let outcomes = organizer.organize(&source_dir)?;

    for outcome in &outcomes {
        if let MoveStatus::Failed(reason) = &outcome.status {
            warn!("Failed to move {}: {}", outcome.file_name, reason);
        }
    }

    println!("{}", summarize_outcomes(&outcomes));
    println!("Organization complete!");
    Ok(())
}

fn run_scan(path: &Path) -> Result<()> {
    let root = validate_directory(path)?;

    println!("Scanning directory: {}", root.display());

    let analytics = scan(&root)?;

    print!("{}", render_table(&analytics));
    println!(
        "\nScan complete. Scanned {} files. Total Size: {}",
        analytics.total_files,
        smart_organizer::report::format_size(analytics.total_size)
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match &args.command {
        Command::Organize { path } => run_organize(path, args.config.as_deref()),
        Command::Scan { path } => run_scan(path),
    }
}
