//! Tournament module for round-robin tournament management.
//!
//! This module provides tournament lifecycle functionality:
//! - Tournament creation and lookup
//! - Roster management with a fixed capacity of five players
//! - Per-participant point tracking, starting at zero
//!
//! ## Example
//!
//! ```no_run
//! use round_robin::db::Database;
//! use round_robin::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let tournaments = TournamentManager::new(Arc::new(db.pool().clone()));
//!
//!     let tournament = tournaments.create_tournament("Spring Cup").await?;
//!     tournaments.add_participant(tournament.id, 1).await?;
//!     println!("Created tournament: {}", tournament.name);
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{MAX_PARTICIPANTS, Participant, Tournament, TournamentId};
