//! Player module providing the global player registry.
//!
//! This module manages the players that tournaments draw from:
//! - Registration with system-wide unique names
//! - Listing every registered player
//! - Lookup by ID
//!
//! ## Example
//!
//! ```no_run
//! use round_robin::db::Database;
//! use round_robin::player::PlayerManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let players = PlayerManager::new(Arc::new(db.pool().clone()));
//!
//!     let player = players.create_player("Ann").await?;
//!     println!("Registered player: {}", player.name);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{PlayerError, PlayerResult};
pub use manager::PlayerManager;
pub use models::{Player, PlayerId};
