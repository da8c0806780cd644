//! Game module for recording round-robin results.
//!
//! This module records finished games and applies the scoring rule:
//! - One game per unordered pair of participants per tournament
//! - Win = 2 points, draw = 1 point each, loss = 0 points
//! - The game insert and both point updates commit atomically
//!
//! ## Example
//!
//! ```no_run
//! use round_robin::db::Database;
//! use round_robin::game::GameManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let games = GameManager::new(Arc::new(db.pool().clone()));
//!
//!     let (game, points) = games.record_game(1, 2, 3, 4, 2).await?;
//!     println!("Game {} awarded {}:{}", game.id, points.player1, points.player2);
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{GameError, GameResult};
pub use manager::GameManager;
pub use models::{Game, GameId, PointsAwarded};
