//! goboard: a minimal Go rules engine.
//!
//! The engine is pure: a [`game::GameState`] is never mutated in place, and
//! every transition returns a fresh state. Illegal moves are reported through
//! [`game::Rejection`] by [`game::try_dispatch`], or silently absorbed by
//! [`game::dispatch`], which hands back an equal copy of its input.
//!
//! ## Modules
//!
//! - [`constants`] - Default sizes and heuristic weights
//! - [`board`] - Grid primitives and group/liberty analysis
//! - [`game`] - Game state, placement, captures, suicide, passing
//! - [`score`] - Area scoring by territory flood-fill
//! - [`agent`] - Greedy one-ply move selection
//! - [`session`] - Console rendering and the interactive game loop
//!
//! ## Example
//!
//! ```
//! use goboard::game::{Event, create_game, dispatch};
//! use goboard::score::{Winner, score};
//!
//! let game = create_game(9);
//! let game = dispatch(&game, Event::PlaceStone { x: 4, y: 4 });
//! let game = dispatch(&game, Event::Pass);
//! let game = dispatch(&game, Event::Pass);
//! assert!(game.is_over());
//! assert_eq!(score(&game).winner, Winner::Black);
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod game;
pub mod score;
pub mod session;
