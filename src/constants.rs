//! Constants for board dimensions, game flow, and agent heuristics.
//!
//! Board size is a runtime value carried by each [`Board`](crate::board::Board);
//! the values here are only defaults.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used by [`create_game`](crate::game::create_game) when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Board size for the console game (small enough to read at a glance).
pub const PLAY_BOARD_SIZE: usize = 6;

/// Orthogonal step offsets `(dx, dy)`. Order: left, right, up, down.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Game Flow
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

/// Move cap for agent self-play before the game is forcibly ended.
pub const SELF_PLAY_MAX_MOVES: usize = 400;

// =============================================================================
// Agent Heuristics
// =============================================================================

/// Score bonus per captured enemy stone.
pub const CAPTURE_WEIGHT: f64 = 10.0;
