//! Game state and move execution.
//!
//! A [`GameState`] is an immutable value: every transition takes the state by
//! reference and produces a new one. Placing a stone follows the usual order
//! of operations in Go:
//!
//! 1. put the stone down,
//! 2. remove every adjacent enemy group left without liberties,
//! 3. reject the move if the placed stone's own group has no liberties.
//!
//! There is no ko rule and no komi.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Color, Point, in_bounds, neighbors};
use crate::constants::{DEFAULT_BOARD_SIZE, PASSES_TO_END};

/// Whether moves are still accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    GameOver,
}

/// An input to the transition function.
///
/// Coordinates are signed so that any caller-supplied value, including
/// negative ones, is an ordinary (rejected) move rather than a type error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    PlaceStone { x: isize, y: isize },
    Pass,
    ForceEnd,
}

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Illegal move: point is off the board")]
    OutOfBounds,
    #[error("Illegal move: point is occupied")]
    Occupied,
    #[error("Illegal move: suicide")]
    Suicide,
    #[error("Game is already over")]
    GameAlreadyOver,
}

/// A complete game snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Whose move is next.
    pub turn: Color,
    pub phase: Phase,
    /// Passes since the last placement.
    pub consecutive_passes: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl GameState {
    /// Empty board, Black to move.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn: Color::Black,
            phase: Phase::InProgress,
            consecutive_passes: 0,
        }
    }

    /// Side length, always read from the board itself.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// Start a new game on a `size`×`size` board.
pub fn create_game(size: usize) -> GameState {
    GameState::new(size)
}

/// Bounds and occupancy check only. Suicide is not predicted; callers that
/// need full legality should use [`try_dispatch`].
pub fn is_legal(state: &GameState, x: isize, y: isize) -> bool {
    in_bounds(state.size(), x, y) && state.board.get(x as usize, y as usize).is_empty()
}

/// Apply `event`, reporting why it was refused if it was.
pub fn try_dispatch(state: &GameState, event: Event) -> Result<GameState, Rejection> {
    match event {
        Event::PlaceStone { x, y } => apply_place_stone(state, x, y),
        Event::Pass => apply_pass(state),
        Event::ForceEnd => apply_force_end(state),
    }
}

/// Apply `event`, returning a copy of `state` unchanged if it was refused.
pub fn dispatch(state: &GameState, event: Event) -> GameState {
    try_dispatch(state, event).unwrap_or_else(|_| state.clone())
}

/// Place a stone of the current player's color at `(x, y)`.
///
/// Capture detection for every adjacent enemy group is evaluated against the
/// board right after placement, before any group is removed.
pub fn apply_place_stone(state: &GameState, x: isize, y: isize) -> Result<GameState, Rejection> {
    if state.is_over() {
        debug!("Game has ended, placement at ({x}, {y}) ignored");
        return Err(Rejection::GameAlreadyOver);
    }
    if !in_bounds(state.size(), x, y) {
        debug!("Invalid move: ({x}, {y}) is off the board");
        return Err(Rejection::OutOfBounds);
    }
    let (x, y) = (x as usize, y as usize);
    if !state.board.get(x, y).is_empty() {
        debug!("Invalid move: ({x}, {y}) is occupied");
        return Err(Rejection::Occupied);
    }

    let mut board = state.board.clone();
    board.set(x, y, state.turn.stone());

    let enemy = state.turn.opponent().stone();
    let mut captured = Vec::new();
    for (nx, ny) in neighbors(state.size(), x, y) {
        if board.get(nx, ny) != enemy {
            continue;
        }
        let (group, liberties) = board.group_and_liberties(nx, ny);
        if liberties.is_empty() {
            captured.push(group);
        }
    }
    for group in &captured {
        board.remove_group(group);
    }

    let (_, liberties) = board.group_and_liberties(x, y);
    if liberties.is_empty() {
        debug!("Suicide move at ({x}, {y}) rejected");
        return Err(Rejection::Suicide);
    }

    Ok(GameState {
        board,
        turn: state.turn.opponent(),
        phase: Phase::InProgress,
        consecutive_passes: 0,
    })
}

/// Pass the turn. The second consecutive pass ends the game.
pub fn apply_pass(state: &GameState) -> Result<GameState, Rejection> {
    if state.is_over() {
        return Err(Rejection::GameAlreadyOver);
    }
    let mut next = state.clone();
    next.consecutive_passes += 1;
    if next.consecutive_passes >= PASSES_TO_END {
        next.phase = Phase::GameOver;
        info!("Both players passed. Game over.");
    } else {
        next.turn = next.turn.opponent();
        debug!("{} passed, {}'s turn", state.turn, next.turn);
    }
    Ok(next)
}

/// End the game immediately (resignation or quit).
pub fn apply_force_end(state: &GameState) -> Result<GameState, Rejection> {
    if state.is_over() {
        return Err(Rejection::GameAlreadyOver);
    }
    let mut next = state.clone();
    next.phase = Phase::GameOver;
    info!("Game ended by request");
    Ok(next)
}

/// Convenience for callers holding a [`Point`].
pub fn place_event((x, y): Point) -> Event {
    Event::PlaceStone {
        x: x as isize,
        y: y as isize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn play(state: &GameState, x: isize, y: isize) -> GameState {
        dispatch(state, Event::PlaceStone { x, y })
    }

    #[test]
    fn test_create_game() {
        let state = create_game(9);
        assert_eq!(state.size(), 9);
        assert_eq!(state.board.size(), 9);
        assert_eq!(state.turn, Color::Black);
        assert_eq!(state.phase, Phase::InProgress);
        assert_eq!(state.consecutive_passes, 0);
        assert_eq!(state.board.count(Stone::Empty), 81);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(GameState::default().size(), DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn test_place_switches_turn() {
        let state = create_game(9);
        let next = play(&state, 4, 4);
        assert_eq!(next.board.get(4, 4), Stone::Black);
        assert_eq!(next.turn, Color::White);
        // Input state is untouched.
        assert_eq!(state.board.get(4, 4), Stone::Empty);
    }

    #[test]
    fn test_rejection_reasons() {
        let state = create_game(5);
        assert_eq!(
            try_dispatch(&state, Event::PlaceStone { x: -1, y: 0 }),
            Err(Rejection::OutOfBounds)
        );
        assert_eq!(
            try_dispatch(&state, Event::PlaceStone { x: 0, y: 5 }),
            Err(Rejection::OutOfBounds)
        );
        let next = play(&state, 2, 2);
        assert_eq!(
            try_dispatch(&next, Event::PlaceStone { x: 2, y: 2 }),
            Err(Rejection::Occupied)
        );
    }

    #[test]
    fn test_rejected_placement_returns_equal_state() {
        let state = play(&create_game(5), 2, 2);
        assert_eq!(play(&state, 2, 2), state);
        assert_eq!(play(&state, 7, 7), state);
    }

    #[test]
    fn test_one_by_one_suicide() {
        let state = create_game(1);
        assert_eq!(
            try_dispatch(&state, Event::PlaceStone { x: 0, y: 0 }),
            Err(Rejection::Suicide)
        );
        assert_eq!(play(&state, 0, 0), create_game(1));
    }

    #[test]
    fn test_placement_resets_passes() {
        let state = dispatch(&create_game(5), Event::Pass);
        assert_eq!(state.consecutive_passes, 1);
        let state = play(&state, 0, 0);
        assert_eq!(state.consecutive_passes, 0);
        let state = dispatch(&state, Event::Pass);
        assert!(!state.is_over());
    }

    #[test]
    fn test_two_passes_end_game() {
        let state = dispatch(&create_game(5), Event::Pass);
        assert_eq!(state.turn, Color::White);
        let state = dispatch(&state, Event::Pass);
        assert!(state.is_over());
        // Turn does not flip on the ending pass.
        assert_eq!(state.turn, Color::White);
        assert_eq!(try_dispatch(&state, Event::Pass), Err(Rejection::GameAlreadyOver));
    }

    #[test]
    fn test_force_end() {
        let state = create_game(5);
        let ended = dispatch(&state, Event::ForceEnd);
        assert!(ended.is_over());
        assert_eq!(ended.turn, state.turn);
        assert_eq!(
            try_dispatch(&ended, Event::ForceEnd),
            Err(Rejection::GameAlreadyOver)
        );
        assert_eq!(
            try_dispatch(&ended, Event::PlaceStone { x: 0, y: 0 }),
            Err(Rejection::GameAlreadyOver)
        );
    }

    #[test]
    fn test_is_legal_ignores_suicide() {
        let state = create_game(1);
        assert!(is_legal(&state, 0, 0));
        assert!(!is_legal(&state, 1, 0));
        assert!(!is_legal(&state, 0, -1));
    }

    #[test]
    fn test_size_follows_board() {
        let mut state = create_game(9);
        state.board = Board::new(3);
        assert_eq!(state.size(), 3);
        assert!(!is_legal(&state, 5, 5));
        assert_eq!(
            try_dispatch(&state, Event::PlaceStone { x: 5, y: 5 }),
            Err(Rejection::OutOfBounds)
        );
        let next = play(&state, 1, 1);
        assert_eq!(next.size(), 3);
        assert_eq!(next.board.get(1, 1), Stone::Black);
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(Rejection::Suicide.to_string(), "Illegal move: suicide");
        assert_eq!(Rejection::GameAlreadyOver.to_string(), "Game is already over");
    }
}
