//! Greedy one-ply move selection.
//!
//! Every legal placement is tried and scored by two heuristics:
//! distance from the center (closer is better) and the number of enemy
//! stones it captures. The agent never passes voluntarily; it returns
//! `None` only when no placement is legal.

use crate::board::{Point, Stone};
use crate::constants::CAPTURE_WEIGHT;
use crate::game::{GameState, is_legal, place_event, try_dispatch};

/// Every accepted placement for the current player with its resulting
/// state, in row-major order. Each candidate is applied exactly once.
pub fn candidates(state: &GameState) -> Vec<(Point, GameState)> {
    state
        .board
        .points()
        .filter(|&(x, y)| is_legal(state, x as isize, y as isize))
        .filter_map(|pt| try_dispatch(state, place_event(pt)).ok().map(|next| (pt, next)))
        .collect()
}

/// All placements the current player can make, in row-major order.
pub fn legal_moves(state: &GameState) -> Vec<Point> {
    candidates(state).into_iter().map(|(pt, _)| pt).collect()
}

/// Heuristic value of playing at `(x, y)`, or `None` if the move is rejected.
pub fn score_move(state: &GameState, x: usize, y: usize) -> Option<f64> {
    let next = try_dispatch(state, place_event((x, y))).ok()?;
    Some(evaluate(state, &next, (x, y)))
}

/// Value of the placement at `pt` that turned `before` into `after`.
fn evaluate(before: &GameState, after: &GameState, (x, y): Point) -> f64 {
    let center = before.size() as f64 / 2.0;
    let dx = (center - x as f64).abs();
    let dy = (center - y as f64).abs();

    let enemy: Stone = before.turn.opponent().stone();
    let captured = before.board.count(enemy) - after.board.count(enemy);

    -dx - dy + captured as f64 * CAPTURE_WEIGHT
}

/// Picks the highest-scoring legal placement.
///
/// Without an RNG ties go to the first move in row-major order, so play is
/// fully deterministic. With a seeded RNG ties are broken uniformly.
#[derive(Default)]
pub struct GreedyAgent {
    rng: Option<fastrand::Rng>,
}

impl GreedyAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Break ties randomly, reproducibly for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(fastrand::Rng::with_seed(seed)),
        }
    }

    /// The chosen move, or `None` to pass.
    pub fn pick_move(&mut self, state: &GameState) -> Option<Point> {
        self.choose(state).map(|(pt, _)| pt)
    }

    /// The chosen move together with the state it produces, or `None` to pass.
    pub fn choose(&mut self, state: &GameState) -> Option<(Point, GameState)> {
        let mut best: Vec<(Point, GameState)> = Vec::new();
        let mut best_score = f64::NEG_INFINITY;

        for (pt, next) in candidates(state) {
            let s = evaluate(state, &next, pt);
            if s > best_score {
                best_score = s;
                best.clear();
                best.push((pt, next));
            } else if s == best_score {
                best.push((pt, next));
            }
        }

        if best.is_empty() {
            return None;
        }
        let i = match &mut self.rng {
            Some(rng) => rng.usize(..best.len()),
            None => 0,
        };
        Some(best.swap_remove(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::game::{Event, create_game, dispatch};

    fn play(state: &GameState, x: isize, y: isize) -> GameState {
        dispatch(state, Event::PlaceStone { x, y })
    }

    #[test]
    fn test_legal_moves_empty_board() {
        let state = create_game(3);
        assert_eq!(legal_moves(&state).len(), 9);
        assert_eq!(legal_moves(&state)[0], (0, 0));
    }

    #[test]
    fn test_legal_moves_excludes_suicide() {
        assert!(legal_moves(&create_game(1)).is_empty());
    }

    #[test]
    fn test_prefers_center() {
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.pick_move(&create_game(6)), Some((3, 3)));
        // center = 2.5, so (2,2), (3,2), (2,3), (3,3) tie; first in scan order wins.
        assert_eq!(agent.pick_move(&create_game(5)), Some((2, 2)));
    }

    #[test]
    fn test_prefers_capture() {
        // White stone at (0,0) in atari; Black to play.
        let state = create_game(9);
        let state = play(&state, 1, 0); // B
        let state = play(&state, 0, 0); // W
        assert_eq!(state.turn, Color::Black);
        assert!(score_move(&state, 0, 1).unwrap() > score_move(&state, 4, 4).unwrap());
        assert_eq!(GreedyAgent::new().pick_move(&state), Some((0, 1)));
    }

    #[test]
    fn test_score_move_rejected() {
        let state = play(&create_game(5), 2, 2);
        assert_eq!(score_move(&state, 2, 2), None);
    }

    #[test]
    fn test_no_move_means_pass() {
        assert_eq!(GreedyAgent::new().pick_move(&create_game(1)), None);
        assert_eq!(GreedyAgent::with_seed(7).pick_move(&create_game(1)), None);
    }

    #[test]
    fn test_choose_returns_applied_state() {
        let state = play(&play(&create_game(9), 1, 0), 0, 0);
        let (pt, next) = GreedyAgent::new().choose(&state).unwrap();
        assert_eq!(pt, (0, 1));
        assert_eq!(next, dispatch(&state, place_event(pt)));
        assert_eq!(next.board.get(0, 0), Stone::Empty);
    }

    #[test]
    fn test_candidates_match_legal_moves() {
        let state = play(&play(&create_game(4), 1, 1), 2, 2);
        let cands = candidates(&state);
        assert_eq!(cands.len(), 14);
        for (pt, next) in &cands {
            assert_eq!(*next, dispatch(&state, place_event(*pt)));
        }
        let points: Vec<Point> = cands.into_iter().map(|(pt, _)| pt).collect();
        assert_eq!(points, legal_moves(&state));
    }

    #[test]
    fn test_seeded_agent_picks_among_best() {
        let state = create_game(5);
        let mut agent = GreedyAgent::with_seed(42);
        for _ in 0..10 {
            let pt = agent.pick_move(&state);
            assert!(matches!(pt, Some((2, 2) | (3, 2) | (2, 3) | (3, 3))), "{pt:?}");
        }
    }
}
