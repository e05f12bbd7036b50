//! Area scoring.
//!
//! Each stone counts one point for its color. Each maximal region of empty
//! points counts for a color only if every stone bordering it has that color
//! and the region never reaches past the edge of the board. A region that
//! touches the edge therefore scores for nobody.

use std::collections::HashSet;

use crate::board::{Board, Color, Point, Stone, in_bounds};
use crate::constants::DIRECTIONS;
use crate::game::GameState;

/// Outcome of a scored game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Tie,
}

/// Area totals per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Winner,
    pub score: Score,
}

/// Score the position. Works on any state, finished or not.
pub fn score(state: &GameState) -> GameResult {
    let board = &state.board;
    let mut visited = HashSet::new();
    let mut score = Score::default();

    for (x, y) in board.points() {
        match board.get(x, y) {
            Stone::Black => score.black += 1,
            Stone::White => score.white += 1,
            Stone::Empty => {
                if visited.contains(&(x, y)) {
                    continue;
                }
                let (region, owner) = territory(board, x, y, &mut visited);
                match owner {
                    Some(Color::Black) => score.black += region,
                    Some(Color::White) => score.white += region,
                    None => {}
                }
            }
        }
    }

    let winner = if score.black > score.white {
        Winner::Black
    } else if score.white > score.black {
        Winner::White
    } else {
        Winner::Tie
    };
    GameResult { winner, score }
}

/// Flood-fill the empty region containing `(x, y)`.
///
/// Returns the region size and its owner, if any. Every point reached is
/// added to `visited` so no region is walked twice.
fn territory(
    board: &Board,
    x: usize,
    y: usize,
    visited: &mut HashSet<Point>,
) -> (usize, Option<Color>) {
    let size = board.size();
    let mut stack = vec![(x, y)];
    let mut region = 0;
    let mut borders_black = false;
    let mut borders_white = false;
    let mut enclosed = true;

    while let Some((cx, cy)) = stack.pop() {
        if !visited.insert((cx, cy)) {
            continue;
        }
        region += 1;

        for (dx, dy) in DIRECTIONS {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if !in_bounds(size, nx, ny) {
                enclosed = false;
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            match board.get(nx, ny) {
                Stone::Empty => stack.push((nx, ny)),
                Stone::Black => borders_black = true,
                Stone::White => borders_white = true,
            }
        }
    }

    let owner = match (enclosed, borders_black, borders_white) {
        (true, true, false) => Some(Color::Black),
        (true, false, true) => Some(Color::White),
        _ => None,
    };
    (region, owner)
}
