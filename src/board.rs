//! Square Go board, grid primitives, and connectivity analysis.
//!
//! Points are addressed as `(x, y)` with `x` the column and `y` the row,
//! both counted from the top-left corner.

use std::collections::HashSet;
use std::fmt;

use crate::constants::DIRECTIONS;

/// A player's color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The stone this color places.
    pub fn stone(self) -> Stone {
        match self {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "B"),
            Color::White => write!(f, "W"),
        }
    }
}

/// Contents of a single point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
    #[default]
    Empty,
}

impl Stone {
    pub fn color(self) -> Option<Color> {
        match self {
            Stone::Black => Some(Color::Black),
            Stone::White => Some(Color::White),
            Stone::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

pub type Point = (usize, usize);

/// Returns true iff `(x, y)` lies on a `size`×`size` grid.
pub fn in_bounds(size: usize, x: isize, y: isize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size
}

/// The orthogonal neighbors of `(x, y)` that lie on the grid,
/// in the order left, right, up, down.
pub fn neighbors(size: usize, x: usize, y: usize) -> Vec<Point> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            in_bounds(size, nx, ny).then_some((nx as usize, ny as usize))
        })
        .collect()
}

/// A `size`×`size` grid of stones. Cloning produces a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Stone at `(x, y)`; off-board points read as `Empty`.
    pub fn get(&self, x: usize, y: usize) -> Stone {
        if x >= self.size || y >= self.size {
            return Stone::Empty;
        }
        self.cells[self.idx(x, y)]
    }

    /// Overwrite the point at `(x, y)`. Off-board writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, stone: Stone) {
        if x >= self.size || y >= self.size {
            return;
        }
        let i = self.idx(x, y);
        self.cells[i] = stone;
    }

    /// Number of points holding `stone`.
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// All points in row-major order (`y` outer, `x` inner).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| (x, y)))
    }

    /// Remove every stone of `group` from the board.
    pub fn remove_group(&mut self, group: &HashSet<Point>) {
        for &(x, y) in group {
            self.set(x, y, Stone::Empty);
        }
    }

    /// Find the connected group containing `(x, y)` and its liberties.
    ///
    /// Flood-fills with an explicit stack over same-colored orthogonal
    /// neighbors. Each empty neighbor of a group member is a liberty; enemy
    /// stones are ignored. An empty or off-board start yields two empty sets.
    pub fn group_and_liberties(&self, x: usize, y: usize) -> (HashSet<Point>, HashSet<Point>) {
        let mut group = HashSet::new();
        let mut liberties = HashSet::new();
        let color = self.get(x, y);
        if color.is_empty() {
            return (group, liberties);
        }

        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            if !group.insert((cx, cy)) {
                continue;
            }
            for (nx, ny) in neighbors(self.size, cx, cy) {
                match self.get(nx, ny) {
                    Stone::Empty => {
                        liberties.insert((nx, ny));
                    }
                    s if s == color && !group.contains(&(nx, ny)) => stack.push((nx, ny)),
                    _ => {}
                }
            }
        }
        (group, liberties)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Stone::Black => 'B',
                    Stone::White => 'W',
                    Stone::Empty => '.',
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
