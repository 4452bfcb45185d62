use std::ops::Index;

use anyhow::{ensure, Context, Result};
use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod solve;

/// (row, col), both 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(pub u8, pub u8);

/// An immutable N×N sliding-tile configuration. Tiles hold every value in
/// `0..N²` exactly once; `0` is the blank. A "move" never mutates a board,
/// it produces a fresh one with a single adjacent swap applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    tiles: Box<[u32]>,
    blank: Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    pub fn reversed(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
        }
    }
}

impl Index<Pos> for Board {
    type Output = u32;
    fn index(&self, pos: Pos) -> &Self::Output {
        let idx = pos.0 as usize * self.size as usize + pos.1 as usize;
        &self.tiles[idx]
    }
}

impl Board {
    /// Builds a board from caller-supplied rows, copying them.
    ///
    /// Rejects anything that is not a true puzzle: non-square input, boards
    /// smaller than 2×2, and any multiset of values other than `0..N²`.
    pub fn from_tiles(rows: &[Vec<u32>]) -> Result<Self> {
        let n = rows.len();
        ensure!(n >= 2, "board must be at least 2x2, got {n}x{n}");
        ensure!(n <= u8::MAX as usize, "board size {n} too large");

        let mut tiles = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            ensure!(
                values.len() == n,
                "row {row} has {} tiles, expected {n}",
                values.len(),
            );
            tiles.extend_from_slice(values);
        }

        let mut seen = vec![false; n * n];
        let mut blank = None;
        for (idx, &value) in tiles.iter().enumerate() {
            ensure!(
                (value as usize) < n * n,
                "tile value {value} out of range for a {n}x{n} board",
            );
            ensure!(!seen[value as usize], "duplicate tile value {value}");
            seen[value as usize] = true;
            if value == 0 {
                blank = Some(Pos((idx / n) as u8, (idx % n) as u8));
            }
        }
        let blank = blank.context("missing blank tile")?;

        Ok(Self {
            size: n as u8,
            tiles: tiles.into(),
            blank,
        })
    }

    /// The solved configuration: `1, 2, .., N²-1` row-major, blank last.
    pub fn goal(size: u8) -> Self {
        assert!(size >= 2, "board must be at least 2x2");
        let n = size as usize;
        let mut tiles: Vec<u32> = (1..(n * n) as u32).collect();
        tiles.push(0);
        Self {
            size,
            tiles: tiles.into(),
            blank: Pos(size - 1, size - 1),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Value at `(row, col)`. Panics if either index is outside `[0, N)`.
    pub fn tile_at(&self, row: u8, col: u8) -> u32 {
        assert!(
            row < self.size && col < self.size,
            "tile index ({row}, {col}) out of bounds for a {0}x{0} board",
            self.size,
        );
        self[Pos(row, col)]
    }

    fn cells(&self) -> impl Iterator<Item = (Pos, u32)> + '_ {
        let idx_iter = std::iter::successors(Some(Pos(0, 0)), |&Pos(row, col)| {
            Some(if col + 1 < self.size {
                Pos(row, col + 1)
            } else {
                Pos(row + 1, 0)
            })
        });
        idx_iter.zip(self.tiles.iter().copied())
    }

    /// Goal coordinates of a non-blank tile value.
    fn goal_pos(&self, value: u32) -> Pos {
        let idx = value - 1;
        Pos(
            (idx / self.size as u32) as u8,
            (idx % self.size as u32) as u8,
        )
    }

    /// Number of non-blank tiles sitting on the wrong cell.
    pub fn hamming(&self) -> u32 {
        self.cells()
            .filter(|&(pos, value)| value != 0 && self.goal_pos(value) != pos)
            .count() as u32
    }

    /// Sum of grid distances from each non-blank tile to its goal cell.
    /// Never overestimates the true remaining move count and dominates
    /// `hamming`, which is what makes it the search heuristic.
    pub fn manhattan(&self) -> u32 {
        self.cells()
            .filter(|&(_, value)| value != 0)
            .map(|(pos, value)| {
                let goal = self.goal_pos(value);
                u32::from(pos.0.abs_diff(goal.0)) + u32::from(pos.1.abs_diff(goal.1))
            })
            .sum()
    }

    pub fn is_goal(&self) -> bool {
        self.cells().all(|(pos, value)| {
            if value == 0 {
                pos == Pos(self.size - 1, self.size - 1)
            } else {
                self.goal_pos(value) == pos
            }
        })
    }

    /// Standard 15-puzzle parity test. Inversions are pairs of non-blank
    /// tiles out of relative order in the row-major flattening; the blank
    /// row is 0-indexed from the top. Odd N: solvable iff the inversion
    /// count is even. Even N: solvable iff inversions plus blank row is
    /// odd (the goal has zero inversions and the blank on row N-1). Legal
    /// moves preserve this parity, so it classifies exactly.
    pub fn is_solvable(&self) -> bool {
        let inversions: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(idx, &value)| {
                self.tiles[idx + 1..]
                    .iter()
                    .filter(|&&later| later != 0 && later < value)
                    .count()
            })
            .sum();

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank.0 as usize) % 2 == 1
        }
    }

    fn sibling_pos(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        let row = pos.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let col = pos.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if self.size <= row || self.size <= col {
            return None;
        }
        Some(Pos(row, col))
    }

    /// The board after sliding the blank one cell in `dir`, or `None` when
    /// that would leave the grid.
    pub fn shifted(&self, dir: Direction) -> Option<Self> {
        let to = self.sibling_pos(self.blank, dir)?;
        let n = self.size as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(
            self.blank.0 as usize * n + self.blank.1 as usize,
            to.0 as usize * n + to.1 as usize,
        );
        Some(Self {
            size: self.size,
            tiles,
            blank: to,
        })
    }

    /// Every configuration one blank move away, in no particular order.
    pub fn neighbors(&self) -> ArrayVec<Self, 4> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.shifted(dir))
            .collect()
    }
}
