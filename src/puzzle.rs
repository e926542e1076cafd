use std::fmt;

use crate::error::InputError;

/// Direction the blank travels on a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the move generator.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row/column delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Destination of the blank when it leaves `(row, col)` in this direction,
    /// or `None` if that would step off an `size`×`size` grid.
    pub fn target(&self, (row, col): (usize, usize), size: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.as_offset();
        let new_row = row as isize + dr;
        let new_col = col as isize + dc;

        if new_row >= 0 && new_row < size as isize && new_col >= 0 && new_col < size as isize {
            Some((new_row as usize, new_col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An N×N sliding puzzle grid, stored row-major. `0` is the blank.
///
/// Equality, ordering and hashing cover the full grid, so a `Board` can key
/// the visited set directly. Boards are never mutated in place: moving the
/// blank yields a new `Board`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Builds a board from row-major `cells`, checking that they form a
    /// permutation of `0..size²`.
    pub fn new(size: usize, cells: Vec<u32>) -> Result<Self, InputError> {
        if size == 0 {
            return Err(InputError::InvalidSize { size });
        }
        let expected = size
            .checked_mul(size)
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or(InputError::InvalidSize { size })?;
        if cells.len() != expected {
            return Err(InputError::WrongTileCount {
                expected,
                found: cells.len(),
            });
        }

        let max = (expected - 1) as u32;
        let mut seen = vec![false; expected];
        for &value in &cells {
            if value > max {
                return Err(InputError::OutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[value as usize], true) {
                return Err(InputError::DuplicateTile { value });
            }
        }

        Ok(Self { size, cells })
    }

    /// Builds a board from a list of rows. Every row must be as long as
    /// there are rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, InputError> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(InputError::NotSquare {
                row,
                len: r.len(),
                size,
            });
        }
        Self::new(size, rows.into_iter().flatten().collect())
    }

    /// The solved arrangement: `1..size²-1` ascending, blank in the last cell.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn goal(size: usize) -> Self {
        assert!(size >= 1, "board size must be at least 1");
        let len = size * size;
        let cells = (1..len as u32).chain(std::iter::once(0)).collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    /// Scans for the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        // Construction guarantees exactly one blank.
        let idx = self.cells.iter().position(|&v| v == 0).unwrap_or(0);
        (idx / self.size, idx % self.size)
    }

    pub fn is_goal(&self) -> bool {
        let last = self.cells.len() - 1;
        self.cells[last] == 0
            && self.cells[..last]
                .iter()
                .zip(1u32..)
                .all(|(&value, expected)| value == expected)
    }

    pub(crate) fn swap(&self, a: (usize, usize), b: (usize, usize)) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(a.0 * self.size + a.1, b.0 * self.size + b.1);
        Self {
            size: self.size,
            cells,
        }
    }

    /// Slides the blank one step, or `None` if it would leave the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let blank = self.blank_position();
        movement
            .target(blank, self.size)
            .map(|dest| self.swap(blank, dest))
    }

    /// Replays a whole move sequence from this board.
    pub fn apply_all(&self, moves: &[Move]) -> Option<Self> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &movement| board.apply(movement))
    }

    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.cells);

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            // Even width: the blank's row takes part in the parity.
            let (blank_row, _) = self.blank_position();
            (inversions + blank_row) % 2 == 1
        }
    }

    /// Sum of each tile's Manhattan distance to its goal cell.
    pub fn manhattan_distance(&self) -> usize {
        let size = self.size;
        let mut distance = 0;
        for (idx, &value) in self.cells.iter().enumerate() {
            if value != 0 {
                let (row, col) = (idx / size, idx % size);
                let target = value as usize - 1;
                distance += row.abs_diff(target / size);
                distance += col.abs_diff(target % size);
            }
        }
        distance
    }
}

/// Pairs of non-blank tiles that appear in the wrong relative order.
pub fn count_inversions(flattened: &[u32]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.cells.len() - 1).to_string().len();
        for row in self.rows() {
            for &val in row {
                write!(f, "{:>width$} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test_log::test]
    fn goal_is_ascending_with_blank_last() {
        let goal = Board::goal(3);
        assert_eq!(goal.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert!(goal.is_goal());
        assert_eq!(goal.blank_position(), (2, 2));

        let goal4 = Board::goal(4);
        assert_eq!(goal4.get(3, 2), 15);
        assert_eq!(goal4.get(3, 3), 0);
        assert!(goal4.is_goal());
    }

    #[test_log::test]
    fn one_by_one_goal_is_just_the_blank() {
        let goal = Board::goal(1);
        assert_eq!(goal.cells(), &[0]);
        assert!(goal.is_goal());
        assert_eq!(goal.manhattan_distance(), 0);
    }

    #[test]
    #[should_panic(expected = "board size must be at least 1")]
    fn goal_of_size_zero_panics() {
        Board::goal(0);
    }

    #[test_log::test]
    fn rejects_malformed_boards() {
        assert_eq!(
            Board::new(0, vec![]),
            Err(InputError::InvalidSize { size: 0 })
        );
        assert_eq!(
            Board::new(2, vec![1, 2, 0]),
            Err(InputError::WrongTileCount {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Board::new(2, vec![1, 2, 4, 0]),
            Err(InputError::OutOfRange { value: 4, max: 3 })
        );
        assert_eq!(
            Board::new(2, vec![1, 1, 3, 0]),
            Err(InputError::DuplicateTile { value: 1 })
        );
        assert_eq!(
            Board::from_rows(vec![vec![1, 2], vec![3]]),
            Err(InputError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
    }

    #[test_log::test]
    fn finds_blank() {
        let b = board(&[&[5, 8, 3], &[1, 0, 4], &[7, 6, 2]]);
        assert_eq!(b.blank_position(), (1, 1));
        assert_eq!(b.get(0, 1), 8);
    }

    #[test_log::test]
    fn ordering_is_row_major() {
        let a = board(&[&[1, 2], &[3, 0]]);
        let b = board(&[&[1, 3], &[2, 0]]);
        let c = board(&[&[2, 1], &[0, 3]]);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, Board::goal(2));
    }

    #[test_log::test]
    fn adjacent_swap_from_goal_is_unsolvable() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]);
        assert_eq!(count_inversions(b.cells()), 1);
        assert!(!b.is_solvable());
        assert!(Board::goal(3).is_solvable());
    }

    #[test_log::test]
    fn odd_width_parity() {
        let b = board(&[&[5, 8, 3], &[1, 0, 4], &[7, 6, 2]]);
        assert_eq!(count_inversions(b.cells()), 16);
        assert!(b.is_solvable());
    }

    #[test_log::test]
    fn even_width_parity_depends_on_blank_row() {
        assert!(Board::goal(4).is_solvable());

        // Blank moved up one row from the goal: still reachable.
        let up = Board::goal(4).apply(Move::Up).unwrap();
        assert!(up.is_solvable());

        // Swapping two tiles flips parity.
        let mut cells = Board::goal(4).cells().to_vec();
        cells.swap(0, 1);
        assert!(!Board::new(4, cells).unwrap().is_solvable());

        // 15 and 14 swapped, the classic impossible position.
        let mut cells = Board::goal(4).cells().to_vec();
        cells.swap(13, 14);
        assert!(!Board::new(4, cells).unwrap().is_solvable());
    }

    #[test_log::test]
    fn manhattan_is_zero_only_at_goal() {
        for n in 2..=5 {
            assert_eq!(Board::goal(n).manhattan_distance(), 0);
        }
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        assert_eq!(b.manhattan_distance(), 1);

        let b = board(&[&[5, 8, 3], &[1, 0, 4], &[7, 6, 2]]);
        // 5:2 8:2 3:0 1:1 4:2 7:0 6:2 2:3
        assert_eq!(b.manhattan_distance(), 12);
    }

    #[test_log::test]
    fn apply_moves_the_blank() {
        let goal = Board::goal(3);
        assert_eq!(goal.apply(Move::Down), None);
        assert_eq!(goal.apply(Move::Right), None);

        let left = goal.apply(Move::Left).unwrap();
        assert_eq!(left.blank_position(), (2, 1));
        assert_eq!(left.get(2, 2), 8);

        assert_eq!(left.apply(Move::Left.opposite()), Some(goal.clone()));
        assert_eq!(
            goal.apply_all(&[Move::Up, Move::Left, Move::Right, Move::Down]),
            Some(goal)
        );
    }

    #[test_log::test]
    fn move_targets_stay_on_grid() {
        assert_eq!(Move::Up.target((0, 1), 3), None);
        assert_eq!(Move::Left.target((1, 0), 3), None);
        assert_eq!(Move::Down.target((2, 0), 3), None);
        assert_eq!(Move::Right.target((0, 2), 3), None);
        assert_eq!(Move::Down.target((1, 1), 3), Some((2, 1)));
        assert_eq!(Move::Right.target((1, 1), 3), Some((1, 2)));
    }

    #[test_log::test]
    fn display_pads_cells() {
        let b = Board::goal(4);
        let text = b.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, " 1  2  3  4 ");
        assert_eq!(text.lines().count(), 4);
        assert_eq!(Move::Left.to_string(), "Left");
    }
}
