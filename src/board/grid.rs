//! The grid model: a fixed-size square matrix of markable squares.

use std::fmt;

use crate::board::player::Player;

/// Address of one grid square as zero-based (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Cell { col, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Occupancy of one grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Square {
    #[default]
    Empty,
    Marked(Player),
}

/// A square matrix of [`Square`]s in row-major order.
///
/// Dimensions are fixed at construction and never change. There is no
/// legality tracking: [`Grid::place`] overwrites whatever the square held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    squares: Vec<Square>,
}

impl Grid {
    /// Create a `size` x `size` grid with every square set to `fill`.
    pub fn new(size: usize, fill: Square) -> Self {
        Grid {
            size,
            squares: vec![fill; size * size],
        }
    }

    /// Side length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupancy at `cell`. Out-of-range addresses read as empty.
    pub fn get(&self, cell: Cell) -> Square {
        self.index(cell).map_or(Square::Empty, |i| self.squares[i])
    }

    /// Record `player`'s mark at `cell`, overwriting any previous mark.
    /// Out-of-range addresses are ignored.
    pub fn place(&mut self, cell: Cell, player: Player) {
        if let Some(i) = self.index(cell) {
            self.squares[i] = Square::Marked(player);
        }
    }

    /// Iterate every square with its address, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Square)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, &square)| (Cell::new(i % self.size, i / self.size), square))
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.col < self.size && cell.row < self.size).then(|| cell.row * self.size + cell.col)
    }
}
