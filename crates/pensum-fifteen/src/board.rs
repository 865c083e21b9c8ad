//! Square game boards addressed with 1-based row and column indices.
//!
//! [`SquareBoard`] knows only about geometry: which cells exist, how
//! rows and columns read out, and who neighbours whom. [`GameBoard`]
//! adds an optional value per cell, which is all a sliding puzzle
//! needs to store its tiles.

use std::fmt;

/// One square of a board.
///
/// Rows and columns are 1-based; `(1, 1)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// 1-based row index.
    pub row: usize,
    /// 1-based column index.
    pub col: usize,
}

impl Cell {
    /// Creates a cell address. Whether it lies on a given board is
    /// checked by the board, not here.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four sliding directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 1.
    Up,
    /// Away from row 1.
    Down,
    /// Towards column 1.
    Left,
    /// Away from column 1.
    Right,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A `width` × `width` board of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareBoard {
    width: usize,
}

impl SquareBoard {
    /// Creates a board of the given width.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Side length of the board.
    #[must_use]
    pub const fn width(self) -> usize {
        self.width
    }

    fn in_range(self, row: usize, col: usize) -> bool {
        (1..=self.width).contains(&row) && (1..=self.width).contains(&col)
    }

    /// The cell at `(row, col)`, or `None` when either index is out of
    /// range.
    #[must_use]
    pub fn cell(self, row: usize, col: usize) -> Option<Cell> {
        self.in_range(row, col).then(|| Cell::new(row, col))
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (1..=width).flat_map(move |row| (1..=width).map(move |col| Cell::new(row, col)))
    }

    /// The cells of row `row` visited in the order `cols` yields them,
    /// skipping out-of-range indices. Descending iterators work:
    /// `board.row(1, (1..=4).rev())` reads the first row backwards.
    pub fn row(self, row: usize, cols: impl IntoIterator<Item = usize>) -> Vec<Cell> {
        cols.into_iter()
            .filter_map(|col| self.cell(row, col))
            .collect()
    }

    /// The cells of column `col` visited in the order `rows` yields
    /// them, skipping out-of-range indices.
    pub fn column(self, rows: impl IntoIterator<Item = usize>, col: usize) -> Vec<Cell> {
        rows.into_iter()
            .filter_map(|row| self.cell(row, col))
            .collect()
    }

    /// The cell one step from `cell` in `direction`, or `None` at the
    /// board edge.
    #[must_use]
    pub fn neighbour(self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (row, col) = match direction {
            Direction::Up => (cell.row.checked_sub(1)?, cell.col),
            Direction::Down => (cell.row.checked_add(1)?, cell.col),
            Direction::Left => (cell.row, cell.col.checked_sub(1)?),
            Direction::Right => (cell.row, cell.col.checked_add(1)?),
        };
        self.cell(row, col)
    }
}

/// A [`SquareBoard`] whose cells each hold an optional value.
#[derive(Clone, Debug)]
pub struct GameBoard<T> {
    board: SquareBoard,
    values: Vec<Option<T>>,
}

impl<T> GameBoard<T> {
    /// Creates a board with every cell empty.
    #[must_use]
    pub fn new(width: usize) -> Self {
        let mut values = Vec::new();
        values.resize_with(width * width, || None);
        Self {
            board: SquareBoard::new(width),
            values,
        }
    }

    /// The underlying geometry.
    #[must_use]
    pub const fn board(&self) -> SquareBoard {
        self.board
    }

    /// Side length of the board.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.board.width()
    }

    /// The cell at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        self.board.cells()
    }

    /// The cell one step from `cell` in `direction`, or `None` at the
    /// board edge.
    #[must_use]
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        self.board.neighbour(cell, direction)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.board
            .cell(cell.row, cell.col)
            .map(|cell| (cell.row - 1) * self.width() + (cell.col - 1))
    }

    /// The value at `cell`, or `None` when the cell is empty or lies
    /// off the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        let index = self.index(cell)?;
        self.values[index].as_ref()
    }

    /// Stores `value` at `cell`; `None` clears the cell. Cells off the
    /// board hold nothing, so out-of-range writes are dropped.
    pub fn set(&mut self, cell: Cell, value: Option<T>) {
        if let Some(index) = self.index(cell) {
            self.values[index] = value;
        }
    }

    /// Cells whose contents satisfy `predicate`, in row-major order.
    pub fn filter(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Vec<Cell> {
        self.cells()
            .filter(|cell| predicate(self.get(*cell)))
            .collect()
    }

    /// The first cell in row-major order whose contents satisfy
    /// `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> Option<Cell> {
        self.cells().find(|cell| predicate(self.get(*cell)))
    }

    /// True if the contents of any cell satisfy `predicate`.
    pub fn any(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.cells().any(|cell| predicate(self.get(cell)))
    }

    /// True if the contents of every cell satisfy `predicate`.
    pub fn all(&self, mut predicate: impl FnMut(Option<&T>) -> bool) -> bool {
        self.cells().all(|cell| predicate(self.get(cell)))
    }
}
