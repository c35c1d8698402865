use std::iter::FusedIterator;
use std::str::FromStr;

/// Number of rows, and of columns, of the board.
pub const BOARD_SIZE: i8 = 3;

/// Number of cells on the board.
pub const NUM_CELLS: usize = 9;

/// One of the nine board positions.
///
/// A cell is addressed either by `(row, col)` or by its linear index
/// `row * 3 + col`. Every `Cell` value is in range, so code that takes a
/// `Cell` never has to check bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Returns `None` if `index` is not in `0..9`.
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_CELLS).then(|| Cell(index as u8))
    }

    /// Like [`Cell::new()`], but panics on an out-of-range index.
    pub fn from_index(index: usize) -> Self {
        Self::new(index).unwrap_or_else(|| panic!("Cell index {} is out of range", index))
    }

    /// Returns `None` if the coordinates are outside the 3×3 grid.
    pub fn at(row: i8, col: i8) -> Option<Self> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Cell((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> i8 {
        self.0 as i8 / BOARD_SIZE
    }

    pub fn col(self) -> i8 {
        self.0 as i8 % BOARD_SIZE
    }

    /// The cell reached by moving `di` rows and `dj` columns, if it is on the board.
    pub fn offset(self, di: i8, dj: i8) -> Option<Self> {
        Self::at(self.row() + di, self.col() + dj)
    }

    /// All cells in ascending index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NUM_CELLS as u8).map(Cell)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row(), self.col())
    }
}

/// The error type for the [`FromStr`] instance of [`Cell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellFromStrErr {
    Empty,
    NotANumber,
    OutOfRange,
}

impl std::error::Error for CellFromStrErr {}

impl std::fmt::Display for CellFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellFromStrErr::Empty => write!(f, "No cell was given"),
            CellFromStrErr::NotANumber => {
                write!(f, "A cell is an index 0-8 or a row,col pair like 1,2")
            }
            CellFromStrErr::OutOfRange => write!(f, "The cell is not on the 3x3 board"),
        }
    }
}

/// Parses either a linear index (`"4"`) or a `row,col` pair (`"1,1"`).
///
/// ```
/// # use triad::Cell;
/// assert_eq!("5".parse::<Cell>().unwrap(), "1,2".parse::<Cell>().unwrap());
/// assert!("9".parse::<Cell>().is_err());
/// ```
impl FromStr for Cell {
    type Err = CellFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CellFromStrErr::Empty);
        }
        let parse = |part: &str| {
            part.trim()
                .parse::<i8>()
                .map_err(|_| CellFromStrErr::NotANumber)
        };
        match s.split_once(',') {
            Some((row, col)) => Cell::at(parse(row)?, parse(col)?).ok_or(CellFromStrErr::OutOfRange),
            None => {
                let index = parse(s)?;
                usize::try_from(index)
                    .ok()
                    .and_then(Cell::new)
                    .ok_or(CellFromStrErr::OutOfRange)
            }
        }
    }
}

/// A compact set of [`Cell`]s.
///
/// Iterating yields cells in ascending index order.
///
/// ```
/// use triad::{Cell, CellSet};
/// let mut set = CellSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CellSet`.
/// set = set.insert(Cell::from_index(7));
/// set = set.insert(Cell::from_index(7)); // Inserting a second time has no effect
/// set = set.insert(Cell::from_index(2));
/// assert_eq!(Vec::from_iter(set), vec![Cell::from_index(2), Cell::from_index(7)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    // Only the low 9 bits are used.
    bits: u16,
}

impl CellSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, cell: Cell) -> bool {
        (self.bits & (1u16 << cell.0)) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, cell: Cell) -> Self {
        Self {
            bits: self.bits | (1u16 << cell.0),
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut bits = 0;
        for cell in iter {
            bits |= 1u16 << cell.0;
        }
        Self { bits }
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;

    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CellSet`] that returns cells by ascending index.
#[derive(Clone, Copy, Debug)]
pub struct CellSetIter {
    bits: u16,
}

impl Iterator for CellSetIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the cell index
            let idx = self.bits.trailing_zeros() as u8;
            self.bits ^= 1u16 << idx;
            Some(Cell(idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for CellSetIter {}

impl FusedIterator for CellSetIter {}
