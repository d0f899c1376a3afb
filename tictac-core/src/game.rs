//! Board state, move application and terminal detection

use crate::board::{Cell, Mark, CELL_COUNT, LINES};
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// GAME RESULT
// ============================================================================

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Won(Mark),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// A 3x3 position (copy to mutate)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_array(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parse the request representation: `null` or `""` is empty, otherwise "X" or "O"
    pub fn from_cells<S: AsRef<str>>(values: &[Option<S>]) -> Result<Self> {
        if values.len() != CELL_COUNT {
            return Err(EngineError::InvalidBoard {
                reason: format!("expected {} cells, got {}", CELL_COUNT, values.len()),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, value) in values.iter().enumerate() {
            cells[i] = match value.as_ref().map(|s| s.as_ref()) {
                None | Some("") => Cell::Empty,
                Some("X") => Cell::X,
                Some("O") => Cell::O,
                Some(other) => {
                    return Err(EngineError::InvalidBoard {
                        reason: format!("cell {} has invalid value '{}'", i, other),
                    })
                }
            };
        }

        Ok(Self { cells })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Contents of `cell`, or None off the board
    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    pub fn is_valid_move(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.cells[cell].is_empty()
    }

    /// Empty cells in ascending index order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Whose turn it is in a legal sequence (X moves first)
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// X count equals O count or exceeds it by one
    pub fn has_legal_counts(&self) -> bool {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        x == o || x == o + 1
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Return a new board with `mark` placed on `cell`
    pub fn with_move(&self, cell: usize, mark: Mark) -> Result<Board> {
        if cell >= CELL_COUNT {
            return Err(EngineError::InvalidMove {
                cell,
                reason: "off the board",
            });
        }
        if !self.cells[cell].is_empty() {
            return Err(EngineError::InvalidMove {
                cell,
                reason: "already occupied",
            });
        }
        let mut next = *self;
        next.cells[cell] = mark.to_cell();
        Ok(next)
    }

    /// In-place placement for the search; caller guarantees the cell is empty
    pub(crate) fn place(&mut self, cell: usize, mark: Mark) {
        debug_assert!(self.cells[cell].is_empty());
        self.cells[cell] = mark.to_cell();
    }

    pub(crate) fn clear(&mut self, cell: usize) {
        self.cells[cell] = Cell::Empty;
    }

    // ========================================================================
    // TERMINAL DETECTION
    // ========================================================================

    /// Owner of the first completed line, if any
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let first = self.cells[a];
            if first != Cell::Empty && first == self.cells[b] && first == self.cells[c] {
                first.mark()
            } else {
                None
            }
        })
    }

    pub fn outcome(&self) -> GameResult {
        match self.winner() {
            Some(mark) => GameResult::Won(mark),
            None if self.is_full() => GameResult::Draw,
            None => GameResult::Ongoing,
        }
    }

    /// Cells where `mark` would complete a line right now, ascending
    pub fn winning_cells(&self, mark: Mark) -> Vec<usize> {
        let target = mark.to_cell();
        let mut cells: Vec<usize> = LINES
            .iter()
            .filter_map(|line| {
                let mut owned = 0;
                let mut empty = None;
                for &i in line {
                    match self.cells[i] {
                        c if c == target => owned += 1,
                        Cell::Empty => empty = Some(i),
                        _ => return None,
                    }
                }
                if owned == 2 {
                    empty
                } else {
                    None
                }
            })
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Compact notation, row-major: `"XX.OO...."`; `/` and whitespace are ignored
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(EngineError::InvalidBoard {
                reason: format!("expected {} cells, got {} in '{}'", CELL_COUNT, symbols.len(), s),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, ch) in symbols.into_iter().enumerate() {
            cells[i] = Cell::from_char(ch).ok_or_else(|| EngineError::InvalidBoard {
                reason: format!("invalid character '{}' at position {}", ch, i),
            })?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Mark {
    type Err = EngineError;

    /// Exactly `"X"` or `"O"`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(EngineError::InvalidPlayer {
                value: other.to_string(),
            }),
        }
    }
}
