use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// The two sides. X always opens and is the maximizing side of the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn is_maximizer(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

/// A cell coordinate, zero-based, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == BOARD_SIZE - 1) && (self.col == 0 || self.col == BOARD_SIZE - 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Utility of a finished game from X's side: +1, -1 or 0.
    pub fn score(self) -> Option<i8> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Win(Player::X) => Some(1),
            GameOutcome::Win(Player::O) => Some(-1),
            GameOutcome::Draw => Some(0),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Win(player) => write!(f, "{} wins", player),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub kind: LineKind,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, kind: LineKind, start: Position, end: Position) -> Self {
        Self {
            player,
            kind,
            start,
            end,
        }
    }

    pub fn cells(&self) -> [Position; BOARD_SIZE] {
        let row_step = self.end.row as isize - self.start.row as isize;
        let col_step = self.end.col as isize - self.start.col as isize;
        std::array::from_fn(|i| {
            let i = i as isize;
            Position::new(
                self.start.row.wrapping_add_signed(row_step * i / 2),
                self.start.col.wrapping_add_signed(col_step * i / 2),
            )
        })
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells().contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_round_trip_is_row_major() {
        assert_eq!(Position::from_index(0), Position::new(0, 0));
        assert_eq!(Position::from_index(5), Position::new(1, 2));
        assert_eq!(Position::new(2, 1).to_index(), 7);
    }

    #[test]
    fn test_corners() {
        let corners: Vec<usize> = (0..CELL_COUNT)
            .filter(|&i| Position::from_index(i).is_corner())
            .collect();
        assert_eq!(corners, vec![0, 2, 6, 8]);
    }

    #[test]
    fn test_winning_line_cells_for_anti_diagonal() {
        let line = WinningLine::new(
            Player::O,
            LineKind::AntiDiagonal,
            Position::new(0, 2),
            Position::new(2, 0),
        );
        assert_eq!(
            line.cells(),
            [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)]
        );
        assert!(line.contains(Position::new(1, 1)));
        assert!(!line.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_outcome_scores_from_x_side() {
        assert_eq!(GameOutcome::Win(Player::X).score(), Some(1));
        assert_eq!(GameOutcome::Win(Player::O).score(), Some(-1));
        assert_eq!(GameOutcome::Draw.score(), Some(0));
        assert_eq!(GameOutcome::InProgress.score(), None);
    }
}
