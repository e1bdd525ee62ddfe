use std::fmt;
use std::str::FromStr;

use crate::games::SessionRng;
use super::error::{BoardParseError, InvalidMoveError};
use super::types::{BOARD_SIZE, CELL_COUNT, Cell, GameOutcome, Player, Position, WinningLine};
use super::win_detector::{check_win, check_win_with_line, line_owners};

/// A 3x3 position. Boards are plain values: moves produce a new board and
/// leave the original untouched, so search frames never share state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn initial() -> Self {
        Self::default()
    }

    /// Builds a board from row-major cells, rejecting anything legal play
    /// could not produce.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, BoardParseError> {
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), BoardParseError> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardParseError::InvalidCounts { x_count, o_count });
        }

        let mut winners = line_owners(self);
        let Some(first) = winners.next() else {
            return Ok(());
        };
        if winners.any(|other| other != first) {
            return Err(BoardParseError::Unreachable("both players have three in a row"));
        }
        match first {
            Player::X if x_count != o_count + 1 => {
                Err(BoardParseError::Unreachable("O moved after X had already won"))
            }
            Player::O if x_count != o_count => {
                Err(BoardParseError::Unreachable("X moved after O had already won"))
            }
            _ => Ok(()),
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        if !position.is_on_board() {
            return None;
        }
        Some(self.cells[position.to_index()])
    }

    #[inline(always)]
    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// X moves whenever the mark counts are equal, O otherwise.
    pub fn player_to_move(&self) -> Player {
        if self.count(Cell::X) == self.count(Cell::O) {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        if let Some(winner) = check_win(self) {
            return GameOutcome::Win(winner);
        }
        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    /// Utility from X's side: +1 if X has won, -1 if O has won, 0 otherwise.
    pub fn utility(&self) -> i8 {
        self.outcome().score().unwrap_or(0)
    }

    /// Empty cells in row-major order, or nothing once the game is decided.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_indices().map(Position::from_index).collect()
    }

    pub(crate) fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&i| self.cells[i] == Cell::Empty)
    }

    pub fn apply_move(&self, position: Position, player: Player) -> Result<Board, InvalidMoveError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(InvalidMoveError::GameOver(outcome));
        }

        let to_move = self.player_to_move();
        if player != to_move {
            return Err(InvalidMoveError::WrongPlayer {
                requested: player,
                to_move,
            });
        }

        match self.cell(position) {
            None => Err(InvalidMoveError::OutOfBounds(position)),
            Some(Cell::Empty) => Ok(self.with_mark(position.to_index(), player)),
            Some(_) => Err(InvalidMoveError::Occupied(position)),
        }
    }

    /// Unchecked placement for callers that already walk `empty_indices`.
    #[inline(always)]
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = player.mark();
        next
    }
}

pub fn is_valid_move(board: &Board, position: Position) -> bool {
    !board.is_terminal() && board.cell(position) == Some(Cell::Empty)
}

/// Plays up to `plies` uniformly random legal moves from the empty board,
/// stopping early if the game ends.
pub fn random_position(rng: &mut SessionRng, plies: usize) -> Board {
    let mut board = Board::initial();
    for _ in 0..plies {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let position = moves[rng.random_range(0..moves.len())];
        board = board.with_mark(position.to_index(), board.player_to_move());
    }
    board
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts 9 row-major cells: `X`, `O`, and `.`, `-` or `_` for empty.
    /// Whitespace, `/` and `|` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() || character == '/' || character == '|' {
                continue;
            }
            let cell = match character {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::InvalidCharacter {
                        character,
                        position: count,
                    });
                }
            };
            if count < CELL_COUNT {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(BoardParseError::Length { got: count });
        }
        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
