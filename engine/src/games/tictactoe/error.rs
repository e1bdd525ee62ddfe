use thiserror::Error;

use super::types::{GameOutcome, Player, Position};

/// Rejected move. The board the move was attempted on is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveError {
    #[error("position {0} is outside the 3x3 board")]
    OutOfBounds(Position),

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("it is {to_move}'s turn, not {requested}'s")]
    WrongPlayer { requested: Player, to_move: Player },

    #[error("game is already over ({0})")]
    GameOver(GameOutcome),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("board is already decided ({0})")]
    TerminalBoard(GameOutcome),

    #[error("search requested for {requested} but {to_move} is to move")]
    NotPlayersTurn { requested: Player, to_move: Player },
}

/// Search was called outside its contract; callers check the outcome first.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("search precondition violated: {0}")]
    PreconditionViolation(Precondition),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 9 cells, got {got}")]
    Length { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("invalid mark counts: X={x_count}, O={o_count} (X must equal O or lead by one)")]
    InvalidCounts { x_count: usize, o_count: usize },

    #[error("board cannot arise from legal play: {0}")]
    Unreachable(&'static str),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("it is not the human's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,
}
