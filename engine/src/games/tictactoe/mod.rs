mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, is_valid_move, random_position};
pub use bot_controller::{SearchAlgorithm, SearchResult, best_move, evaluate, search};
pub use error::{BoardParseError, InvalidMoveError, Precondition, SearchError, SessionError};
pub use game_state::{GameSession, HumanSide, PlayedMove};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, GameOutcome, LineKind, Player, Position, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
