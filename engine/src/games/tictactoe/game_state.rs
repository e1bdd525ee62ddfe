use serde::{Deserialize, Serialize};

use crate::debug;
use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{SearchAlgorithm, SearchResult, search};
use super::error::SessionError;
use super::types::{GameOutcome, Player, Position, WinningLine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub player: Player,
    pub position: Position,
}

/// Which side the human plays. X always moves first, so this also fixes who opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumanSide {
    #[default]
    X,
    O,
    Random,
}

impl HumanSide {
    pub fn resolve(self, rng: &mut SessionRng) -> Player {
        match self {
            HumanSide::X => Player::X,
            HumanSide::O => Player::O,
            HumanSide::Random => {
                if rng.random_bool() {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }
}

/// One human against the search engine. Moves alternate strictly: the
/// session refuses a human move on the computer's turn and vice versa.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human: Player,
    algorithm: SearchAlgorithm,
    history: Vec<PlayedMove>,
}

impl GameSession {
    pub fn new(human: Player, algorithm: SearchAlgorithm) -> Self {
        Self {
            board: Board::initial(),
            human,
            algorithm,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<PlayedMove> {
        self.history.last().copied()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.board.is_terminal() && self.board.player_to_move() == self.human
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.board.is_terminal() && self.board.player_to_move() == self.computer()
    }

    pub fn play_human(&mut self, position: Position) -> Result<GameOutcome, SessionError> {
        if !self.board.is_terminal() && !self.is_human_turn() {
            return Err(SessionError::NotHumanTurn);
        }
        self.board = self.board.apply_move(position, self.human)?;
        self.record(self.human, position);
        Ok(self.board.outcome())
    }

    pub fn play_computer(&mut self) -> Result<SearchResult, SessionError> {
        if !self.board.is_terminal() && !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let computer = self.computer();
        let result = search(&self.board, computer, self.algorithm)?;
        self.board = self.board.apply_move(result.position, computer)?;
        self.record(computer, result.position);
        Ok(result)
    }

    /// Drops the current game and starts over with the same sides.
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.history.clear();
    }

    fn record(&mut self, player: Player, position: Position) {
        self.history.push(PlayedMove { player, position });
        debug!(
            "{} played {} (ply {}, {})",
            player,
            position,
            self.history.len(),
            self.board.outcome()
        );
    }
}
