use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{GameOutcome, GameSession, is_valid_move};

use crate::input::{Command, HELP, parse_command};
use crate::render::render_board;

/// Drives one session until the player quits or input ends. The computer
/// moves as soon as it is its turn; the human is prompted otherwise.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut output: W,
) -> Result<(), Box<dyn Error>> {
    writeln!(
        output,
        "You play {} against {:?} search. X moves first. Type `h` for help.",
        session.human(),
        session.algorithm()
    )?;

    let mut line = String::new();
    loop {
        if session.is_computer_turn() {
            let result = session.play_computer()?;
            log!(
                "Computer ({}) plays {} after searching {} nodes",
                session.computer(),
                result.position,
                result.nodes
            );
            writeln!(
                output,
                "Computer plays row {}, column {}.",
                result.position.row + 1,
                result.position.col + 1
            )?;
            continue;
        }

        let outcome = session.outcome();
        writeln!(output, "{}", render_board(session.board(), session.winning_line().as_ref()))?;
        if outcome.is_terminal() {
            writeln!(output, "{}", outcome_message(session, outcome))?;
            writeln!(output, "Type `r` to play again or `q` to quit.")?;
        } else {
            write!(output, "Your move ({}): ", session.human())?;
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Reset) => {
                session.reset();
                log!("New game, human plays {}", session.human());
            }
            Ok(Command::Place(position)) => {
                if session.outcome().is_terminal() {
                    writeln!(output, "The game is over.")?;
                } else if !is_valid_move(session.board(), position) {
                    writeln!(
                        output,
                        "Row {}, column {} is already occupied, pick a free cell.",
                        position.row + 1,
                        position.col + 1
                    )?;
                } else if let Err(err) = session.play_human(position) {
                    writeln!(output, "{}", err)?;
                }
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}

fn outcome_message(session: &GameSession, outcome: GameOutcome) -> String {
    match outcome.winner() {
        Some(winner) if winner == session.human() => format!("{} wins. Well played!", winner),
        Some(winner) => format!("{} wins. The computer takes this one.", winner),
        None => "Draw.".to_string(),
    }
}
