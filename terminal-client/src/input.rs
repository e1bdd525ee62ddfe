use tictactoe_engine::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Position),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <row> <col>   place your mark, rows and columns numbered 1-3 (e.g. `2 3`)
  <A-C><1-3>    same, column letter then row number (e.g. `B2` is the center)
  r, reset      start a new game
  h, help       show this help
  q, quit       leave";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Err("Empty input, type `h` for help".to_string()),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "reset" => Ok(Command::Reset),
        "h" | "help" | "?" => Ok(Command::Help),
        _ => parse_position(trimmed).map(Command::Place),
    }
}

fn parse_position(text: &str) -> Result<Position, String> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = parse_number(row)?;
            let col = parse_number(col)?;
            Ok(Position::new(row, col))
        }
        [coord] => parse_letter_coord(coord),
        _ => Err(format!("Cannot read a move from `{}`", text)),
    }
}

fn parse_number(text: &str) -> Result<usize, String> {
    let value: usize = text
        .parse()
        .map_err(|_| format!("`{}` is not a number", text))?;
    if !(1..=BOARD_SIZE).contains(&value) {
        return Err(format!("{} is out of range, use 1-{}", value, BOARD_SIZE));
    }
    Ok(value - 1)
}

fn parse_letter_coord(text: &str) -> Result<Position, String> {
    let mut chars = text.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Cannot read a move from `{}`", text));
    };
    let col = match letter.to_ascii_uppercase() {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        _ => return Err(format!("Column `{}` is not one of A, B, C", letter)),
    };
    let row = parse_number(&digit.to_string())?;
    Ok(Position::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_is_one_based() {
        assert_eq!(parse_command("1 1"), Ok(Command::Place(Position::new(0, 0))));
        assert_eq!(parse_command(" 2, 3 "), Ok(Command::Place(Position::new(1, 2))));
    }

    #[test]
    fn test_letter_coordinates() {
        assert_eq!(parse_command("B2"), Ok(Command::Place(Position::new(1, 1))));
        assert_eq!(parse_command("c1"), Ok(Command::Place(Position::new(0, 2))));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("?"), Ok(Command::Help));
    }

    #[test]
    fn test_rejects_out_of_range_and_garbage() {
        assert!(parse_command("0 1").is_err());
        assert!(parse_command("4 1").is_err());
        assert!(parse_command("D1").is_err());
        assert!(parse_command("B4").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("hello").is_err());
        assert!(parse_command("   ").is_err());
    }
}
