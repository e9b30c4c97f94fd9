//! Parsing of moves and interactive commands.

use reversi_engine::Square;

/// A line of input at the interactive prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Square),
    Moves,
    History,
    Rules,
    Restart,
    Help,
    Quit,
}

/// Parses one prompt line.
///
/// Accepts a square in algebraic notation (`d3`), a 1-based `row col` pair
/// (`3 4`), or a command word. Command words have one-letter aliases.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Err("Empty input".to_string());
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "moves" | "m" => Command::Moves,
        "history" | "h" => Command::History,
        "rules" | "r" => Command::Rules,
        "restart" | "new" | "n" => Command::Restart,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => match parts.next() {
            Some(second) => return parse_row_col(first, second, parts.next()),
            None => {
                let sq = first
                    .parse::<Square>()
                    .map_err(|e| format!("{e}: '{first}'"))?;
                Command::Play(sq)
            }
        },
    };

    if parts.next().is_some() {
        return Err(format!("'{first}' takes no arguments"));
    }
    Ok(command)
}

/// Parses a 1-based `row col` pair into a square.
fn parse_row_col(row: &str, col: &str, extra: Option<&str>) -> Result<Command, String> {
    if extra.is_some() {
        return Err("Expected a square like 'd3' or a row and column like '3 4'".to_string());
    }
    let row: usize = row
        .parse()
        .map_err(|_| format!("Invalid row: '{row}'"))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("Invalid column: '{col}'"))?;
    if row == 0 || col == 0 {
        return Err("Rows and columns are numbered from 1 to 8".to_string());
    }
    Square::from_row_col(row - 1, col - 1)
        .map(Command::Play)
        .ok_or_else(|| "Rows and columns are numbered from 1 to 8".to_string())
}

/// Parses a concatenated move string like "f5d6c3" into a list of squares.
///
/// Reads two characters at a time, interpreting each pair as a square in algebraic notation.
pub fn parse_move_string(input: &str) -> Result<Vec<Square>, String> {
    let input: String = input.split_whitespace().collect();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if !input.is_ascii() {
        return Err("Moves must be written as squares like 'd3'".to_string());
    }
    if !input.len().is_multiple_of(2) {
        return Err("Input length must be even (each move is 2 characters)".to_string());
    }

    let mut moves = Vec::new();
    for i in (0..input.len()).step_by(2) {
        let move_str = &input[i..i + 2];
        match move_str.parse::<Square>() {
            Ok(sq) => moves.push(sq),
            Err(_) => {
                return Err(format!(
                    "Invalid square at position {}: '{move_str}'",
                    (i / 2) + 1
                ));
            }
        }
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_command("d3"), Ok(Command::Play(Square::D3)));
        assert_eq!(parse_command("  F5 "), Ok(Command::Play(Square::F5)));
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_command("3 4"), Ok(Command::Play(Square::D3)));
        assert_eq!(parse_command("1 1"), Ok(Command::Play(Square::A1)));
        assert_eq!(parse_command("8 8"), Ok(Command::Play(Square::H8)));
    }

    #[test]
    fn test_parse_row_col_out_of_range() {
        assert!(parse_command("0 4").is_err());
        assert!(parse_command("3 9").is_err());
        assert!(parse_command("3 x").is_err());
        assert!(parse_command("3 4 5").is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("moves"), Ok(Command::Moves));
        assert_eq!(parse_command("H"), Ok(Command::History));
        assert_eq!(parse_command("rules"), Ok(Command::Rules));
        assert_eq!(parse_command("restart"), Ok(Command::Restart));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("quit now").is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_command("").is_err());
        assert!(parse_command("z9").is_err());
        assert!(parse_command("hello").is_err());
    }

    #[test]
    fn test_parse_move_string_valid() {
        let moves = parse_move_string("f5d6c3").unwrap();
        assert_eq!(moves, vec![Square::F5, Square::D6, Square::C3]);
        let moves = parse_move_string("f5 d6").unwrap();
        assert_eq!(moves, vec![Square::F5, Square::D6]);
    }

    #[test]
    fn test_parse_move_string_empty() {
        assert!(parse_move_string("").is_err());
    }

    #[test]
    fn test_parse_move_string_odd_length() {
        assert!(parse_move_string("f5d").is_err());
    }

    #[test]
    fn test_parse_move_string_invalid_square() {
        assert_eq!(
            parse_move_string("f5z9"),
            Err("Invalid square at position 2: 'z9'".to_string())
        );
        assert!(parse_move_string("f5é").is_err());
    }
}
