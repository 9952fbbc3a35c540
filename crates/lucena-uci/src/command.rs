//! UCI command parsing.

use lucena_core::{Board, Move};

use crate::error::UciError;

/// Arguments of a `go` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// `go depth N`: fixed search depth in plies.
    pub depth: Option<u32>,
    /// `go movetime N`: wall-clock budget in milliseconds.
    pub movetime_ms: Option<u64>,
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` — identify the engine.
    Uci,
    /// `isready` — synchronization ping.
    IsReady,
    /// `ucinewgame` — reset board and transposition table.
    UciNewGame,
    /// `position` — set up a board with optional moves applied.
    Position(Board),
    /// `go` — run a search.
    Go(GoParams),
    /// `d` — print the board (debug extension).
    Display,
    /// `quit` — exit the engine.
    Quit,
    /// Unrecognized command, silently ignored per the UCI convention.
    Unknown(String),
}

/// Parse a single line of UCI input.
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match first {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "d" | "display" => Ok(Command::Display),
        "quit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse `position [startpos | fen <fen6>] [moves <uci>...]`.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.is_empty() {
        return Err(UciError::MalformedPosition);
    }

    let (mut board, rest) = if tokens[0] == "startpos" {
        (Board::starting_position(), &tokens[1..])
    } else if tokens[0] == "fen" {
        if tokens.len() < 7 {
            return Err(UciError::MalformedPosition);
        }
        let fen = tokens[1..7].join(" ");
        let board: Board = fen.parse().map_err(|source| UciError::InvalidFen {
            fen: fen.clone(),
            source,
        })?;
        (board, &tokens[7..])
    } else {
        return Err(UciError::MalformedPosition);
    };

    if let Some((&"moves", move_tokens)) = rest.split_first() {
        for text in move_tokens {
            let mv = Move::from_uci(text, &board).map_err(|source| UciError::InvalidMove {
                uci_move: text.to_string(),
                source,
            })?;
            board.make_move(mv);
        }
    }

    Ok(Command::Position(board))
}

/// Parse `go [depth N] [movetime ms]`.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" if i + 1 < tokens.len() => {
                params.depth = Some(parse_number(tokens[i + 1])?);
                i += 2;
            }
            "movetime" if i + 1 < tokens.len() => {
                params.movetime_ms = Some(parse_number(tokens[i + 1])?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T, UciError> {
    text.parse().map_err(|_| UciError::InvalidGoArgument {
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use lucena_core::{Color, PieceKind, Square};

    use super::{Command, parse_command};

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("uci").unwrap(), Command::Uci));
        assert!(matches!(parse_command("isready").unwrap(), Command::IsReady));
        assert!(matches!(
            parse_command("ucinewgame").unwrap(),
            Command::UciNewGame
        ));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
        assert!(matches!(parse_command("d").unwrap(), Command::Display));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(
            parse_command("foobar").unwrap(),
            Command::Unknown(_)
        ));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(_)));
    }

    #[test]
    fn parse_position_startpos() {
        let cmd = parse_command("position startpos").unwrap();
        let Command::Position(board) = cmd else {
            panic!("expected Position");
        };
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn parse_position_with_moves() {
        let cmd = parse_command("position startpos moves e2e4 e7e5 g1f3").unwrap();
        let Command::Position(board) = cmd else {
            panic!("expected Position");
        };
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(
            board.piece_at(Square::new(5, 5)).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        )
        .unwrap();
        let Command::Position(board) = cmd else {
            panic!("expected Position");
        };
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant(), Some(Square::new(5, 4)));
    }

    #[test]
    fn parse_position_fen_with_moves() {
        let cmd = parse_command(
            "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 moves d2d4",
        )
        .unwrap();
        let Command::Position(board) = cmd else {
            panic!("expected Position");
        };
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(
            board.piece_at(Square::new(4, 3)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn parse_position_castling_move() {
        let cmd = parse_command(
            "position fen r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1 moves e1g1",
        )
        .unwrap();
        let Command::Position(board) = cmd else {
            panic!("expected Position");
        };
        // The rook must have come along to f1.
        assert_eq!(
            board.piece_at(Square::new(7, 5)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(
            board.piece_at(Square::new(7, 6)).map(|p| p.kind),
            Some(PieceKind::King)
        );
    }

    #[test]
    fn parse_go_variants() {
        let Command::Go(params) = parse_command("go depth 6").unwrap() else {
            panic!("expected Go");
        };
        assert_eq!(params.depth, Some(6));
        assert_eq!(params.movetime_ms, None);

        let Command::Go(params) = parse_command("go movetime 2500").unwrap() else {
            panic!("expected Go");
        };
        assert_eq!(params.movetime_ms, Some(2500));

        let Command::Go(params) = parse_command("go depth 4 movetime 100").unwrap() else {
            panic!("expected Go");
        };
        assert_eq!(params.depth, Some(4));
        assert_eq!(params.movetime_ms, Some(100));

        let Command::Go(params) = parse_command("go").unwrap() else {
            panic!("expected Go");
        };
        assert_eq!(params, super::GoParams::default());
    }

    #[test]
    fn position_errors_are_reported() {
        assert!(parse_command("position").is_err());
        assert!(parse_command("position fen only three fields here now").is_err());
        assert!(parse_command("position startpos moves e9e4").is_err());
        assert!(parse_command("position startpos moves e3e4").is_err());
    }

    #[test]
    fn go_rejects_non_numeric_arguments() {
        assert!(parse_command("go depth soon").is_err());
        assert!(parse_command("go movetime lots").is_err());
    }
}
