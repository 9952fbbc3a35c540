//! The UCI engine loop: read stdin, dispatch commands, print replies.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use lucena_core::{Board, PrettyBoard};
use lucena_engine::{SearchLimits, Searcher};

use crate::command::{Command, GoParams, parse_command};
use crate::error::UciError;

/// Search depth used when `go` specifies neither depth nor movetime.
const DEFAULT_DEPTH: u32 = 5;

/// The UCI engine: current position plus the searcher that persists
/// across moves of one game.
///
/// Everything runs on the calling thread; a `go` command searches to
/// completion before the next line is read. Replies go to stdout and are
/// flushed immediately; diagnostics go to stderr via `tracing`.
pub struct UciEngine {
    board: Board,
    searcher: Searcher,
}

impl UciEngine {
    /// Create an engine holding the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            searcher: Searcher::new(),
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), UciError> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Uci) => self.handle_uci(),
                Ok(Command::IsReady) => reply("readyok"),
                Ok(Command::UciNewGame) => self.handle_ucinewgame(),
                Ok(Command::Position(board)) => self.board = board,
                Ok(Command::Go(params)) => self.handle_go(params),
                Ok(Command::Display) => reply(&format!("{}", PrettyBoard(&self.board))),
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(cmd)) => {
                    if !cmd.is_empty() {
                        debug!(cmd = %cmd, "ignoring unknown command");
                    }
                }
                Err(err) => warn!(error = %err, line = %trimmed, "discarding malformed command"),
            }
        }

        info!("lucena shutting down");
        Ok(())
    }

    fn handle_uci(&self) {
        reply("id name lucena");
        reply("id author lucena developers");
        reply("uciok");
    }

    fn handle_ucinewgame(&mut self) {
        self.board = Board::starting_position();
        self.searcher.clear_tt();
    }

    fn handle_go(&mut self, params: GoParams) {
        let limits = SearchLimits {
            depth: match (params.depth, params.movetime_ms) {
                (None, None) => Some(DEFAULT_DEPTH),
                (depth, _) => depth,
            },
            movetime: params.movetime_ms.map(Duration::from_millis),
        };

        let result = self
            .searcher
            .find_best_move(&mut self.board, &limits, |depth, score, nodes, elapsed, mv| {
                let ms = elapsed.as_millis();
                reply(&format!(
                    "info depth {depth} score cp {score} nodes {nodes} time {ms} pv {mv}"
                ));
            });

        match result.best_move {
            Some(mv) => reply(&format!("bestmove {}", mv.to_uci())),
            // No legal move: the GUI infers mate or stalemate itself.
            None => reply("bestmove 0000"),
        }
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Print one UCI reply line and flush, so a GUI reading a pipe sees it
/// immediately.
fn reply(text: &str) {
    println!("{text}");
    let _ = io::stdout().flush();
}
