//! Line-oriented console front-end.
//!
//! Reads one command per line from stdin, drives a single `GameController`
//! and writes replies to stdout. Commands:
//!
//! ```text
//! new                                   start a new game
//! click <square>                        click a cell, e.g. `click e2`
//! promote <square> <n|b|r|q>            resolve a pending promotion
//! board | status                        show the board or the status line
//! export                                print the base64url board
//! sync <board> <turn-owner> <moves>     apply a remote snapshot
//! perft <depth>                         count leaf nodes from the board
//! divide <depth>                        perft split by root move
//! setoption name <Name> value <v>       ShowCandidates, Unicode, Identity, Color
//! quit
//! ```

use std::io::{self, BufRead, Write};

use crate::controller::game_controller::{GameController, LocalPlayer};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::perft::{perft, perft_divide};
use crate::utils::algebraic::parse_coordinate;
use crate::utils::board_codec::compress_board;
use crate::utils::render_game_state::{render_game_state, status_line, Glyphs};

const MAX_CONSOLE_PERFT_DEPTH: u8 = 6;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct ConsoleState {
    controller: GameController,
    show_candidates: bool,
    glyphs: Glyphs,
    local: LocalPlayer,
}

impl ConsoleState {
    fn new() -> Self {
        Self {
            controller: GameController::new(),
            show_candidates: true,
            glyphs: Glyphs::Ascii,
            local: LocalPlayer::new("local", Color::White),
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "new" => {
                self.controller.start_new_game();
                writeln!(out, "{}", status_line(&self.controller.state()))?;
                Ok(())
            }
            "click" => self.handle_click(&args, out),
            "promote" => self.handle_promote(&args, out),
            "board" => {
                writeln!(out, "{}", render_game_state(&self.controller.state(), self.glyphs))?;
                Ok(())
            }
            "status" => {
                writeln!(out, "{}", status_line(&self.controller.state()))?;
                Ok(())
            }
            "export" => {
                writeln!(out, "{}", compress_board(&self.controller.state().board))?;
                Ok(())
            }
            "sync" => self.handle_sync(&args, out),
            "perft" => self.handle_perft(&args, out),
            "divide" => self.handle_divide(&args, out),
            "setoption" => self.handle_setoption(trimmed),
            "quit" => return Ok(true),
            _ => Err(format!("unknown command '{cmd}'")),
        };

        if let Err(err) = result {
            writeln!(out, "error: {err}")?;
        }
        Ok(false)
    }

    fn handle_click(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let square = args.first().ok_or("click needs a square")?;
        let coordinate = parse_coordinate(square).map_err(|err| err.to_string())?;

        if !self.controller.on_cell_click(coordinate) {
            writeln!(out, "ignored").map_err(|err| err.to_string())?;
            return Ok(());
        }

        let state = self.controller.state();
        let mut reply = status_line(&state);
        if let (true, Some(candidates)) = (self.show_candidates, state.candidates.as_ref()) {
            let mut targets: Vec<String> = candidates.iter().map(|mv| mv.to.to_string()).collect();
            targets.sort();
            reply.push_str(&format!(" candidates {}", targets.join(" ")));
        }
        writeln!(out, "{reply}").map_err(|err| err.to_string())
    }

    fn handle_promote(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let [square, kind] = args else {
            return Err("promote needs a square and a piece letter".to_owned());
        };
        let coordinate = parse_coordinate(square).map_err(|err| err.to_string())?;
        let kind = match kind.to_ascii_lowercase().as_str() {
            "n" => PieceKind::Knight,
            "b" => PieceKind::Bishop,
            "r" => PieceKind::Rook,
            "q" => PieceKind::Queen,
            other => return Err(format!("invalid promotion piece '{other}'")),
        };

        let reply = if self.controller.on_promotion_selected(coordinate, kind) {
            status_line(&self.controller.state())
        } else {
            "ignored".to_owned()
        };
        writeln!(out, "{reply}").map_err(|err| err.to_string())
    }

    fn handle_sync(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let [board, turn_owner, moves] = args else {
            return Err("sync needs a board, a turn owner and a move count".to_owned());
        };
        let move_count = moves
            .parse::<u32>()
            .map_err(|_| format!("invalid move count '{moves}'"))?;
        self.controller
            .apply_compressed_snapshot(board, turn_owner, &self.local, move_count)
            .map_err(|err| err.to_string())?;
        writeln!(out, "{}", status_line(&self.controller.state())).map_err(|err| err.to_string())
    }

    fn handle_perft(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let depth = perft_depth(args)?;
        let state = self.controller.state();
        let counts = perft(&state.board, state.turn, state.en_passant, depth);
        writeln!(
            out,
            "nodes {} captures {} ep {} castles {} promotions {} checks {}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks
        )
        .map_err(|err| err.to_string())
    }

    fn handle_divide(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let depth = perft_depth(args)?;
        let state = self.controller.state();
        let mut split = perft_divide(&state.board, state.turn, state.en_passant, depth);
        split.sort();

        let mut total = 0;
        for (label, nodes) in &split {
            writeln!(out, "{label} {nodes}").map_err(|err| err.to_string())?;
            total += nodes;
        }
        writeln!(out, "total {total}").map_err(|err| err.to_string())
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";
        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("ShowCandidates") {
            self.show_candidates = parse_flag(&value);
        } else if name.eq_ignore_ascii_case("Unicode") {
            self.glyphs = if parse_flag(&value) {
                Glyphs::Unicode
            } else {
                Glyphs::Ascii
            };
        } else if name.eq_ignore_ascii_case("Identity") {
            if value.is_empty() {
                return Err("Identity needs a value".to_owned());
            }
            self.local.identity = value;
        } else if name.eq_ignore_ascii_case("Color") {
            self.local.color = match value.to_ascii_lowercase().as_str() {
                "white" | "w" => Color::White,
                "black" | "b" => Color::Black,
                _ => return Err(format!("invalid Color value '{value}'")),
            };
        } else {
            return Err(format!("unknown option '{name}'"));
        }
        Ok(())
    }
}

fn perft_depth(args: &[&str]) -> Result<u8, String> {
    let depth = args
        .first()
        .ok_or("perft needs a depth")?
        .parse::<u8>()
        .map_err(|_| "invalid perft depth".to_owned())?;
    if depth > MAX_CONSOLE_PERFT_DEPTH {
        return Err(format!("perft depth is capped at {MAX_CONSOLE_PERFT_DEPTH}"));
    }
    Ok(depth)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::ConsoleState;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::utils::board_codec::compress_board;
    use crate::utils::render_game_state::Glyphs;

    fn run(console: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::new();
        console
            .handle_command(line, &mut out)
            .expect("writing to a Vec should not fail");
        String::from_utf8(out).expect("console output should be utf-8")
    }

    #[test]
    fn click_reports_candidates_and_moves() {
        let mut console = ConsoleState::new();
        let reply = run(&mut console, "click g1");
        assert_eq!(reply.trim(), "turn white moves 0 condition - candidates f3 h3");

        let reply = run(&mut console, "click f3");
        assert_eq!(reply.trim(), "turn black moves 1 condition -");

        assert_eq!(run(&mut console, "click a1").trim(), "ignored");
        assert!(run(&mut console, "click z9").starts_with("error:"));
    }

    #[test]
    fn setoption_updates_console_options() {
        let mut console = ConsoleState::new();
        run(&mut console, "setoption name ShowCandidates value false");
        run(&mut console, "setoption name Unicode value on");
        run(&mut console, "setoption name Identity value u-tail");
        run(&mut console, "setoption name Color value black");
        assert!(!console.show_candidates);
        assert_eq!(console.glyphs, Glyphs::Unicode);
        assert_eq!(console.local.identity, "u-tail");
        assert_eq!(console.local.color, Color::Black);

        assert!(run(&mut console, "setoption name Color value green").starts_with("error:"));
        assert!(run(&mut console, "setoption name Hash value 1").starts_with("error:"));
    }

    #[test]
    fn sync_uses_the_local_identity() {
        let mut console = ConsoleState::new();
        run(&mut console, "setoption name Identity value u-tail");
        run(&mut console, "setoption name Color value black");

        let board = compress_board(&Board::initial_layout());
        let reply = run(&mut console, &format!("sync {board} u-tail 6"));
        assert_eq!(reply.trim(), "turn black moves 6 condition -");

        assert!(run(&mut console, "sync AAAA u-tail 6").starts_with("error:"));
        assert_eq!(run(&mut console, "export").trim(), board);
    }

    #[test]
    fn perft_and_quit() {
        let mut console = ConsoleState::new();
        assert_eq!(
            run(&mut console, "perft 2").trim(),
            "nodes 400 captures 0 ep 0 castles 0 promotions 0 checks 0"
        );
        assert!(run(&mut console, "perft 9").starts_with("error:"));
        assert!(run(&mut console, "divide x").starts_with("error:"));

        let mut out = Vec::new();
        assert!(console
            .handle_command("quit", &mut out)
            .expect("quit should not fail"));
    }

    #[test]
    fn divide_lists_root_moves_and_follows_the_en_passant_window() {
        let mut console = ConsoleState::new();
        let reply = run(&mut console, "divide 1");
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "a2a3 1");
        assert_eq!(lines[20], "total 20");

        for square in ["h2", "h3", "d7", "d5", "h3", "h4", "d5", "d4", "e2", "e4"] {
            run(&mut console, &format!("click {square}"));
        }
        assert!(run(&mut console, "divide 1").lines().any(|line| line == "d4e3 1"));

        run(&mut console, "click a7");
        run(&mut console, "click a6");
        run(&mut console, "click h4");
        run(&mut console, "click h5");
        assert!(!run(&mut console, "divide 1").lines().any(|line| line == "d4e3 1"));
    }
}
