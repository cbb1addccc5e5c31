//! 端末で動作する最小 UI。

mod config;
mod logging;

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::StdRng;
use reversi_core::engine::{CellState, Color, GameState, GameStatus, Square};
use reversi_core::{Difficulty, select_cpu_move};

use crate::config::{Controller, MatchConfig};
use crate::logging::LogFormat;

/// 盤面の一辺の長さ（マス）。
const BOARD_LEN: u8 = 8;

#[derive(Debug, Parser)]
#[command(name = "reversi", about = "Play Reversi against the computer in a terminal")]
pub struct Args {
    /// CPU strength
    #[arg(long, default_value_t = Difficulty::Beginner)]
    level: Difficulty,
    /// CPU plays Black and moves first
    #[arg(long)]
    cpu_starts: bool,
    /// Seed for the CPU's random source (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Artificial delay before each CPU move, in milliseconds
    #[arg(long, default_value_t = 500)]
    think_ms: u64,
    /// Let the CPU play both sides
    #[arg(long)]
    autoplay: bool,
    /// Log output format (stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

/// 人間の入力。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Play(Square),
    Quit,
    Reset,
}

fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "reset" => Ok(Command::Reset),
        other => other
            .parse::<Square>()
            .map(Command::Play)
            .map_err(|err| err.to_string()),
    }
}

#[derive(Debug)]
struct App {
    black: Controller,
    config: MatchConfig,
    game: GameState,
    rng: StdRng,
    white: Controller,
}

impl App {
    fn new(config: MatchConfig) -> Self {
        let (black, white) = config.controllers();
        let rng = config.rng();
        Self {
            black,
            config,
            game: GameState::initial(),
            rng,
            white,
        }
    }

    fn controller_for(&self, color: Color) -> Controller {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
            _ => self.black,
        }
    }

    /// 手番が人間かどうか。CPU の手番中は人間の入力を受け付けない。
    fn is_human_turn(&self) -> bool {
        !self.game.is_game_over() && self.controller_for(self.game.current_player()).is_human()
    }

    fn reset(&mut self) {
        self.game = self.game.reset();
        tracing::info!(level = %self.config.difficulty, "game reset");
    }

    fn status_text(&self) -> String {
        let black = self.game.black_count();
        let white = self.game.white_count();

        match self.game.status() {
            GameStatus::InProgress => {
                let side = self.game.current_player();
                format!("{side} to move | B={black} W={white}")
            }
            GameStatus::GameOver { black: b, white: w } => {
                let result = match self.game.winner() {
                    Some(Color::Black) => "Black wins",
                    Some(Color::White) => "White wins",
                    _ => "Draw",
                };
                format!("Game Over: {result} | B={b} W={w}")
            }
            _ => format!("Unknown status | B={black} W={white}"),
        }
    }

    /// CPU の手番なら1手進める。打てた場合は `true`。
    fn step_cpu_once(&mut self) -> bool {
        let side = self.game.current_player();
        let Controller::Cpu(level) = self.controller_for(side) else {
            return false;
        };
        if self.game.is_game_over() {
            return false;
        }

        std::thread::sleep(self.config.think);
        let Some(square) = select_cpu_move(&self.game, level, &mut self.rng) else {
            return false;
        };

        match self.game.play(square) {
            Ok(next) => {
                tracing::info!(player = %side, %square, %level, "cpu move");
                self.game = next;
                true
            }
            Err(err) => {
                tracing::warn!(%square, %err, "cpu selected a rejected move");
                false
            }
        }
    }

    fn try_human_move(&mut self, square: Square) -> Result<(), String> {
        if !self.is_human_turn() {
            return Err("it is not your turn".to_owned());
        }

        let next = self.game.play(square).map_err(|err| err.to_string())?;
        tracing::info!(player = %self.game.current_player(), %square, "human move");
        self.game = next;
        Ok(())
    }
}

fn render(out: &mut impl Write, app: &App) -> io::Result<()> {
    let board = app.game.board();
    let hints: &[Square] = if app.is_human_turn() {
        app.game.valid_moves()
    } else {
        &[]
    };

    writeln!(out)?;
    writeln!(out, "   a b c d e f g h")?;
    for row in 0..BOARD_LEN {
        write!(out, "{:>2}", row + 1)?;
        for col in 0..BOARD_LEN {
            let Some(square) = Square::from_row_col(row, col) else {
                continue;
            };
            let mark = match board.cell(square) {
                CellState::Black => 'X',
                CellState::White => 'O',
                _ if hints.contains(&square) => '*',
                _ => '.',
            };
            write!(out, " {mark}")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{}", app.status_text())?;

    if !hints.is_empty() {
        let moves: Vec<String> = hints.iter().map(ToString::to_string).collect();
        writeln!(out, "legal moves: {}", moves.join(" "))?;
    }
    Ok(())
}

fn run(app: &mut App) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        render(&mut stdout, app)?;

        if app.game.is_game_over() {
            tracing::info!(
                black = app.game.black_count(),
                white = app.game.white_count(),
                "game finished"
            );
            if app.config.autoplay {
                return Ok(());
            }
            write!(stdout, "r = play again, q = quit > ")?;
        } else if app.is_human_turn() {
            write!(stdout, "{} > ", app.game.current_player())?;
        } else {
            app.step_cpu_once();
            continue;
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        match parse_command(&line?) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::Reset) => app.reset(),
            Ok(Command::Play(square)) => {
                if let Err(err) = app.try_human_move(square) {
                    writeln!(stdout, "{err}")?;
                }
            }
            Err(err) => writeln!(stdout, "{err} (enter a square like d3, r or q)")?,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_format)?;

    let config = MatchConfig::from(&args);
    tracing::info!(
        level = %config.difficulty,
        cpu_starts = config.cpu_starts,
        autoplay = config.autoplay,
        "starting reversi"
    );

    let mut app = App::new(config);
    run(&mut app)
}
