//! XFChess text board
//!
//! Plays a two-player game in the terminal. Board and status go to stdout,
//! logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use xfchess_rules::core::{load_settings, save_settings, settings_path, DisplaySettings};
use xfchess_rules::game::{ClickOutcome, GameSession, MoveResult};
use xfchess_rules::ui::command::HELP;
use xfchess_rules::ui::{parse_command, render_board, render_history, render_status, Command};

#[derive(Parser, Debug)]
#[command(name = "xfchess-rules", version, about = "Two-player chess on a text board")]
struct Cli {
    /// Settings file to load instead of the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw pieces as ASCII letters
    #[arg(long)]
    ascii: bool,

    /// Draw the board from Black's side
    #[arg(long)]
    flip: bool,

    /// Log filter, e.g. "debug" or "xfchess_rules=trace" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn draw(out: &mut impl Write, session: &GameSession, settings: &DisplaySettings) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render_board(session, settings))?;
    write!(out, "{}", render_status(session, settings))?;
    out.flush()
}

fn report_rejection(out: &mut impl Write, result: &MoveResult) -> io::Result<()> {
    if let Some(reason) = result.rejection {
        writeln!(out, "Move refused: {reason:?}")?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config_path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(Some(config_path.as_path()));
    if cli.ascii {
        settings.unicode_pieces = false;
    }
    if cli.flip {
        settings.flip_board = true;
    }

    let mut session = GameSession::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "XFChess - type `help` for commands")?;
    draw(&mut stdout, &session, &settings)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Click(square) => {
                if let ClickOutcome::Moved(result) = session.click(square) {
                    report_rejection(&mut stdout, &result)?;
                }
            }
            Command::Move(from, to) => {
                let result = session.attempt_move(from, to);
                report_rejection(&mut stdout, &result)?;
            }
            Command::NewGame => session.new_game(),
            Command::History => {
                write!(stdout, "{}", render_history(&session))?;
                continue;
            }
            Command::Flip => {
                settings.flip_board = !settings.flip_board;
                if let Err(e) = save_settings(&settings, &config_path) {
                    warn!("[SETTINGS] Could not save settings: {e}");
                }
            }
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        draw(&mut stdout, &session, &settings)?;
    }

    Ok(())
}
