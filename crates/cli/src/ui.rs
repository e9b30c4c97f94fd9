use colored::Colorize;
use reversi_engine::GameState;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::game;
use crate::parse::{Command, parse_command};

/// Runs an interactive two-player game on the terminal.
pub fn ui_loop() -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut game = GameState::new();
    let mut notice: Option<String> = None;

    println!("{}", game::HELP);
    println!();

    loop {
        println!("{}", game::render_board(&game));
        println!();
        match notice.take() {
            Some(text) => println!("{}", text.bold()),
            None => println!("{}", game::status_message(&game)),
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(line.as_str());
        if line.trim().is_empty() {
            continue;
        }
        println!();

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                notice = Some(format!("{err}. Type 'help' for commands."));
                continue;
            }
        };

        match command {
            Command::Play(sq) => match game.apply_move(sq) {
                Ok(outcome) => notice = game::outcome_message(&outcome),
                Err(err) => {
                    debug!(%err, "move rejected at prompt");
                    notice = Some(err.to_string().red().to_string());
                }
            },
            Command::Moves => notice = Some(game::moves_message(&game)),
            Command::History => {
                let lines = game::history_lines(&game, game::HISTORY_LIMIT);
                if lines.is_empty() {
                    notice = Some("No moves yet.".to_string());
                } else {
                    println!("Last {} of {} moves:", lines.len(), game.move_count());
                    for line in lines {
                        println!("  {line}");
                    }
                    println!();
                }
            }
            Command::Rules => {
                println!("{}", game::RULES);
                println!();
            }
            Command::Restart => {
                game.restart();
                notice = Some("New game. Black's turn".to_string());
            }
            Command::Help => {
                println!("{}", game::HELP);
                println!();
            }
            Command::Quit => break,
        }
    }

    Ok(())
}
