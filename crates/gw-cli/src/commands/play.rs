use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use gw_engine::{GameSession, SessionConfig, TurnOutcome};

pub fn run(path: Option<&Path>, name: Option<&str>) -> Result<(), String> {
    let catalog = super::load_catalog(path)?;
    let mut session = GameSession::new(Arc::new(catalog), SessionConfig::default());

    println!("  {} '{}'", "Starting".bold(), session.catalog().title());
    println!("  Commands: look, journal, restart, quit (a choice with the same key wins).\n");
    println!("{}\n", session.start(name));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let said = input.to_lowercase();
        let is_choice = session
            .catalog()
            .get_scene(session.continuity().current_scene())
            .is_some_and(|scene| scene.choice(&said).is_some());

        match said.as_str() {
            _ if is_choice => println!("{}\n", session.submit_action(input)),
            "quit" | "q" => break,
            "look" => println!("{}\n", session.current_text()),
            "journal" => println!("{}\n", session.journal_report().cyan()),
            "restart" => println!("{}\n", session.reset()),
            _ => match session.take_turn(input) {
                outcome @ TurnOutcome::Advanced { .. } => println!("{}\n", outcome.text()),
                TurnOutcome::Unresolved { text } => println!("{}\n", text.yellow()),
            },
        }
    }

    Ok(())
}
