//! CLI scoreboard example.
//!
//! Drives the engine from a terminal menu and persists a JSON snapshot to
//! `scoreboard.json` after every mutating operation, playing the role of
//! both the presenter and the persistence adapter.

#![allow(clippy::missing_docs_in_private_items)]

use std::fs;
use std::io::{self, Write};

use roundtally::{
    EngineOptions, GroupLabel, HISTORY_HEADER, RANKING_HEADER, RoundState, ScoringEngine, Snapshot,
};

const SNAPSHOT_FILE: &str = "scoreboard.json";

fn main() {
    let mut engine = load_engine();
    println!("Scoreboard ({} groups loaded)", engine.groups().len());

    loop {
        print_status(&engine);

        let Some(choice) = prompt("[s]tart round, [p]lace, [f]inalize, [a]dd group, [r]anking, [h]istory, [x] reset, [q]uit: ")
        else {
            break;
        };

        match choice.as_str() {
            "s" => {
                engine.start_round();
                save(&engine);
            }
            "p" => {
                record_placements(&mut engine);
                save(&engine);
            }
            "f" => match engine.finalize_round() {
                Ok(record) => {
                    println!("Round {} recorded.", record.round);
                    save(&engine);
                }
                Err(err) => println!("Cannot finalize: {err}"),
            },
            "a" => {
                let next = engine.next_auto_label();
                match engine.add_group(next.clone()) {
                    Ok(()) => {
                        println!("Group {next} added.");
                        save(&engine);
                    }
                    Err(err) => println!("Cannot add group: {err}"),
                }
            }
            "r" => print_table(
                &RANKING_HEADER,
                engine.export_ranking().iter().map(|row| row.cells().to_vec()),
            ),
            "h" => print_table(
                &HISTORY_HEADER,
                engine.export_history().iter().map(|row| row.cells().to_vec()),
            ),
            "x" => {
                engine.reset();
                save(&engine);
                println!("All data cleared.");
            }
            "q" => break,
            _ => println!("Unknown choice."),
        }
    }

    println!("Goodbye.");
}

fn load_engine() -> ScoringEngine {
    let options = EngineOptions::default();

    if let Ok(json) = fs::read_to_string(SNAPSHOT_FILE) {
        match serde_json::from_str::<Snapshot>(&json)
            .map_err(|err| err.to_string())
            .and_then(|snapshot| {
                ScoringEngine::from_snapshot(options.clone(), snapshot)
                    .map_err(|err| err.to_string())
            }) {
            Ok(engine) => return engine,
            Err(err) => println!("Ignoring unreadable snapshot: {err}"),
        }
    }

    ScoringEngine::new(options).expect("default roster is valid")
}

fn save(engine: &ScoringEngine) {
    // A failed save never touches engine state; just report it.
    let result = serde_json::to_string_pretty(&engine.snapshot())
        .map_err(|err| err.to_string())
        .and_then(|json| fs::write(SNAPSHOT_FILE, json).map_err(|err| err.to_string()));
    if let Err(err) = result {
        println!("Warning: could not save snapshot: {err}");
    }
}

fn print_status(engine: &ScoringEngine) {
    match engine.state() {
        RoundState::InProgress => {
            let missing = engine.missing_placements();
            if missing.is_empty() {
                println!("\nRound {} in progress, ready to finalize.", engine.current_round());
            } else {
                let names: Vec<_> = missing.iter().map(GroupLabel::to_string).collect();
                println!(
                    "\nRound {} in progress, waiting on: {}",
                    engine.current_round(),
                    names.join(", ")
                );
            }
        }
        RoundState::Idle => println!("\nRound {} not yet started.", engine.current_round()),
    }
}

fn record_placements(engine: &mut ScoringEngine) {
    if engine.state() != RoundState::InProgress {
        println!("No round is open; start one first.");
        return;
    }

    let limit = engine.round_table().map_or(0, |table| table.len());
    let roster = engine.groups().to_vec();

    for group in &roster {
        let Some(text) = prompt(&format!("Placement for {group} (1-{limit}, blank to skip): "))
        else {
            return;
        };
        if text.is_empty() {
            continue;
        }
        let Ok(placement) = text.parse::<u8>() else {
            println!("Not a number, skipping {group}.");
            continue;
        };
        if let Err(err) = engine.set_placement(group, placement) {
            println!("Rejected: {err}");
        }
    }
}

fn print_table<I>(header: &[&str], rows: I)
where
    I: Iterator<Item = Vec<String>>,
{
    println!("{}", header.join(" | "));
    for row in rows {
        println!("{}", row.join(" | "));
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{message}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    Some(line.trim().to_owned())
}
