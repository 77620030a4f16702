use colored::Colorize;

use ore_core::{Gobble, Match, gobble_match};

pub fn run(target: &str, gobble: &str, json: bool) -> Result<(), String> {
    let target: Match = target.parse().map_err(|e: ore_core::OreError| e.to_string())?;
    let gobble: Gobble = gobble.parse().map_err(|e: ore_core::OreError| e.to_string())?;

    let outcome = gobble_match(target, gobble.clone());

    if json {
        let text = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    if !outcome.consumed {
        println!(
            "  {} Gobble dice {gobble} cannot touch {target}.",
            "Blocked:".yellow()
        );
        return Ok(());
    }

    match outcome.remaining_match {
        Some(left) => println!("  {target} reduced to {left}."),
        None => println!("  {} {target} is broken.", "Gobbled:".green()),
    }
    match outcome.remaining_gobble {
        Some(left) => println!("  Gobble dice left: {left}"),
        None => println!("  All gobble dice spent."),
    }
    Ok(())
}
