use colored::Colorize;
use serde_json::json;

use ore_core::{Contest, ContestMode, Resolution, StaticOutcome};

pub fn run(
    desc: &str,
    first: &str,
    second: Option<&str>,
    difficulty: u8,
    mode: ContestMode,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut rng = super::make_rng(seed);

    let first = super::parse_pool_input(first)?
        .into_pool(&mut rng)
        .map_err(|e| e.to_string())?;
    let second = second
        .map(|arg| {
            super::parse_pool_input(arg)?
                .into_pool(&mut rng)
                .map_err(|e| e.to_string())
        })
        .transpose()?;

    let contest = match &second {
        Some(second) => Contest::opposed(desc, &first, second, mode),
        None => Contest::against_difficulty(desc, &first, difficulty),
    };

    if json {
        let report = json!({
            "contest": contest,
            "summary": contest.summary(),
            "pools": std::iter::once(&first).chain(second.as_ref()).collect::<Vec<_>>(),
        });
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!("  {}", contest.description.bold());
    match &second {
        Some(second) => {
            super::print_pool("Roll 1", &first);
            super::print_pool("Roll 2", second);
        }
        None => {
            println!("  Difficulty: {difficulty}");
            super::print_pool("Roll", &first);
        }
    }
    println!();

    let verdict = match contest.resolution {
        Resolution::Static(StaticOutcome::Success) => contest.summary().green(),
        Resolution::Static(StaticOutcome::Failure) => contest.summary().red(),
        Resolution::Dynamic(_) => contest.summary().bold(),
    };
    println!("  {verdict}");
    Ok(())
}
