pub mod contest;
pub mod expert;
pub mod gobble;
pub mod master;
pub mod roll;

use std::io::{self, BufRead, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ore_core::{Pool, PoolConfig, PoolInput};

/// Seeded RNG if a seed was given, otherwise one seeded from the OS.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("rolling with seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}

/// Read a pool argument: a die count, or comma-separated faces.
fn parse_pool_input(arg: &str) -> Result<PoolInput, String> {
    let arg = arg.trim();
    if let Ok(count) = arg.parse::<u32>() {
        return Ok(PoolInput::Count(count));
    }

    if arg.contains(',') {
        let faces = arg
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| format!("'{part}' is not a die face"))
            })
            .collect::<Result<Vec<u32>, String>>()?;
        let pool = Pool::from_values(faces, &PoolConfig::default()).map_err(|e| e.to_string())?;
        return Ok(PoolInput::Pool(pool));
    }

    Err(format!(
        "expected a die count or comma-separated faces, got '{arg}'"
    ))
}

/// Print a pool's dice, matches, and waste.
fn print_pool(label: &str, pool: &Pool) {
    let dice: Vec<String> = pool.values().iter().map(u8::to_string).collect();
    println!("  {} [{}]", format!("{label}:").bold(), dice.join(", "));

    if pool.dropped() > 0 {
        println!(
            "  {}",
            format!(
                "Too many dice! Only rolled {} ({} dropped).",
                pool.len(),
                pool.dropped()
            )
            .yellow()
        );
    }

    let ex = pool.extract();
    if ex.matches.is_empty() {
        println!("  No matches.");
    } else {
        let highest = ex.highest();
        let widest = ex.widest();

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Set", "Width", "Height", "Note"]);
        for set in ex.matches.iter().rev() {
            let mut notes = Vec::new();
            if Some(*set) == highest {
                notes.push("highest");
            }
            if Some(*set) == widest {
                notes.push("widest");
            }
            table.add_row(vec![
                set.to_string(),
                set.width().to_string(),
                set.height().to_string(),
                notes.join(", "),
            ]);
        }
        println!("{table}");
    }

    if !ex.waste.is_empty() {
        let waste: Vec<String> = ex.waste.iter().map(u8::to_string).collect();
        println!("  Waste: {}", waste.join(", "));
    }
}

/// Prompt on stdout and read one die face from stdin.
fn prompt_face(prompt: &str) -> Result<u32, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("no die value given".into());
    }

    let input = line.trim();
    input
        .parse::<u32>()
        .map_err(|_| format!("'{input}' is not a die face"))
}
