//! Expert die: the face is fixed before the roll.

use ore_core::Pool;

pub fn run(count: u32, value: Option<u32>, seed: Option<u64>) -> Result<(), String> {
    let value = match value {
        Some(value) => value,
        None => super::prompt_face("What number do you want to set your Expert Die to? ")?,
    };

    let mut rng = super::make_rng(seed);
    let pool = Pool::roll_with_expert_die(count, value, &mut rng).map_err(|e| e.to_string())?;

    super::print_pool("With expert die", &pool);
    Ok(())
}
