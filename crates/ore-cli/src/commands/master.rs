//! Interactive master die: the face is chosen after seeing the roll.

use ore_core::{Pool, PoolConfig};

pub fn run(count: u32, seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::make_rng(seed);
    let pool = Pool::roll(count, &PoolConfig::default(), &mut rng).map_err(|e| e.to_string())?;

    super::print_pool("You rolled", &pool);

    let value = super::prompt_face("What number do you want to set your Master Die to? ")?;
    let pool = pool.append_die(value).map_err(|e| e.to_string())?;

    println!();
    super::print_pool("With master die", &pool);
    Ok(())
}
