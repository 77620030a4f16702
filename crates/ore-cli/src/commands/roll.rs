use serde_json::json;

use ore_core::{Pool, PoolConfig};

pub fn run(count: u32, config: &PoolConfig, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut rng = super::make_rng(seed);
    let pool = Pool::roll(count, config, &mut rng).map_err(|e| e.to_string())?;

    if json {
        let ex = pool.extract();
        let report = json!({
            "pool": pool,
            "matches": ex.matches,
            "waste": ex.waste,
            "highest": ex.highest(),
            "widest": ex.widest(),
        });
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    super::print_pool("Roll", &pool);
    Ok(())
}
