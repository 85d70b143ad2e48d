use anyhow::{Context, Result};
use rand::Rng;
use scoundrel_core::SEED_LIMIT;

pub const SEED_ENV: &str = "SCOUNDREL_SEED";

pub fn parse_seed(value: &str) -> Result<u32> {
    let seed = value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid seed '{value}'"))?;
    if seed >= SEED_LIMIT {
        anyhow::bail!("seed {seed} out of range (must be below {SEED_LIMIT})");
    }
    Ok(seed)
}

pub fn roll_seed() -> u32 {
    rand::thread_rng().gen_range(0..SEED_LIMIT)
}

/// Flag value first, then the environment, otherwise a fresh roll.
pub fn resolve_seed(flag: Option<&str>) -> Result<u32> {
    if let Some(value) = flag {
        return parse_seed(value);
    }
    match std::env::var(SEED_ENV) {
        Ok(value) => parse_seed(&value).with_context(|| format!("read {SEED_ENV}")),
        Err(_) => Ok(roll_seed()),
    }
}
