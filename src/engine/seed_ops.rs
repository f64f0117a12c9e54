use chrono::Utc;

use crate::rng::local_day_key;

/// Normalize typed seed text: surrounding whitespace is ignored and an
/// empty entry means "no override".
pub fn parse_seed_input(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Today's default seed, the local calendar date.
pub fn daily_seed() -> String {
    local_day_key()
}

pub fn seed_from_text_or_daily(input: &str) -> String {
    parse_seed_input(input).unwrap_or_else(daily_seed)
}

/// Override seed for "new ingredients" retries: wall-clock millis plus a
/// random salt, so repeated retries collide only with negligible
/// probability while still routing through the deterministic generator.
pub fn retry_seed() -> String {
    let millis = Utc::now().timestamp_millis();
    let salt: u32 = rand::random();
    format!("retry-{millis}-{salt}")
}

pub fn msg_started_seed(seed: &str) -> String {
    format!("Started a new crucible. Seed {seed}.")
}

pub fn msg_repeated_seed(seed: &str) -> String {
    format!("Restaged the same ingredients. Seed {seed}.")
}

pub fn msg_new_ingredients(seed: &str) -> String {
    format!("Summoned fresh ingredients. Seed {seed}.")
}
