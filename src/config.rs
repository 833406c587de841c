// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite://schoolsite.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Cost bounds accepted by `bcrypt::hash`.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR: {}", e)))?;

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(raw) => parse_cost(&raw)?,
            Err(env::VarError::NotPresent) => bcrypt::DEFAULT_COST,
            Err(e) => return Err(e.into()),
        };

        Ok(Config {
            database_url,
            bind_addr,
            bcrypt_cost,
        })
    }
}

fn parse_cost(raw: &str) -> AppResult<u32> {
    let cost = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| AppError::Config(format!("BCRYPT_COST: {}", e)))?;
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return Err(AppError::Config(format!(
            "BCRYPT_COST must be between {} and {}",
            MIN_BCRYPT_COST, MAX_BCRYPT_COST
        )));
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_outside_bcrypt_range_is_rejected() {
        assert!(parse_cost("3").is_err());
        assert!(parse_cost("32").is_err());
        assert!(parse_cost("abc").is_err());
        assert_eq!(parse_cost(" 10 ").unwrap(), 10);
    }

    #[test]
    fn cost_bounds_are_inclusive() {
        assert_eq!(parse_cost("4").unwrap(), MIN_BCRYPT_COST);
        assert_eq!(parse_cost("31").unwrap(), MAX_BCRYPT_COST);
    }
}
