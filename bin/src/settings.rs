use std::env;

use crate::errors::CliError;

const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_EXECUTORS: usize = 3;

#[derive(Debug, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub pool_size: u32,
    pub executors: usize,
}

impl Settings {
    pub fn from_env() -> Result<Settings, CliError> {
        Settings::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Settings, CliError> {
        let database_url = lookup("DATABASE_URL").ok_or(CliError::MissingSetting { name: "DATABASE_URL" })?;
        Ok(Settings {
            database_url,
            pool_size: positive(&lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            executors: positive(&lookup, "DB_EXECUTORS", DEFAULT_EXECUTORS as u32)? as usize,
        })
    }
}

fn positive<F: Fn(&str) -> Option<String>>(lookup: &F, name: &'static str, default: u32) -> Result<u32, CliError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(CliError::InvalidSetting { name, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let actual = Settings::from_lookup(lookup(&[("DATABASE_URL", "winners.db")]));
        assert_eq!(actual, Ok(Settings { database_url: "winners.db".to_string(), pool_size: 8, executors: 3 }));
    }

    #[test]
    fn test_overrides() {
        let actual = Settings::from_lookup(lookup(&[("DATABASE_URL", "winners.db"), ("DB_POOL_SIZE", "16"), ("DB_EXECUTORS", " 4 ")]));
        assert_eq!(actual, Ok(Settings { database_url: "winners.db".to_string(), pool_size: 16, executors: 4 }));
    }

    #[test]
    fn test_missing_database_url() {
        let actual = Settings::from_lookup(lookup(&[("DB_POOL_SIZE", "16")]));
        assert_eq!(actual, Err(CliError::MissingSetting { name: "DATABASE_URL" }));
    }

    #[test]
    fn test_invalid_numbers() {
        let actual = Settings::from_lookup(lookup(&[("DATABASE_URL", "winners.db"), ("DB_POOL_SIZE", "many")]));
        assert_matches!(actual, Err(CliError::InvalidSetting { name: "DB_POOL_SIZE", .. }));

        let actual = Settings::from_lookup(lookup(&[("DATABASE_URL", "winners.db"), ("DB_EXECUTORS", "0")]));
        assert_matches!(actual, Err(CliError::InvalidSetting { name: "DB_EXECUTORS", .. }));
    }
}
