//! Environment-based server configuration.

use crate::server::error::config::ConfigError;

/// Retry limit recorded on new commands when `COMMAND_MAX_RETRIES` is unset.
pub const DEFAULT_COMMAND_MAX_RETRIES: i32 = 3;
/// Timeout recorded on new commands when `COMMAND_TIMEOUT_SECONDS` is unset.
pub const DEFAULT_COMMAND_TIMEOUT_SECONDS: i32 = 30;

/// Server configuration read from the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string for the relational store.
    pub database_url: String,
    /// Settings recorded on every queued command.
    pub command: CommandSettings,
}

/// Delivery limits stored alongside each queued command.
///
/// These are written to the command row only; no component in this service enforces them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandSettings {
    /// Retry limit recorded on each queued command.
    pub max_retries: i32,
    /// Acknowledgement timeout recorded on each queued command.
    pub timeout_seconds: i32,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_COMMAND_MAX_RETRIES,
            timeout_seconds: DEFAULT_COMMAND_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones parsed
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional numeric variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let max_retries = parse_optional(
            &lookup,
            "COMMAND_MAX_RETRIES",
            DEFAULT_COMMAND_MAX_RETRIES,
            0,
        )?;
        let timeout_seconds = parse_optional(
            &lookup,
            "COMMAND_TIMEOUT_SECONDS",
            DEFAULT_COMMAND_TIMEOUT_SECONDS,
            1,
        )?;

        Ok(Self {
            database_url,
            command: CommandSettings {
                max_retries,
                timeout_seconds,
            },
        })
    }
}

fn parse_optional<F>(lookup: &F, var: &str, default: i32, min: i32) -> Result<i32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };

    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

    if value < min {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("must be at least {}", min),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    /// Expect defaults when only the database URL is set
    #[test]
    fn uses_defaults_for_optional_values() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.command, CommandSettings::default());
    }

    #[test]
    fn reads_command_settings() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/trackhub"),
            ("COMMAND_MAX_RETRIES", "5"),
            ("COMMAND_TIMEOUT_SECONDS", " 60 "),
        ]))
        .unwrap();

        assert_eq!(config.command.max_retries, 5);
        assert_eq!(config.command.timeout_seconds, 60);
    }

    #[test]
    fn fails_without_database_url() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    #[test]
    fn fails_for_unparsable_value() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("COMMAND_MAX_RETRIES", "three"),
        ]));

        assert!(
            matches!(result, Err(ConfigError::InvalidEnvValue { var, .. }) if var == "COMMAND_MAX_RETRIES")
        );
    }

    /// Expect a zero timeout to be rejected while zero retries is allowed
    #[test]
    fn enforces_minimums() {
        let zero_retries = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("COMMAND_MAX_RETRIES", "0"),
        ]));
        assert!(zero_retries.is_ok());

        let zero_timeout = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("COMMAND_TIMEOUT_SECONDS", "0"),
        ]));
        assert!(zero_timeout.is_err());
    }
}
