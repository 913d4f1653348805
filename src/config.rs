use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_application_id: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_application_id: parse_var("DISCORD_APPLICATION_ID")?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<T, ConfigError> {
    let value = required_var(name)?;

    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_variable() {
        std::env::set_var("PRESENCE_WATCH_TEST_NUMERIC", "1234567890");

        let value: u64 = parse_var("PRESENCE_WATCH_TEST_NUMERIC").unwrap();

        assert_eq!(value, 1234567890);
    }

    #[test]
    fn rejects_non_numeric_variable() {
        std::env::set_var("PRESENCE_WATCH_TEST_GARBAGE", "not-a-snowflake");

        let result: Result<u64, _> = parse_var("PRESENCE_WATCH_TEST_GARBAGE");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, ref value })
                if name == "PRESENCE_WATCH_TEST_GARBAGE" && value == "not-a-snowflake"
        ));
    }

    #[test]
    fn reports_missing_variable_by_name() {
        let result = required_var("PRESENCE_WATCH_TEST_UNSET");

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar(ref name)) if name == "PRESENCE_WATCH_TEST_UNSET"
        ));
    }
}
