// ABOUTME: Configuration and environment variable management
// ABOUTME: Env var names plus small helpers for reading them with fallbacks

pub mod constants;

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Returns the first non-empty value among the given environment variables
pub fn env_first(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Parses an environment variable, falling back to `default` when unset or invalid
pub fn env_parse_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid value for {}: {:?}", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_first_skips_blank_values() {
        env::set_var("NAMECRAFT_TEST_BLANK", "   ");
        env::set_var("NAMECRAFT_TEST_SET", "value");

        let found = env_first(&["NAMECRAFT_TEST_UNSET", "NAMECRAFT_TEST_BLANK", "NAMECRAFT_TEST_SET"]);
        assert_eq!(found.as_deref(), Some("value"));
    }

    #[test]
    fn test_env_parse_or_falls_back_on_garbage() {
        env::set_var("NAMECRAFT_TEST_TIMEOUT", "soon");
        assert_eq!(env_parse_or("NAMECRAFT_TEST_TIMEOUT", 60u64), 60);

        env::set_var("NAMECRAFT_TEST_TIMEOUT_OK", " 45 ");
        assert_eq!(env_parse_or("NAMECRAFT_TEST_TIMEOUT_OK", 60u64), 45);

        assert_eq!(env_parse_or("NAMECRAFT_TEST_TIMEOUT_MISSING", 7u16), 7);
    }
}
