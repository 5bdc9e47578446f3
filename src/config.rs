use crate::chess_errors::ConfigError;
use crate::game_state::chess_rules::DEFAULT_RAND_SEED;

const SEED_VAR: &str = "SWAP_CHESS_SEED";
const SHOW_SWAPS_VAR: &str = "SWAP_CHESS_SHOW_SWAPS";

/// Session configuration parsed from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial seed of the swap stream.
    pub seed: u64,
    /// Print which squares were swapped after each move.
    pub show_swaps: bool,
}

impl SessionConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Unparsable values fall back to the default; see [`Self::try_from_env`]
    /// to surface them instead.
    pub fn from_env() -> Self {
        Self::from_lookup_lenient(|name| std::env::var(name).ok())
    }

    /// Like [`Self::from_lookup`], but each unparsable value keeps its default.
    pub fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        SessionConfig {
            seed: lookup(SEED_VAR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.seed),
            show_swaps: lookup(SHOW_SWAPS_VAR)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.show_swaps),
        }
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidInteger {
                    name: SEED_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(SHOW_SWAPS_VAR) {
            config.show_swaps = parse_bool(&value).ok_or_else(|| ConfigError::InvalidBool {
                name: SHOW_SWAPS_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seed: DEFAULT_RAND_SEED,
            show_swaps: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.seed, DEFAULT_RAND_SEED);
        assert!(config.show_swaps);
    }

    #[test]
    fn lookup_without_vars_gives_defaults() {
        let config = SessionConfig::from_lookup(lookup_from(&[])).expect("no vars is valid");
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn lookup_reads_values() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            (SEED_VAR, " 12345 "),
            (SHOW_SWAPS_VAR, "off"),
        ]))
        .expect("values are valid");
        assert_eq!(config.seed, 12345);
        assert!(!config.show_swaps);
    }

    #[test]
    fn lookup_reports_bad_values() {
        assert_eq!(
            SessionConfig::from_lookup(lookup_from(&[(SEED_VAR, "-3")])),
            Err(ConfigError::InvalidInteger {
                name: SEED_VAR,
                value: "-3".to_owned(),
            })
        );
        assert_eq!(
            SessionConfig::from_lookup(lookup_from(&[(SHOW_SWAPS_VAR, "maybe")])),
            Err(ConfigError::InvalidBool {
                name: SHOW_SWAPS_VAR,
                value: "maybe".to_owned(),
            })
        );
    }

    #[test]
    fn lenient_lookup_keeps_good_values() {
        let config = SessionConfig::from_lookup_lenient(lookup_from(&[
            (SEED_VAR, "not-a-number"),
            (SHOW_SWAPS_VAR, "no"),
        ]));
        assert_eq!(
            config,
            SessionConfig {
                seed: DEFAULT_RAND_SEED,
                show_swaps: false,
            }
        );
    }
}
