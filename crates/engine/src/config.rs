//! Engine configuration from environment variables.
//!
//! Invalid values fall back to their defaults with a warning; configuration
//! never stops the engine from starting.

use std::path::PathBuf;
use std::str::FromStr;

use uuid::Uuid;

use charforge_domain::{RaceId, RulesConfig, UserId};

use crate::infrastructure::rest_client::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

pub const ENV_API_URL: &str = "CHARFORGE_API_URL";
pub const ENV_ACCESS_TOKEN: &str = "CHARFORGE_ACCESS_TOKEN";
pub const ENV_USER_ID: &str = "CHARFORGE_USER_ID";
pub const ENV_REFERENCE_FILE: &str = "CHARFORGE_REFERENCE_FILE";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CHARFORGE_HTTP_TIMEOUT_SECS";
pub const ENV_BAB_REFERENCE_LEVEL: &str = "CHARFORGE_BAB_REFERENCE_LEVEL";
pub const ENV_BONUS_FEAT_RACE_IDS: &str = "CHARFORGE_BONUS_FEAT_RACE_IDS";
pub const ENV_BONUS_FEAT_CLASSES: &str = "CHARFORGE_BONUS_FEAT_CLASSES";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub access_token: Option<String>,
    /// Attached to saved characters when present
    pub user_id: Option<UserId>,
    /// Offline mode: reference data from this file, characters kept in memory
    pub reference_file: Option<PathBuf>,
    pub http_timeout_secs: u64,
    pub rules: RulesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            user_id: None,
            reference_file: None,
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
            rules: RulesConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let rules = RulesConfig::default();
        let bab_reference_level = parse_or(
            ENV_BAB_REFERENCE_LEVEL,
            get(ENV_BAB_REFERENCE_LEVEL),
            rules.bab_reference_level,
        );
        let rules = rules.with_bab_reference_level(bab_reference_level.max(1));

        let rules = match get(ENV_BONUS_FEAT_RACE_IDS) {
            Some(raw) => match parse_list::<i64>(&raw) {
                Ok(ids) => rules.with_bonus_feat_races(ids.into_iter().map(RaceId::new).collect()),
                Err(bad) => {
                    tracing::warn!(
                        key = ENV_BONUS_FEAT_RACE_IDS,
                        value = %bad,
                        "Ignoring invalid race id list"
                    );
                    rules
                }
            },
            None => rules,
        };

        let rules = match get(ENV_BONUS_FEAT_CLASSES) {
            Some(raw) => rules.with_bonus_feat_classes(
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            None => rules,
        };

        let user_id = get(ENV_USER_ID).and_then(|raw| match Uuid::parse_str(&raw) {
            Ok(uuid) => Some(UserId::from_uuid(uuid)),
            Err(e) => {
                tracing::warn!(key = ENV_USER_ID, error = %e, "Ignoring invalid user id");
                None
            }
        });

        Self {
            api_url: get(ENV_API_URL).unwrap_or(defaults.api_url),
            access_token: get(ENV_ACCESS_TOKEN),
            user_id,
            reference_file: get(ENV_REFERENCE_FILE).map(PathBuf::from),
            http_timeout_secs: parse_or(
                ENV_HTTP_TIMEOUT_SECS,
                get(ENV_HTTP_TIMEOUT_SECS),
                defaults.http_timeout_secs,
            ),
            rules,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.reference_file.is_some()
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default = %default, "Invalid value, using default");
            default
        }),
    }
}

/// Comma-separated values; on failure returns the offending entry.
fn parse_list<T: FromStr>(raw: &str) -> Result<Vec<T>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse().map_err(|_| item.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config(&[]);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.http_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.rules, RulesConfig::default());
        assert!(config.access_token.is_none());
        assert!(!config.is_offline());
    }

    #[test]
    fn reads_every_setting() {
        let config = config(&[
            (ENV_API_URL, "https://api.example.test"),
            (ENV_ACCESS_TOKEN, "token"),
            (ENV_USER_ID, "67e55044-10b1-426f-9247-bb680e5fe0c8"),
            (ENV_REFERENCE_FILE, "reference.json"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_BAB_REFERENCE_LEVEL, "3"),
            (ENV_BONUS_FEAT_RACE_IDS, "1, 4"),
            (ENV_BONUS_FEAT_CLASSES, "Fighter, Monk,"),
        ]);

        assert_eq!(config.api_url, "https://api.example.test");
        assert_eq!(config.access_token.as_deref(), Some("token"));
        assert!(config.user_id.is_some());
        assert!(config.is_offline());
        assert_eq!(config.http_timeout_secs, 5);
        assert_eq!(config.rules.bab_reference_level, 3);
        assert_eq!(
            config.rules.bonus_feat_races,
            vec![RaceId::new(1), RaceId::new(4)]
        );
        assert_eq!(config.rules.bonus_feat_classes, vec!["Fighter", "Monk"]);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config(&[
            (ENV_USER_ID, "not-a-uuid"),
            (ENV_HTTP_TIMEOUT_SECS, "soon"),
            (ENV_BAB_REFERENCE_LEVEL, "0"),
            (ENV_BONUS_FEAT_RACE_IDS, "1,human"),
            (ENV_ACCESS_TOKEN, "   "),
        ]);

        assert!(config.user_id.is_none());
        assert!(config.access_token.is_none());
        assert_eq!(config.http_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.rules.bab_reference_level, 1);
        assert_eq!(
            config.rules.bonus_feat_races,
            RulesConfig::default().bonus_feat_races
        );
    }
}
