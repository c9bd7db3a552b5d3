use std::env;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::format;
use crate::models::{SelectOption, SelectOptions};

pub const ENV_LOG: &str = "CYKEL_LOG";
pub const ENV_CYCLE_LENGTH_MIN: &str = "CYKEL_CYCLE_LENGTH_MIN";
pub const ENV_CYCLE_LENGTH_MAX: &str = "CYKEL_CYCLE_LENGTH_MAX";
pub const ENV_PERIOD_DURATION_MIN: &str = "CYKEL_PERIOD_DURATION_MIN";
pub const ENV_PERIOD_DURATION_MAX: &str = "CYKEL_PERIOD_DURATION_MAX";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{var} is not a whole number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("empty {name} range: {min}..={max}")]
    EmptyRange {
        name: &'static str,
        min: u32,
        max: u32,
    },
}

/// A selection that is not among the offered options.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("cycle length must be between {min} and {max} days, got {value}")]
    CycleLength { value: u32, min: u32, max: u32 },
    #[error("period duration must be between {min} and {max} days, got {value}")]
    PeriodDuration { value: u32, min: u32, max: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppSettings {
    pub cycle_length_options: RangeInclusive<u32>,
    pub period_duration_options: RangeInclusive<u32>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cycle_length_options: 21..=41,
            period_duration_options: 1..=10,
            log_filter: default_log_filter(),
        }
    }
}

impl AppSettings {
    /// Load settings from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|var| env::var(var).ok())
    }

    /// Build settings from a variable lookup, falling back to defaults for
    /// anything unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cycle_length_options = range_from_vars(
            &lookup,
            "cycle length",
            ENV_CYCLE_LENGTH_MIN,
            ENV_CYCLE_LENGTH_MAX,
            &defaults.cycle_length_options,
        )?;
        let period_duration_options = range_from_vars(
            &lookup,
            "period duration",
            ENV_PERIOD_DURATION_MIN,
            ENV_PERIOD_DURATION_MAX,
            &defaults.period_duration_options,
        )?;
        let log_filter = lookup(ENV_LOG)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            cycle_length_options,
            period_duration_options,
            log_filter,
        })
    }

    pub fn options(&self) -> SelectOptions {
        SelectOptions {
            cycle_length: to_options(&self.cycle_length_options),
            period_duration: to_options(&self.period_duration_options),
        }
    }

    pub fn check_cycle_length(&self, value: u32) -> Result<u32, SelectionError> {
        if self.cycle_length_options.contains(&value) {
            Ok(value)
        } else {
            Err(SelectionError::CycleLength {
                value,
                min: *self.cycle_length_options.start(),
                max: *self.cycle_length_options.end(),
            })
        }
    }

    pub fn check_period_duration(&self, value: u32) -> Result<u32, SelectionError> {
        if self.period_duration_options.contains(&value) {
            Ok(value)
        } else {
            Err(SelectionError::PeriodDuration {
                value,
                min: *self.period_duration_options.start(),
                max: *self.period_duration_options.end(),
            })
        }
    }
}

fn to_options(range: &RangeInclusive<u32>) -> Vec<SelectOption> {
    range
        .clone()
        .map(|value| SelectOption {
            value,
            label: format::days_label(value),
        })
        .collect()
}

fn range_from_vars<F>(
    lookup: &F,
    name: &'static str,
    min_var: &'static str,
    max_var: &'static str,
    default: &RangeInclusive<u32>,
) -> Result<RangeInclusive<u32>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let min = number_from_vars(lookup, min_var)?.unwrap_or(*default.start());
    let max = number_from_vars(lookup, max_var)?.unwrap_or(*default.end());
    if min > max {
        return Err(SettingsError::EmptyRange { name, min, max });
    }
    Ok(min..=max)
}

fn number_from_vars<F>(lookup: &F, var: &'static str) -> Result<Option<u32>, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SettingsError::InvalidNumber { var, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn vars(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let pairs = pairs.to_vec();
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn default_options_match_form() {
        let options = AppSettings::default().options();
        assert_eq!(options.cycle_length.len(), 21);
        assert_eq!(options.cycle_length[0].value, 21);
        assert_eq!(options.cycle_length[20].label, "41 days");
        assert_eq!(options.period_duration.len(), 10);
        assert_eq!(options.period_duration[0].label, "1 days");
        assert_eq!(options.period_duration[9].value, 10);
    }

    #[test]
    fn selections_outside_options_rejected() {
        let settings = AppSettings::default();
        assert_eq!(settings.check_cycle_length(21), Ok(21));
        assert_eq!(settings.check_cycle_length(41), Ok(41));
        assert!(settings.check_cycle_length(20).is_err());
        assert!(settings.check_cycle_length(42).is_err());
        assert_eq!(settings.check_period_duration(1), Ok(1));
        assert!(settings.check_period_duration(0).is_err());
        assert_eq!(
            settings.check_period_duration(11).unwrap_err().to_string(),
            "period duration must be between 1 and 10 days, got 11"
        );
    }

    #[test]
    fn defaults_when_nothing_set() {
        let settings = AppSettings::from_vars(vars(&[])).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.cycle_length_options, 21..=41);
        assert_eq!(settings.period_duration_options, 1..=10);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn vars_override_defaults() {
        let settings = AppSettings::from_vars(vars(&[
            (ENV_LOG, "cykel_predict=debug"),
            (ENV_CYCLE_LENGTH_MIN, "20"),
            (ENV_PERIOD_DURATION_MAX, " 12 "),
        ]))
        .unwrap();
        assert_eq!(settings.cycle_length_options, 20..=41);
        assert_eq!(settings.period_duration_options, 1..=12);
        assert_eq!(settings.log_filter, "cykel_predict=debug");
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let settings = AppSettings::from_vars(vars(&[(ENV_LOG, "  ")])).unwrap();
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AppSettings::from_vars(vars(&[(ENV_CYCLE_LENGTH_MAX, "forty")])),
            Err(SettingsError::InvalidNumber { var: ENV_CYCLE_LENGTH_MAX, .. })
        ));
        assert_eq!(
            AppSettings::from_vars(vars(&[(ENV_PERIOD_DURATION_MIN, "11")])),
            Err(SettingsError::EmptyRange {
                name: "period duration",
                min: 11,
                max: 10
            })
        );
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        // Every variable is set, so a stray .env cannot change the outcome
        let env = [
            (ENV_LOG, Some("warn")),
            (ENV_CYCLE_LENGTH_MIN, Some("22")),
            (ENV_CYCLE_LENGTH_MAX, Some("40")),
            (ENV_PERIOD_DURATION_MIN, Some("2")),
            (ENV_PERIOD_DURATION_MAX, Some("9")),
        ];
        temp_env::with_vars(env, || {
            let settings = AppSettings::from_env().unwrap();
            assert_eq!(settings.cycle_length_options, 22..=40);
            assert_eq!(settings.period_duration_options, 2..=9);
            assert_eq!(settings.log_filter, "warn");
        });
    }
}
