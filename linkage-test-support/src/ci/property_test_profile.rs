//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read their case counts and fork mode from here so one pair of
//! environment variables tunes every property test in the workspace.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const LINKAGE_PBT_FORK_ENV_KEY: &str = "LINKAGE_PBT_FORK";

/// Reasons an override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ProfileOverrideError {
    /// The case count was not an unsigned integer.
    #[error("`{raw}` is not a case count")]
    InvalidCases {
        /// Raw value read from the environment.
        raw: String,
    },
    /// A zero case count would skip the property entirely.
    #[error("cases must be > 0")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("`{raw}` is not one of true/false/1/0/yes/no/on/off")]
    InvalidFlag {
        /// Raw value read from the environment.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkage_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(|key| env::var(key).ok(), default_cases, default_fork)
    }

    /// Builds a profile from an arbitrary variable lookup.
    ///
    /// Invalid overrides are logged and replaced by the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkage_test_support::ci::property_test_profile::{
    ///     PROPTEST_CASES_ENV_KEY, ProptestRunProfile,
    /// };
    ///
    /// let profile = ProptestRunProfile::from_lookup(
    ///     |key| (key == PROPTEST_CASES_ENV_KEY).then(|| "12".to_owned()),
    ///     64,
    ///     false,
    /// );
    /// assert_eq!(profile.cases(), 12);
    /// ```
    #[must_use]
    pub fn from_lookup<F>(lookup: F, default_cases: u32, default_fork: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cases = resolve(&lookup, PROPTEST_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = resolve(&lookup, LINKAGE_PBT_FORK_ENV_KEY, default_fork, parse_flag);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, ProfileOverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, ProfileOverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ProfileOverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(ProfileOverrideError::InvalidCases {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, ProfileOverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfileOverrideError::InvalidFlag {
            raw: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn profile(vars: &[(&str, &str)], default_cases: u32, default_fork: bool) -> ProptestRunProfile {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        ProptestRunProfile::from_lookup(|key| vars.get(key).cloned(), default_cases, default_fork)
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let profile = profile(&[], 64, false);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case("1", 1)]
    #[case(" 250 ", 250)]
    #[case("25000", 25_000)]
    fn accepts_valid_case_overrides(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(profile(&[(PROPTEST_CASES_ENV_KEY, raw)], 64, false).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    fn ignores_invalid_case_overrides(#[case] raw: &str) {
        assert_eq!(profile(&[(PROPTEST_CASES_ENV_KEY, raw)], 64, false).cases(), 64);
    }

    #[rstest]
    #[case("true", true)]
    #[case("YES", true)]
    #[case("on", true)]
    #[case("0", false)]
    #[case("Off", false)]
    fn accepts_valid_fork_overrides(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(profile(&[(LINKAGE_PBT_FORK_ENV_KEY, raw)], 64, !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("maybe")]
    #[case("2")]
    fn ignores_invalid_fork_overrides(#[case] raw: &str) {
        assert!(profile(&[(LINKAGE_PBT_FORK_ENV_KEY, raw)], 64, true).fork());
    }

    #[rstest]
    #[case("0", ProfileOverrideError::ZeroCases)]
    #[case("x", ProfileOverrideError::InvalidCases { raw: "x".to_owned() })]
    fn case_parse_errors_are_specific(#[case] raw: &str, #[case] expected: ProfileOverrideError) {
        assert_eq!(parse_cases(raw), Err(expected));
    }
}
