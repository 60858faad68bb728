//! Environment resolution and build-tool selection.
//!
//! The CI surface is a handful of environment variables set by the pipeline
//! definition. They are read exactly once, before any command runs; the
//! resolved [`CiConfig`] is immutable for the rest of the process.

use crate::Result;
use std::env;

/// Operating system name of the CI host. `linux` selects [`Tool::Cross`].
pub const ENV_OS_NAME: &str = "TRAVIS_OS_NAME";
/// Target triple every build and test invocation is pinned to.
pub const ENV_TARGET: &str = "TARGET";
/// Any non-empty value skips every verification step after the builds.
pub const ENV_DISABLE_TESTS: &str = "DISABLE_TESTS";
/// Tag name of a release build. Any non-empty value skips the whole matrix.
pub const ENV_RELEASE_TAG: &str = "TRAVIS_TAG";

/// The build tool driving every invocation of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Native `cargo`, used on non-linux hosts.
    Cargo,
    /// `cross`, used on linux hosts so foreign targets can be built and run.
    Cross,
}

impl Tool {
    /// Selects the tool for a CI host OS name.
    ///
    /// Pure two-way choice: exactly `"linux"` maps to [`Tool::Cross`], every
    /// other value (including an empty one) maps to [`Tool::Cargo`].
    pub fn for_os(os_name: &str) -> Self {
        if os_name == "linux" {
            Self::Cross
        } else {
            Self::Cargo
        }
    }

    /// Executable name of the tool.
    pub fn program(self) -> &'static str {
        match self {
            Self::Cargo => "cargo",
            Self::Cross => "cross",
        }
    }
}

/// Command-line overrides for the environment-driven configuration.
///
/// A flag always takes precedence over the corresponding environment
/// variable.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub os_name: Option<String>,
    pub target: Option<String>,
    pub skip_tests: bool,
}

/// Resolved configuration for one matrix run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiConfig {
    /// OS name of the CI host, as reported by the pipeline.
    pub os_name: String,
    /// Target triple passed through opaquely to every build/test command.
    pub target: String,
    /// Skip formatting, lint and test steps after the two builds.
    pub skip_tests: bool,
    /// Tag name when the run was triggered by a release tag push.
    pub release_tag: Option<String>,
}

impl CiConfig {
    /// Resolves the configuration from CLI overrides on top of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no target triple is configured while the run
    /// would actually execute commands.
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |name| env::var(name).ok())
    }

    fn resolve_with<F>(overrides: &Overrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let release_tag = non_empty(lookup(ENV_RELEASE_TAG));

        let os_name = overrides
            .os_name
            .clone()
            .or_else(|| non_empty(lookup(ENV_OS_NAME)))
            .unwrap_or_default();

        // The deploy path never builds anything, so a missing target is only
        // an error when commands will actually run.
        let target = match overrides
            .target
            .clone()
            .or_else(|| non_empty(lookup(ENV_TARGET)))
        {
            Some(target) => target,
            None if release_tag.is_some() => String::new(),
            None => anyhow::bail!(
                "No target triple configured: pass --target or set {ENV_TARGET}"
            ),
        };

        let skip_tests =
            overrides.skip_tests || non_empty(lookup(ENV_DISABLE_TESTS)).is_some();

        Ok(Self {
            os_name,
            target,
            skip_tests,
            release_tag,
        })
    }

    /// Build tool selected for this configuration.
    pub fn tool(&self) -> Tool {
        Tool::for_os(&self.os_name)
    }
}

// Unset and set-but-empty are equivalent for every variable above.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn resolve(overrides: &Overrides, env: &HashMap<String, String>) -> Result<CiConfig> {
        CiConfig::resolve_with(overrides, |name| env.get(name).cloned())
    }

    #[test]
    fn test_tool_selection_is_two_way() {
        assert_eq!(Tool::for_os("linux"), Tool::Cross);
        assert_eq!(Tool::for_os("osx"), Tool::Cargo);
        assert_eq!(Tool::for_os("macos"), Tool::Cargo);
        assert_eq!(Tool::for_os("windows"), Tool::Cargo);
        assert_eq!(Tool::for_os(""), Tool::Cargo);
    }

    #[test]
    fn test_tool_program_names() {
        assert_eq!(Tool::Cargo.program(), "cargo");
        assert_eq!(Tool::Cross.program(), "cross");
    }

    #[test]
    fn test_resolve_from_environment() {
        let env = env_of(&[
            (ENV_OS_NAME, "linux"),
            (ENV_TARGET, "x86_64-unknown-linux-gnu"),
        ]);

        let config = resolve(&Overrides::default(), &env).expect("resolve failed");
        assert_eq!(config.os_name, "linux");
        assert_eq!(config.target, "x86_64-unknown-linux-gnu");
        assert_eq!(config.tool(), Tool::Cross);
        assert!(!config.skip_tests);
        assert!(config.release_tag.is_none());
    }

    #[test]
    fn test_overrides_beat_environment() {
        let env = env_of(&[
            (ENV_OS_NAME, "linux"),
            (ENV_TARGET, "x86_64-unknown-linux-gnu"),
        ]);
        let overrides = Overrides {
            os_name: Some("osx".to_string()),
            target: Some("x86_64-apple-darwin".to_string()),
            skip_tests: true,
        };

        let config = resolve(&overrides, &env).expect("resolve failed");
        assert_eq!(config.os_name, "osx");
        assert_eq!(config.target, "x86_64-apple-darwin");
        assert_eq!(config.tool(), Tool::Cargo);
        assert!(config.skip_tests);
    }

    #[test]
    fn test_empty_variables_count_as_unset() {
        let env = env_of(&[
            (ENV_TARGET, "thumbv7em-none-eabihf"),
            (ENV_DISABLE_TESTS, ""),
            (ENV_RELEASE_TAG, ""),
        ]);

        let config = resolve(&Overrides::default(), &env).expect("resolve failed");
        assert!(!config.skip_tests);
        assert!(config.release_tag.is_none());
    }

    #[test]
    fn test_disable_tests_any_value() {
        let env = env_of(&[(ENV_TARGET, "i686-unknown-linux-musl"), (ENV_DISABLE_TESTS, "1")]);

        let config = resolve(&Overrides::default(), &env).expect("resolve failed");
        assert!(config.skip_tests);
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let env = env_of(&[(ENV_OS_NAME, "linux")]);

        assert!(resolve(&Overrides::default(), &env).is_err());
    }

    #[test]
    fn test_release_tag_tolerates_missing_target() {
        let env = env_of(&[(ENV_RELEASE_TAG, "v1.2.3")]);

        let config = resolve(&Overrides::default(), &env).expect("resolve failed");
        assert_eq!(config.release_tag.as_deref(), Some("v1.2.3"));
        assert!(config.target.is_empty());
    }
}
