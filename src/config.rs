use crate::{
    env::{defaults, vars, Environment, ProcessEnv},
    error::ConfigError,
    setting::{Defaulted, Optional, Required},
};
use serde::Serialize;
use std::sync::LazyLock;

static GLOBAL: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Configuration for the update-dependencies script.
///
/// Required variables:
///
/// - `GITHUB_USER`: the user to commit the changes as.
/// - `GITHUB_EMAIL`: the user's email to commit the changes as.
/// - `GITHUB_PASSWORD`: the password or personal access token of the user.
///
/// Optional variables:
///
/// - `ROSLYN_VERSION_URL`: where to read the current Roslyn version.
/// - `CORESETUP_VERSION_URL`: where to read the current core-setup package versions.
/// - `GITHUB_ORIGIN_OWNER`: owner of the fork the PR is pushed from.
/// - `GITHUB_UPSTREAM_OWNER`: owner of the base repo the PR targets.
/// - `GITHUB_PROJECT`: repo name under the origin and upstream owners.
/// - `GITHUB_UPSTREAM_BRANCH`: branch in the base repo the PR targets.
/// - `GITHUB_PULL_REQUEST_NOTIFICATIONS`: `;`-separated GitHub users to notify on the PR.
///
/// Nothing is read at construction. Each setting is resolved on its first
/// access and cached for the lifetime of the value.
#[derive(Debug)]
pub struct Config<E = ProcessEnv> {
    env: E,
    user_name: Required<String>,
    email: Required<String>,
    password: Required<String>,
    roslyn_version_url: Defaulted<String>,
    core_setup_version_url: Defaulted<String>,
    github_origin_owner: Optional<String>,
    github_upstream_owner: Defaulted<String>,
    github_project: Defaulted<String>,
    github_upstream_branch: Defaulted<String>,
    github_pull_request_notifications: Defaulted<Vec<String>>,
}

impl Config<ProcessEnv> {
    /// Process-wide instance backed by the process environment.
    pub fn global() -> &'static Config {
        &GLOBAL
    }

    pub fn from_env() -> Self {
        Self::with_environment(ProcessEnv)
    }
}

impl Default for Config<ProcessEnv> {
    fn default() -> Self {
        Self::from_env()
    }
}

impl<E: Environment> Config<E> {
    pub fn with_environment(env: E) -> Self {
        Self {
            env,
            user_name: Required::new(vars::GITHUB_USER),
            email: Required::new(vars::GITHUB_EMAIL),
            password: Required::new(vars::GITHUB_PASSWORD),
            roslyn_version_url: Defaulted::new(vars::ROSLYN_VERSION_URL, defaults::ROSLYN_VERSION_URL),
            core_setup_version_url: Defaulted::new(
                vars::CORESETUP_VERSION_URL,
                defaults::CORESETUP_VERSION_URL,
            ),
            github_origin_owner: Optional::new(vars::GITHUB_ORIGIN_OWNER),
            github_upstream_owner: Defaulted::new(
                vars::GITHUB_UPSTREAM_OWNER,
                defaults::GITHUB_UPSTREAM_OWNER,
            ),
            github_project: Defaulted::new(vars::GITHUB_PROJECT, defaults::GITHUB_PROJECT),
            github_upstream_branch: Defaulted::new(
                vars::GITHUB_UPSTREAM_BRANCH,
                defaults::GITHUB_UPSTREAM_BRANCH,
            ),
            github_pull_request_notifications: Defaulted::new(
                vars::GITHUB_PULL_REQUEST_NOTIFICATIONS,
                defaults::GITHUB_PULL_REQUEST_NOTIFICATIONS,
            ),
        }
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    //────────────────── Accessors
    pub fn user_name(&self) -> Result<&str, ConfigError> {
        self.user_name.get(&self.env, String::from).map(String::as_str)
    }

    pub fn email(&self) -> Result<&str, ConfigError> {
        self.email.get(&self.env, String::from).map(String::as_str)
    }

    pub fn password(&self) -> Result<&str, ConfigError> {
        self.password.get(&self.env, String::from).map(String::as_str)
    }

    pub fn roslyn_version_url(&self) -> &str {
        self.roslyn_version_url.get(&self.env, String::from)
    }

    pub fn core_setup_version_url(&self) -> &str {
        self.core_setup_version_url.get(&self.env, String::from)
    }

    pub fn github_origin_owner(&self) -> Option<&str> {
        self.github_origin_owner
            .get(&self.env, String::from)
            .map(String::as_str)
    }

    pub fn github_upstream_owner(&self) -> &str {
        self.github_upstream_owner.get(&self.env, String::from)
    }

    pub fn github_project(&self) -> &str {
        self.github_project.get(&self.env, String::from)
    }

    pub fn github_upstream_branch(&self) -> &str {
        self.github_upstream_branch.get(&self.env, String::from)
    }

    pub fn github_pull_request_notifications(&self) -> &[String] {
        self.github_pull_request_notifications
            .get(&self.env, |raw| parse_notifications(&raw))
    }

    //────────────────── Preflight
    /// Names of the required variables that are not set, in declaration order.
    ///
    /// Resolves (and therefore caches) all three required settings.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [self.user_name(), self.email(), self.password()]
            .into_iter()
            .filter_map(|r| r.err().map(|e| e.variable()))
            .collect()
    }

    /// Resolves every setting. Fails on the first missing required variable.
    pub fn summary(&self) -> Result<ConfigSummary, ConfigError> {
        let user_name = self.user_name()?.to_string();
        let email = self.email()?.to_string();
        self.password()?;

        Ok(ConfigSummary {
            user_name,
            email,
            roslyn_version_url: self.roslyn_version_url().to_string(),
            core_setup_version_url: self.core_setup_version_url().to_string(),
            github_origin_owner: self.github_origin_owner().map(str::to_string),
            github_upstream_owner: self.github_upstream_owner().to_string(),
            github_project: self.github_project().to_string(),
            github_upstream_branch: self.github_upstream_branch().to_string(),
            github_pull_request_notifications: self.github_pull_request_notifications().to_vec(),
        })
    }
}

/// Splits a `;`-separated list, dropping empty segments.
pub fn parse_notifications(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//────────────────── Summary
/// Resolved settings minus the password.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub user_name: String,
    pub email: String,
    pub roslyn_version_url: String,
    pub core_setup_version_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_origin_owner: Option<String>,
    pub github_upstream_owner: String,
    pub github_project: String,
    pub github_upstream_branch: String,
    pub github_pull_request_notifications: Vec<String>,
}
