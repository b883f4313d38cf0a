use std::collections::HashMap;

//────────────────── Variable names
pub mod vars {
    pub const GITHUB_USER: &str = "GITHUB_USER";
    pub const GITHUB_EMAIL: &str = "GITHUB_EMAIL";
    pub const GITHUB_PASSWORD: &str = "GITHUB_PASSWORD";
    pub const ROSLYN_VERSION_URL: &str = "ROSLYN_VERSION_URL";
    pub const CORESETUP_VERSION_URL: &str = "CORESETUP_VERSION_URL";
    pub const GITHUB_ORIGIN_OWNER: &str = "GITHUB_ORIGIN_OWNER";
    pub const GITHUB_UPSTREAM_OWNER: &str = "GITHUB_UPSTREAM_OWNER";
    pub const GITHUB_PROJECT: &str = "GITHUB_PROJECT";
    pub const GITHUB_UPSTREAM_BRANCH: &str = "GITHUB_UPSTREAM_BRANCH";
    pub const GITHUB_PULL_REQUEST_NOTIFICATIONS: &str = "GITHUB_PULL_REQUEST_NOTIFICATIONS";
}

//────────────────── Defaults
pub mod defaults {
    pub const ROSLYN_VERSION_URL: &str =
        "https://raw.githubusercontent.com/dotnet/versions/master/build-info/dotnet/roslyn/netcore1.0";
    pub const CORESETUP_VERSION_URL: &str =
        "https://raw.githubusercontent.com/dotnet/versions/master/build-info/dotnet/core-setup/master";
    pub const GITHUB_UPSTREAM_OWNER: &str = "dotnet";
    pub const GITHUB_PROJECT: &str = "cli";
    pub const GITHUB_UPSTREAM_BRANCH: &str = "master";
    pub const GITHUB_PULL_REQUEST_NOTIFICATIONS: &str = "";
}

//────────────────── Sources
/// Where settings are read from.
///
/// Lookups are by exact, case-sensitive name. `None` means the variable is
/// absent; an empty string is a present value.
pub trait Environment: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-Unicode values are still present values.
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
