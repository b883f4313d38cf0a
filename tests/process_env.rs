//! Checks against the real process environment. Env mutation is process-wide,
//! so every test here holds `env_lock` and restores what it touched.

use std::sync::{Mutex, MutexGuard, OnceLock};
use update_dependencies::{vars, Config, ConfigError};

fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn new(names: &[&'static str]) -> Self {
        let entries = names.iter().map(|name| (*name, std::env::var(name).ok())).collect();
        Self { entries }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

const TOUCHED: [&str; 4] = [
    vars::GITHUB_USER,
    vars::GITHUB_EMAIL,
    vars::GITHUB_PASSWORD,
    vars::GITHUB_PULL_REQUEST_NOTIFICATIONS,
];

#[test]
fn from_env_reads_process_variables_once() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&TOUCHED);

    std::env::set_var(vars::GITHUB_USER, "dotnet-bot");
    std::env::remove_var(vars::GITHUB_EMAIL);
    std::env::remove_var(vars::GITHUB_PASSWORD);
    std::env::set_var(vars::GITHUB_PULL_REQUEST_NOTIFICATIONS, "alice;;bob;");

    let config = Config::from_env();
    assert_eq!(config.user_name().unwrap(), "dotnet-bot");
    assert_eq!(config.github_pull_request_notifications(), ["alice", "bob"]);
    assert_eq!(
        config.email().unwrap_err(),
        ConfigError::MissingVariable { name: "GITHUB_EMAIL" }
    );

    std::env::set_var(vars::GITHUB_USER, "someone-else");
    std::env::set_var(vars::GITHUB_EMAIL, "bot@example.test");
    assert_eq!(config.user_name().unwrap(), "dotnet-bot");
    assert!(config.email().is_err());

    // A fresh instance sees the new environment.
    let fresh = Config::from_env();
    assert_eq!(fresh.user_name().unwrap(), "someone-else");
    assert_eq!(fresh.email().unwrap(), "bot@example.test");
    assert_eq!(fresh.missing_required(), ["GITHUB_PASSWORD"]);
}

#[test]
fn global_is_a_single_instance() {
    let _lock = env_lock();

    let first = Config::global();
    let second = Config::global();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.github_project(), second.github_project());
}
