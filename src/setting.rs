//! Per-setting memoization cells.
//!
//! Every cell resolves from its environment source at most once, on first
//! access, and hands out the cached outcome afterwards. Cells are backed by
//! [`OnceLock`], so concurrent first reads still consult the source once.

use crate::{env::Environment, error::ConfigError};
use std::sync::OnceLock;
use tracing::{debug, warn};

fn lookup<E: Environment + ?Sized>(env: &E, name: &'static str) -> Option<String> {
    let value = env.var(name);
    if value.is_some() {
        debug!(variable = name, source = "environment", "resolved setting");
    }
    value
}

//────────────────── Required
/// A setting with no default. Absence is an error, and the error is cached
/// like any other outcome.
#[derive(Debug)]
pub struct Required<T> {
    name: &'static str,
    value: OnceLock<Result<T, ConfigError>>,
}

impl<T> Required<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, value: OnceLock::new() }
    }

    pub fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }

    pub fn get<E, F>(&self, env: &E, parse: F) -> Result<&T, ConfigError>
    where
        E: Environment + ?Sized,
        F: FnOnce(String) -> T,
    {
        self.value
            .get_or_init(|| match lookup(env, self.name) {
                Some(raw) => Ok(parse(raw)),
                None => {
                    warn!(variable = self.name, "required setting is not set");
                    Err(ConfigError::MissingVariable { name: self.name })
                }
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

//────────────────── Defaulted
/// A setting that falls back to a fixed default and therefore never fails.
#[derive(Debug)]
pub struct Defaulted<T> {
    name: &'static str,
    default: &'static str,
    value: OnceLock<T>,
}

impl<T> Defaulted<T> {
    pub const fn new(name: &'static str, default: &'static str) -> Self {
        Self { name, default, value: OnceLock::new() }
    }

    pub fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }

    pub fn get<E, F>(&self, env: &E, parse: F) -> &T
    where
        E: Environment + ?Sized,
        F: FnOnce(String) -> T,
    {
        self.value.get_or_init(|| {
            let raw = lookup(env, self.name).unwrap_or_else(|| {
                debug!(variable = self.name, source = "default", "resolved setting");
                self.default.to_string()
            });
            parse(raw)
        })
    }
}

//────────────────── Optional
/// A setting with no default whose absence is simply recorded as `None`.
#[derive(Debug)]
pub struct Optional<T> {
    name: &'static str,
    value: OnceLock<Option<T>>,
}

impl<T> Optional<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, value: OnceLock::new() }
    }

    pub fn is_resolved(&self) -> bool {
        self.value.get().is_some()
    }

    pub fn get<E, F>(&self, env: &E, parse: F) -> Option<&T>
    where
        E: Environment + ?Sized,
        F: FnOnce(String) -> T,
    {
        self.value
            .get_or_init(|| {
                let value = lookup(env, self.name);
                if value.is_none() {
                    debug!(variable = self.name, "optional setting is not set");
                }
                value.map(parse)
            })
            .as_ref()
    }
}
