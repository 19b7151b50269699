//! Environment lookup implementations.
//!
//! [`ProcessEnv`] reads the real process environment on every call.
//! [`MapEnv`] is an in-memory environment for tests and for callers that
//! want hermetic results.

use std::collections::HashMap;
use std::env;

use crate::ports::EnvLookup;

/// Environment backed by `std::env`, with the home directory from `dirs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn home_dir(&self) -> Option<String> {
        dirs::home_dir().map(|path| path.to_string_lossy().into_owned())
    }
}

/// In-memory environment.
///
/// # Example
///
/// ```
/// use appdirs_core::{EnvLookup, MapEnv};
///
/// let env = MapEnv::new()
///     .with_var("XDG_CACHE_HOME", "/tmp/cache")
///     .with_home("/home/fake");
/// assert_eq!(env.var("XDG_CACHE_HOME").as_deref(), Some("/tmp/cache"));
/// assert_eq!(env.home_dir().as_deref(), Some("/home/fake"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
    home: Option<String>,
}

impl MapEnv {
    /// An environment with no variables and no home directory.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_var(key, value);
        self
    }

    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove_var(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<String> {
        self.home.clone()
    }
}
