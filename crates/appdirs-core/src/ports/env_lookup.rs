//! Environment lookup port.
//!
//! # Design Notes
//!
//! - Core owns the trait; `ProcessEnv` and `MapEnv` implement it
//! - Values are read at call time, never cached
//! - Empty values are treated as unset by the resolvers

use std::sync::Arc;

/// Read-only view of environment variables and the user's home directory.
#[cfg_attr(test, mockall::automock)]
pub trait EnvLookup: Send + Sync {
    /// Value of an environment variable, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// The current user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<String>;
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn home_dir(&self) -> Option<String> {
        (**self).home_dir()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for Arc<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn home_dir(&self) -> Option<String> {
        (**self).home_dir()
    }
}

/// Variable value with empty strings treated as unset.
pub(crate) fn non_empty_var(env: &dyn EnvLookup, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}
