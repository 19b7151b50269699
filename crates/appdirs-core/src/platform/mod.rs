//! Platform profiles and their selection.
//!
//! Each supported platform has one [`PlatformProfile`] implementation that
//! knows its base directories and nesting rules. [`Platform`] is the tag
//! callers pass around; [`Platform::profile`] maps it to the implementation.

mod macos;
mod unix;
mod windows;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PlatformError;
use crate::options::DirOptions;
use crate::ports::{EnvLookup, non_empty_var};

pub use macos::MacOsProfile;
pub use unix::UnixProfile;
pub use windows::WindowsProfile;

/// Directory conventions for one platform.
///
/// User directories resolve to a single path. Site directories resolve to
/// the full ordered search list (most specific first); the resolver decides
/// whether the caller sees the whole list or only its first entry.
pub trait PlatformProfile: Send + Sync {
    fn user_data_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String;

    fn user_config_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String;

    fn user_cache_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String;

    fn user_log_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String;

    /// Never empty.
    fn site_data_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String>;

    /// Never empty.
    fn site_config_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String>;
}

/// Supported platform profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and other Unix-likes following the XDG Base Directory spec.
    Unix,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Windows, Self::MacOs, Self::Unix];

    /// The profile matching the compile target.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Unix
        }
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Unix => "unix",
        }
    }

    /// Identifiers accepted by [`FromStr`], canonical name first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Windows => &["windows", "win32"],
            Self::MacOs => &["macos", "darwin", "osx"],
            Self::Unix => &[
                "unix",
                "xdg",
                "linux",
                "freebsd",
                "openbsd",
                "netbsd",
                "dragonfly",
                "solaris",
                "illumos",
                "android",
            ],
        }
    }

    /// Path separator used when joining paths for this platform.
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::MacOs | Self::Unix => '/',
        }
    }

    pub fn profile(self) -> &'static dyn PlatformProfile {
        match self {
            Self::Windows => &WindowsProfile,
            Self::MacOs => &MacOsProfile,
            Self::Unix => &UnixProfile,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|platform| platform.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| PlatformError::Unsupported(s.to_string()))
    }
}

/// Read `key`, falling back to `fallback()` when it is unset or empty.
pub(crate) fn var_or_else(
    env: &dyn EnvLookup,
    key: &str,
    fallback: impl FnOnce() -> String,
) -> String {
    if let Some(value) = non_empty_var(env, key) {
        return value;
    }
    let value = fallback();
    tracing::trace!(var = key, fallback = %value, "environment variable unset or empty");
    value
}

/// Home directory from `key` (e.g. `HOME`), then the lookup's own notion
/// of home, then a literal `~`.
pub(crate) fn home_dir(env: &dyn EnvLookup, key: &str) -> String {
    non_empty_var(env, key)
        .or_else(|| env.home_dir().filter(|home| !home.is_empty()))
        .unwrap_or_else(|| {
            tracing::warn!(var = key, "cannot determine home directory, using '~'");
            "~".to_string()
        })
}
