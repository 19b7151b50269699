//! Directory resolver facade.
//!
//! [`DirResolver`] pairs a [`Platform`] with an [`EnvLookup`] and exposes the
//! six directory kinds. The free functions at the bottom of this module use
//! the host platform and the real process environment.

use std::fmt;

use serde::Serialize;

use crate::env::ProcessEnv;
use crate::options::DirOptions;
use crate::platform::{Platform, PlatformProfile};
use crate::ports::EnvLookup;

/// Result of a site directory lookup.
///
/// `Multiple` is returned whenever `multipath` was requested, even if the
/// platform has a single site root. Serializes as a plain string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SiteDirs {
    Single(String),
    Multiple(Vec<String>),
}

impl SiteDirs {
    fn from_search_path(dirs: Vec<String>, multipath: bool) -> Self {
        if multipath {
            Self::Multiple(dirs)
        } else {
            Self::Single(dirs.into_iter().next().unwrap_or_default())
        }
    }

    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// The preferred (first) directory.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(dir) => Some(dir),
            Self::Multiple(dirs) => dirs.first().map(String::as_str),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let dirs: &[String] = match self {
            Self::Single(dir) => std::slice::from_ref(dir),
            Self::Multiple(dirs) => dirs,
        };
        dirs.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(dir) => vec![dir],
            Self::Multiple(dirs) => dirs,
        }
    }
}

impl fmt::Display for SiteDirs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(dir) => f.write_str(dir),
            Self::Multiple(dirs) => write!(f, "[{}]", dirs.join(", ")),
        }
    }
}

/// Resolves application directories for one platform profile.
///
/// The environment is consulted on every call; nothing is cached, so
/// changing a variable between two calls changes the next result.
#[derive(Debug, Clone)]
pub struct DirResolver<E = ProcessEnv> {
    platform: Platform,
    env: E,
}

impl DirResolver {
    /// Host platform, real process environment.
    pub const fn new() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Another platform's conventions with the real process environment.
    pub const fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            env: ProcessEnv,
        }
    }
}

impl Default for DirResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvLookup> DirResolver<E> {
    /// Explicit platform and environment, typically a `MapEnv` in tests.
    pub const fn with_env(platform: Platform, env: E) -> Self {
        Self { platform, env }
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    pub const fn env(&self) -> &E {
        &self.env
    }

    pub const fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    fn profile(&self) -> &'static dyn PlatformProfile {
        self.platform.profile()
    }

    /// Per-user application data. Honors `roaming` on Windows.
    pub fn user_data_dir(&self, opts: &DirOptions) -> String {
        let dir = self.profile().user_data_dir(&self.env, opts);
        self.trace("user_data_dir", &dir);
        dir
    }

    /// Per-user configuration. Honors `roaming` on Windows.
    pub fn user_config_dir(&self, opts: &DirOptions) -> String {
        let dir = self.profile().user_config_dir(&self.env, opts);
        self.trace("user_config_dir", &dir);
        dir
    }

    /// Per-user cache. Never roams.
    pub fn user_cache_dir(&self, opts: &DirOptions) -> String {
        let dir = self.profile().user_cache_dir(&self.env, opts);
        self.trace("user_cache_dir", &dir);
        dir
    }

    pub fn user_log_dir(&self, opts: &DirOptions) -> String {
        let dir = self.profile().user_log_dir(&self.env, opts);
        self.trace("user_log_dir", &dir);
        dir
    }

    /// Machine-wide application data. Honors `multipath`.
    pub fn site_data_dir(&self, opts: &DirOptions) -> SiteDirs {
        let dirs = SiteDirs::from_search_path(
            self.profile().site_data_dirs(&self.env, opts),
            opts.multipath,
        );
        self.trace("site_data_dir", &dirs);
        dirs
    }

    /// Machine-wide configuration. Honors `multipath`.
    pub fn site_config_dir(&self, opts: &DirOptions) -> SiteDirs {
        let dirs = SiteDirs::from_search_path(
            self.profile().site_config_dirs(&self.env, opts),
            opts.multipath,
        );
        self.trace("site_config_dir", &dirs);
        dirs
    }

    fn trace(&self, kind: &str, dir: &dyn fmt::Display) {
        tracing::debug!(platform = %self.platform, kind, dir = %dir, "resolved directory");
    }
}

pub fn user_data_dir(opts: &DirOptions) -> String {
    DirResolver::new().user_data_dir(opts)
}

pub fn user_config_dir(opts: &DirOptions) -> String {
    DirResolver::new().user_config_dir(opts)
}

pub fn user_cache_dir(opts: &DirOptions) -> String {
    DirResolver::new().user_cache_dir(opts)
}

pub fn user_log_dir(opts: &DirOptions) -> String {
    DirResolver::new().user_log_dir(opts)
}

pub fn site_data_dir(opts: &DirOptions) -> SiteDirs {
    DirResolver::new().site_data_dir(opts)
}

pub fn site_config_dir(opts: &DirOptions) -> SiteDirs {
    DirResolver::new().site_config_dir(opts)
}
