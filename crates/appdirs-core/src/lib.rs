//! Per-application directory resolution for Windows, macOS and XDG systems.
//!
//! Given an application name, an optional author and an optional version,
//! this crate derives where the application should keep user data,
//! configuration, caches and logs, plus the machine-wide (site) data and
//! configuration roots.
//!
//! # Design
//!
//! - Pure string computation: nothing is created, checked or cached
//! - Environment variables are read through the [`EnvLookup`] port on every call
//! - One [`PlatformProfile`] implementation per platform, selected through [`Platform`]
//! - Paths are joined with the *target* platform's separator, so Windows
//!   layouts can be computed on a POSIX host and vice versa
//!
//! ```
//! use appdirs_core::{DirOptions, DirResolver, MapEnv, Platform};
//!
//! let env = MapEnv::new().with_var("LOCALAPPDATA", r"C:\Users\me\AppData\Local");
//! let resolver = DirResolver::with_env(Platform::Windows, env);
//!
//! let dir = resolver.user_data_dir(&DirOptions::for_app("someApp").version("3.1"));
//! assert_eq!(dir, r"C:\Users\me\AppData\Local\someApp\someApp\3.1");
//! ```

#![deny(unused_crate_dependencies)]

pub mod env;
pub mod error;
pub mod join;
pub mod options;
pub mod platform;
pub mod ports;
pub mod resolved;
pub mod resolver;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use env::{MapEnv, ProcessEnv};
pub use error::PlatformError;
pub use options::DirOptions;
pub use platform::{Platform, PlatformProfile};
pub use ports::EnvLookup;
pub use resolved::ResolvedDirs;
pub use resolver::{
    DirResolver, SiteDirs, site_config_dir, site_data_dir, user_cache_dir, user_config_dir,
    user_data_dir, user_log_dir,
};
