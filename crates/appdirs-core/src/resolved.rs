//! Snapshot of every directory kind for one application.
//!
//! Useful for diagnostics (`appdirs all`) and for callers that want to
//! resolve everything once at startup.

use std::fmt;

use serde::Serialize;

use crate::options::DirOptions;
use crate::platform::Platform;
use crate::ports::EnvLookup;
use crate::resolver::{DirResolver, SiteDirs};

/// All six directories resolved with the same options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDirs {
    /// Platform profile the directories were computed for
    pub platform: Platform,
    pub user_data_dir: String,
    pub user_config_dir: String,
    pub user_cache_dir: String,
    pub user_log_dir: String,
    pub site_data_dir: SiteDirs,
    pub site_config_dir: SiteDirs,
}

impl ResolvedDirs {
    /// Resolve every directory kind through `resolver`.
    pub fn resolve<E: EnvLookup>(resolver: &DirResolver<E>, opts: &DirOptions) -> Self {
        Self {
            platform: resolver.platform(),
            user_data_dir: resolver.user_data_dir(opts),
            user_config_dir: resolver.user_config_dir(opts),
            user_cache_dir: resolver.user_cache_dir(opts),
            user_log_dir: resolver.user_log_dir(opts),
            site_data_dir: resolver.site_data_dir(opts),
            site_config_dir: resolver.site_config_dir(opts),
        }
    }
}

impl fmt::Display for ResolvedDirs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "platform = {}", self.platform)?;
        writeln!(f, "user_data_dir = {}", self.user_data_dir)?;
        writeln!(f, "user_config_dir = {}", self.user_config_dir)?;
        writeln!(f, "user_cache_dir = {}", self.user_cache_dir)?;
        writeln!(f, "user_log_dir = {}", self.user_log_dir)?;
        writeln!(f, "site_data_dir = {}", self.site_data_dir)?;
        write!(f, "site_config_dir = {}", self.site_config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    fn windows() -> DirResolver<MapEnv> {
        DirResolver::with_env(
            Platform::Windows,
            MapEnv::new()
                .with_var("LOCALAPPDATA", r"C:\Users\fakeuser\AppData\Local")
                .with_var("APPDATA", r"C:\Users\fakeuser\AppData\Roaming")
                .with_var("ALLUSERSPROFILE", r"C:\ProgramData"),
        )
    }

    #[test]
    fn resolve_is_deterministic() {
        let resolver = windows();
        let opts = DirOptions::for_app("someApp");
        assert_eq!(
            ResolvedDirs::resolve(&resolver, &opts),
            ResolvedDirs::resolve(&resolver, &opts)
        );
    }

    #[test]
    fn display_format_contains_all_keys() {
        let output = ResolvedDirs::resolve(&windows(), &DirOptions::new()).to_string();

        assert!(output.starts_with("platform = windows\n"));
        assert!(output.contains(r"user_data_dir = C:\Users\fakeuser\AppData\Local"));
        assert!(output.contains("user_config_dir = "));
        assert!(output.contains("user_cache_dir = "));
        assert!(output.contains(r"user_log_dir = C:\ProgramData"));
        assert!(output.contains("site_data_dir = "));
        assert!(output.ends_with(r"site_config_dir = C:\ProgramData"));
    }

    #[test]
    fn serializes_to_json() {
        let opts = DirOptions::for_app("someApp").roaming(true).multipath(true);
        let value = serde_json::to_value(ResolvedDirs::resolve(&windows(), &opts)).unwrap();

        assert_eq!(value["platform"], "windows");
        assert_eq!(
            value["user_data_dir"],
            r"C:\Users\fakeuser\AppData\Roaming\someApp\someApp"
        );
        assert_eq!(
            value["user_cache_dir"],
            r"C:\Users\fakeuser\AppData\Local\someApp\someApp"
        );
        assert_eq!(
            value["site_data_dir"],
            serde_json::json!([r"C:\ProgramData\someApp\someApp"])
        );
    }
}
