//! Unix profile following the XDG Base Directory specification.
//!
//! User roots come from `XDG_{DATA,CONFIG,CACHE}_HOME`, site roots from the
//! colon-separated `XDG_{DATA,CONFIG}_DIRS`. Unset or empty variables fall
//! back to the defaults the XDG spec prescribes. Paths nest as
//! `<base>/<app>/<version>` and the author is ignored. Logs go to a `log`
//! folder inside the user cache directory.

use crate::join::{join_if_present, split_search_path};
use crate::options::DirOptions;
use crate::ports::{EnvLookup, non_empty_var};

use super::{PlatformProfile, home_dir, var_or_else};

const SEP: char = '/';
const HOME: &str = "HOME";

const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
const XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";
const XDG_DATA_DIRS: &str = "XDG_DATA_DIRS";
const XDG_CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";

/// Used when `XDG_DATA_DIRS` is unset, empty or lists no roots.
pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";
/// Used when `XDG_CONFIG_DIRS` is unset, empty or lists no roots.
pub const DEFAULT_CONFIG_DIRS: &str = "/etc/xdg";

const LOG_DIR_NAME: &str = "log";

#[derive(Debug, Clone, Copy, Default)]
pub struct UnixProfile;

/// `key`, or `$HOME/<relative>`.
fn user_base(env: &dyn EnvLookup, key: &str, relative: &str) -> String {
    var_or_else(env, key, || {
        join_if_present(SEP, &home_dir(env, HOME), &[Some(relative)])
    })
}

fn search_path(env: &dyn EnvLookup, key: &str, default: &str) -> Vec<String> {
    let roots = non_empty_var(env, key)
        .map(|value| split_search_path(&value))
        .unwrap_or_default();
    if roots.is_empty() {
        tracing::trace!(var = key, fallback = default, "search path unset or empty");
        return split_search_path(default);
    }
    roots
}

fn nest(base: &str, opts: &DirOptions) -> String {
    join_if_present(SEP, base, &opts.name_and_version())
}

impl PlatformProfile for UnixProfile {
    fn user_data_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        nest(&user_base(env, XDG_DATA_HOME, ".local/share"), opts)
    }

    fn user_config_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        nest(&user_base(env, XDG_CONFIG_HOME, ".config"), opts)
    }

    fn user_cache_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        nest(&user_base(env, XDG_CACHE_HOME, ".cache"), opts)
    }

    fn user_log_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        join_if_present(SEP, &self.user_cache_dir(env, opts), &[Some(LOG_DIR_NAME)])
    }

    fn site_data_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String> {
        search_path(env, XDG_DATA_DIRS, DEFAULT_DATA_DIRS)
            .iter()
            .map(|root| nest(root, opts))
            .collect()
    }

    fn site_config_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String> {
        search_path(env, XDG_CONFIG_DIRS, DEFAULT_CONFIG_DIRS)
            .iter()
            .map(|root| nest(root, opts))
            .collect()
    }
}
