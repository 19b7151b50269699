//! macOS profile.
//!
//! Fixed locations under `~/Library` and `/Library`; no environment
//! variable overrides them. Paths nest as `<base>/<app>/<version>` and the
//! author is ignored.

use crate::join::join_if_present;
use crate::options::DirOptions;
use crate::ports::EnvLookup;

use super::{PlatformProfile, home_dir};

const SEP: char = '/';
const HOME: &str = "HOME";

const APPLICATION_SUPPORT: &str = "Library/Application Support";
const CACHES: &str = "Library/Caches";
const LOGS: &str = "Library/Logs";
const SITE_APPLICATION_SUPPORT: &str = "/Library/Application Support";

#[derive(Debug, Clone, Copy, Default)]
pub struct MacOsProfile;

fn under_home(env: &dyn EnvLookup, relative: &str, opts: &DirOptions) -> String {
    let base = join_if_present(SEP, &home_dir(env, HOME), &[Some(relative)]);
    join_if_present(SEP, &base, &opts.name_and_version())
}

impl PlatformProfile for MacOsProfile {
    fn user_data_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        under_home(env, APPLICATION_SUPPORT, opts)
    }

    fn user_config_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        under_home(env, APPLICATION_SUPPORT, opts)
    }

    fn user_cache_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        under_home(env, CACHES, opts)
    }

    fn user_log_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        under_home(env, LOGS, opts)
    }

    fn site_data_dirs(&self, _env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String> {
        vec![join_if_present(
            SEP,
            SITE_APPLICATION_SUPPORT,
            &opts.name_and_version(),
        )]
    }

    fn site_config_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String> {
        self.site_data_dirs(env, opts)
    }
}
