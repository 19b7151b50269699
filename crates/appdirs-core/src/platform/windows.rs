//! Windows profile.
//!
//! Per-app folders nest under an author folder: `<base>\<author>\<app>\<version>`.
//! Without an author the application name doubles as its own parent, giving
//! `<base>\<app>\<app>`. Config shares the data location, caches never roam
//! and logs live under the all-users profile.

use crate::join::join_if_present;
use crate::options::DirOptions;
use crate::ports::EnvLookup;

use super::{PlatformProfile, home_dir, var_or_else};

const SEP: char = '\\';

const LOCAL_APP_DATA: &str = "LOCALAPPDATA";
const APP_DATA: &str = "APPDATA";
const ALL_USERS_PROFILE: &str = "ALLUSERSPROFILE";
const USER_PROFILE: &str = "USERPROFILE";

/// Used when `ALLUSERSPROFILE` is unset or empty.
pub const DEFAULT_ALL_USERS_PROFILE: &str = r"C:\ProgramData";

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsProfile;

/// `LOCALAPPDATA`, or `<profile>\AppData\Local`.
fn local_app_data(env: &dyn EnvLookup) -> String {
    var_or_else(env, LOCAL_APP_DATA, || {
        join_if_present(SEP, &home_dir(env, USER_PROFILE), &[Some("AppData"), Some("Local")])
    })
}

/// `APPDATA`, or `<profile>\AppData\Roaming`.
fn roaming_app_data(env: &dyn EnvLookup) -> String {
    var_or_else(env, APP_DATA, || {
        join_if_present(SEP, &home_dir(env, USER_PROFILE), &[Some("AppData"), Some("Roaming")])
    })
}

fn all_users_profile(env: &dyn EnvLookup) -> String {
    var_or_else(env, ALL_USERS_PROFILE, || DEFAULT_ALL_USERS_PROFILE.to_string())
}

fn nest(base: &str, opts: &DirOptions) -> String {
    let Some(appname) = opts.appname.as_deref() else {
        return join_if_present(SEP, base, &[]);
    };
    let author = opts.appauthor.as_deref().unwrap_or(appname);
    join_if_present(
        SEP,
        base,
        &[Some(author), Some(appname), opts.version.as_deref()],
    )
}

impl PlatformProfile for WindowsProfile {
    fn user_data_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        let base = if opts.roaming {
            roaming_app_data(env)
        } else {
            local_app_data(env)
        };
        nest(&base, opts)
    }

    fn user_config_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        self.user_data_dir(env, opts)
    }

    fn user_cache_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        nest(&local_app_data(env), opts)
    }

    fn user_log_dir(&self, env: &dyn EnvLookup, opts: &DirOptions) -> String {
        nest(&all_users_profile(env), opts)
    }

    fn site_data_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String> {
        vec![nest(&all_users_profile(env), opts)]
    }

    fn site_config_dirs(&self, env: &dyn EnvLookup, opts: &DirOptions) -> Vec<String> {
        self.site_data_dirs(env, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    fn fake_env() -> MapEnv {
        MapEnv::new()
            .with_var(LOCAL_APP_DATA, r"C:\Users\fakeuser\AppData\Local")
            .with_var(APP_DATA, r"C:\Users\fakeuser\AppData\Roaming")
            .with_var(ALL_USERS_PROFILE, r"C:\ProgramData")
    }

    #[test]
    fn author_defaults_to_appname() {
        let dir = WindowsProfile.user_data_dir(&fake_env(), &DirOptions::for_app("someApp"));
        assert_eq!(dir, r"C:\Users\fakeuser\AppData\Local\someApp\someApp");
    }

    #[test]
    fn empty_author_is_not_absent() {
        let opts = DirOptions::for_app("someApp").appauthor("");
        let dir = WindowsProfile.user_data_dir(&fake_env(), &opts);
        assert_eq!(dir, r"C:\Users\fakeuser\AppData\Local\someApp");
    }

    #[test]
    fn cache_ignores_roaming() {
        let opts = DirOptions::for_app("someApp").roaming(true);
        let dir = WindowsProfile.user_cache_dir(&fake_env(), &opts);
        assert_eq!(dir, r"C:\Users\fakeuser\AppData\Local\someApp\someApp");
    }

    #[test]
    fn config_follows_roaming() {
        let opts = DirOptions::for_app("someApp").appauthor("Acme").roaming(true);
        let dir = WindowsProfile.user_config_dir(&fake_env(), &opts);
        assert_eq!(dir, r"C:\Users\fakeuser\AppData\Roaming\Acme\someApp");
    }

    #[test]
    fn falls_back_to_user_profile() {
        let env = MapEnv::new().with_var(USER_PROFILE, r"C:\Users\someone");
        let opts = DirOptions::new();

        assert_eq!(
            WindowsProfile.user_data_dir(&env, &opts),
            r"C:\Users\someone\AppData\Local"
        );
        assert_eq!(
            WindowsProfile.user_data_dir(&env, &opts.clone().roaming(true)),
            r"C:\Users\someone\AppData\Roaming"
        );
        assert_eq!(WindowsProfile.site_data_dirs(&env, &opts), vec![
            DEFAULT_ALL_USERS_PROFILE.to_string()
        ]);
    }

    #[test]
    fn empty_variables_use_fallbacks() {
        let env = MapEnv::new()
            .with_var(LOCAL_APP_DATA, "")
            .with_var(ALL_USERS_PROFILE, "")
            .with_home(r"C:\Users\lookup");
        let opts = DirOptions::new();

        assert_eq!(
            WindowsProfile.user_cache_dir(&env, &opts),
            r"C:\Users\lookup\AppData\Local"
        );
        assert_eq!(WindowsProfile.user_log_dir(&env, &opts), r"C:\ProgramData");
    }

    #[test]
    fn site_dirs_have_exactly_one_root() {
        let opts = DirOptions::for_app("someApp").version("3.1").multipath(true);
        let dirs = WindowsProfile.site_config_dirs(&fake_env(), &opts);
        assert_eq!(dirs, vec![r"C:\ProgramData\someApp\someApp\3.1".to_string()]);
    }
}
