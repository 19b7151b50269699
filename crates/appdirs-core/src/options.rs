//! Request parameters shared by every directory kind.

/// Parameters for a single directory lookup.
///
/// Every field is independently optional. `None` means "not given" and is
/// different from `Some(String::new())`: on Windows an absent author falls
/// back to the application name, while an empty author contributes no folder.
///
/// `appauthor` and `version` only take effect when `appname` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DirOptions {
    /// Application name, the leaf folder of every per-app path.
    pub appname: Option<String>,
    /// Author or company folder (Windows only).
    pub appauthor: Option<String>,
    /// Version folder appended after the application name.
    pub version: Option<String>,
    /// Use the roaming profile (Windows user data and config only).
    pub roaming: bool,
    /// Return the whole site search path instead of the first entry.
    pub multipath: bool,
}

impl DirOptions {
    /// Options with nothing set: every lookup returns the bare base directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a named application.
    pub fn for_app(appname: impl Into<String>) -> Self {
        Self::new().appname(appname)
    }

    #[must_use]
    pub fn appname(mut self, appname: impl Into<String>) -> Self {
        self.appname = Some(appname.into());
        self
    }

    #[must_use]
    pub fn appauthor(mut self, appauthor: impl Into<String>) -> Self {
        self.appauthor = Some(appauthor.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn roaming(mut self, roaming: bool) -> Self {
        self.roaming = roaming;
        self
    }

    #[must_use]
    pub fn multipath(mut self, multipath: bool) -> Self {
        self.multipath = multipath;
        self
    }

    /// The `appname` and `version` segments, with `version` dropped when
    /// there is no application name.
    pub(crate) fn name_and_version(&self) -> [Option<&str>; 2] {
        let appname = self.appname.as_deref();
        [appname, appname.and(self.version.as_deref())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let opts = DirOptions::for_app("someApp")
            .appauthor("appAuthor")
            .version("3.1")
            .roaming(true)
            .multipath(true);

        assert_eq!(opts.appname.as_deref(), Some("someApp"));
        assert_eq!(opts.appauthor.as_deref(), Some("appAuthor"));
        assert_eq!(opts.version.as_deref(), Some("3.1"));
        assert!(opts.roaming);
        assert!(opts.multipath);
    }

    #[test]
    fn version_needs_appname() {
        let opts = DirOptions::new().version("3.1");
        assert_eq!(opts.name_and_version(), [None, None]);

        let opts = DirOptions::for_app("someApp").version("3.1");
        assert_eq!(opts.name_and_version(), [Some("someApp"), Some("3.1")]);
    }

    #[test]
    fn empty_string_is_kept_distinct_from_absent() {
        let opts = DirOptions::for_app("someApp").appauthor("");
        assert_eq!(opts.appauthor, Some(String::new()));
        assert_ne!(opts, DirOptions::for_app("someApp"));
    }
}
