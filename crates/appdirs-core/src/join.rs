//! Separator-aware path joining.
//!
//! Paths are built as strings for the target platform rather than with
//! `std::path`, which always joins with the host separator.

/// Separator used between entries of `XDG_DATA_DIRS` / `XDG_CONFIG_DIRS`.
pub const SEARCH_PATH_SEPARATOR: char = ':';

/// Append each present segment to `base` using `sep`.
///
/// Absent segments are skipped. Empty segments add nothing, so they never
/// produce doubled or trailing separators. Trailing separators on `base` are
/// trimmed unless `base` is a root (`/` or a drive root such as `C:\`).
pub fn join_if_present(sep: char, base: &str, segments: &[Option<&str>]) -> String {
    let mut out = trim_base(sep, base);
    for segment in segments.iter().flatten() {
        if segment.is_empty() {
            continue;
        }
        if !out.is_empty() && !out.ends_with(sep) {
            out.push(sep);
        }
        out.push_str(segment);
    }
    out
}

fn trim_base(sep: char, base: &str) -> String {
    let trimmed = base.trim_end_matches(sep);
    if trimmed.is_empty() {
        // `/` stays `/`, `` stays ``
        return base.chars().take(1).collect();
    }
    if trimmed.len() < base.len() && trimmed.ends_with(':') {
        // Drive root
        return format!("{trimmed}{sep}");
    }
    trimmed.to_string()
}

/// Split a colon-separated XDG search path into its roots.
///
/// Empty entries are dropped, trailing `/` is removed from each entry and
/// the declared order is preserved.
pub fn split_search_path(value: &str) -> Vec<String> {
    value
        .split(SEARCH_PATH_SEPARATOR)
        .filter(|entry| !entry.is_empty())
        .map(|entry| trim_base('/', entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_requested_separator() {
        assert_eq!(
            join_if_present('\\', r"C:\ProgramData", &[Some("a"), Some("b")]),
            r"C:\ProgramData\a\b"
        );
        assert_eq!(
            join_if_present('/', "/usr/share", &[Some("a"), Some("b")]),
            "/usr/share/a/b"
        );
    }

    #[test]
    fn skips_absent_segments() {
        assert_eq!(
            join_if_present('/', "/base", &[None, Some("app"), None]),
            "/base/app"
        );
        assert_eq!(join_if_present('/', "/base", &[None, None]), "/base");
    }

    #[test]
    fn empty_segments_add_nothing() {
        assert_eq!(
            join_if_present('\\', r"C:\Data", &[Some(""), Some("app"), Some("")]),
            r"C:\Data\app"
        );
    }

    #[test]
    fn never_leaves_trailing_separator() {
        assert_eq!(join_if_present('/', "/home/me/.cache/", &[]), "/home/me/.cache");
        assert_eq!(
            join_if_present('\\', r"C:\Users\me\AppData\Local\\", &[Some("app")]),
            r"C:\Users\me\AppData\Local\app"
        );
    }

    #[test]
    fn keeps_roots_intact() {
        assert_eq!(join_if_present('/', "/", &[]), "/");
        assert_eq!(join_if_present('/', "/", &[Some("app")]), "/app");
        assert_eq!(join_if_present('\\', r"C:\", &[]), r"C:\");
        assert_eq!(join_if_present('\\', r"D:\", &[Some("app")]), r"D:\app");
    }

    #[test]
    fn forward_slash_is_not_a_windows_separator_here() {
        // Only the target separator is trimmed.
        assert_eq!(join_if_present('\\', "C:/data/", &[]), "C:/data/");
    }

    #[test]
    fn splits_search_path_in_order() {
        assert_eq!(
            split_search_path("/usr/local/share/:/usr/share"),
            vec!["/usr/local/share".to_string(), "/usr/share".to_string()]
        );
    }

    #[test]
    fn split_drops_empty_entries() {
        assert_eq!(
            split_search_path(":/opt/share::/usr/share:"),
            vec!["/opt/share".to_string(), "/usr/share".to_string()]
        );
        assert!(split_search_path(":::").is_empty());
    }
}
