//! Error types for platform selection.
//!
//! Directory resolution itself never fails: unset variables fall back to
//! defaults and absent parameters are simply skipped. The only thing a
//! caller can get wrong is naming a platform we do not support.

use thiserror::Error;

/// Errors raised while selecting a platform profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The identifier does not name any supported platform.
    #[error("Unsupported platform '{0}' (expected one of: windows, macos, unix)")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message_names_the_input() {
        let err = PlatformError::Unsupported("beos".to_string());
        let message = err.to_string();
        assert!(message.contains("'beos'"));
        assert!(message.contains("windows, macos, unix"));
    }
}
