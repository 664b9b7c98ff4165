//! Error types for the Atrium shell.

use std::io;

/// Errors produced by the Atrium screen controllers.
#[derive(Debug, thiserror::Error)]
pub enum AtriumError {
    #[error("screen error: {0}")]
    Screen(String),

    #[error("preference error: {0}")]
    Prefs(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AtriumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_error_display() {
        let e = AtriumError::Screen("frame not bound".into());
        assert_eq!(format!("{e}"), "screen error: frame not bound");
    }

    #[test]
    fn prefs_error_display() {
        let e = AtriumError::Prefs("bad key".into());
        assert_eq!(format!("{e}"), "preference error: bad key");
    }

    #[test]
    fn catalog_error_display() {
        let e = AtriumError::Catalog("empty descriptor list".into());
        assert_eq!(format!("{e}"), "catalog error: empty descriptor list");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: AtriumError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: AtriumError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: AtriumError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(AtriumError::Prefs("oops".into()));
        assert!(r.is_err());
    }
}
