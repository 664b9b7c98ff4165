//! Input-method catalog: descriptors, kinds, and TOML loading.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use atrium_types::error::{AtriumError, Result};

/// Id prefix marking extension-provided input methods.
pub const EXTENSION_IME_PREFIX: &str = "_ext_ime_";

/// Id prefix marking component-extension input methods.
pub const COMPONENT_IME_PREFIX: &str = "_comp_";

/// Where an input method comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethodKind {
    /// Built into the shell (keyboard layouts, bundled engines).
    Native,
    /// Provided by a user-installed extension.
    Extension,
    /// Provided by a component extension, registered after startup.
    Component,
}

/// One entry in the input-method catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputMethodDescriptor {
    /// Stable identifier, e.g. `xkb:us::eng` or `mozc`.
    pub id: String,
    /// Human-readable name shown next to the checkbox.
    pub display_name: String,
    /// Language codes this method serves. Extension methods leave this
    /// empty; they are listed through the extension filter instead.
    #[serde(default)]
    pub language_codes: Vec<String>,
    /// Built-in configuration page, if the method has one.
    #[serde(default)]
    pub config_page: Option<String>,
    /// Extension-provided options page URL, if any.
    #[serde(default)]
    pub options_page: Option<String>,
}

impl InputMethodDescriptor {
    /// Kind, derived from the id prefix.
    pub fn kind(&self) -> InputMethodKind {
        if self.id.starts_with(EXTENSION_IME_PREFIX) {
            InputMethodKind::Extension
        } else if self.id.starts_with(COMPONENT_IME_PREFIX) {
            InputMethodKind::Component
        } else {
            InputMethodKind::Native
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "input_method", default)]
    input_methods: Vec<InputMethodDescriptor>,
}

/// Parse a catalog from TOML text.
pub fn parse_catalog(text: &str) -> Result<Vec<InputMethodDescriptor>> {
    let file: CatalogFile = toml::from_str(text)?;
    if file.input_methods.is_empty() {
        return Err(AtriumError::Catalog("no input methods defined".into()));
    }
    Ok(file.input_methods)
}

/// Load a catalog from a TOML file on disk.
pub fn load_catalog(path: &Path) -> Result<Vec<InputMethodDescriptor>> {
    let text = std::fs::read_to_string(path)?;
    parse_catalog(&text)
}

/// Build the language-code to input-method-ids map from a descriptor list.
///
/// Entries keep the catalog's order per language; registration events only
/// ever append.
pub fn build_language_map(
    descriptors: &[InputMethodDescriptor],
) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for method in descriptors {
        for code in &method.language_codes {
            map.entry(code.clone()).or_default().push(method.id.clone());
        }
    }
    map
}

/// Catalog used by tests and the demo shell.
pub fn builtin_catalog() -> Vec<InputMethodDescriptor> {
    fn native(id: &str, name: &str, codes: &[&str]) -> InputMethodDescriptor {
        InputMethodDescriptor {
            id: id.to_string(),
            display_name: name.to_string(),
            language_codes: codes.iter().map(|c| c.to_string()).collect(),
            config_page: None,
            options_page: None,
        }
    }
    fn configurable(
        id: &str,
        name: &str,
        codes: &[&str],
        config_page: &str,
    ) -> InputMethodDescriptor {
        InputMethodDescriptor {
            config_page: Some(config_page.to_string()),
            ..native(id, name, codes)
        }
    }

    vec![
        // The US layout doubles for several Latin-script languages.
        native("xkb:us::eng", "US keyboard", &["en", "en-US", "fil"]),
        native("xkb:us:dvorak:eng", "US Dvorak keyboard", &["en", "en-US"]),
        native("xkb:fr::fra", "French keyboard", &["fr"]),
        native("xkb:de::ger", "German keyboard", &["de"]),
        configurable("mozc", "Japanese input (Romaji)", &["ja"], "languageMozc"),
        configurable("mozc-jp", "Japanese input (Kana)", &["ja"], "languageMozc"),
        configurable("mozc-hangul", "Korean input", &["ko"], "languageHangul"),
        configurable("pinyin", "Chinese Pinyin input", &["zh-CN"], "languagePinyin"),
        configurable(
            "pinyin-dv",
            "Chinese Pinyin input (Dvorak)",
            &["zh-CN"],
            "languagePinyin",
        ),
        configurable(
            "mozc-chewing",
            "Chinese Zhuyin input",
            &["zh-TW"],
            "languageChewing",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn kind_from_id_prefix() {
        let mut m = builtin_catalog().remove(0);
        assert_eq!(m.kind(), InputMethodKind::Native);
        m.id = "_ext_ime_abcdefkeyboard".into();
        assert_eq!(m.kind(), InputMethodKind::Extension);
        m.id = "_comp_ime_hanja".into();
        assert_eq!(m.kind(), InputMethodKind::Component);
    }

    #[test]
    fn language_map_groups_by_code() {
        let map = build_language_map(&builtin_catalog());
        assert_eq!(
            map.get("ja"),
            Some(&vec!["mozc".to_string(), "mozc-jp".to_string()])
        );
        assert_eq!(map.get("zh-CN").map(Vec::len), Some(2));
        assert!(map.get("xx").is_none());
    }

    #[test]
    fn language_map_keeps_catalog_order() {
        let map = build_language_map(&builtin_catalog());
        let en = map.get("en").unwrap();
        assert_eq!(en, &["xkb:us::eng".to_string(), "xkb:us:dvorak:eng".to_string()]);
    }

    #[test]
    fn parse_catalog_from_toml() {
        let text = r#"
            [[input_method]]
            id = "xkb:us::eng"
            display_name = "US keyboard"
            language_codes = ["en", "en-US"]

            [[input_method]]
            id = "mozc"
            display_name = "Japanese input"
            language_codes = ["ja"]
            config_page = "languageMozc"
        "#;
        let catalog = parse_catalog(text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "xkb:us::eng");
        assert_eq!(catalog[1].config_page.as_deref(), Some("languageMozc"));
        assert!(catalog[0].config_page.is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = parse_catalog("").unwrap_err();
        assert!(format!("{err}").contains("no input methods"));
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(parse_catalog("[[input_method").is_err());
    }

    #[test]
    fn load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input_methods.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[[input_method]]\nid = \"mozc\"\ndisplay_name = \"Japanese input\"\nlanguage_codes = [\"ja\"]"
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "mozc");
    }

    #[test]
    fn load_catalog_missing_file_is_io_error() {
        let err = load_catalog(Path::new("/nonexistent/input_methods.toml")).unwrap_err();
        assert!(matches!(err, AtriumError::Io(_)));
    }
}
