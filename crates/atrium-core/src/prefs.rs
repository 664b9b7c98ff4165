//! Preference keys and list codecs.
//!
//! Preferences live host-side. Controllers receive pushed string values
//! keyed by the names below and persist through
//! [`PrefsHost::set_string_pref`](crate::host::PrefsHost::set_string_pref).
//! List-valued preferences are stored as comma-separated identifiers.

/// Active (preloaded) input method engines, comma-separated, ordered.
pub const PRELOAD_ENGINES: &str = "settings.language.preload_engines";

/// Enabled extension-provided input methods, comma-separated.
pub const ENABLED_EXTENSION_IMES: &str = "settings.language.enabled_extension_imes";

/// Spell-check dictionary language code, scalar.
pub const SPELL_CHECK_DICTIONARY: &str = "spellcheck.dictionary";

/// Whether spell checking is enabled at all, "true"/"false".
pub const ENABLE_SPELL_CHECK: &str = "browser.enable_spellchecking";

/// UI display language that takes effect after restart, scalar.
pub const APP_LOCALE: &str = "intl.app_locale";

/// Split a comma-separated preference value into identifiers.
///
/// Empty segments are dropped, so the empty string decodes to an empty
/// list rather than `[""]`.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join identifiers back into the persisted comma-separated form.
pub fn join_csv(items: &[String]) -> String {
    items.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_basic_list() {
        assert_eq!(split_csv("mozc,pinyin"), vec!["mozc", "pinyin"]);
    }

    #[test]
    fn split_empty_string_is_empty_list() {
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(split_csv("mozc,,pinyin,"), vec!["mozc", "pinyin"]);
    }

    #[test]
    fn split_trims_whitespace() {
        assert_eq!(split_csv(" mozc , pinyin"), vec!["mozc", "pinyin"]);
    }

    #[test]
    fn join_round_trips() {
        let items = vec!["mozc".to_string(), "pinyin".to_string()];
        assert_eq!(split_csv(&join_csv(&items)), items);
    }

    #[test]
    fn join_empty_list_is_empty_string() {
        assert_eq!(join_csv(&[]), "");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_id() -> impl Strategy<Value = String> {
            "[a-z0-9:_-]{1,12}"
        }

        proptest! {
            #[test]
            fn round_trip(items in proptest::collection::vec(arb_id(), 0..10)) {
                prop_assert_eq!(split_csv(&join_csv(&items)), items);
            }

            #[test]
            fn split_never_yields_empty_segments(value in "[a-z, ]{0,40}") {
                prop_assert!(split_csv(&value).iter().all(|s| !s.is_empty()));
            }
        }
    }
}
