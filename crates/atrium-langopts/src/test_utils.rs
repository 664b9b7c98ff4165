//! Shared test utilities for the language options screen.

use atrium_core::host::{LanguageHost, PrefsHost};

/// A recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum LanguageCall {
    SetStringPref { key: String, value: String },
    InputMethodEnable(String),
    InputMethodDisable(String),
    InputMethodOptionsOpen(String),
    UiLanguageChange(String),
    UiLanguageRestart,
    SpellCheckLanguageChange(String),
    RetryDictionaryDownload,
    LanguageOptionsOpen,
}

/// Language bridge double that records calls in order.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingLanguageHost {
    pub calls: Vec<LanguageCall>,
}

#[allow(dead_code)]
impl RecordingLanguageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since construction or the last `clear`.
    pub fn take(&mut self) -> Vec<LanguageCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Last persisted value for `key`, if any write happened.
    pub fn last_pref(&self, key: &str) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            LanguageCall::SetStringPref { key: k, value } if k == key => {
                Some(value.as_str())
            },
            _ => None,
        })
    }
}

impl PrefsHost for RecordingLanguageHost {
    fn set_string_pref(&mut self, key: &str, value: &str) {
        self.calls.push(LanguageCall::SetStringPref {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
}

impl LanguageHost for RecordingLanguageHost {
    fn input_method_enable(&mut self, id: &str) {
        self.calls.push(LanguageCall::InputMethodEnable(id.to_string()));
    }

    fn input_method_disable(&mut self, id: &str) {
        self.calls.push(LanguageCall::InputMethodDisable(id.to_string()));
    }

    fn input_method_options_open(&mut self, id: &str) {
        self.calls
            .push(LanguageCall::InputMethodOptionsOpen(id.to_string()));
    }

    fn ui_language_change(&mut self, language_code: &str) {
        self.calls
            .push(LanguageCall::UiLanguageChange(language_code.to_string()));
    }

    fn ui_language_restart(&mut self) {
        self.calls.push(LanguageCall::UiLanguageRestart);
    }

    fn spell_check_language_change(&mut self, language_code: &str) {
        self.calls.push(LanguageCall::SpellCheckLanguageChange(
            language_code.to_string(),
        ));
    }

    fn retry_dictionary_download(&mut self) {
        self.calls.push(LanguageCall::RetryDictionaryDownload);
    }

    fn language_options_open(&mut self) {
        self.calls.push(LanguageCall::LanguageOptionsOpen);
    }
}
