//! Declarative view-model for the language options panel.
//!
//! The controller recomputes this on every state change; the rendering
//! layer subscribes and never asks the controller questions mid-frame.

/// What the UI-language section shows for the selected language.
///
/// The variants are mutually exclusive; exactly one presentation is
/// active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLanguageDisplay {
    /// No selection (or the extension-IME filter is active).
    #[default]
    Hidden,
    /// "Is displayed in this language" -- already the (prospective) UI
    /// language.
    Current,
    /// Actionable "display in this language" button.
    Actionable,
    /// Guest sessions cannot change the UI language; section suppressed.
    HiddenInGuestSession,
    /// "Cannot be displayed in this language" message.
    Unavailable,
    /// Restart notification bar for a pending language change.
    RestartRequired,
}

/// What the spell-check section shows for the selected language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpellCheckDisplay {
    /// No selection; everything suppressed.
    #[default]
    Hidden,
    /// "Is used for spell checking" -- already the dictionary language.
    InUse,
    /// Dictionary download in progress.
    DownloadInProgress,
    /// Dictionary download failed; offer retry, with extra help text after
    /// repeated failures.
    DownloadFailed { show_retry_help: bool },
    /// Actionable "use this language for spell checking" button.
    Actionable,
    /// "Cannot be used for spell checking" message.
    Unavailable,
}

/// Visible-set for the whole panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageOptionsView {
    /// Currently selected language, if any.
    pub selected_language: Option<String>,
    /// UI-language section presentation.
    pub ui_language: UiLanguageDisplay,
    /// Spell-check section presentation.
    pub spell_check: SpellCheckDisplay,
    /// Spell-check action button enabled (global spell-check toggle).
    pub spell_check_button_enabled: bool,
    /// Input methods visible for the current selection/filter, in catalog
    /// order.
    pub visible_input_methods: Vec<String>,
    /// "No input methods for this language" note.
    pub no_input_methods_note_visible: bool,
    /// Languages offered by the add-language selector (active ones are
    /// hidden so a language cannot be added twice).
    pub addable_languages: Vec<String>,
    /// First visible add-language entry, preselected.
    pub preselected_addable: Option<String>,
    /// Whether the extension-IME filter button is shown at all.
    pub extension_ime_button_visible: bool,
}
