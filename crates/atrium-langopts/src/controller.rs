//! Language options controller: engine reconciliation and preference sync.

use std::collections::{HashMap, HashSet};

use atrium_core::host::LanguageHost;
use atrium_core::notification::Notification;
use atrium_core::prefs;

use crate::catalog::{
    COMPONENT_IME_PREFIX, InputMethodDescriptor, InputMethodKind, build_language_map,
};
use crate::view::{LanguageOptionsView, SpellCheckDisplay, UiLanguageDisplay};

/// Notification shown when the last input method would be disabled.
const LAST_INPUT_METHOD_TEXT: &str =
    "Please add another input method before removing this one.";
const NOTIFICATION_ACTION_TEXT: &str = "OK";

/// Spell-check dictionary download status per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    InProgress,
    Failed,
}

/// Which input methods the list is filtered to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MethodFilter {
    /// Methods associated with the selected language.
    ForSelected,
    /// Extension-provided methods only, regardless of language.
    ExtensionOnly,
}

/// Initial panel state pushed by the host when the screen is built.
#[derive(Debug, Clone, Default)]
pub struct LanguageOptionsConfig {
    /// Every language the add-language selector may offer, display order.
    pub available_languages: Vec<String>,
    /// Languages already active, display order.
    pub active_languages: Vec<String>,
    /// Languages the UI itself can be displayed in.
    pub ui_language_codes: Vec<String>,
    /// Languages with a spell-check dictionary.
    pub spell_check_language_codes: Vec<String>,
    /// The UI language in use right now.
    pub current_ui_language: String,
    /// The UI language that takes effect after the next restart.
    pub prospective_ui_language: String,
    /// Guest sessions cannot change the UI language.
    pub is_guest_session: bool,
}

/// Controller for the language and input-method options panel.
#[derive(Debug)]
pub struct LanguageOptionsController {
    /// Full input-method catalog, including registered component methods.
    catalog: Vec<InputMethodDescriptor>,
    /// Language code to candidate input-method ids; append-only.
    language_to_input_methods: HashMap<String, Vec<String>>,
    available_languages: Vec<String>,
    active_languages: Vec<String>,
    ui_language_codes: HashSet<String>,
    spell_check_language_codes: HashSet<String>,
    current_ui_language: String,
    prospective_ui_language: String,
    is_guest_session: bool,
    selected: Option<String>,
    filter: MethodFilter,
    /// Enabled non-extension engines; order mirrors the persisted CSV.
    preload_engines: Vec<String>,
    /// Enabled extension input methods, persisted separately.
    enabled_extension_imes: Vec<String>,
    spell_check_dictionary: String,
    spell_check_enabled: bool,
    download_status: HashMap<String, DownloadStatus>,
    /// Consecutive dictionary download failures; reset on any success.
    download_failures: u32,
    notification: Notification,
    view: LanguageOptionsView,
}

impl LanguageOptionsController {
    /// Build the panel from a catalog and the host-pushed initial state.
    ///
    /// Preference values arrive afterwards as pushed change notifications,
    /// the same way later edits do.
    pub fn new(catalog: Vec<InputMethodDescriptor>, config: LanguageOptionsConfig) -> Self {
        let language_to_input_methods = build_language_map(&catalog);
        let mut controller = Self {
            catalog,
            language_to_input_methods,
            available_languages: config.available_languages,
            active_languages: config.active_languages,
            ui_language_codes: config.ui_language_codes.into_iter().collect(),
            spell_check_language_codes: config.spell_check_language_codes.into_iter().collect(),
            current_ui_language: config.current_ui_language,
            prospective_ui_language: config.prospective_ui_language,
            is_guest_session: config.is_guest_session,
            selected: None,
            filter: MethodFilter::ForSelected,
            preload_engines: Vec::new(),
            enabled_extension_imes: Vec::new(),
            spell_check_dictionary: String::new(),
            spell_check_enabled: true,
            download_status: HashMap::new(),
            download_failures: 0,
            notification: Notification::new(),
            view: LanguageOptionsView::default(),
        };
        controller.refresh_view();
        controller
    }

    /// The panel became visible or was hidden.
    pub fn on_visibility_changed(&mut self, visible: bool, host: &mut dyn LanguageHost) {
        if visible {
            host.language_options_open();
            self.refresh_view();
        }
    }

    /// A language was selected in the list. Recomputes every derived view.
    pub fn on_language_selected(&mut self, code: &str) {
        if code.is_empty() {
            return;
        }
        self.selected = Some(code.to_string());
        self.filter = MethodFilter::ForSelected;
        self.refresh_view();
    }

    /// Show only extension-provided input methods, with no language
    /// selection.
    pub fn show_extension_imes(&mut self) {
        self.selected = None;
        self.filter = MethodFilter::ExtensionOnly;
        self.refresh_view();
    }

    /// An input-method checkbox was toggled.
    ///
    /// Refuses to disable the last remaining non-extension engine: the
    /// checkbox reverts, a notification is shown, and nothing reaches the
    /// host.
    pub fn on_input_method_toggled(
        &mut self,
        now_ms: u64,
        id: &str,
        checked: bool,
        host: &mut dyn LanguageHost,
    ) {
        if !checked && self.preload_engines.len() == 1 {
            self.notification
                .show(now_ms, LAST_INPUT_METHOD_TEXT, NOTIFICATION_ACTION_TEXT);
            self.refresh_view();
            return;
        }

        if checked {
            host.input_method_enable(id);
            if !self.preload_engines.iter().any(|e| e == id) {
                self.preload_engines.push(id.to_string());
            }
        } else {
            host.input_method_disable(id);
            self.preload_engines.retain(|e| e != id);
        }

        self.preload_engines = self.reorder_preload_engines(&self.preload_engines);
        self.save_preload_engines(host);
        self.refresh_view();
    }

    /// An extension-IME checkbox was toggled. No last-one protection, no
    /// reordering; the extension list is an unordered set.
    pub fn on_extension_ime_toggled(
        &mut self,
        id: &str,
        checked: bool,
        host: &mut dyn LanguageHost,
    ) {
        if checked {
            if !self.enabled_extension_imes.iter().any(|e| e == id) {
                self.enabled_extension_imes.push(id.to_string());
            }
        } else {
            self.enabled_extension_imes.retain(|e| e != id);
        }
        host.set_string_pref(
            prefs::ENABLED_EXTENSION_IMES,
            &prefs::join_csv(&self.enabled_extension_imes),
        );
        self.refresh_view();
    }

    /// A preference changed host-side.
    pub fn on_pref_changed(&mut self, key: &str, value: &str) {
        match key {
            prefs::PRELOAD_ENGINES => {
                self.preload_engines = self.filter_known_preload_engines(prefs::split_csv(value));
                self.refresh_view();
            },
            prefs::ENABLED_EXTENSION_IMES => {
                self.enabled_extension_imes =
                    self.filter_known_extension_imes(prefs::split_csv(value));
                self.refresh_view();
            },
            prefs::SPELL_CHECK_DICTIONARY => {
                self.spell_check_dictionary = value.to_string();
                self.refresh_view();
            },
            prefs::ENABLE_SPELL_CHECK => {
                self.spell_check_enabled = value == "true";
                self.refresh_view();
            },
            prefs::APP_LOCALE => {
                self.prospective_ui_language = value.to_string();
                self.refresh_view();
            },
            _ => log::debug!("Ignoring preference change for {key}"),
        }
    }

    /// User clicked the "display in this language" button.
    pub fn on_ui_language_button_clicked(&mut self, host: &mut dyn LanguageHost) {
        if self.view.ui_language != UiLanguageDisplay::Actionable {
            return;
        }
        if let Some(code) = &self.selected {
            host.ui_language_change(code);
        }
    }

    /// Host confirmation that the UI language preference was saved.
    pub fn ui_language_saved(&mut self, code: &str) {
        self.prospective_ui_language = code.to_string();

        // If the user moved on to another language, leave the view alone.
        if self.selected.as_deref() != Some(code) {
            return;
        }

        self.refresh_view();
        if code != self.current_ui_language {
            // Takes effect after restart; the recompute above already
            // settled on `Current`, which a restart bar supersedes.
            self.view.ui_language = UiLanguageDisplay::RestartRequired;
        }
        // Changing back to the running locale needs no restart; the plain
        // `Current` display from the recompute stands.
    }

    /// User clicked the restart button on the pending-change bar.
    pub fn on_restart_button_clicked(&mut self, host: &mut dyn LanguageHost) {
        host.ui_language_restart();
    }

    /// User clicked "use this language for spell checking".
    pub fn on_spell_check_button_clicked(&mut self, host: &mut dyn LanguageHost) {
        if self.view.spell_check != SpellCheckDisplay::Actionable {
            return;
        }
        if let Some(code) = self.selected.clone() {
            host.set_string_pref(prefs::SPELL_CHECK_DICTIONARY, &code);
            host.spell_check_language_change(&code);
        }
    }

    /// User clicked retry on a failed dictionary download.
    pub fn on_retry_download_clicked(&mut self, host: &mut dyn LanguageHost) {
        host.retry_dictionary_download();
    }

    /// User clicked an input method's configure button. Returns the page
    /// to open, if the method has one.
    pub fn on_configure_input_method_clicked(
        &mut self,
        id: &str,
        host: &mut dyn LanguageHost,
    ) -> Option<String> {
        let method = self.catalog.iter().find(|m| m.id == id)?;
        let page = method
            .config_page
            .clone()
            .or_else(|| method.options_page.clone())?;
        host.input_method_options_open(id);
        Some(page)
    }

    /// Add a language to the active list and select it.
    pub fn add_language(&mut self, code: &str, host: &mut dyn LanguageHost) {
        if !self.active_languages.iter().any(|c| c == code) {
            self.active_languages.push(code.to_string());
            // Keep the persisted engine order aligned with the list order.
            self.preload_engines = self.reorder_preload_engines(&self.preload_engines);
            self.save_preload_engines(host);
        }
        self.selected = Some(code.to_string());
        self.filter = MethodFilter::ForSelected;
        self.refresh_view();
    }

    /// Remove a language from the active list.
    ///
    /// Returns `false` (and changes nothing) when the language is the UI
    /// language or removing it would leave zero enabled engines. Engines
    /// tied only to the removed language drop out of the persisted list.
    pub fn remove_language(&mut self, code: &str, host: &mut dyn LanguageHost) -> bool {
        if !self.language_is_deletable(code) {
            return false;
        }
        self.active_languages.retain(|c| c != code);
        if self.selected.as_deref() == Some(code) {
            self.selected = self.active_languages.first().cloned();
        }
        self.preload_engines = self.reorder_preload_engines(&self.preload_engines);
        self.save_preload_engines(host);
        self.refresh_view();
        true
    }

    /// Whether the language list should offer deletion for `code`.
    pub fn language_is_deletable(&self, code: &str) -> bool {
        // The UI language can never be removed.
        if code == self.prospective_ui_language {
            return false;
        }
        self.can_remove_language(code)
    }

    /// Whether removing `code` would still leave at least one enabled
    /// engine.
    ///
    /// Engines shared with another active language survive the removal and
    /// do not count against it.
    pub fn can_remove_language(&self, code: &str) -> bool {
        let Some(ids) = self.language_to_input_methods.get(code) else {
            // No input methods at all; removal is free.
            return true;
        };

        let mut to_remove: HashSet<&str> = ids.iter().map(String::as_str).collect();
        for other in &self.active_languages {
            if other == code {
                continue;
            }
            if let Some(other_ids) = self.language_to_input_methods.get(other) {
                for id in other_ids {
                    to_remove.remove(id.as_str());
                }
            }
        }

        self.preload_engines
            .iter()
            .any(|engine| !to_remove.contains(engine.as_str()))
    }

    /// Order the enabled engine set by active-language display order.
    ///
    /// For each active language in order, each of its enabled engines is
    /// appended once; an engine shared by several languages lands at its
    /// first association. Engines whose languages are no longer active are
    /// dropped silently, matching the persisted preference the host
    /// consumes positionally.
    pub fn reorder_preload_engines(&self, engines: &[String]) -> Vec<String> {
        let mut pending: HashSet<&str> = engines.iter().map(String::as_str).collect();
        let mut ordered = Vec::with_capacity(engines.len());

        for code in &self.active_languages {
            let Some(ids) = self.language_to_input_methods.get(code) else {
                continue;
            };
            for id in ids {
                if pending.remove(id.as_str()) {
                    ordered.push(id.clone());
                }
            }
        }

        ordered
    }

    /// Component extensions registered; extend the catalog and the
    /// language map. Registration only ever appends.
    pub fn register_component_extensions(&mut self, descriptors: Vec<InputMethodDescriptor>) {
        for method in &descriptors {
            for code in &method.language_codes {
                self.language_to_input_methods
                    .entry(code.clone())
                    .or_default()
                    .push(method.id.clone());
            }
        }
        self.catalog.extend(descriptors);
        self.refresh_view();
    }

    /// A dictionary download started for `code`.
    pub fn on_dictionary_download_begin(&mut self, code: &str) {
        self.download_status
            .insert(code.to_string(), DownloadStatus::InProgress);
        if self.selected.as_deref() == Some(code) {
            self.refresh_view();
        }
    }

    /// A dictionary download finished for `code`.
    pub fn on_dictionary_download_success(&mut self, code: &str) {
        self.download_status.remove(code);
        self.download_failures = 0;
        if self.selected.as_deref() == Some(code) {
            self.refresh_view();
        }
    }

    /// A dictionary download failed for `code`.
    pub fn on_dictionary_download_failure(&mut self, code: &str) {
        self.download_status
            .insert(code.to_string(), DownloadStatus::Failed);
        self.download_failures += 1;
        if self.selected.as_deref() == Some(code) {
            self.refresh_view();
        }
    }

    /// Advance timers (notification auto-hide).
    pub fn poll(&mut self, now_ms: u64) {
        self.notification.poll(now_ms);
    }

    /// The transient notification slot.
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Dismiss the transient notification.
    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    /// Current visible-set.
    pub fn view(&self) -> &LanguageOptionsView {
        &self.view
    }

    /// Whether the checkbox for `id` should render checked.
    pub fn is_input_method_enabled(&self, id: &str) -> bool {
        self.preload_engines.iter().any(|e| e == id)
            || self.enabled_extension_imes.iter().any(|e| e == id)
    }

    /// Enabled non-extension engines, persisted order.
    pub fn preload_engines(&self) -> &[String] {
        &self.preload_engines
    }

    /// Enabled extension input methods.
    pub fn enabled_extension_imes(&self) -> &[String] {
        &self.enabled_extension_imes
    }

    /// Active languages in display order.
    pub fn active_languages(&self) -> &[String] {
        &self.active_languages
    }

    /// Current spell-check dictionary language.
    pub fn spell_check_dictionary(&self) -> &str {
        &self.spell_check_dictionary
    }

    fn save_preload_engines(&self, host: &mut dyn LanguageHost) {
        host.set_string_pref(
            prefs::PRELOAD_ENGINES,
            &prefs::join_csv(&self.preload_engines),
        );
    }

    /// Drop stale or duplicate ids from a loaded preload-engines pref.
    ///
    /// Component-extension ids register after the static catalog, so they
    /// pass without a catalog entry.
    fn filter_known_preload_engines(&self, engines: Vec<String>) -> Vec<String> {
        let known: HashSet<&str> = self
            .catalog
            .iter()
            .filter(|m| m.kind() != InputMethodKind::Extension)
            .map(|m| m.id.as_str())
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        engines
            .into_iter()
            .filter(|id| {
                let recognized =
                    known.contains(id.as_str()) || id.starts_with(COMPONENT_IME_PREFIX);
                if !recognized {
                    log::warn!("Dropping unknown preload engine {id:?} from preference");
                }
                recognized && seen.insert(id.clone())
            })
            .collect()
    }

    /// Drop stale ids from a loaded extension-IME pref.
    fn filter_known_extension_imes(&self, imes: Vec<String>) -> Vec<String> {
        let known: HashSet<&str> = self
            .catalog
            .iter()
            .filter(|m| m.kind() == InputMethodKind::Extension)
            .map(|m| m.id.as_str())
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        imes.into_iter()
            .filter(|id| {
                let recognized = known.contains(id.as_str());
                if !recognized {
                    log::warn!("Dropping unknown extension IME {id:?} from preference");
                }
                recognized && seen.insert(id.clone())
            })
            .collect()
    }

    fn refresh_view(&mut self) {
        self.view.selected_language = self.selected.clone();
        self.view.ui_language = self.compute_ui_language_display();
        self.view.spell_check = self.compute_spell_check_display();
        self.view.spell_check_button_enabled = self.spell_check_enabled;
        self.view.visible_input_methods = self.compute_visible_input_methods();
        self.view.no_input_methods_note_visible = match (&self.filter, &self.selected) {
            (MethodFilter::ForSelected, Some(code)) => {
                !self.language_to_input_methods.contains_key(code)
            },
            _ => false,
        };
        self.view.extension_ime_button_visible = self
            .catalog
            .iter()
            .any(|m| m.kind() == InputMethodKind::Extension);

        // Hide active languages from the add selector and preselect the
        // first survivor, so a stale hidden entry is never the default.
        self.view.addable_languages = self
            .available_languages
            .iter()
            .filter(|code| !self.active_languages.contains(*code))
            .cloned()
            .collect();
        self.view.preselected_addable = self.view.addable_languages.first().cloned();
    }

    fn compute_ui_language_display(&self) -> UiLanguageDisplay {
        if self.filter == MethodFilter::ExtensionOnly {
            return UiLanguageDisplay::Hidden;
        }
        let Some(code) = &self.selected else {
            return UiLanguageDisplay::Hidden;
        };

        if *code == self.prospective_ui_language {
            UiLanguageDisplay::Current
        } else if self.ui_language_codes.contains(code) {
            if self.is_guest_session {
                // Changing the UI language makes no sense in a guest
                // session; it cannot survive the restart.
                UiLanguageDisplay::HiddenInGuestSession
            } else {
                UiLanguageDisplay::Actionable
            }
        } else {
            UiLanguageDisplay::Unavailable
        }
    }

    fn compute_spell_check_display(&self) -> SpellCheckDisplay {
        if self.filter == MethodFilter::ExtensionOnly {
            return SpellCheckDisplay::Hidden;
        }
        let Some(code) = &self.selected else {
            return SpellCheckDisplay::Hidden;
        };

        if *code == self.spell_check_dictionary {
            match self.download_status.get(code) {
                None => SpellCheckDisplay::InUse,
                Some(DownloadStatus::InProgress) => SpellCheckDisplay::DownloadInProgress,
                Some(DownloadStatus::Failed) => SpellCheckDisplay::DownloadFailed {
                    show_retry_help: self.download_failures > 1,
                },
            }
        } else if self.spell_check_language_codes.contains(code) {
            SpellCheckDisplay::Actionable
        } else {
            SpellCheckDisplay::Unavailable
        }
    }

    fn compute_visible_input_methods(&self) -> Vec<String> {
        match (&self.filter, &self.selected) {
            (MethodFilter::ExtensionOnly, _) => self
                .catalog
                .iter()
                .filter(|m| m.kind() == InputMethodKind::Extension)
                .map(|m| m.id.clone())
                .collect(),
            (MethodFilter::ForSelected, Some(code)) => self
                .catalog
                .iter()
                .filter(|m| m.language_codes.iter().any(|c| c == code))
                .map(|m| m.id.clone())
                .collect(),
            (MethodFilter::ForSelected, None) => Vec::new(),
        }
    }
}
