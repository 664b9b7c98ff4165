//! Logging host bridge for the demo shell.
//!
//! Every outbound call is logged instead of crossing a process boundary;
//! a real embedding would translate these onto its message channel.

use atrium_core::host::{LanguageHost, LoginHost, PrefsHost};
use atrium_types::ScreenId;

/// Bridge that logs every call at info level.
#[derive(Debug, Default)]
pub struct LoggingBridge;

impl PrefsHost for LoggingBridge {
    fn set_string_pref(&mut self, key: &str, value: &str) {
        log::info!("host <- setStringPref({key}, {value:?})");
    }
}

impl LoginHost for LoggingBridge {
    fn update_offline_login(&mut self, is_local: bool) {
        log::info!("host <- updateOfflineLogin({is_local})");
    }

    fn show_loading_timeout_error(&mut self) {
        log::info!("host <- showLoadingTimeoutError()");
    }

    fn login_ui_state_changed(&mut self, screen: ScreenId, visible: bool) {
        log::info!("host <- loginUIStateChanged({screen}, {visible})");
    }

    fn complete_login(&mut self, email: &str, _password: &str) {
        log::info!("host <- completeLogin({email}, ...)");
    }

    fn complete_authentication(&mut self, email: &str, _password: &str, _auth_code: &str) {
        log::info!("host <- completeAuthentication({email}, ...)");
    }

    fn authenticate_user(&mut self, email: &str, _password: &str) {
        log::info!("host <- authenticateUser({email}, ...)");
    }

    fn login_screen_update(&mut self) {
        log::info!("host <- loginScreenUpdate()");
    }

    fn login_webui_ready(&mut self) {
        log::info!("host <- loginWebuiReady()");
    }

    fn login_visible(&mut self, screen: ScreenId) {
        log::info!("host <- loginVisible({screen})");
    }

    fn show_gaia_frame_error(&mut self, code: i32) {
        log::info!("host <- showGaiaFrameError({code})");
    }

    fn create_account(&mut self) {
        log::info!("host <- createAccount()");
    }

    fn launch_incognito(&mut self) {
        log::info!("host <- launchIncognito()");
    }

    fn show_managed_user_creation_screen(&mut self) {
        log::info!("host <- showLocallyManagedUserCreationScreen()");
    }

    fn offline_login(&mut self, email: &str) {
        log::info!("host <- offlineLogin({email})");
    }
}

impl LanguageHost for LoggingBridge {
    fn input_method_enable(&mut self, id: &str) {
        log::info!("host <- inputMethodEnable({id})");
    }

    fn input_method_disable(&mut self, id: &str) {
        log::info!("host <- inputMethodDisable({id})");
    }

    fn input_method_options_open(&mut self, id: &str) {
        log::info!("host <- inputMethodOptionsOpen({id})");
    }

    fn ui_language_change(&mut self, language_code: &str) {
        log::info!("host <- uiLanguageChange({language_code})");
    }

    fn ui_language_restart(&mut self) {
        log::info!("host <- uiLanguageRestart()");
    }

    fn spell_check_language_change(&mut self, language_code: &str) {
        log::info!("host <- spellCheckLanguageChange({language_code})");
    }

    fn retry_dictionary_download(&mut self) {
        log::info!("host <- retryDictionaryDownload()");
    }

    fn language_options_open(&mut self) {
        log::info!("host <- languageOptionsOpen()");
    }
}
