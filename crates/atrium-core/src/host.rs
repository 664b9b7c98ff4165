//! One-way call bridges into the embedding host.
//!
//! Screen controllers never await responses: every method here is
//! fire-and-forget, and anything the host wants to say back arrives later
//! as an independent inbound event (a frame message, a preference push, a
//! download callback). Implementations translate each call onto the host's
//! message channel; tests substitute a recording double.

use atrium_types::ScreenId;

/// Preference persistence, host-side.
///
/// The shell holds no preference store of its own. Writes go through the
/// host; updated values come back as pushed change notifications.
pub trait PrefsHost {
    /// Persist a scalar or comma-separated string preference.
    fn set_string_pref(&mut self, key: &str, value: &str);
}

/// Host calls issued by the sign-in frame screen.
pub trait LoginHost {
    /// Report whether the local (offline) sign-in page is in use.
    fn update_offline_login(&mut self, is_local: bool);
    /// Frame load has stalled past a timeout threshold.
    fn show_loading_timeout_error(&mut self);
    /// A login screen became visible or was hidden.
    fn login_ui_state_changed(&mut self, screen: ScreenId, visible: bool);
    /// Basic credentials received from the frame.
    fn complete_login(&mut self, email: &str, password: &str);
    /// Credentials plus auth code received (federated flow).
    fn complete_authentication(&mut self, email: &str, password: &str, auth_code: &str);
    /// Local-mode credentials received from the frame.
    fn authenticate_user(&mut self, email: &str, password: &str);
    /// Frame signalled a UI refresh.
    fn login_screen_update(&mut self);
    /// Sign-in web UI finished loading.
    fn login_webui_ready(&mut self);
    /// A login screen finished presenting.
    fn login_visible(&mut self, screen: ScreenId);
    /// Frame navigation failed with the given error code.
    fn show_gaia_frame_error(&mut self, code: i32);
    /// User asked to create a new account.
    fn create_account(&mut self);
    /// User asked for a guest session.
    fn launch_incognito(&mut self);
    /// User asked to create a managed user.
    fn show_managed_user_creation_screen(&mut self);
    /// Re-request the offline sign-in page for the given email.
    fn offline_login(&mut self, email: &str);
}

/// Host calls issued by the language options screen.
pub trait LanguageHost: PrefsHost {
    /// Activate an input method engine.
    fn input_method_enable(&mut self, id: &str);
    /// Deactivate an input method engine.
    fn input_method_disable(&mut self, id: &str);
    /// Open the configuration page of an input method.
    fn input_method_options_open(&mut self, id: &str);
    /// Change the UI display language (takes effect after restart).
    fn ui_language_change(&mut self, language_code: &str);
    /// Restart to apply a pending UI language change.
    fn ui_language_restart(&mut self);
    /// Change the spell-check dictionary language.
    fn spell_check_language_change(&mut self, language_code: &str);
    /// Retry a failed dictionary download.
    fn retry_dictionary_download(&mut self);
    /// The language options panel became visible.
    fn language_options_open(&mut self);
}
