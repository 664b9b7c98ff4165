//! Shared test utilities for the sign-in screen.
//!
//! Provides a [`RecordingLoginHost`] that records every outbound bridge
//! call for assertion in unit tests.

use atrium_core::host::LoginHost;
use atrium_types::ScreenId;

/// A recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum LoginCall {
    UpdateOfflineLogin(bool),
    ShowLoadingTimeoutError,
    LoginUiStateChanged(ScreenId, bool),
    CompleteLogin { email: String, password: String },
    CompleteAuthentication {
        email: String,
        password: String,
        auth_code: String,
    },
    AuthenticateUser { email: String, password: String },
    LoginScreenUpdate,
    LoginWebuiReady,
    LoginVisible(ScreenId),
    ShowGaiaFrameError(i32),
    CreateAccount,
    LaunchIncognito,
    ShowManagedUserCreationScreen,
    OfflineLogin(String),
}

/// Login bridge double that records calls in order.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingLoginHost {
    pub calls: Vec<LoginCall>,
}

#[allow(dead_code)]
impl RecordingLoginHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since construction or the last `clear`.
    pub fn take(&mut self) -> Vec<LoginCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl LoginHost for RecordingLoginHost {
    fn update_offline_login(&mut self, is_local: bool) {
        self.calls.push(LoginCall::UpdateOfflineLogin(is_local));
    }

    fn show_loading_timeout_error(&mut self) {
        self.calls.push(LoginCall::ShowLoadingTimeoutError);
    }

    fn login_ui_state_changed(&mut self, screen: ScreenId, visible: bool) {
        self.calls.push(LoginCall::LoginUiStateChanged(screen, visible));
    }

    fn complete_login(&mut self, email: &str, password: &str) {
        self.calls.push(LoginCall::CompleteLogin {
            email: email.to_string(),
            password: password.to_string(),
        });
    }

    fn complete_authentication(&mut self, email: &str, password: &str, auth_code: &str) {
        self.calls.push(LoginCall::CompleteAuthentication {
            email: email.to_string(),
            password: password.to_string(),
            auth_code: auth_code.to_string(),
        });
    }

    fn authenticate_user(&mut self, email: &str, password: &str) {
        self.calls.push(LoginCall::AuthenticateUser {
            email: email.to_string(),
            password: password.to_string(),
        });
    }

    fn login_screen_update(&mut self) {
        self.calls.push(LoginCall::LoginScreenUpdate);
    }

    fn login_webui_ready(&mut self) {
        self.calls.push(LoginCall::LoginWebuiReady);
    }

    fn login_visible(&mut self, screen: ScreenId) {
        self.calls.push(LoginCall::LoginVisible(screen));
    }

    fn show_gaia_frame_error(&mut self, code: i32) {
        self.calls.push(LoginCall::ShowGaiaFrameError(code));
    }

    fn create_account(&mut self) {
        self.calls.push(LoginCall::CreateAccount);
    }

    fn launch_incognito(&mut self) {
        self.calls.push(LoginCall::LaunchIncognito);
    }

    fn show_managed_user_creation_screen(&mut self) {
        self.calls.push(LoginCall::ShowManagedUserCreationScreen);
    }

    fn offline_login(&mut self, email: &str) {
        self.calls.push(LoginCall::OfflineLogin(email.to_string()));
    }
}
