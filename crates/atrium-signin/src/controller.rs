//! Sign-in frame controller: load supervision and message relay.

use atrium_core::host::LoginHost;
use atrium_core::timer::OneShotTimer;
use atrium_types::ScreenId;

use crate::message::{FrameEnvelope, FrameHandle, FrameMessage};
use crate::params::AuthFrameParams;

/// Loading time after which a captive portal is suspected.
pub const PORTAL_SUSPECT_DELAY_MS: u64 = 7_000;

/// Maximum total loading time before the definitive timeout report.
pub const MAX_LOADING_TIME_MS: u64 = 60_000;

/// Frame navigation error raised when the frame itself was reloaded.
pub const NET_ERROR_ABORTED_BY_USER: i32 = 3;

/// Load lifecycle of the embedded frame.
///
/// `Errored` means a navigation failure was recorded while a load was in
/// flight; the loading chrome stays up until a terminal frame message or a
/// reload resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Deferred or displayed sign-in error content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBubble {
    /// Number of sign-in attempts so far.
    pub attempts: u32,
    /// Message content to present.
    pub content: String,
}

/// Outcome of a `reset` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Focus was not requested; nothing changed.
    Unchanged,
    /// Local mode keeps the offline page; chrome was restored around it.
    LocalRedisplay,
    /// The embedding shell should present the online sign-in UI afresh.
    ShowSigninUi,
}

/// Declarative visible-set for the sign-in screen.
///
/// The rendering layer subscribes to this; the controller recomputes it on
/// every state change and never touches presentation directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInView {
    /// Loading spinner shown (frame and right panel hidden).
    pub loading_visible: bool,
    /// The embedded frame itself.
    pub frame_visible: bool,
    /// Right-hand panel container.
    pub right_panel_visible: bool,
    /// "Password changed" reason label.
    pub reason_visible: bool,
    /// Account-creation link.
    pub create_account_visible: bool,
    /// Guest sign-in link.
    pub guest_signin_visible: bool,
    /// Managed-user creation link.
    pub create_managed_user_visible: bool,
    /// All right-panel items hidden; the panel collapses entirely.
    pub no_right_panel: bool,
    /// Screen header bar (hidden once credentials are forwarded).
    pub header_visible: bool,
    /// Whether the header offers cancellation.
    pub allow_cancel: bool,
    /// Add-user button in the header (local-mode error flow hides it).
    pub add_user_button_visible: bool,
    /// Cancel-add-user button (local-mode error flow shows it).
    pub cancel_add_user_button_visible: bool,
    /// Currently displayed error bubble, if any.
    pub error_bubble: Option<ErrorBubble>,
}

impl Default for SignInView {
    fn default() -> Self {
        Self {
            loading_visible: false,
            frame_visible: false,
            right_panel_visible: true,
            reason_visible: false,
            create_account_visible: false,
            guest_signin_visible: false,
            create_managed_user_visible: false,
            no_right_panel: true,
            header_visible: true,
            allow_cancel: false,
            add_user_button_visible: true,
            cancel_add_user_button_visible: false,
            error_bubble: None,
        }
    }
}

/// Which stall report fires when the loading timer expires next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StallStage {
    PortalSuspect,
    HardTimeout,
}

/// Controller for the identity-provider sign-in frame.
#[derive(Debug)]
pub struct SignInFrameController {
    /// The frame element this controller owns.
    frame: FrameHandle,
    /// Last URL assigned to the frame.
    frame_url: Option<String>,
    state: LoadState,
    /// Stall-detection timer; at most one deadline alive at any instant.
    loading_timer: OneShotTimer,
    stall_stage: StallStage,
    /// Error bubble queued while a load is in flight.
    pending_error_bubble: Option<ErrorBubble>,
    /// Whether the user may cancel out of this screen.
    cancel_allowed: bool,
    silent_load: bool,
    /// Whether the local (offline) sign-in page is in use.
    is_local: bool,
    /// Email of the user signing in through the offline page.
    email: String,
    /// Whether this screen is the foregrounded one.
    active: bool,
    /// Number of frame navigations issued so far.
    navigations: u64,
    /// Screen the shell should warm up, set once the sign-in UI is ready.
    prefetch_request: Option<ScreenId>,
    view: SignInView,
}

impl SignInFrameController {
    /// Create a controller bound to `frame`.
    pub fn new(frame: FrameHandle) -> Self {
        Self {
            frame,
            frame_url: None,
            state: LoadState::Idle,
            loading_timer: OneShotTimer::new(),
            stall_stage: StallStage::PortalSuspect,
            pending_error_bubble: None,
            cancel_allowed: false,
            silent_load: false,
            is_local: false,
            email: String::new(),
            active: false,
            navigations: 0,
            prefetch_request: None,
            view: SignInView::default(),
        }
    }

    /// Load the sign-in page described by `params` into the frame.
    ///
    /// Navigates only when the composed URL differs from the current one or
    /// `force_reload` is set. A redundant call while a load is in flight is
    /// a no-op, unless the in-flight attempt already failed, in which case
    /// the frame is reloaded.
    pub fn load(&mut self, now_ms: u64, params: &AuthFrameParams, host: &mut dyn LoginHost) {
        self.silent_load = params.silent_load;
        self.set_local(params.is_local, host);
        self.email.clear();

        self.update_params(params);

        let url = params.frame_url();
        if params.force_reload || self.frame_url.as_deref() != Some(url.as_str()) {
            log::info!("Opening auth frame: {url}");
            self.frame_url = Some(url);
            self.navigate(now_ms);
        } else if self.is_loading() {
            if self.state == LoadState::Errored {
                // The previous attempt failed; try again.
                self.reload(now_ms);
            } else {
                log::debug!("Auth frame is still loading");
            }
        }
    }

    /// Apply non-navigating parameter updates: secondary link visibility
    /// and whether cancellation is allowed.
    pub fn update_params(&mut self, params: &AuthFrameParams) {
        self.view.reason_visible = params.password_changed;
        self.view.create_account_visible = params.create_account;
        self.view.guest_signin_visible = params.guest_signin;
        self.view.create_managed_user_visible = params.create_managed_user;

        // Cancellation only makes sense when saved accounts can be shown.
        self.cancel_allowed = params.is_show_users && params.user_pod_count > 0;

        self.refresh_view();
    }

    /// Re-navigate the frame to the last-known URL.
    pub fn reload(&mut self, now_ms: u64) {
        if self.frame_url.is_none() {
            log::warn!("Reload requested before any auth frame load");
            return;
        }
        log::info!("Reloading auth frame");
        self.navigate(now_ms);
    }

    /// Advance timers. Call from the embedding loop with the current time.
    pub fn poll(&mut self, now_ms: u64, host: &mut dyn LoginHost) {
        if !self.loading_timer.poll(now_ms) {
            return;
        }
        match self.stall_stage {
            StallStage::PortalSuspect => {
                if !self.active {
                    return;
                }
                host.show_loading_timeout_error();
                self.stall_stage = StallStage::HardTimeout;
                self.loading_timer
                    .arm(now_ms, MAX_LOADING_TIME_MS - PORTAL_SUSPECT_DELAY_MS);
            },
            StallStage::HardTimeout => {
                host.show_loading_timeout_error();
            },
        }
    }

    /// External notification that the frame navigation failed.
    pub fn on_frame_error(&mut self, code: i32, host: &mut dyn LoginHost) {
        if code == NET_ERROR_ABORTED_BY_USER {
            // The frame was intentionally reloaded. Nothing to do.
            log::debug!("Auth frame reload aborted previous navigation");
            return;
        }
        log::warn!("Auth frame error: {code}");
        self.state = LoadState::Errored;
        self.refresh_view();
        if self.active {
            host.show_gaia_frame_error(code);
        }
    }

    /// Handle an inbound frame message.
    ///
    /// The envelope must originate from the loaded frame URL (origin prefix
    /// match) and from the frame element this controller owns; anything
    /// else is logged and discarded.
    pub fn on_message(&mut self, envelope: &FrameEnvelope, host: &mut dyn LoginHost) {
        if !self.is_auth_frame_message(envelope) {
            log::warn!(
                "Dropping frame message from unexpected origin {:?}",
                envelope.origin
            );
            return;
        }

        let message: FrameMessage = match serde_json::from_value(envelope.payload.clone()) {
            Ok(message) => message,
            Err(err) => {
                log::warn!("Unrecognized frame message: {err}");
                return;
            },
        };

        match message {
            FrameMessage::CompleteLogin { email, password } => {
                host.complete_login(&email, &password);
                self.state = LoadState::Loading;
                self.view.header_visible = false;
                self.view.error_bubble = None;
                self.refresh_view();
            },
            FrameMessage::CompleteAuthentication {
                email,
                password,
                auth_code,
            } => {
                host.complete_authentication(&email, &password, &auth_code);
                self.state = LoadState::Loading;
                self.view.header_visible = false;
                self.view.error_bubble = None;
                self.refresh_view();
            },
            FrameMessage::LoginUiLoaded => {
                self.state = LoadState::Loaded;
                self.refresh_view();
                host.login_screen_update();
                self.loading_timer.cancel();
                if let Some(bubble) = self.pending_error_bubble.take() {
                    self.show_error_bubble(bubble.attempts, &bubble.content, host);
                }
                host.login_webui_ready();
                host.login_visible(ScreenId::GaiaSignin);
                // Warm up the avatar picker while the user types.
                self.prefetch_request = Some(ScreenId::UserImagePicker);
            },
            FrameMessage::OfflineLogin { email, password } => {
                self.email = email.clone();
                host.authenticate_user(&email, &password);
                self.state = LoadState::Loading;
                self.view.header_visible = false;
                self.refresh_view();
            },
        }
    }

    /// Present a sign-in error, deferring while the frame is mid-load.
    ///
    /// In local mode errors route through the offline page instead, which
    /// renders them itself.
    pub fn show_error_bubble(&mut self, attempts: u32, content: &str, host: &mut dyn LoginHost) {
        if self.is_local {
            self.view.add_user_button_visible = false;
            self.view.cancel_add_user_button_visible = true;
            host.offline_login(&self.email);
        } else if !self.is_loading() {
            self.view.error_bubble = Some(ErrorBubble {
                attempts,
                content: content.to_string(),
            });
        } else {
            // The frame is mid-load; flush when its UI reports ready.
            self.pending_error_bubble = Some(ErrorBubble {
                attempts,
                content: content.to_string(),
            });
        }
    }

    /// User-initiated cancellation. Returns the screen to return to, or
    /// `None` when cancellation is not allowed.
    pub fn cancel(&mut self) -> Option<ScreenId> {
        if !self.cancel_allowed {
            return None;
        }
        Some(ScreenId::AccountPicker)
    }

    /// Clear input state and pick the sign-in presentation mode.
    pub fn reset(&mut self, take_focus: bool, force_online: bool) -> ResetOutcome {
        if !take_focus {
            return ResetOutcome::Unchanged;
        }
        if !force_online && self.is_local {
            // The offline page reloads itself after an error; restore the
            // chrome around it so the user can back out.
            self.view.header_visible = true;
            self.refresh_view();
            ResetOutcome::LocalRedisplay
        } else {
            ResetOutcome::ShowSigninUi
        }
    }

    /// The screen is about to be shown.
    pub fn on_before_show(&mut self, host: &mut dyn LoginHost) {
        self.active = true;
        host.login_ui_state_changed(ScreenId::GaiaSignin, true);
        // The header is always visible when sign-in is presented; it hides
        // again once credentials are forwarded.
        self.view.header_visible = true;
        self.refresh_view();
    }

    /// The screen is about to be hidden.
    pub fn on_before_hide(&mut self, host: &mut dyn LoginHost) {
        self.active = false;
        host.login_ui_state_changed(ScreenId::GaiaSignin, false);
    }

    /// User clicked the account-creation link.
    pub fn on_create_account_clicked(&mut self, host: &mut dyn LoginHost) {
        host.create_account();
    }

    /// User clicked the guest sign-in link.
    pub fn on_guest_signin_clicked(&mut self, host: &mut dyn LoginHost) {
        host.launch_incognito();
    }

    /// User clicked the managed-user creation link.
    pub fn on_create_managed_user_clicked(&mut self, host: &mut dyn LoginHost) {
        host.show_managed_user_creation_screen();
    }

    /// Switch local (offline) mode and report it to the host.
    pub fn set_local(&mut self, is_local: bool, host: &mut dyn LoginHost) {
        self.is_local = is_local;
        host.update_offline_login(is_local);
    }

    /// Take a pending screen-prefetch request, if one was queued.
    pub fn take_prefetch_request(&mut self) -> Option<ScreenId> {
        self.prefetch_request.take()
    }

    /// Whether the local (offline) page is in use.
    pub fn is_local(&self) -> bool {
        self.is_local
    }

    /// Current load lifecycle state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Last URL assigned to the frame.
    pub fn frame_url(&self) -> Option<&str> {
        self.frame_url.as_deref()
    }

    /// Whether the stall-detection timer holds a live deadline.
    pub fn timer_armed(&self) -> bool {
        self.loading_timer.is_armed()
    }

    /// Whether user-initiated cancellation is currently allowed.
    pub fn cancel_allowed(&self) -> bool {
        self.cancel_allowed
    }

    /// Email retained for the offline sign-in flow.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current visible-set.
    pub fn view(&self) -> &SignInView {
        &self.view
    }

    /// Whether loading chrome is up (covers in-flight errors too).
    fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading | LoadState::Errored)
    }

    /// Point the frame at `frame_url` and restart stall detection.
    fn navigate(&mut self, now_ms: u64) {
        self.navigations += 1;
        self.state = LoadState::Loading;
        self.stall_stage = StallStage::PortalSuspect;
        self.loading_timer.arm(now_ms, PORTAL_SUSPECT_DELAY_MS);
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        let loading = self.is_loading();
        self.view.loading_visible = loading && !self.silent_load;
        self.view.frame_visible = !loading && self.frame_url.is_some();
        self.view.right_panel_visible = !loading;
        self.view.no_right_panel = !self.view.reason_visible
            && !self.view.create_account_visible
            && !self.view.guest_signin_visible
            && !self.view.create_managed_user_visible;
        self.view.allow_cancel = self.cancel_allowed;
    }

    fn is_auth_frame_message(&self, envelope: &FrameEnvelope) -> bool {
        let origin_matches = self
            .frame_url
            .as_deref()
            .is_some_and(|url| url.starts_with(&envelope.origin));
        origin_matches && envelope.source == self.frame
    }

    /// Number of navigations issued so far (for redundant-load checks).
    pub fn navigations(&self) -> u64 {
        self.navigations
    }
}
