//! Atrium demo shell entry point.
//!
//! Runs a scripted walkthrough of both screen controllers against a
//! logging host bridge: sign-in frame load through credential completion,
//! then a language options session with engine toggles and a dictionary
//! download cycle. Pass a catalog TOML path as the first argument (or set
//! `ATRIUM_CATALOG`) to use a custom input-method catalog.

mod bridge;

use anyhow::Result;
use serde_json::json;

use atrium_core::prefs;
use atrium_langopts::controller::{LanguageOptionsConfig, LanguageOptionsController};
use atrium_langopts::{builtin_catalog, load_catalog};
use atrium_signin::{AuthFrameParams, FrameEnvelope, FrameHandle, SignInFrameController};

use bridge::LoggingBridge;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut host = LoggingBridge;

    run_signin_flow(&mut host);
    run_language_flow(&mut host)?;

    Ok(())
}

/// Sign-in frame: load, ready, complete.
fn run_signin_flow(host: &mut LoggingBridge) {
    log::info!("--- sign-in frame walkthrough ---");

    let frame = FrameHandle(1);
    let mut signin = SignInFrameController::new(frame);
    signin.on_before_show(host);

    let params = AuthFrameParams {
        start_url: "https://accounts.example.com/signin".into(),
        locale: Some("en".into()),
        email: Some("user@example.com".into()),
        is_show_users: true,
        user_pod_count: 1,
        ..Default::default()
    };
    signin.load(0, &params, host);
    log::info!("frame url: {}", signin.frame_url().unwrap_or("<none>"));

    // The frame reports its UI ready well before the 7s stall threshold.
    signin.poll(1_000, host);
    signin.on_message(
        &FrameEnvelope {
            origin: "https://accounts.example.com".into(),
            source: frame,
            payload: json!({"method": "loginUILoaded"}),
        },
        host,
    );
    if let Some(screen) = signin.take_prefetch_request() {
        log::info!("prefetching screen: {screen}");
    }

    signin.on_message(
        &FrameEnvelope {
            origin: "https://accounts.example.com".into(),
            source: frame,
            payload: json!({
                "method": "completeLogin",
                "email": "user@example.com",
                "password": "hunter2",
            }),
        },
        host,
    );
    signin.on_before_hide(host);
}

/// Language options: selection, engine toggles, dictionary download.
fn run_language_flow(host: &mut LoggingBridge) -> Result<()> {
    log::info!("--- language options walkthrough ---");

    let catalog = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ATRIUM_CATALOG").ok())
    {
        Some(path) => {
            log::info!("Loading input-method catalog from {path}");
            load_catalog(path.as_ref())?
        },
        None => builtin_catalog(),
    };
    log::info!("Catalog holds {} input methods", catalog.len());

    let config = LanguageOptionsConfig {
        available_languages: vec![
            "en".into(),
            "fr".into(),
            "ja".into(),
            "ko".into(),
            "zh-CN".into(),
        ],
        active_languages: vec!["en".into(), "ja".into()],
        ui_language_codes: vec!["en".into(), "fr".into(), "ja".into()],
        spell_check_language_codes: vec!["en".into(), "fr".into()],
        current_ui_language: "en".into(),
        prospective_ui_language: "en".into(),
        is_guest_session: false,
    };
    let mut panel = LanguageOptionsController::new(catalog, config);
    panel.on_visibility_changed(true, host);

    // Initial preference push from the host.
    panel.on_pref_changed(prefs::PRELOAD_ENGINES, "xkb:us::eng");
    panel.on_pref_changed(prefs::SPELL_CHECK_DICTIONARY, "en");

    panel.on_language_selected("ja");
    log::info!("visible input methods: {:?}", panel.view().visible_input_methods);

    panel.on_input_method_toggled(0, "mozc", true, host);
    log::info!("enabled engines: {:?}", panel.preload_engines());

    // Switch spell checking to French; the dictionary download fails once,
    // then succeeds on retry.
    panel.on_language_selected("fr");
    panel.on_spell_check_button_clicked(host);
    panel.on_pref_changed(prefs::SPELL_CHECK_DICTIONARY, "fr");
    panel.on_dictionary_download_begin("fr");
    panel.on_dictionary_download_failure("fr");
    log::info!("spell-check display: {:?}", panel.view().spell_check);
    panel.on_retry_download_clicked(host);
    panel.on_dictionary_download_begin("fr");
    panel.on_dictionary_download_success("fr");
    log::info!("spell-check display: {:?}", panel.view().spell_check);

    Ok(())
}
