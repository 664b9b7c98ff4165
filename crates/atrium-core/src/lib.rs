//! Atrium screen framework.
//!
//! Shared plumbing for the shell's screen controllers: the one-way host
//! bridge traits, tick-polled one-shot timers, preference keys and
//! comma-separated codecs, and the transient notification widget.
//!
//! Everything here is single-threaded and event-driven. Controllers never
//! read a wall clock; the embedding loop passes `now_ms` into `poll`
//! methods, the same way the rest of the shell advances animations by
//! caller-supplied time.

pub mod host;
pub mod notification;
pub mod prefs;
pub mod timer;

pub use host::{LanguageHost, LoginHost, PrefsHost};
pub use notification::Notification;
pub use timer::OneShotTimer;
