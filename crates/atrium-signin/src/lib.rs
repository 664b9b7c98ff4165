//! Sign-in frame screen controller.
//!
//! Owns an embedded frame pointed at an external identity provider,
//! supervises its load lifecycle (stall timers, error codes, reload), and
//! relays origin-validated frame messages to the host through the one-way
//! login bridge.

pub mod controller;
pub mod message;
pub mod params;
pub(crate) mod test_utils;

pub use controller::{
    ErrorBubble, LoadState, ResetOutcome, SignInFrameController, SignInView,
};
pub use message::{FrameEnvelope, FrameHandle, FrameMessage};
pub use params::AuthFrameParams;
