//! Frame message protocol.
//!
//! The embedded sign-in page talks to the shell with JSON payloads carrying
//! a `method` discriminator. Payloads arrive wrapped in an envelope stamped
//! with the sender's origin and frame identity; the controller validates
//! both before dispatching.

use serde::Deserialize;

/// Identity of an embedded frame element.
///
/// Stable across navigations of the same frame; a message is only trusted
/// when its source handle matches the frame the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// A raw inbound message as delivered by the embedding layer.
#[derive(Debug, Clone)]
pub struct FrameEnvelope {
    /// Origin the sender claims, e.g. `https://idp.example`.
    pub origin: String,
    /// Which frame element produced the message.
    pub source: FrameHandle,
    /// The JSON payload.
    pub payload: serde_json::Value,
}

/// Recognized frame message kinds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "method")]
pub enum FrameMessage {
    /// Basic credentials captured by the sign-in page.
    #[serde(rename = "completeLogin")]
    CompleteLogin { email: String, password: String },

    /// Credentials plus an auth code (federated flow).
    #[serde(rename = "completeAuthentication")]
    CompleteAuthentication {
        email: String,
        password: String,
        #[serde(rename = "authCode")]
        auth_code: String,
    },

    /// The page finished rendering its UI.
    #[serde(rename = "loginUILoaded")]
    LoginUiLoaded,

    /// Local-mode credentials captured by the offline page.
    #[serde(rename = "offlineLogin")]
    OfflineLogin { email: String, password: String },
}
