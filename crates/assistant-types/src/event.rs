use serde::{Deserialize, Serialize};

use crate::api::{BackendStatus, ChatReply};

/// Events produced by async work (requests, probes, DOM listeners).
/// The UI drains these each frame and folds them into the chat surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// The client answered a submitted turn
    ReplyReceived { turn_id: u64, reply: ChatReply },

    /// The whole send pipeline failed, including the local fallback
    SendFailed { turn_id: u64, message: String },

    /// Result of a health probe
    StatusChanged { status: BackendStatus },

    /// The user finished a text selection somewhere on the page
    TextSelected { text: String },
}
