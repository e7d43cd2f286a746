//! Backend client. Remote first, offline responder second.
//!
//! Every way the remote call can fail (no network, non-2xx, unparsable
//! body) is treated the same: the turn is re-asked of the fallback
//! backend. Only a failure of the fallback itself reaches the caller.

use std::rc::Rc;

use assistant_types::{
    Result,
    api::{BackendStatus, ChatReply, ChatRequest, ReplySource},
    event::ChatEvent,
};

use crate::event_bus::EventBus;
use crate::ports::ChatBackendPort;
use crate::surface::PendingTurn;

pub struct ChatClient {
    remote: Rc<dyn ChatBackendPort>,
    fallback: Rc<dyn ChatBackendPort>,
}

impl ChatClient {
    pub fn new(remote: Rc<dyn ChatBackendPort>, fallback: Rc<dyn ChatBackendPort>) -> Self {
        Self { remote, fallback }
    }

    /// Send one turn and normalize the answer.
    pub async fn send(&self, req: &ChatRequest) -> Result<ChatReply> {
        match self.remote.chat(req).await {
            Ok(resp) => {
                log::debug!(
                    "{} answered (session {})",
                    self.remote.backend_name(),
                    resp.session_id
                );
                Ok(ChatReply::from_response(resp, ReplySource::Backend))
            }
            Err(e) => {
                log::warn!(
                    "Backend {} unavailable ({}), answering from {}",
                    self.remote.backend_name(),
                    e,
                    self.fallback.backend_name()
                );
                let resp = self.fallback.chat(req).await?;
                Ok(ChatReply::from_response(resp, ReplySource::Mock))
            }
        }
    }

    /// Run a pending turn to completion and post the outcome on the bus.
    ///
    /// This is async and must be spawned via `wasm_bindgen_futures::spawn_local`.
    pub async fn dispatch(&self, turn: PendingTurn, bus: &EventBus) {
        let turn_id = turn.turn_id;
        match self.send(&turn.request).await {
            Ok(reply) => bus.emit(ChatEvent::ReplyReceived { turn_id, reply }),
            Err(e) => {
                log::error!("Chat turn {} failed: {}", turn_id, e);
                bus.emit(ChatEvent::SendFailed {
                    turn_id,
                    message: e.to_string(),
                });
            }
        }
    }

    /// Probe the remote backend's health endpoint.
    ///
    /// A reply with a failure status means the service is up but unwell
    /// (`Error`); no reply at all means `Disconnected`.
    pub async fn probe_health(&self) -> BackendStatus {
        match self.remote.health().await {
            Ok(()) => BackendStatus::Connected,
            Err(e) if e.is_unreachable() => {
                log::info!("Backend {} unreachable: {}", self.remote.backend_name(), e);
                BackendStatus::Disconnected
            }
            Err(e) => {
                log::warn!("Backend {} unhealthy: {}", self.remote.backend_name(), e);
                BackendStatus::Error
            }
        }
    }

    /// `probe_health`, posted on the bus
    pub async fn report_health(&self, bus: &EventBus) {
        let status = self.probe_health().await;
        bus.emit(ChatEvent::StatusChanged { status });
    }
}
