pub mod auto_scroll;
pub mod client;
pub mod event_bus;
pub mod follow;
pub mod launcher;
pub mod mock_responder;
pub mod ports;
pub mod selection;
pub mod store;
pub mod surface;
