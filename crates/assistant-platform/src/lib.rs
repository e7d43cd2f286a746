//! Browser adapters for the assistant.
//!
//! Everything here touches `window`/`document` or the network and is only
//! meaningful on `wasm32-unknown-unknown`. The pure logic these adapters
//! feed lives in `assistant-core`.

pub mod auto_scroll;
pub mod clock;
pub mod config;
pub mod http;
pub mod selection;
pub mod viewport;

pub use auto_scroll::AutoScrollDriver;
pub use clock::BrowserClock;
pub use config::{load_page_config, PageConfig};
pub use http::HttpChatBackend;
pub use selection::SelectionListener;
pub use viewport::BrowserViewport;
