pub mod auto_scroll;
pub mod chat;
pub mod launcher;
