pub mod message;
pub mod event;
pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::AssistantError;
pub type Result<T> = std::result::Result<T, AssistantError>;
