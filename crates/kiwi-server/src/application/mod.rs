//! Application Layer (Use Cases)
//!
//! Orchestrates the domain pipeline around the generation oracle.

mod chat_service;

pub use chat_service::ChatService;
