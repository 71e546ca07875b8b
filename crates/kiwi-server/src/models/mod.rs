//! Kiwi API Models
//!
//! - Chat: `/run` request/response bodies
//! - Personality: catalog listing

mod chat;
mod personality;

pub use chat::*;
pub use personality::*;
