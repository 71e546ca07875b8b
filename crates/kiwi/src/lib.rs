//! Kiwi Domain Library
//!
//! Core domain types and interfaces for the Kiwi chat-pet backend.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `value_objects/`: Closed enumerations (Personality, Emotion)
//!   - `entities/`: Per-request values (ComposedPrompt, PetReply)
//!   - `services/`: The response-shaping pipeline (compose, extract, classify)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (GenerationOracle)
//!
//! # Usage
//!
//! ```rust,ignore
//! use kiwi::{classify, compose, extract, Personality};
//!
//! let personality = Personality::resolve("Kiwi Diva");
//! let composed = compose(personality.instruction(), "hello");
//! let generated = oracle.generate(composed.as_str(), 100).await?;
//! let reply = extract(&generated, &composed, "hello");
//! let emotion = classify(&reply);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    classify, compose, extract, resolve_instruction, ComposedPrompt, DomainError, Emotion,
    PetReply, Personality, ASSISTANT_ANCHOR, KEYWORD_TABLE, USER_TAG,
};
pub use ports::{GenerationOracle, DEFAULT_MAX_NEW_TOKENS};
