//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod emotion;
mod personality;

pub use emotion::*;
pub use personality::*;
