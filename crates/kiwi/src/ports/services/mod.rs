//! Service Ports
//!
//! Abstract interfaces for external services.

mod generation_oracle;

pub use generation_oracle::*;
