//! Infrastructure Adapters
//!
//! Concrete implementations of domain port traits.

mod http_oracle;

pub use http_oracle::HttpOracle;
