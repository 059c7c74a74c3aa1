//! CLI command implementations.
//!
//! Each command reads from a built `PlatformConfig` and returns the JSON
//! document to print. Printing is left to `dispatch`.

pub mod credentials;
pub mod property;
pub mod routes;
pub mod status;
pub mod variables;
