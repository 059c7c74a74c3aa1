//! Configuration loader for the platform environment.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for assembling the environment snapshot.
//! - Decode the base64-encoded JSON variables.
//!
//! Does NOT handle:
//! - Answering queries about the decoded data (see `PlatformConfig`).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Decoding happens exactly once, in `ConfigLoader::build()`.

mod builder;
pub(crate) mod decode;

pub use builder::ConfigLoader;
pub use decode::decode_base64_json;

#[cfg(test)]
mod tests;
