//! Decoded platform data types.
//!
//! Responsibilities:
//! - Define route records and the ordered route collection.
//! - Name the loosely-typed shapes for relationships, variables, and the application.
//!
//! Does NOT handle:
//! - Decoding the base64 variables (see `loader::decode`).
//! - Gating access by deployment state (see `PlatformConfig`).
//!
//! Invariants:
//! - Credential records, variables, and the application definition stay as raw JSON;
//!   only presence is checked.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

mod route;

pub use route::{Route, Routes};

/// One credential record for a relationship: host, port, scheme, path, and so on.
pub type Credentials = Map<String, Value>;

/// Relationship name to its credential records, sorted by name.
///
/// The records of one relationship keep their declaration order.
pub type Relationships = BTreeMap<String, Vec<Credentials>>;

/// Project and environment variables, by name.
pub type Variables = Map<String, Value>;

/// The application definition from `.platform.app.yaml`.
pub type Application = Map<String, Value>;
