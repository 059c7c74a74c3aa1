//! Decoding of the base64-encoded JSON variables.
//!
//! Responsibilities:
//! - Turn a raw variable value into a typed structure (base64 → UTF-8 JSON → `T`).
//! - Apply the `DecodePolicy` when a present variable is malformed.
//!
//! Invariants:
//! - An absent or empty variable yields `T::default()` and is never an error.
//! - A malformed variable yields either `ConfigError::Decode` (strict) or
//!   `T::default()` plus a warning (lenient); never a partially filled value.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;

use crate::environment::Environment;
use crate::error::{ConfigError, DecodeError};
use crate::state::DecodePolicy;

/// Decode a standard base64 string holding a JSON document.
pub fn decode_base64_json<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let bytes = STANDARD.decode(raw.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read and decode the variable `key` from `env`.
pub(crate) fn decode_var<T>(
    env: &Environment,
    key: &str,
    policy: DecodePolicy,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = env.var_or_none(key) else {
        return Ok(T::default());
    };

    match decode_base64_json(raw) {
        Ok(value) => Ok(value),
        Err(source) => match policy {
            DecodePolicy::Strict => Err(ConfigError::Decode {
                var: key.to_string(),
                source,
            }),
            DecodePolicy::Lenient => {
                tracing::warn!(
                    var = key,
                    error = %source,
                    "Ignoring malformed platform variable"
                );
                Ok(T::default())
            }
        },
    }
}
