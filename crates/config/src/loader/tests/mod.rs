//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder methods (environment injection, prefix, policies).
//! - Test `.env` merging into the environment snapshot.
//! - Test capture of the process environment.
//!
//! Invariants:
//! - Tests touching process-global state (env vars, cwd) use `serial_test`
//!   and `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
