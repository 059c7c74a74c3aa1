//! Snapshot of the raw environment a `PlatformConfig` reads from.
//!
//! Responsibilities:
//! - Capture the process environment once, or accept an injected mapping.
//! - Provide lookups that treat empty values as unset.
//!
//! Does NOT handle:
//! - Prefixing logical names (see `PlatformConfig`).
//! - Decoding structural variables (see `loader::decode`).
//!
//! Invariants:
//! - Keys are case-sensitive and stored exactly as supplied.
//! - The snapshot never writes back to the process environment.

use std::collections::HashMap;
use std::fmt;

/// An owned, immutable-by-convention mapping of environment variable names to values.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Look up a variable exactly as stored, including empty values.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, returning `None` if it is unset or empty.
    pub fn var_or_none(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.var_or_none(key).is_some()
    }

    /// Insert a variable unless one with the same name already exists.
    ///
    /// Returns true if the value was inserted.
    pub(crate) fn insert_if_absent(&mut self, key: String, value: String) -> bool {
        match self.vars.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// Values routinely hold credentials, so only names are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Environment").field("keys", &keys).finish()
    }
}

impl From<HashMap<String, String>> for Environment {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.vars
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_empty_value_treated_as_unset() {
        let env: Environment = [("PLATFORM_MODE", ""), ("PLATFORM_BRANCH", "main")]
            .into_iter()
            .collect();

        assert_eq!(env.get("PLATFORM_MODE"), Some(""));
        assert_eq!(env.var_or_none("PLATFORM_MODE"), None);
        assert!(!env.contains("PLATFORM_MODE"));
        assert_eq!(env.var_or_none("PLATFORM_BRANCH"), Some("main"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let env: Environment = [("PLATFORM_BRANCH", "main")].into_iter().collect();
        assert!(env.get("platform_branch").is_none());
    }

    #[test]
    fn test_insert_if_absent_keeps_existing() {
        let mut env: Environment = [("A", "1")].into_iter().collect();
        assert!(!env.insert_if_absent("A".to_string(), "2".to_string()));
        assert!(env.insert_if_absent("B".to_string(), "3".to_string()));
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("B"), Some("3"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_debug_hides_values() {
        let env: Environment = [("PLATFORM_PROJECT_ENTROPY", "s3cret")]
            .into_iter()
            .collect();
        let printed = format!("{:?}", env);
        assert!(printed.contains("PLATFORM_PROJECT_ENTROPY"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    #[serial]
    fn test_from_process_captures_variables() {
        temp_env::with_var("PLATFORMSH_CONFIG_TEST_VAR", Some("captured"), || {
            let env = Environment::from_process();
            assert_eq!(env.get("PLATFORMSH_CONFIG_TEST_VAR"), Some("captured"));
        });
    }
}
