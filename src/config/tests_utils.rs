//! Shared test utilities for config module tests.

use std::sync::Mutex;

/// Mutex to serialize environment variable tests and prevent race conditions.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Set an environment variable from a test holding `ENV_MUTEX`.
pub fn set_env_var(name: &str, value: &str) {
    // SAFETY: serialized by ENV_MUTEX, no concurrent env mutation
    unsafe { std::env::set_var(name, value) };
}

/// Clean up environment variables from a test holding `ENV_MUTEX`.
pub fn cleanup_env_vars(vars: &[&str]) {
    for var in vars {
        // SAFETY: serialized by ENV_MUTEX, no concurrent env mutation
        unsafe { std::env::remove_var(var) };
    }
}
