//! Process-environment mutation helpers for tests.
//!
//! `set_var` and `unset_var` return RAII guards that restore the prior
//! state on drop. The environment is process-global, so tests that use
//! them must hold [`env_lock`] for their whole body; edition 2024 makes
//! `std::env::set_var` unsafe for the same reason.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Serializes tests that mutate the process environment.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores (or removes) the original value when dropped.
pub struct EnvGuard {
    key: String,
    prev: Option<String>,
}

impl EnvGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match self.prev.take() {
                Some(v) => std::env::set_var(&self.key, v),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

/// Sets a variable, returning a guard that restores the previous state
/// on drop.
pub fn set_var(key: &str, val: &str) -> EnvGuard {
    let prev = std::env::var(key).ok();
    unsafe {
        std::env::set_var(key, val);
    }
    EnvGuard {
        key: key.to_string(),
        prev,
    }
}

/// Removes a variable, returning a guard that restores the previous
/// state on drop.
pub fn unset_var(key: &str) -> EnvGuard {
    let prev = std::env::var(key).ok();
    unsafe {
        std::env::remove_var(key);
    }
    EnvGuard {
        key: key.to_string(),
        prev,
    }
}

/// Applies multiple variables, returning guards in the same order.
pub fn set_vars<'a, I>(kvs: I) -> Vec<EnvGuard>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    kvs.into_iter().map(|(k, v)| set_var(k, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_previous_value() {
        let _lock = env_lock();
        let key = "ENVREAD_TEST_UTILS_RESTORE";
        let _outer = set_var(key, "outer");
        {
            let _inner = set_var(key, "inner");
            assert_eq!(std::env::var(key).as_deref(), Ok("inner"));
        }
        assert_eq!(std::env::var(key).as_deref(), Ok("outer"));
    }

    #[test]
    fn guard_removes_value_that_was_unset() {
        let _lock = env_lock();
        let key = "ENVREAD_TEST_UTILS_FRESH";
        let _clear = unset_var(key);
        {
            let _g = set_var(key, "temp");
            assert_eq!(std::env::var(key).as_deref(), Ok("temp"));
        }
        assert!(std::env::var(key).is_err());
    }

    #[test]
    fn unset_guard_restores_on_drop() {
        let _lock = env_lock();
        let key = "ENVREAD_TEST_UTILS_UNSET";
        let _outer = set_var(key, "kept");
        {
            let _g = unset_var(key);
            assert!(std::env::var(key).is_err());
        }
        assert_eq!(std::env::var(key).as_deref(), Ok("kept"));
    }
}
