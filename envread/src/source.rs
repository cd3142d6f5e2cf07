use std::collections::HashMap;

/// Read-only lookup of text values by name.
///
/// The process environment is the canonical implementation; tests
/// substitute an in-memory mapping so they never mutate global state.
pub trait EnvSource {
    /// Returns the raw text for `name`, or `None` if it is not set.
    /// An empty string is a present value here; callers collapse it
    /// into "no value" themselves.
    fn get(&self, name: &str) -> Option<String>;
}

/// [`EnvSource`] over the real process environment.
///
/// Non-unicode values are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}
