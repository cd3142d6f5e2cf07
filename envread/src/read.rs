use std::collections::HashMap;

use crate::parse::FromEnv;
use crate::source::{EnvSource, ProcessEnv};

/// Error surfaced by the fallible variants only; the `read_*`
/// operations swallow both cases into zero values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("environment variable '{name}' is not set")]
    NotPresent { name: String },

    #[error("environment variable '{name}' has unparseable value '{value}'")]
    Invalid { name: String, value: String },
}

/// Reads typed values out of an [`EnvSource`].
///
/// Stateless apart from the source it wraps; every call re-reads the
/// source, nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct EnvReader<S: EnvSource> {
    source: S,
}

impl EnvReader<ProcessEnv> {
    /// Reader over the real process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> EnvReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Raw text for `name`; absence and empty string both read as `None`.
    fn raw(&self, name: &str) -> Option<String> {
        self.source.get(name).filter(|v| !v.is_empty())
    }

    /// Reads a scalar, substituting the zero value when the variable is
    /// unset, empty, or unparseable.
    pub fn get<T: FromEnv>(&self, name: &str) -> T {
        let Some(raw) = self.raw(name) else {
            return T::default();
        };
        match T::from_env(&raw) {
            Some(v) => v,
            None => {
                tracing::debug!(name, value = %raw, "unparseable value, substituting zero value");
                T::default()
            }
        }
    }

    /// Reads a comma-separated sequence. Segments are not trimmed;
    /// segments that fail to parse are dropped, so the result can be
    /// shorter than the comma count suggests.
    pub fn get_slice<T: FromEnv>(&self, name: &str) -> Vec<T> {
        let Some(raw) = self.raw(name) else {
            return Vec::new();
        };
        raw.split(',')
            .filter_map(|segment| {
                let parsed = T::from_env(segment);
                if parsed.is_none() {
                    tracing::debug!(name, segment, "dropping unparseable segment");
                }
                parsed
            })
            .collect()
    }

    /// Reads a comma-separated `key=value` mapping. A pair must split on
    /// `=` into exactly two parts or it is dropped whole (`a=b=c` is
    /// dropped, `a=` keeps key `a` with an empty value). A pair whose
    /// value fails to parse is dropped too. Duplicate keys overwrite,
    /// last occurrence wins.
    pub fn get_map<T: FromEnv>(&self, name: &str) -> HashMap<String, T> {
        let Some(raw) = self.raw(name) else {
            return HashMap::new();
        };
        let mut out = HashMap::new();
        for pair in raw.split(',') {
            let mut parts = pair.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                tracing::debug!(name, pair, "dropping malformed pair");
                continue;
            };
            match T::from_env(value) {
                Some(v) => {
                    out.insert(key.to_string(), v);
                }
                None => tracing::debug!(name, pair, "dropping pair with unparseable value"),
            }
        }
        out
    }

    /// Fallible scalar read, for callers that need to tell an absent or
    /// empty variable apart from an unparseable one.
    pub fn try_get<T: FromEnv>(&self, name: &str) -> Result<T, EnvError> {
        let raw = self.raw(name).ok_or_else(|| EnvError::NotPresent {
            name: name.to_string(),
        })?;
        T::from_env(&raw).ok_or_else(|| EnvError::Invalid {
            name: name.to_string(),
            value: raw,
        })
    }
}

/// Reads a string variable; unset yields `""`.
pub fn read_string(name: &str) -> String {
    EnvReader::process().get(name)
}

/// Reads an integer variable; unset, empty, or unparseable yields `0`.
pub fn read_int(name: &str) -> i64 {
    EnvReader::process().get(name)
}

/// Reads a boolean variable; unset, empty, or unparseable yields `false`.
pub fn read_bool(name: &str) -> bool {
    EnvReader::process().get(name)
}

/// Reads a float variable; unset, empty, or unparseable yields `0.0`.
pub fn read_float(name: &str) -> f64 {
    EnvReader::process().get(name)
}

/// Reads a comma-separated string sequence, e.g. `FOO=a,b,c`.
pub fn read_string_slice(name: &str) -> Vec<String> {
    EnvReader::process().get_slice(name)
}

/// Reads a comma-separated integer sequence; unparseable segments are
/// dropped.
pub fn read_int_slice(name: &str) -> Vec<i64> {
    EnvReader::process().get_slice(name)
}

/// Reads a comma-separated boolean sequence; unparseable segments are
/// dropped.
pub fn read_bool_slice(name: &str) -> Vec<bool> {
    EnvReader::process().get_slice(name)
}

/// Reads a comma-separated float sequence; unparseable segments are
/// dropped.
pub fn read_float_slice(name: &str) -> Vec<f64> {
    EnvReader::process().get_slice(name)
}

/// Reads a `key=value,key=value` string mapping, e.g. `FOO=a=1,b=2`.
pub fn read_string_map(name: &str) -> HashMap<String, String> {
    EnvReader::process().get_map(name)
}

/// Reads a `key=value` integer mapping; malformed or unparseable pairs
/// are dropped.
pub fn read_int_map(name: &str) -> HashMap<String, i64> {
    EnvReader::process().get_map(name)
}

/// Reads a `key=value` boolean mapping; malformed or unparseable pairs
/// are dropped.
pub fn read_bool_map(name: &str) -> HashMap<String, bool> {
    EnvReader::process().get_map(name)
}

/// Reads a `key=value` float mapping; malformed or unparseable pairs
/// are dropped.
pub fn read_float_map(name: &str) -> HashMap<String, f64> {
    EnvReader::process().get_map(name)
}
