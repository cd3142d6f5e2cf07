/// A scalar kind that can be parsed out of an environment variable.
///
/// `from_env` encodes "parse or fail"; the zero value substituted on
/// failure is the type's `Default`. Text never fails, so `String` is
/// the one implementation that always returns `Some`.
pub trait FromEnv: Default + Sized {
    fn from_env(raw: &str) -> Option<Self>;
}

impl FromEnv for String {
    fn from_env(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Optional sign plus base-10 digits. No surrounding whitespace.
impl FromEnv for i64 {
    fn from_env(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Decimal or exponential notation, plus the standard `inf`/`NaN`
/// spellings.
impl FromEnv for f64 {
    fn from_env(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Accepts the usual true/false spellings and their short and numeric
/// aliases, ASCII-case-insensitively: `1`, `t`, `true` and `0`, `f`,
/// `false`. Anything else is a parse failure.
impl FromEnv for bool {
    fn from_env(raw: &str) -> Option<Self> {
        if raw == "1" || raw.eq_ignore_ascii_case("t") || raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw == "0" || raw.eq_ignore_ascii_case("f") || raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
