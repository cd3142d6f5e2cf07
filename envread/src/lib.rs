//! Typed, default-on-failure access to process environment variables.
//!
//! Every operation reads the environment fresh, converts the raw text to
//! the requested shape (scalar, `Vec`, or `HashMap`), and absorbs all
//! failure locally: an unset, empty, or unparseable variable yields the
//! type's zero value, and unparseable elements of sequences and mappings
//! are dropped rather than surfaced. Callers that need to distinguish
//! "absent" from "invalid" use [`EnvReader::try_get`] instead.
//!
//! Reads perform no synchronization of their own; concurrent use is safe
//! as long as nothing mutates the process environment underneath them.

pub mod parse;
pub mod read;
pub mod source;

pub use parse::*;
pub use read::*;
pub use source::*;
