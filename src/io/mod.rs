//! Reading, sanitization, and serialization of record sequences.

pub mod formats;
pub mod reader;
pub mod sanitize;
