//! Output schema selection.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The target conversational layout for transformed records.
///
/// The selector set is closed and validated at argument-parse time; an
/// unrecognized selector never reaches record processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SftSchema {
    /// Role/content message list.
    Messages,
    /// ShareGPT conversations with `human`/`gpt` turns.
    #[value(name = "sharegpt")]
    ShareGpt,
    /// Alpaca-style `input`/`output` pair.
    #[value(name = "alpaca-style")]
    Alpaca,
    /// Plain `query`/`response` pair.
    QueryResponse,
}

impl SftSchema {
    /// Returns the selector string, as used in CLI arguments and in the
    /// output file name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::ShareGpt => "sharegpt",
            Self::Alpaca => "alpaca-style",
            Self::QueryResponse => "query-response",
        }
    }
}

impl FromStr for SftSchema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "messages" => Ok(Self::Messages),
            "sharegpt" => Ok(Self::ShareGpt),
            "alpaca-style" | "alpaca" => Ok(Self::Alpaca),
            "query-response" => Ok(Self::QueryResponse),
            _ => Err(Error::InvalidInput(format!("unknown SFT schema: {s}"))),
        }
    }
}

impl fmt::Display for SftSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_from_str() {
        assert_eq!(SftSchema::from_str("messages").unwrap(), SftSchema::Messages);
        assert_eq!(SftSchema::from_str("ShareGPT").unwrap(), SftSchema::ShareGpt);
        assert_eq!(SftSchema::from_str("alpaca-style").unwrap(), SftSchema::Alpaca);
        assert_eq!(
            SftSchema::from_str("query-response").unwrap(),
            SftSchema::QueryResponse
        );
        assert!(SftSchema::from_str("unknown").is_err());
    }

    #[test]
    fn test_schema_display_matches_selector() {
        assert_eq!(SftSchema::Messages.to_string(), "messages");
        assert_eq!(SftSchema::ShareGpt.to_string(), "sharegpt");
        assert_eq!(SftSchema::Alpaca.to_string(), "alpaca-style");
        assert_eq!(SftSchema::QueryResponse.to_string(), "query-response");
    }
}
