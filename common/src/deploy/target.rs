//! # Deployment Target
//!
//! A target host is kept as the exact string the caller supplied. It may be a
//! loopback alias, this machine's name, one of its addresses, or a remote
//! hostname. Locality is decided later by string equality, never by resolution.

use std::fmt;
use std::str::FromStr;

use crate::config::LOOPBACK_ALIAS;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetHost(String);

impl TargetHost {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetHost {
    fn default() -> Self {
        Self(LOOPBACK_ALIAS.to_string())
    }
}

impl FromStr for TargetHost {
    type Err = String;

    /// Accepts any non-blank string. Surrounding whitespace is dropped, nothing else is altered.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("target host must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for TargetHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
