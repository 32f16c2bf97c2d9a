//! Request DTOs for the simulator API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::error::{Result, SimError};

/// Request body for POST /caches/:policy/access
#[derive(Debug, Clone, Deserialize)]
pub struct AccessRequest {
    /// The key to access; must be exactly one character
    pub key: String,
}

impl AccessRequest {
    /// Extracts the single-character key.
    pub fn parse_key(&self) -> Result<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(c),
            (None, _) => Err(SimError::InvalidRequest("Key cannot be empty".to_string())),
            _ => Err(SimError::InvalidRequest(format!(
                "Key must be a single character, got '{}'",
                self.key
            ))),
        }
    }
}
