//! Router configuration.
//!
//! All fields have defaults, so a host application can embed a partial
//! `[router]` table in its own configuration file.

use serde::{Deserialize, Serialize};

/// The methods targeted by [`Router::any`](crate::Router::any) unless
/// configured otherwise.
pub const DEFAULT_METHODS: [&str; 8] = [
    "GET", "POST", "HEAD", "DELETE", "PUT", "OPTIONS", "TRACE", "PATCH",
];

/// Configuration passed to [`Router::with_config`](crate::Router::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Methods registered by `any`.
    pub methods: Vec<String>,

    /// Accept any RFC 9110 token as a method, not only `[A-Z]+`.
    pub allow_custom_methods: bool,

    /// Log every registration at debug level instead of trace.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            methods: DEFAULT_METHODS.iter().map(|m| m.to_string()).collect(),
            allow_custom_methods: false,
            debug: false,
        }
    }
}

impl Config {
    /// Checks a method token against this configuration.
    pub fn accepts_method(&self, method: &str) -> bool {
        if method.is_empty() {
            return false;
        }

        if self.allow_custom_methods {
            method.bytes().all(is_token_byte)
        } else {
            method.bytes().all(|c| c.is_ascii_uppercase())
        }
    }
}

// tchar from RFC 9110, section 5.6.2
fn is_token_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&c)
}
