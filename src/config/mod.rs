use serde::Deserialize;
use serde_json::Value;
use std::env;

use crate::core::{Error, Result};

/// Gateway configuration
///
/// Passed explicitly to the gateway constructor; defaults from here are merged
/// into a payment request at send time, never at set time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Default merchant identifier, used when a request sets none
    pub merchant_id: Option<String>,

    /// Sandbox selector. Boolean `true` targets the sandbox host, `false` or
    /// absent the production host. Configuration sources are loosely typed, so
    /// this stays a raw JSON value and is interpreted when a request is sent;
    /// anything other than a boolean or null is a configuration error.
    pub sandbox: Option<Value>,

    /// Default absolute callback URL, used when a request sets none
    pub callback_url: Option<String>,

    /// Default description template; a `:amount` token is replaced with the
    /// request amount
    pub description: Option<String>,
}

impl Config {
    /// Create a configuration with a merchant id and no other defaults
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: Some(merchant_id.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `TOMAN_MERCHANT_ID`, `TOMAN_SANDBOX`, `TOMAN_CALLBACK_URL` and
    /// `TOMAN_DESCRIPTION`. A `.env` file is honored if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            merchant_id: env::var("TOMAN_MERCHANT_ID").ok(),
            sandbox: env::var("TOMAN_SANDBOX").ok().map(parse_env_value),
            callback_url: env::var("TOMAN_CALLBACK_URL").ok(),
            description: env::var("TOMAN_DESCRIPTION").ok(),
        }
    }

    /// Set the sandbox flag
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(Value::Bool(sandbox));
        self
    }

    /// Set the default callback URL
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Set the default description template
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Interpret the sandbox flag
    ///
    /// Absent and null both mean production, matching a config key that was
    /// simply never set.
    pub fn is_sandbox(&self) -> Result<bool> {
        match &self.sandbox {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(false),
            Some(Value::Bool(true)) => Ok(true),
            Some(_) => Err(Error::InvalidConfiguration("sandbox")),
        }
    }
}

/// Parse a raw environment string the way a loosely-typed config file would:
/// valid JSON scalars keep their type (`true` becomes a boolean), anything
/// else stays a string.
fn parse_env_value(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}
