/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
///
/// Every failure of a payment-initiation call converges on `Gateway`: provider
/// rejections, transport failures and unparseable bodies all carry a provider
/// status code (0 when the provider never reported one) and a resolved,
/// human-readable message.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Provider rejected the request or the request never completed
    #[error("Gateway error {status}: {message}")]
    Gateway {
        /// Provider status code, 0 when absent from the response
        status: i64,
        /// Localized message resolved from the provider status table,
        /// or the provider's own `errors` payload when present
        message: String,
        /// Transport-level cause, when the HTTP call itself failed
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Configuration value cannot be interpreted
    #[error("Configuration error: invalid value for `{0}`")]
    InvalidConfiguration(&'static str),
}

impl Error {
    /// Provider status code carried by a gateway error
    pub fn status(&self) -> Option<i64> {
        match self {
            Error::Gateway { status, .. } => Some(*status),
            Error::InvalidConfiguration(_) => None,
        }
    }
}
