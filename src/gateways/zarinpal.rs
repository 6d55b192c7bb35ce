use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::gateway_trait::{PaymentGateway, PaymentRequest, PaymentResponse};
use super::status::status_message;
use crate::config::Config;
use crate::core::{Error, Result};

const PRODUCTION_HOST: &str = "https://www.zarinpal.com";
const SANDBOX_HOST: &str = "https://sandbox.zarinpal.com";

/// Status value the provider reports on a successful payment initiation
const SUCCESS_STATUS: i64 = 100;

/// Zarinpal payment gateway client
///
/// Wraps the provider's legacy REST WebGate API. One `create_payment` call is
/// one outbound HTTP request; there is no internal retry. Instances hold only
/// a `reqwest::Client` and read-only configuration, so they can be shared
/// across tasks freely.
pub struct ZarinpalGateway {
    client: Client,
    config: Config,
    base_url: Option<String>,
}

impl ZarinpalGateway {
    /// Create a new gateway client with a default HTTP client
    pub fn new(config: Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a new gateway client with a caller-configured HTTP client
    ///
    /// Timeouts, proxies and TLS settings belong on the injected client; the
    /// gateway adds no transport policy of its own.
    pub fn with_client(client: Client, config: Config) -> Self {
        Self {
            client,
            config,
            base_url: None,
        }
    }

    /// Override the provider host, bypassing sandbox resolution
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Start building a payment-initiation request
    pub fn payment(&self) -> PaymentRequestBuilder<'_> {
        PaymentRequestBuilder {
            gateway: self,
            request: PaymentRequest::default(),
        }
    }

    /// URL the customer is redirected to for a given authority
    pub fn payment_url_for(&self, authority: &str) -> Result<String> {
        Ok(format!("{}/pg/StartPay/{}", self.host()?, authority))
    }

    fn host(&self) -> Result<String> {
        if let Some(base_url) = &self.base_url {
            return Ok(base_url.clone());
        }

        let host = if self.config.is_sandbox()? {
            SANDBOX_HOST
        } else {
            PRODUCTION_HOST
        };

        Ok(host.to_string())
    }

    /// Merge explicitly-set fields with configuration defaults
    fn resolve_request(&self, request: PaymentRequest) -> PaymentRequest {
        let PaymentRequest {
            merchant_id,
            amount,
            callback_url,
            description,
            mobile,
            email,
        } = request;

        let description = description
            .or_else(|| self.config.description.clone())
            .map(|template| {
                let amount = amount.map(|a| a.to_string()).unwrap_or_default();
                template.replace(":amount", &amount)
            });

        PaymentRequest {
            merchant_id: merchant_id.or_else(|| self.config.merchant_id.clone()),
            amount,
            callback_url: callback_url.or_else(|| self.config.callback_url.clone()),
            description,
            mobile,
            email,
        }
    }

    /// Classify a provider response body that did not satisfy the success
    /// condition
    fn gateway_error(data: &Value) -> Error {
        let status = data.get("Status").and_then(Value::as_i64).unwrap_or(0);

        // A provider-supplied errors payload wins over the status table
        let message = data
            .get("errors")
            .and_then(first_string)
            .unwrap_or_else(|| status_message(status).to_string());

        Error::Gateway {
            status,
            message,
            source: None,
        }
    }

    fn transport_error(source: reqwest::Error) -> Error {
        Error::Gateway {
            status: 0,
            message: status_message(0).to_string(),
            source: Some(source),
        }
    }
}

#[async_trait]
impl PaymentGateway for ZarinpalGateway {
    async fn create_payment(&self, request: PaymentRequest) -> Result<PaymentResponse> {
        let host = self.host()?;
        let url = format!("{}/pg/rest/WebGate/PaymentRequest.json", host);
        let payload = self.resolve_request(request);

        debug!(
            gateway = self.name(),
            url = %url,
            amount = ?payload.amount,
            "Sending payment-initiation request"
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(Self::transport_error)?;

        // The provider reports failures both as HTTP errors with a JSON body
        // and as HTTP 200 with a non-success status in-band; reading the body
        // unconditionally covers both.
        let body = response.text().await.map_err(Self::transport_error)?;
        let data: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

        let status = data.get("Status").and_then(Value::as_i64).unwrap_or(0);
        let authority = data
            .get("Authority")
            .and_then(Value::as_str)
            .unwrap_or_default();

        if status == SUCCESS_STATUS && !authority.is_empty() {
            return Ok(PaymentResponse {
                authority: authority.to_string(),
                payment_url: format!("{}/pg/StartPay/{}", host, authority),
            });
        }

        let error = Self::gateway_error(&data);
        warn!(
            gateway = self.name(),
            status,
            "Payment initiation rejected: {}",
            error
        );
        Err(error)
    }

    fn name(&self) -> &str {
        "zarinpal"
    }
}

/// Fluent builder for a payment-initiation request
///
/// Setters store values without validation; defaults are merged and the
/// payload validated by the provider when `send` is called. Each builder owns
/// its payload, so concurrent requests never share state.
pub struct PaymentRequestBuilder<'a> {
    gateway: &'a ZarinpalGateway,
    request: PaymentRequest,
}

impl<'a> PaymentRequestBuilder<'a> {
    /// Set the merchant identifier, overriding the configured default
    pub fn merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.request.merchant_id = Some(merchant_id.into());
        self
    }

    /// Set the payment amount
    pub fn amount(mut self, amount: u64) -> Self {
        self.request.amount = Some(amount);
        self
    }

    /// Set the callback URL, overriding the configured default
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.request.callback_url = Some(url.into());
        self
    }

    /// Set the payer mobile number
    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.request.mobile = Some(mobile.into());
        self
    }

    /// Set the payer email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.request.email = Some(email.into());
        self
    }

    /// Set the description, overriding the configured template
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    /// Send the request to the provider
    pub async fn send(self) -> Result<PaymentResponse> {
        self.gateway.create_payment(self.request).await
    }
}

/// Depth-first search for the first string in a provider `errors` payload,
/// which nests messages in arrays or objects depending on the failure
fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => items.iter().find_map(first_string),
        Value::Object(map) => map.values().find_map(first_string),
        _ => None,
    }
}
