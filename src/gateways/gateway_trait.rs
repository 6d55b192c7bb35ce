use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Payment gateway trait for initiating payments
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Send a payment-initiation request and return the redirect information
    async fn create_payment(&self, request: PaymentRequest) -> Result<PaymentResponse>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Payment-initiation request data
///
/// Field names follow the provider's wire format. `MerchantID`, `CallbackURL`
/// and `Description` are always serialized, even as `null`, because the
/// provider treats a missing key and a null key the same way and rejects the
/// request itself; `Amount`, `Mobile` and `Email` are omitted when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Merchant identifier; falls back to the configured default at send time
    #[serde(rename = "MerchantID")]
    pub merchant_id: Option<String>,

    /// Payment amount in the provider's smallest currency unit
    #[serde(rename = "Amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    /// Absolute URL the customer is returned to after payment; falls back to
    /// the configured default at send time
    #[serde(rename = "CallbackURL")]
    pub callback_url: Option<String>,

    /// Description shown to the customer; falls back to the configured
    /// template at send time
    #[serde(rename = "Description")]
    pub description: Option<String>,

    /// Payer mobile number (optional)
    #[serde(rename = "Mobile", skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// Payer email (optional)
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Successful payment-initiation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Provider's transaction identifier
    pub authority: String,

    /// URL to redirect the customer to for completing the payment
    pub payment_url: String,
}
