pub mod gateway_trait;
pub mod status;
pub mod zarinpal;

pub use gateway_trait::{PaymentGateway, PaymentRequest, PaymentResponse};
pub use zarinpal::{PaymentRequestBuilder, ZarinpalGateway};
