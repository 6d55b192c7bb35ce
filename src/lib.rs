//! Toman — Zarinpal Payment Gateway Client
//!
//! This library provides a client for Zarinpal's REST WebGate API: build a
//! payment-initiation request through a fluent builder, send it, and get back
//! either the redirect URL for the customer or a typed gateway error.

pub mod config;
pub mod core;
pub mod gateways;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::{Error, Result};
pub use crate::gateways::{PaymentGateway, PaymentRequest, PaymentResponse, ZarinpalGateway};
