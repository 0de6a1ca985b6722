//! # symantec-ssl
//!
//! Client for the Symantec/GeoTrust partner API used to order and manage SSL
//! certificates.
//!
//! ## Key Features
//!
//! - **One method per vendor operation**: order, modify, reissue, approver
//!   changes, order lookup and listing (see [`OrderApi`])
//! - **Typed vocabularies**: [`ProductCode`] and [`ModifyOperation`] only
//!   admit codes the vendor accepts
//! - **Vendor key names preserved**: response records serialize back to the
//!   vendor's element names (`OrderInfo`, `CertificateInfo`, ...)
//! - **Single fault type**: every vendor-reported fault is
//!   [`SymantecError::ApiFault`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use symantec_ssl::{OrderApi, OrderQueryOptions, SymantecClient, SymantecConfig};
//!
//! # async fn example() -> Result<(), symantec_ssl::SymantecError> {
//! let config = SymantecConfig::sandbox("PARTNER", "user", "secret");
//! let client = SymantecClient::new(config)?;
//!
//! let detail = client
//!     .get_order_by_partner_order_id("my-order-1", OrderQueryOptions::default())
//!     .await?;
//! println!("{:?}", detail.order_info.order_status_major);
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod order;
pub(crate) mod response_parser;
pub mod retry;
pub mod soap;
pub(crate) mod transport;
pub mod workflow;
pub mod xml;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use api::OrderApi;
pub use client::SymantecClient;
pub use config::SymantecConfig;
pub use error::{SymantecError, SymantecResult};
pub use models::{
    new_partner_order_id, Approver, CertificateInfo, Contact, ModificationEvent, OrderDetail,
    OrderInfo, OrderParameters, OrderQueryOptions, OrderResponse, OrderValidation,
    OrganizationAddress, OrganizationInfo, QuickOrderDetail, ReissueRequest,
};
pub use order::{ModifyOperation, ProductCode, ResendEmailType, UnknownCode};
pub use retry::RetryPolicy;
pub use workflow::CompletionPoller;
