//! Request parameters and response records.
//!
//! Response records deserialize from (and serialize back to) mappings keyed
//! by the vendor's element names, so `serde_json::to_value(&detail)` yields
//! `OrderInfo`, `CertificateInfo`, `QuickOrderDetail`, `ModificationEvents`
//! and so on. Vendor elements without a dedicated field are kept in `extra`
//! under their original names.

use crate::order::ProductCode;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Generate a fresh partner order id (32 hex characters).
pub fn new_partner_order_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

// ============================================================================
// Request parameters
// ============================================================================

/// Postal address of the ordering organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationAddress {
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    pub organization_name: String,
    pub address: OrganizationAddress,
}

/// Admin, tech or billing contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub title: String,
    pub organization_name: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

/// Everything needed to place (or validate) an order.
///
/// Field values are passed to the vendor as given; the vendor alone decides
/// what is valid (an unknown `web_server_type` comes back as a fault).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderParameters {
    pub partner_order_id: String,
    pub product_code: ProductCode,
    pub organization: OrganizationInfo,
    /// Validity in months.
    pub validity_period: u32,
    pub server_count: u32,
    /// Vendor web-server-type code, e.g. `"20"`.
    pub web_server_type: String,
    pub domain_name: Option<String>,
    pub renewal_indicator: Option<bool>,
    pub admin_contact: Contact,
    pub tech_contact: Option<Contact>,
    pub billing_contact: Option<Contact>,
    pub tech_same_as_admin: bool,
    pub bill_same_as_tech: bool,
    pub approver_email: String,
    /// PEM-encoded certificate signing request.
    pub csr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReissueRequest {
    pub partner_order_id: String,
    pub product_code: ProductCode,
    pub reissue_email: String,
    pub csr: String,
}

/// Optional sections to include in an order lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQueryOptions {
    pub return_product_detail: bool,
    pub return_contacts: bool,
    pub return_payment_info: bool,
    pub return_certificate_info: bool,
    pub return_fulfillment: bool,
    pub return_ca_certs: bool,
    pub return_pkcs7_cert: bool,
    pub return_order_attributes: bool,
    pub return_authentication_comments: bool,
    pub return_authentication_statuses: bool,
}

impl OrderQueryOptions {
    pub fn with_product_detail(mut self) -> Self {
        self.return_product_detail = true;
        self
    }

    pub fn with_certificate_info(mut self) -> Self {
        self.return_certificate_info = true;
        self
    }

    pub fn with_contacts(mut self) -> Self {
        self.return_contacts = true;
        self
    }

    pub fn with_fulfillment(mut self) -> Self {
        self.return_fulfillment = true;
        self
    }

    /// Vendor element names paired with their flag values, in schema order.
    pub(crate) fn flags(&self) -> [(&'static str, bool); 10] {
        [
            ("ReturnProductDetail", self.return_product_detail),
            ("ReturnContacts", self.return_contacts),
            ("ReturnPaymentInfo", self.return_payment_info),
            ("ReturnFulfillment", self.return_fulfillment),
            ("ReturnCACerts", self.return_ca_certs),
            ("ReturnPKCS7Cert", self.return_pkcs7_cert),
            ("ReturnCertificateInfo", self.return_certificate_info),
            ("ReturnOrderAttributes", self.return_order_attributes),
            ("ReturnAuthenticationComments", self.return_authentication_comments),
            ("ReturnAuthenticationStatuses", self.return_authentication_statuses),
        ]
    }
}

// ============================================================================
// Response records
// ============================================================================

/// Result of `QuickOrder` and `Reissue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(rename = "GeoTrustOrderID")]
    pub geotrust_order_id: String,
    #[serde(rename = "PartnerOrderID")]
    pub partner_order_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderInfo {
    #[serde(rename = "PartnerOrderID", default)]
    pub partner_order_id: String,
    #[serde(rename = "GeoTrustOrderID", default)]
    pub geotrust_order_id: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub order_status_major: Option<String>,
    #[serde(default)]
    pub product_code: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderInfo {
    /// Whether the vendor reports the order as complete.
    pub fn is_complete(&self) -> bool {
        self.order_status_major
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("complete"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateInfo {
    #[serde(default)]
    pub certificate_status: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuickOrderDetail {
    #[serde(default)]
    pub approver_email_address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A vendor-recorded change to an order's lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModificationEvent {
    #[serde(rename = "ModificationEventID", default)]
    pub modification_event_id: Option<String>,
    #[serde(default)]
    pub modification_event_name: Option<String>,
    #[serde(default)]
    pub modification_timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Full order detail as returned by order lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetail {
    pub order_info: OrderInfo,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_info: Option<CertificateInfo>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub quick_order_detail: Option<QuickOrderDetail>,
    #[serde(
        default,
        deserialize_with = "empty_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub modification_events: Vec<ModificationEvent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a domain's approver list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    #[serde(rename = "ApproverType")]
    pub approver_type: String,
    #[serde(rename = "ApproverEmail")]
    pub approver_email: String,
}

/// Result of `ValidateOrderParameters`.
///
/// The vendor leaves out fields that do not apply to an order (a first
/// order has no `RenewalInfo`); those come back as `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderValidation {
    #[serde(rename = "ValidityPeriod")]
    pub validity_period: Value,
    #[serde(rename = "Price")]
    pub price: Value,
    #[serde(rename = "ParsedCSR")]
    pub parsed_csr: Value,
    #[serde(rename = "RenewalInfo")]
    pub renewal_info: Value,
    #[serde(rename = "CertificateSignatureHashAlgorithm")]
    pub certificate_signature_hash_algorithm: Value,
}

// Empty vendor elements (`<CertificateInfo/>`) arrive as empty strings.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(empty_as_none(deserializer)?.unwrap_or_default())
}
