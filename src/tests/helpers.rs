//! Test helper utilities for unit tests
//!
//! Fixtures for configuration, order parameters and canned vendor envelopes.

#![allow(dead_code)]

use crate::config::SymantecConfig;
use crate::models::{Contact, OrderParameters, OrganizationAddress, OrganizationInfo};
use crate::order::ProductCode;
use crate::retry::RetryPolicy;
use std::time::Duration;

pub const TEST_PARTNER_CODE: &str = "TESTPARTNER";

pub const TEST_CSR: &str = "-----BEGIN CERTIFICATE REQUEST-----
MIICpjCCAY4CAQAwYTELMAkGA1UEBhMCVVMxCzAJBgNVBAgMAlRYMRQwEgYDVQQH
DAtTYW4gQW50b25pbzEOMAwGA1UECgwFTXlPcmcxHzAdBgNVBAMMFnRlc3Rpbmdz
eW1hbnRlY3NzbC5jb20wggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQDf
-----END CERTIFICATE REQUEST-----
";

/// Create a valid sandbox configuration for tests
pub fn create_test_config() -> SymantecConfig {
    SymantecConfig::sandbox(TEST_PARTNER_CODE, "tester", "s3cret")
}

/// Create fast retry policy to prevent slow tests
pub fn create_fast_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(50),
        backoff_multiplier: 2.0,
        total_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_millis(100),
    }
}

pub fn create_admin_contact() -> Contact {
    Contact {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone: "2103122400".to_string(),
        email: "someone@email.com".to_string(),
        title: "Caesar".to_string(),
        organization_name: None,
        address_line1: "123 Road".to_string(),
        address_line2: None,
        city: "San Antonio".to_string(),
        region: "TX".to_string(),
        postal_code: "78218".to_string(),
        country: "US".to_string(),
    }
}

/// Order parameters matching the sandbox fixture order
pub fn create_order_parameters(partner_order_id: &str) -> OrderParameters {
    OrderParameters {
        partner_order_id: partner_order_id.to_string(),
        product_code: ProductCode::QuickSSLPremium,
        organization: OrganizationInfo {
            organization_name: "MyOrg".to_string(),
            address: OrganizationAddress {
                address_line1: "5000 Walzem".to_string(),
                address_line2: None,
                city: "San Antonio".to_string(),
                region: "TX".to_string(),
                postal_code: "78218".to_string(),
                country: "US".to_string(),
                phone: "2103124000".to_string(),
            },
        },
        validity_period: 12,
        server_count: 1,
        web_server_type: "20".to_string(),
        domain_name: None,
        renewal_indicator: None,
        admin_contact: create_admin_contact(),
        tech_contact: None,
        billing_contact: None,
        tech_same_as_admin: true,
        bill_same_as_tech: true,
        approver_email: "admin@testingsymantecssl.com".to_string(),
        csr: TEST_CSR.to_string(),
    }
}

/// Wrap a body payload in a SOAP 1.1 envelope
pub fn soap_envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><soap:Body>{body}</soap:Body></soap:Envelope>"#
    )
}

/// `<Op>Response><Op>Result>` wrapper in the operation's namespace
pub fn operation_response(operation: &str, namespace: &str, result: &str) -> String {
    soap_envelope(&format!(
        r#"<ns1:{operation}Response xmlns:ns1="{namespace}"><ns1:{operation}Result>{result}</ns1:{operation}Result></ns1:{operation}Response>"#
    ))
}

pub fn order_response_header(partner_order_id: &str) -> String {
    format!(
        "<OrderResponseHeader><Timestamp>2026-10-19T10:00:00.000Z</Timestamp><SuccessCode>0</SuccessCode><PartnerOrderID>{partner_order_id}</PartnerOrderID></OrderResponseHeader>"
    )
}

pub fn query_response_header(return_count: usize) -> String {
    format!(
        "<QueryResponseHeader><Timestamp>2026-10-19T10:00:00.000Z</Timestamp><SuccessCode>0</SuccessCode><ReturnCount>{return_count}</ReturnCount></QueryResponseHeader>"
    )
}

/// Header reporting a single vendor error
pub fn error_header(header: &str, field: &str, message: &str) -> String {
    format!(
        "<{header}><Timestamp>2026-10-19T10:00:00.000Z</Timestamp><SuccessCode>-1</SuccessCode><Errors><Error><ErrorCode>-1</ErrorCode><ErrorField>{field}</ErrorField><ErrorMessage>{message}</ErrorMessage></Error></Errors></{header}>"
    )
}

pub fn soap_fault(message: &str) -> String {
    soap_envelope(&format!(
        "<soap:Fault><faultcode>soap:Server</faultcode><faultstring>{message}</faultstring></soap:Fault>"
    ))
}

pub fn order_info_xml(partner_order_id: &str, status: &str) -> String {
    format!(
        "<OrderInfo><PartnerOrderID>{partner_order_id}</PartnerOrderID><GeoTrustOrderID>1234567</GeoTrustOrderID><OrderDate>2026-10-19T10:00:00.000Z</OrderDate><OrderStatusMajor>{status}</OrderStatusMajor><OrderStatusMinor><OrderStatusMinorCode>ORDER_WAITING_FOR_APPROVAL</OrderStatusMinorCode></OrderStatusMinor><ProductCode>QuickSSLPremium</ProductCode><DomainName>testingsymantecssl.com</DomainName></OrderInfo>"
    )
}
