//! Test helper utilities for symantec-ssl integration tests
//!
//! This module provides the order fixture used across the suites, a mock
//! partner endpoint, and canned vendor envelopes.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use std::time::Duration;
use symantec_ssl::soap::{Operation, ORDER_NAMESPACE, QUERY_NAMESPACE};
use symantec_ssl::{
    Contact, OrderParameters, OrganizationAddress, OrganizationInfo, ProductCode, RetryPolicy,
    SymantecClient, SymantecConfig,
};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_PARTNER_CODE: &str = "TESTPARTNER";
pub const TEST_DOMAIN: &str = "testingsymantecssl.com";

/// CSR for `testingsymantecssl.com`, accepted by the vendor sandbox
pub const TEST_CSR: &str = "
-----BEGIN CERTIFICATE REQUEST-----
MIICpjCCAY4CAQAwYTELMAkGA1UEBhMCVVMxCzAJBgNVBAgMAlRYMRQwEgYDVQQH
DAtTYW4gQW50b25pbzEOMAwGA1UECgwFTXlPcmcxHzAdBgNVBAMMFnRlc3Rpbmdz
eW1hbnRlY3NzbC5jb20wggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEKAoIBAQDf
klapgfE7MDlB++19m/I8TlzGJcIoiFUhqJN2TdCoiTPA+5eHkRRY9WWIS3R4xxQG
fA52dxynLRtce1Sr4zxeP5HkxtWKWbIdir2YVqnjWSoqyf0+8VNX4cYhCRu3BETu
Dfej5xjt7EH7++BoA5kGzcwv+7jb9U73XRREuZEq0l26QTd7EZjGZYATHJvz2idv
Z784+iGrO0Qw76rYHCnhffWDld9lgMKXcgRJpESIDQHRsPMJSREyWAOr0Fov/z75
YU3n4vXIFZSeSa7fGbyLFFXMNJpu4xG6x8JufgJkGZlgCEiX8aG6YjqV2Z3LrYld
4jzT408Uqyw2GftzZMDZAgMBAAGgADANBgkqhkiG9w0BAQUFAAOCAQEAPxIjS7g/
MUfNsRYuplgHh9BbZl13SVdFXc9POSJwSCy1pQhEhM+e7izGD3po+V0TlZ5DZohT
djrGMEZvBm4OkwB7g/9hzEI5kyHfBXzBVn9ybcIzEMlRqAWc0tS1Kn+EyyDlbGnh
iFEk178Q0KTuOIZfPVBKZjji0o5gj13wrRBAxJARf/0/MRqpg3mL932QgjmSB2dL
/57yk0hXh1ChA8d2htKdwb3RnRJHOjVxWbWjYGcuAMz7RTEN9pWviTM3y7FfTWTP
Q24Nrp12Ez1cALXb5t/lZkbrCtizCjUuEpREzIRMUYnWZEa7pw/CGbSTYH4a2x7n
L5mReDt1ijwjGg==
-----END CERTIFICATE REQUEST-----
";

/// 30 random ASCII letters, the shape of the sandbox fixture's order ids
pub fn random_order_id() -> String {
    std::iter::repeat_with(fastrand::alphabetic)
        .take(30)
        .collect()
}

/// Order parameters for a one-year QuickSSL Premium certificate
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
        admin_contact: Contact {
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
        },
        tech_contact: None,
        billing_contact: None,
        tech_same_as_admin: true,
        bill_same_as_tech: true,
        approver_email: "admin@testingsymantecssl.com".to_string(),
        csr: TEST_CSR.to_string(),
    }
}

/// Create test retry policy with no retries (for deterministic testing)
pub fn create_no_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 1,
        initial_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(50),
        backoff_multiplier: 2.0,
        total_timeout: Duration::from_secs(5),
        request_timeout: Duration::from_secs(2),
    }
}

/// Create fast retry policy for tests (avoids long waits)
pub fn create_fast_test_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(50),
        backoff_multiplier: 2.0,
        total_timeout: Duration::from_secs(5),
        request_timeout: Duration::from_secs(2),
    }
}

/// Create a client pointed at a mock partner endpoint
///
/// # Arguments
///
/// * `base_url` - Base URL of the mock server (e.g., `mock_server.uri()`)
/// * `retry_policy` - Transport retry policy for the client
pub fn create_test_client(base_url: &str, retry_policy: RetryPolicy) -> SymantecClient {
    let config = SymantecConfig::sandbox(TEST_PARTNER_CODE, "tester", "s3cret")
        .with_base_url(base_url)
        .with_retry_policy(retry_policy);
    SymantecClient::new(config).expect("Test configuration should be valid")
}

/// Mount a response for one operation, matched on its SOAPAction header
pub async fn mount_operation(
    server: &MockServer,
    operation: Operation,
    response: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(header(
            "soapaction",
            format!("\"{}\"", operation.soap_action()).as_str(),
        ))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// A 200 response carrying an XML body
pub fn xml_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml; charset=utf-8")
        .set_body_string(body)
}

// ============================================================================
// Canned vendor envelopes
// ============================================================================

pub fn soap_envelope(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><soap:Body>{body}</soap:Body></soap:Envelope>"#
    )
}

/// `<Op>Response><Op>Result>` wrapper in the operation's namespace
pub fn operation_response(operation: Operation, result: &str) -> String {
    let name = operation.name();
    let namespace = if operation.is_query() {
        QUERY_NAMESPACE
    } else {
        ORDER_NAMESPACE
    };
    soap_envelope(&format!(
        r#"<{name}Response xmlns="{namespace}"><{name}Result>{result}</{name}Result></{name}Response>"#
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

pub fn order_error_header(field: &str, message: &str) -> String {
    format!(
        "<OrderResponseHeader><Timestamp>2026-10-19T10:00:00.000Z</Timestamp><SuccessCode>-1</SuccessCode><Errors><Error><ErrorCode>-1</ErrorCode><ErrorField>{field}</ErrorField><ErrorMessage>{message}</ErrorMessage></Error></Errors></OrderResponseHeader>"
    )
}

pub fn soap_fault(message: &str) -> String {
    soap_envelope(&format!(
        "<soap:Fault><faultcode>soap:Server</faultcode><faultstring>{message}</faultstring></soap:Fault>"
    ))
}

pub fn order_info_xml(partner_order_id: &str, status: &str) -> String {
    format!(
        "<OrderInfo><PartnerOrderID>{partner_order_id}</PartnerOrderID><GeoTrustOrderID>1234567</GeoTrustOrderID><OrderDate>2026-10-19T10:00:00.000Z</OrderDate><OrderStatusMajor>{status}</OrderStatusMajor><ProductCode>QuickSSLPremium</ProductCode><DomainName>testingsymantecssl.com</DomainName></OrderInfo>"
    )
}
