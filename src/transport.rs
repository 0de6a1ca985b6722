//! HTTP transport for SOAP envelopes

use crate::error::{SymantecError, SymantecResult};
use crate::logging::{log_debug, log_error};
use crate::response_parser::ResponseParser;
use crate::retry::{RetryExecutor, RetryPolicy};
use crate::soap::Envelope;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::time::Instant;

const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// POSTs envelopes to the partner endpoint and returns raw response bodies
#[derive(Debug)]
pub struct SoapTransport {
    client: reqwest::Client,
    endpoint: String,
    retry_executor: RetryExecutor,
}

impl SoapTransport {
    /// Create a transport for the given endpoint
    ///
    /// # Errors
    ///
    /// Returns [`SymantecError::ConfigurationError`] if the HTTP client
    /// cannot be initialized.
    pub fn new(endpoint: impl Into<String>, retry_policy: RetryPolicy) -> SymantecResult<Self> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            SymantecError::configuration_error(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            retry_executor: RetryExecutor::new(retry_policy),
        })
    }

    /// Send an envelope, retrying transport failures per the retry policy
    pub async fn call(&self, envelope: &Envelope) -> SymantecResult<String> {
        let headers = Self::build_headers(envelope)?;
        self.retry_executor
            .execute(|| self.execute_single_request(envelope, &headers))
            .await
    }

    /// Build the SOAP headers for an envelope
    pub fn build_headers(envelope: &Envelope) -> SymantecResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static(SOAP_CONTENT_TYPE));
        headers.insert(
            HeaderName::from_static("soapaction"),
            HeaderValue::from_str(&format!("\"{}\"", envelope.operation.soap_action())).map_err(
                |e| SymantecError::configuration_error(format!("Invalid SOAPAction header: {e}")),
            )?,
        );

        Ok(headers)
    }

    async fn execute_single_request(
        &self,
        envelope: &Envelope,
        headers: &HeaderMap,
    ) -> SymantecResult<String> {
        let start_time = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .headers(headers.clone())
            .body(envelope.body.clone())
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    operation = %envelope.operation,
                    error = %e,
                    "HTTP request failed"
                );
                SymantecError::request_failed(format!("Request failed: {e}"), Some(Box::new(e)))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SymantecError::request_failed(
                format!("Failed to read response body: {e}"),
                Some(Box::new(e)),
            )
        })?;

        log_debug!(
            operation = %envelope.operation,
            status = %status,
            duration_ms = start_time.elapsed().as_millis(),
            "Partner API responded"
        );

        if !status.is_success() {
            return Err(handle_error_response(envelope, status, &body));
        }

        Ok(body)
    }
}

/// Non-2xx responses usually carry a SOAP fault; anything else is a transport failure
fn handle_error_response(
    envelope: &Envelope,
    status: reqwest::StatusCode,
    body: &str,
) -> SymantecError {
    if let Some(fault) = ResponseParser::fault_in(envelope.operation, body) {
        return fault;
    }

    log_error!(
        operation = %envelope.operation,
        status = %status,
        error_text = %body,
        "API error response"
    );

    SymantecError::request_failed(format!("API error {status}: {body}"), None)
}
