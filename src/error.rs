//! Error types for partner API operations.
//!
//! The main error type is [`SymantecError`]. Every fault reported by the
//! vendor is surfaced as [`SymantecError::ApiFault`], carrying the vendor
//! operation name and the vendor's own message. Everything else (transport,
//! timeouts, malformed envelopes, configuration) has its own variant.
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use symantec_ssl::{SymantecError, error::ErrorCategory};
//!
//! fn handle_error(err: SymantecError) {
//!     if let SymantecError::ApiFault { operation, message } = &err {
//!         println!("{operation} rejected the request: {message}");
//!         return;
//!     }
//!
//!     match err.category() {
//!         ErrorCategory::Transient => println!("Temporary issue, try again later"),
//!         ErrorCategory::Client => println!("Fix the configuration and try again"),
//!         _ => println!("Unexpected failure: {err}"),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The vendor or the network had an issue, or the vendor rejected the call.
    External,

    /// Something in this process failed to reach its goal (e.g. a workflow
    /// gave up waiting on the vendor).
    Internal,

    /// The caller made a mistake they can fix (missing credentials, bad URL).
    Client,

    /// Temporary failures that may succeed when retried.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,
}

// ============================================================================
// Partner API error types
// ============================================================================

/// Convenient result type for partner API operations.
pub type SymantecResult<T> = std::result::Result<T, SymantecError>;

/// Errors that can occur while talking to the partner API.
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `ApiFault` | External | No |
/// | `ConfigurationError` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `ResponseParsingError` | External | No |
/// | `Timeout` | Transient | Yes |
/// | `ApprovalTimedOut` | Internal | No |
#[derive(Error, Debug)]
pub enum SymantecError {
    /// The vendor reported a fault for the named operation.
    ///
    /// The message is the vendor's text, untouched.
    #[error("The Symantec API call {operation} returned an error: '{message}'")]
    ApiFault {
        /// Vendor operation name, e.g. `ValidateOrderParameters`.
        operation: String,
        /// Vendor-supplied error message.
        message: String,
    },

    /// Client configuration is invalid or incomplete.
    #[error("Client configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP exchange with the partner endpoint failed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The vendor answered, but the envelope could not be understood.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// A single request did not complete in time.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },

    /// An order never reached the complete state while being polled.
    #[error("Order approval timed out: {partner_order_id} not complete after {waited_seconds}s")]
    ApprovalTimedOut {
        /// The order that was being polled.
        partner_order_id: String,
        /// How long the poller waited before giving up.
        waited_seconds: u64,
    },
}

impl SymantecError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiFault { .. } => ErrorCategory::External,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::ApprovalTimedOut { .. } => ErrorCategory::Internal,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiFault { .. } => ErrorSeverity::Warning,
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::ApprovalTimedOut { .. } => ErrorSeverity::Error,
        }
    }

    /// Whether the transport may retry after this error.
    ///
    /// Vendor faults are never retryable: the vendor already made its
    /// decision about the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::RequestFailed { .. })
    }

    /// Vendor operation name, for faults only.
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::ApiFault { operation, .. } => Some(operation),
            _ => None,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create a vendor fault error (logs at WARN level).
    pub fn api_fault(operation: impl Into<String>, message: impl Into<String>) -> Self {
        let operation = operation.into();
        let message = message.into();
        log_warn!(
            error_type = "api_fault",
            operation = %operation,
            message = %message,
            "Partner API reported a fault"
        );
        Self::ApiFault { operation, message }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Client configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Partner API request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Partner API response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Partner API request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn approval_timed_out(partner_order_id: impl Into<String>, waited_seconds: u64) -> Self {
        let partner_order_id = partner_order_id.into();
        log_error!(
            error_type = "approval_timed_out",
            partner_order_id = %partner_order_id,
            waited_seconds = waited_seconds,
            "Order did not reach the complete state in time"
        );
        Self::ApprovalTimedOut {
            partner_order_id,
            waited_seconds,
        }
    }
}
