//! Value records for classification inputs and outputs.
//!
//! Each record is produced once per invocation, consumed once, and never
//! mutated. There is no identity or persistence attached to them.

use serde::{Deserialize, Serialize};

/// Context extracted from a failed HTTP invocation that completed with a
/// status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorContext {
    pub status_code: String,
    pub request_url: String,
    pub response_body: Option<String>,
}

impl HttpErrorContext {
    /// Create a new HTTP error context
    pub fn new(status_code: String, request_url: String, response_body: Option<String>) -> Self {
        Self {
            status_code,
            request_url,
            response_body,
        }
    }
}

/// Context extracted from an HTTP invocation that failed with a caught
/// exception instead of a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionContext {
    /// Fully qualified or short exception class name.
    pub exception_class_name: String,
    pub request_url: String,
    pub exception_message: Option<String>,
}

impl ExceptionContext {
    /// Create a new exception context
    pub fn new(
        exception_class_name: String,
        request_url: String,
        exception_message: Option<String>,
    ) -> Self {
        Self {
            exception_class_name,
            request_url,
            exception_message,
        }
    }
}

/// Outcome of classifying a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Short human-readable summary of the failure.
    pub title: String,
    /// Longer message including the request URL and any response body or
    /// exception message.
    pub details: String,
    /// Fixed diagnostic code; populated on the exception path only.
    pub error_code: Option<String>,
}
