//! Invoke Errors - Failed HTTP invocation classification
//!
//! This crate derives human-readable error attributes for units of data
//! whose upstream HTTP invocation failed. Given either the HTTP status
//! code or the caught exception's class name, plus the request URL and the
//! response body or exception message, it produces a short `title`, a
//! longer `error.details` string and, on the exception path, a fixed
//! `error.code` diagnostic.

// Core modules
pub mod classify;
pub mod error;
pub mod types;

// Pipeline boundary
pub mod attributes;

// Re-export main types for convenience
pub use attributes::{
    enrich, enrich_exception, enrich_http_status, AttributeBag, ATTR_ERROR_CODE,
    ATTR_ERROR_DETAILS, ATTR_EXCEPTION_CLASS, ATTR_EXCEPTION_MESSAGE, ATTR_REQUEST_URL,
    ATTR_RESPONSE_BODY, ATTR_STATUS_CODE, ATTR_TITLE,
};
pub use classify::{
    classify_exception, classify_http_status, short_class_name, EXCEPTION_ERROR_CODE,
};
pub use error::{EnrichError, Result};
pub use types::{ClassificationResult, ExceptionContext, HttpErrorContext};

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that re-exported types and functions work through the crate root
    #[test]
    fn test_crate_root_surface() {
        let ctx = HttpErrorContext::new("404".to_string(), "http://x/y".to_string(), None);
        let result = classify_http_status(&ctx);
        assert!(result.error_code.is_none());
        assert_eq!(result.title, "HTTP status code 404: Not Found");
    }

    /// Test that error types format as expected
    #[test]
    fn test_error_types() {
        let error = EnrichError::missing_attribute(ATTR_EXCEPTION_CLASS);
        assert!(error
            .to_string()
            .contains("invokehttp.java.exception.class"));
    }
}
