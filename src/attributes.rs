//! Attribute-bag boundary with the hosting pipeline.
//!
//! The upstream HTTP-invoke processor records its outcome as string
//! attributes on the in-flight unit of data. This module reads those
//! attributes, runs the classifiers, and writes the derived `title`,
//! `error.details` and (on the exception path) `error.code` attributes
//! back into the same bag.

use std::collections::HashMap;

use crate::classify::{classify_exception, classify_http_status};
use crate::error::{EnrichError, Result};
use crate::types::{ExceptionContext, HttpErrorContext};

/// Request URL recorded by the upstream HTTP-invoke processor.
pub const ATTR_REQUEST_URL: &str = "invokehttp.request.url";
/// HTTP status code of the failed invocation.
pub const ATTR_STATUS_CODE: &str = "invokehttp.status.code";
/// Response body of the failed invocation, when one was captured.
pub const ATTR_RESPONSE_BODY: &str = "invokehttp.response.body";
/// Class name of the exception caught during the invocation.
pub const ATTR_EXCEPTION_CLASS: &str = "invokehttp.java.exception.class";
/// Message of the exception caught during the invocation.
pub const ATTR_EXCEPTION_MESSAGE: &str = "invokehttp.java.exception.message";

/// Output attribute holding the short failure summary.
pub const ATTR_TITLE: &str = "title";
/// Output attribute holding the full failure details.
pub const ATTR_ERROR_DETAILS: &str = "error.details";
/// Output attribute holding the fixed diagnostic code (exception path).
pub const ATTR_ERROR_CODE: &str = "error.code";

/// String-keyed attribute bag attached to an in-flight unit of data.
pub type AttributeBag = HashMap<String, String>;

// Absent attributes render as the literal string "null" in interpolated
// output on the status path.
fn attr_or_null(bag: &AttributeBag, name: &str) -> String {
    bag.get(name).cloned().unwrap_or_else(|| "null".to_string())
}

/// Enrich a bag whose invocation failed with an HTTP status code.
///
/// Never fails: missing inputs interpolate as given.
pub fn enrich_http_status(bag: &mut AttributeBag) {
    let ctx = HttpErrorContext::new(
        attr_or_null(bag, ATTR_STATUS_CODE),
        attr_or_null(bag, ATTR_REQUEST_URL),
        bag.get(ATTR_RESPONSE_BODY).cloned(),
    );
    let result = classify_http_status(&ctx);
    bag.insert(ATTR_TITLE.to_string(), result.title);
    bag.insert(ATTR_ERROR_DETAILS.to_string(), result.details);
}

/// Enrich a bag whose invocation failed with a caught exception.
///
/// The exception class attribute is required; everything else degrades the
/// same way the status path does.
pub fn enrich_exception(bag: &mut AttributeBag) -> Result<()> {
    let class = bag
        .get(ATTR_EXCEPTION_CLASS)
        .cloned()
        .ok_or_else(|| EnrichError::missing_attribute(ATTR_EXCEPTION_CLASS))?;
    let ctx = ExceptionContext::new(
        class,
        attr_or_null(bag, ATTR_REQUEST_URL),
        bag.get(ATTR_EXCEPTION_MESSAGE).cloned(),
    );
    let result = classify_exception(&ctx);
    bag.insert(ATTR_TITLE.to_string(), result.title);
    bag.insert(ATTR_ERROR_DETAILS.to_string(), result.details);
    if let Some(code) = result.error_code {
        bag.insert(ATTR_ERROR_CODE.to_string(), code);
    }
    Ok(())
}

/// Enrich a bag, picking the classification path from its attributes.
///
/// The exception path wins when both discriminators are present, since a
/// caught exception means no meaningful status was captured upstream.
pub fn enrich(bag: &mut AttributeBag) -> Result<()> {
    if bag.contains_key(ATTR_EXCEPTION_CLASS) {
        enrich_exception(bag)
    } else if bag.contains_key(ATTR_STATUS_CODE) {
        enrich_http_status(bag);
        Ok(())
    } else {
        Err(EnrichError::missing_attribute(ATTR_STATUS_CODE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(entries: &[(&str, &str)]) -> AttributeBag {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn status_path_writes_title_and_details() {
        let mut attrs = bag(&[
            (ATTR_STATUS_CODE, "404"),
            (ATTR_REQUEST_URL, "http://svc/orders"),
            (ATTR_RESPONSE_BODY, "not found"),
        ]);
        enrich_http_status(&mut attrs);

        assert_eq!(attrs[ATTR_TITLE], "HTTP status code 404: Not Found");
        assert_eq!(
            attrs[ATTR_ERROR_DETAILS],
            "Error 404 during invoke \"http://svc/orders\". Request return: not found"
        );
        assert!(!attrs.contains_key(ATTR_ERROR_CODE));
    }

    #[test]
    fn status_path_interpolates_missing_attributes_as_null() {
        let mut attrs = bag(&[]);
        enrich_http_status(&mut attrs);

        assert_eq!(attrs[ATTR_TITLE], "HTTP status code null");
        assert_eq!(
            attrs[ATTR_ERROR_DETAILS],
            "Error null during invoke \"null\". "
        );
    }

    #[test]
    fn exception_path_writes_all_three_attributes() {
        let mut attrs = bag(&[
            (ATTR_EXCEPTION_CLASS, "java.net.ConnectException"),
            (ATTR_REQUEST_URL, "http://svc/orders"),
            (ATTR_EXCEPTION_MESSAGE, "connection refused"),
        ]);
        enrich_exception(&mut attrs).unwrap();

        assert_eq!(attrs[ATTR_TITLE], "Connection error during HTTP invoke.");
        assert_eq!(attrs[ATTR_ERROR_CODE], "CIM-IE-0000");
        assert_eq!(
            attrs[ATTR_ERROR_DETAILS],
            "ConnectException during invoke \"http://svc/orders\". \
             Error occurred while attempting to connect a socket to a remote address and port. \
             Exception message: connection refused"
        );
    }

    #[test]
    fn exception_path_requires_class_attribute() {
        let mut attrs = bag(&[(ATTR_REQUEST_URL, "http://svc/orders")]);
        let err = enrich_exception(&mut attrs).unwrap_err();
        assert!(matches!(
            err,
            EnrichError::MissingAttribute { ref name } if name == ATTR_EXCEPTION_CLASS
        ));
    }

    #[test]
    fn auto_detect_prefers_exception_path() {
        let mut attrs = bag(&[
            (ATTR_STATUS_CODE, "500"),
            (ATTR_EXCEPTION_CLASS, "java.net.SocketTimeoutException"),
            (ATTR_REQUEST_URL, "http://svc/orders"),
        ]);
        enrich(&mut attrs).unwrap();

        assert_eq!(attrs[ATTR_TITLE], "Socket timeout during HTTP invoke.");
        assert_eq!(attrs[ATTR_ERROR_CODE], "CIM-IE-0000");
    }

    #[test]
    fn auto_detect_falls_back_to_status_path() {
        let mut attrs = bag(&[
            (ATTR_STATUS_CODE, "401"),
            (ATTR_REQUEST_URL, "http://svc/orders"),
        ]);
        enrich(&mut attrs).unwrap();

        assert_eq!(attrs[ATTR_TITLE], "HTTP status code 401: Unauthorized");
        assert!(!attrs.contains_key(ATTR_ERROR_CODE));
    }

    #[test]
    fn auto_detect_rejects_bag_without_discriminator() {
        let mut attrs = bag(&[(ATTR_REQUEST_URL, "http://svc/orders")]);
        assert!(enrich(&mut attrs).is_err());
    }
}
