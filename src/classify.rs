//! Classification of failed HTTP invocations.
//!
//! This module provides the pure mapping functions that turn an HTTP status
//! code or a caught exception class name, together with contextual strings,
//! into a short title and a longer details message. Both functions are
//! deterministic and total: unrecognized discriminators fall through to an
//! explicit fallback branch, never an error.

use crate::types::{ClassificationResult, ExceptionContext, HttpErrorContext};

/// Diagnostic code attached to every exception-path classification.
pub const EXCEPTION_ERROR_CODE: &str = "CIM-IE-0000";

/// Title and fixed details body for a known exception class.
struct ExceptionMapping {
    class: &'static str,
    title: &'static str,
    details_body: &'static str,
}

/// Known exception classes, keyed by short class name. Details bodies end
/// with a trailing space so the message fragment concatenates cleanly.
const EXCEPTION_MAPPINGS: &[ExceptionMapping] = &[
    ExceptionMapping {
        class: "SocketTimeoutException",
        title: "Socket timeout during HTTP invoke.",
        details_body: "Timeout has occurred on a socket read or accept. ",
    },
    ExceptionMapping {
        class: "UnknownHostException",
        title: "Unknown host in HTTP invoke process.",
        details_body: "IP address of a host could not be determined. ",
    },
    ExceptionMapping {
        class: "ConnectException",
        title: "Connection error during HTTP invoke.",
        details_body: "Error occurred while attempting to connect a socket to a remote address and port. ",
    },
    ExceptionMapping {
        class: "SocketException",
        title: "Socket error in HTTP invoke process.",
        details_body: "Error creating or accessing a Socket. ",
    },
    ExceptionMapping {
        class: "NoRouteToHostException",
        title: "Remote host cannot be reached.",
        details_body: "Error occurred while attempting to connect a socket to a remote address and port. ",
    },
];

/// Classify a failed invocation by its HTTP status code.
///
/// The title is a fixed phrase for the well-known codes and
/// `HTTP status code {code}` for everything else. The details always name
/// the request URL; the response body is appended only when present and
/// non-empty. Inputs are interpolated as given, without validation.
pub fn classify_http_status(ctx: &HttpErrorContext) -> ClassificationResult {
    let title = match ctx.status_code.as_str() {
        "400" => "HTTP status code 400: Bad Request".to_string(),
        "401" => "HTTP status code 401: Unauthorized".to_string(),
        "404" => "HTTP status code 404: Not Found".to_string(),
        "408" => "HTTP status code 408: Request Timeout".to_string(),
        code => format!("HTTP status code {}", code),
    };

    let mut details = format!(
        "Error {} during invoke \"{}\". ",
        ctx.status_code, ctx.request_url
    );
    if let Some(body) = &ctx.response_body {
        if !body.is_empty() {
            details.push_str("Request return: ");
            details.push_str(body);
        }
    }

    ClassificationResult {
        title,
        details,
        error_code: None,
    }
}

/// Classify a failed invocation by its caught exception class.
///
/// The class name is reduced to its short name before lookup. Every result
/// carries the fixed [`EXCEPTION_ERROR_CODE`] and a details string starting
/// with `{short} during invoke "{url}". `.
pub fn classify_exception(ctx: &ExceptionContext) -> ClassificationResult {
    let short = short_class_name(&ctx.exception_class_name);
    let error_prefix = format!("{} during invoke \"{}\". ", short, ctx.request_url);

    // Non-empty messages gain the "Exception message:" prefix; an empty
    // message contributes an empty fragment and an absent one renders as
    // the literal string "null".
    let message = match ctx.exception_message.as_deref() {
        Some(msg) if !msg.is_empty() => format!("Exception message: {}", msg),
        Some(_) => String::new(),
        None => "null".to_string(),
    };

    let (title, details) = match EXCEPTION_MAPPINGS.iter().find(|m| m.class == short) {
        Some(mapping) => (
            mapping.title.to_string(),
            format!("{}{}{}", error_prefix, mapping.details_body, message),
        ),
        // The doubled space in the fallback title is part of the fixed
        // output format.
        None => (
            format!("{} in HTTP  invoke process.", short),
            format!("{}{}", error_prefix, message),
        ),
    };

    ClassificationResult {
        title,
        details,
        error_code: Some(EXCEPTION_ERROR_CODE.to_string()),
    }
}

/// Strip any package prefix from an exception class name, keeping only the
/// substring after the last `.`.
pub fn short_class_name(class_name: &str) -> &str {
    class_name.rsplit('.').next().unwrap_or(class_name)
}
