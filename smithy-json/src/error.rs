/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error parsing for the JSON protocols.

use bytes::Bytes;
use serde::Deserialize;
use smithy_types::Error as GenericError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message", alias = "errorMessage")]
    message: Option<String>,
}

/// Strip the namespace (`aws.protocoltests#FooError`) and URI suffix (`FooError:http://...`)
/// off an error code.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.rfind('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

/// Parse the code, message and request id out of a JSON error response.
///
/// The code comes from the `X-Amzn-Errortype` header when present, otherwise from the `__type` or
/// `code` member of the body. A body that is not valid JSON still yields the header values.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> GenericError {
    let body: ErrorBody = serde_json::from_slice(response.body()).unwrap_or_default();
    let header_code = response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .and_then(|value| value.to_str().ok());
    let code = header_code
        .or_else(|| body.error_type.as_deref())
        .or_else(|| body.code.as_deref())
        .map(sanitize_error_code);
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    let mut err_builder = GenericError::builder();
    if let Some(code) = code {
        err_builder.code(code);
    }
    if let Some(message) = body.message.as_deref() {
        err_builder.message(message);
    }
    if let Some(request_id) = request_id {
        err_builder.request_id(request_id);
    }
    err_builder.build()
}

#[cfg(test)]
mod test {
    use crate::error::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use smithy_types::Error;

    #[test]
    fn error_from_body() {
        let response = http::Response::builder()
            .header("X-Amzn-Requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response),
            Error::builder()
                .code("FooError")
                .message("Go to foo")
                .request_id("1234")
                .build()
        )
    }

    #[test]
    fn header_code_wins() {
        let response = http::Response::builder()
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazon.coral.validate/")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "Message": "Not here" }"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("Not here"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn code_member_and_garbage_bodies() {
        let response = http::Response::builder()
            .body(Bytes::from_static(br#"{ "code": "InvalidRequest" }"#))
            .unwrap();
        assert_eq!(parse_generic_error(&response).code(), Some("InvalidRequest"));

        let response = http::Response::builder()
            .body(Bytes::from_static(b"<html>bad gateway</html>"))
            .unwrap();
        assert_eq!(parse_generic_error(&response), Error::builder().build());
    }

    #[test]
    fn sanitize_namespace_and_uri() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
