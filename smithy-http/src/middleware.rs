/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This module defines the core, framework agnostic, HTTP middleware interface
//! used by the SDK
//!
//! smithy-http-tower provides Tower-specific middleware utilities

use crate::body::SdkBody;
use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use std::error::Error;
use tracing::trace;

type BoxError = Box<dyn Error + Send + Sync>;

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Most fundamental middleware is expressed as `MapRequest`, including
/// signing & endpoint resolution.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// The name of this middleware, used in tracing spans
    fn name(&self) -> &'static str {
        "map_request"
    }

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Load a response using `handler` to parse the results.
///
/// This function is intended to be used on the response side of a middleware chain.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<T, E, O>(
    mut response: http::Response<SdkBody>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    O: ParseHttpResponse<Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        trace!(response = ?response, "read HTTP headers for streaming response");
        return sdk_result(parsed_response, response);
    }

    let body = std::mem::replace(response.body_mut(), SdkBody::taken());
    let body = match hyper::body::to_bytes(body).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError { raw: response, err });
        }
    };

    let response = response.map(|_| body);
    trace!(response = ?response, "read HTTP response body");
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(SdkBody::from))
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<SdkBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;

    struct EchoStatus;

    impl ParseStrictResponse for EchoStatus {
        type Output = Result<String, u16>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    #[tokio::test]
    async fn parses_loaded_body() {
        let response = http::Response::new(SdkBody::from(hyper::Body::from("hello")));
        let result = load_response(response, &EchoStatus).await.expect("success");
        assert_eq!(result.parsed, "hello");
        assert_eq!(result.raw.body().bytes(), Some("hello".as_bytes()));
    }

    #[tokio::test]
    async fn error_responses_become_service_errors() {
        let response = http::Response::builder()
            .status(404)
            .body(SdkBody::from("missing"))
            .unwrap();
        match load_response(response, &EchoStatus).await {
            Err(SdkError::ServiceError { err, raw }) => {
                assert_eq!(err, 404);
                assert_eq!(raw.status(), 404);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
