/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Connections for use in tests: replay canned responses and capture the requests sent.

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, MediaType};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request paired with the request a [`TestConnection`] expected in its place.
#[derive(Debug)]
pub struct ValidateRequest {
    /// The request the test expected.
    pub expected: http::Request<SdkBody>,
    /// The request the client actually sent.
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the URI, headers and body of the actual request match the expected request.
    ///
    /// Headers in `ignore_headers` are not compared. Bodies are compared according to the
    /// expected request's `Content-Type`, so JSON, XML and form bodies need not match byte for
    /// byte.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        assert_eq!(actual.uri(), expected.uri());
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
            }
        }
        let actual_str = std::str::from_utf8(actual.body().bytes().unwrap_or(&[]));
        let expected_str = std::str::from_utf8(expected.body().bytes().unwrap_or(&[]));
        let media_type = expected
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(MediaType::from)
            .unwrap_or(MediaType::Other("unknown".to_string()));
        match (actual_str, expected_str) {
            (Ok(actual), Ok(expected)) => assert_ok(validate_body(actual, expected, media_type)),
            _ => assert_eq!(actual.body().bytes(), expected.body().bytes()),
        };
    }
}

/// TestConnection for use with a [`Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// Usage example:
/// ```rust
/// use smithy_client::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Need a clone impl that ignores `B`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    /// Create a connection that answers the n-th request with the n-th response of `data`.
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// The requests received so far, each paired with the request expected in its position.
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// Assert that every received request matches the expected request, ignoring `ignore_headers`.
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = self.data.lock().unwrap().len();
        assert_eq!(
            remaining_requests, 0,
            "{} expected requests were never sent",
            remaining_requests
        );
    }
}

impl<B> tower::Service<http::Request<SdkBody>> for TestConnection<B>
where
    SdkBody: From<B>,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(SdkBody::from)))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

/// Connection that captures the single request it receives and answers with a fixed response.
///
/// Use it when a test only needs to look at the request a client produces.
pub fn capture_request(
    response: Option<http::Response<SdkBody>>,
) -> (CaptureRequestHandler, CaptureRequestReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureRequestHandler(Arc::new(Mutex::new(Inner {
            response: Some(response.unwrap_or_else(|| {
                http::Response::builder()
                    .status(200)
                    .body(SdkBody::empty())
                    .expect("unreachable")
            })),
            sender: Some(tx),
        }))),
        CaptureRequestReceiver { receiver: rx },
    )
}

#[derive(Debug)]
struct Inner {
    response: Option<http::Response<SdkBody>>,
    sender: Option<oneshot::Sender<http::Request<SdkBody>>>,
}

/// Connection half of [`capture_request`].
#[derive(Debug, Clone)]
pub struct CaptureRequestHandler(Arc<Mutex<Inner>>);

impl tower::Service<http::Request<SdkBody>> for CaptureRequestHandler {
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<SdkBody>) -> Self::Future {
        let mut inner = self.0.lock().unwrap();
        inner
            .sender
            .take()
            .expect("already sent")
            .send(req)
            .expect("channel not ready");
        std::future::ready(Ok(inner
            .response
            .take()
            .expect("could not handle second request")))
    }
}

/// Receiving half of [`capture_request`].
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    receiver: oneshot::Receiver<http::Request<SdkBody>>,
}

impl CaptureRequestReceiver {
    /// Return the captured request, panicking if none was sent.
    pub fn expect_request(mut self) -> http::Request<SdkBody> {
        self.receiver.try_recv().expect("no request was received")
    }

    /// Assert that no request was sent.
    pub fn expect_no_request(mut self) {
        self.receiver
            .try_recv()
            .expect_err("expected no request to be received!");
    }
}

#[cfg(test)]
mod tests {
    use super::{capture_request, TestConnection};
    use http::header::CONTENT_TYPE;
    use smithy_http::body::SdkBody;
    use tower::{Service, ServiceExt};

    #[tokio::test]
    async fn replays_responses_in_order() {
        let mut conn = TestConnection::new(vec![
            (
                http::Request::builder()
                    .uri("https://example.com/one")
                    .header(CONTENT_TYPE, "application/json")
                    .body(SdkBody::from(r#"{"a": 1, "b": 2}"#))
                    .unwrap(),
                http::Response::builder().status(200).body("first").unwrap(),
            ),
            (
                http::Request::builder()
                    .uri("https://example.com/two")
                    .body(SdkBody::empty())
                    .unwrap(),
                http::Response::builder().status(404).body("second").unwrap(),
            ),
        ]);
        let first = conn
            .ready()
            .await
            .unwrap()
            .call(
                http::Request::builder()
                    .uri("https://example.com/one")
                    .header(CONTENT_TYPE, "application/json")
                    .body(SdkBody::from(r#"{"b":2,"a":1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(first.status(), 200);
        assert_eq!(first.body().bytes(), Some(&b"first"[..]));
        let second = conn
            .call(
                http::Request::builder()
                    .uri("https://example.com/two")
                    .body(SdkBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(second.status(), 404);
        conn.assert_requests_match(&[]);
        assert!(conn
            .call(http::Request::new(SdkBody::empty()))
            .await
            .is_err());
    }

    #[test]
    #[should_panic]
    fn mismatched_uri_panics() {
        let conn = TestConnection::<&'static str>::new(vec![]);
        conn.requests.lock().unwrap().push(super::ValidateRequest {
            expected: http::Request::builder()
                .uri("https://example.com/a")
                .body(SdkBody::empty())
                .unwrap(),
            actual: http::Request::builder()
                .uri("https://example.com/b")
                .body(SdkBody::empty())
                .unwrap(),
        });
        conn.assert_requests_match(&[]);
    }

    #[tokio::test]
    async fn captures_request() {
        let (mut conn, rx) = capture_request(None);
        let resp = conn
            .call(
                http::Request::builder()
                    .uri("https://example.com/")
                    .body(SdkBody::from("hello"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let req = rx.expect_request();
        assert_eq!(req.uri(), "https://example.com/");
        assert_eq!(req.body().bytes(), Some(&b"hello"[..]));
    }
}
