/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::partition::endpoint::{Metadata, Protocol, SignatureVersion};
use aws_endpoint::{set_endpoint_resolver, CredentialScope};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseStrictResponse;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, smithy_types::Error>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            let mut err = smithy_types::Error::builder();
            err.code(String::from_utf8_lossy(response.body()).to_string());
            Err(err.build())
        }
    }
}

fn test_operation() -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("request body"))
            .unwrap(),
    )
    .augment(|req, conf| {
        set_endpoint_resolver(
            conf,
            Arc::new(Metadata {
                uri_template: "test-service.{region}.amazonaws.com",
                protocol: Protocol::Https,
                credential_scope: CredentialScope::builder()
                    .service(SigningService::from_static("test-service"))
                    .build(),
                signature_versions: SignatureVersion::V4,
            }),
        );
        aws_auth::set_provider(
            conf,
            Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
        );
        conf.insert(Region::new("test-region"));
        conf.insert(OperationSigningConfig::default_config());
        conf.insert(AwsUserAgent::for_tests());
        conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
        Result::<_, Infallible>::Ok(req)
    })
    .unwrap();
    Operation::new(req, TestOperationParser).with_retry_policy(AwsErrorRetryPolicy::new())
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header(AUTHORIZATION, "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature=f42f6f6f7704dc92eeebaef59bb1923f6b4b6080d0f339ee70ee08f4a8ed02c4")
        .header("x-amz-date", "20210215T184017Z")
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
        .uri(Uri::from_static("https://test-service.test-region.amazonaws.com/"))
        .body(SdkBody::from("request body"))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn e2e_test() {
    let conn = TestConnection::new(vec![(expected_request(), response(200, "response body"))]);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation()).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn retries_transient_errors() {
    let conn = TestConnection::new(vec![
        (expected_request(), response(503, "ServiceUnavailable")),
        (expected_request(), response(200, "response body")),
    ]);
    let client =
        Client::new(conn.clone()).with_retry_config(RetryConfig::default().with_base(|| 0_f64));
    let resp = client.call(test_operation()).await;
    assert_eq!(resp.expect("retry succeeds"), "response body");
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn service_errors_are_not_retried() {
    let conn = TestConnection::new(vec![(
        expected_request(),
        response(400, "ValidationException"),
    )]);
    let client =
        Client::new(conn.clone()).with_retry_config(RetryConfig::default().with_base(|| 0_f64));
    let err = client
        .call(test_operation())
        .await
        .expect_err("400 is a service error");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.code(), Some("ValidationException"));
            assert_eq!(raw.status(), 400);
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let op = test_operation();
    op.properties().remove::<Region>();
    let err = client
        .call(op)
        .await
        .expect_err("no region is set");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}
