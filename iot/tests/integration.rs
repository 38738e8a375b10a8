/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::Client;
use http::Uri;
use iot::error::DescribeThingErrorKind;
use iot::input::ListThingsInput;
use iot::model::AttributePayload;
use iot::operation::{CreateThing, DeleteThing, DescribeThing, ListThings};
use iot::{Config, Credentials, Region};
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, UNIX_EPOCH};

fn test_conf() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            None,
        ))
        .build()
}

#[tokio::test]
async fn create_thing() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/json")
            .header("content-length", "26")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/execute-api/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-user-agent, Signature=4ff2b4c16522c653e18e7f85130d89d34a0a9cb0d86cee547496c6b9f9af7301")
            .header("x-amz-date", "20210305T134922Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://iot.us-east-1.amazonaws.com/things/kitchen-sensor"))
            .body(SdkBody::from(r#"{"thingTypeName":"sensor"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"thingName":"kitchen-sensor","thingArn":"arn:aws:iot:us-east-1:123456789012:thing/kitchen-sensor","thingId":"8f2a0c1e-6d1b-4b8e-9a0f-3c2d1e0f9a8b"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let mut op = CreateThing::builder()
        .thing_name("kitchen-sensor")
        .thing_type_name("sensor")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let resp = client.call(op).await.expect("request should succeed");
    assert_eq!(resp.thing_name(), Some("kitchen-sensor"));
    assert_eq!(
        resp.thing_arn(),
        Some("arn:aws:iot:us-east-1:123456789012:thing/kitchen-sensor")
    );
    assert_eq!(conn.requests()[0].actual.method(), http::Method::POST);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn list_things() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/execute-api/aws4_request, SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature=15ce46b178fc77ddc538065d7d96f662b93c7801f8afc713a10cb04a27c9c2f5")
            .header("x-amz-date", "20210305T134922Z")
            .uri(Uri::from_static("https://iot.us-east-1.amazonaws.com/things?maxResults=10&thingTypeName=sensor"))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"things":[{"thingName":"kitchen-sensor","thingTypeName":"sensor","attributes":{"room":"kitchen"},"version":3},{"thingName":"garage-sensor","thingTypeName":"sensor","version":1}],"nextToken":"page-2"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let mut op = ListThings::builder()
        .max_results(10)
        .thing_type_name("sensor")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let resp = client.call(op).await.expect("request should succeed");
    let things = resp.things().expect("things listed");
    assert_eq!(things.len(), 2);
    assert_eq!(things[0].thing_name(), Some("kitchen-sensor"));
    assert_eq!(things[0].version(), Some(3));
    assert_eq!(
        things[0]
            .attributes()
            .and_then(|attrs| attrs.get("room"))
            .map(|room| room.as_str()),
        Some("kitchen")
    );
    assert_eq!(resp.next_token(), Some("page-2"));
    let requests = conn.requests();
    let sent = &requests[0].actual;
    assert_eq!(sent.method(), http::Method::GET);
    assert!(!sent.headers().contains_key("content-type"));
    assert!(!sent.headers().contains_key("content-length"));
    drop(requests);
    conn.assert_requests_match(&[]);
}

#[test]
fn empty_label_is_rejected() {
    let input = DescribeThing::builder()
        .thing_name("")
        .build()
        .expect("the field is set");
    let err = input
        .make_operation(&test_conf())
        .expect_err("an empty label cannot be sent");
    match err {
        BuildError::InvalidField { field, .. } => assert_eq!(field, "thing_name"),
        other => panic!("expected an invalid field, got {:?}", other),
    }
    assert!(matches!(
        DescribeThing::builder().build(),
        Err(BuildError::MissingField { field: "thing_name", .. })
    ));
}

#[tokio::test]
async fn labels_and_query_params_are_percent_encoded() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://iot.us-east-1.amazonaws.com/things/hall%20sensor%2F2?expectedVersion=4",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder().status(200).body("").unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = DeleteThing::builder()
        .thing_name("hall sensor/2")
        .expected_version(4)
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    client.call(op).await.expect("empty success body");
    assert_eq!(conn.requests()[0].actual.method(), http::Method::DELETE);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn nested_structures_are_serialized() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/json")
            .uri(Uri::from_static("https://iot.us-east-1.amazonaws.com/things/porch-light"))
            .body(SdkBody::from(
                r#"{"attributePayload":{"attributes":{"floor":"1","room":"porch"},"merge":true}}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"thingName":"porch-light"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = CreateThing::builder()
        .thing_name("porch-light")
        .attribute_payload(
            AttributePayload::builder()
                .attributes("room", "porch")
                .attributes("floor", "1")
                .merge(true)
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    client.call(op).await.expect("success");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn resource_not_found() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://iot.us-east-1.amazonaws.com/things/missing"))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazonaws.iot/")
            .header("x-amzn-requestid", "c2a1f9f2-5b8e-4a37-9d8e-0f7f2b8c4e55")
            .header("content-type", "application/json")
            .body(r#"{"message":"Thing missing cannot be found."}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = DescribeThing::builder()
        .thing_name("missing")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client.call(op).await.expect_err("thing does not exist");
    assert_eq!(conn.requests().len(), 1, "a 404 is not retried");
    let err = err.service_error().expect("modeled error");
    assert!(err.is_resource_not_found_exception());
    assert!(matches!(
        err.kind,
        DescribeThingErrorKind::ResourceNotFoundException(_)
    ));
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("Thing missing cannot be found."));
    assert_eq!(
        err.request_id(),
        Some("c2a1f9f2-5b8e-4a37-9d8e-0f7f2b8c4e55")
    );
    assert_eq!(
        err.to_string(),
        "ResourceNotFoundException: Thing missing cannot be found."
    );
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sensor_query() -> iot::input::list_things_input::Builder {
    ListThingsInput::builder()
        .next_token("page-2")
        .max_results(25)
        .attribute_name("room")
        .attribute_value("kitchen")
        .thing_type_name("sensor")
}

#[test]
fn builder_round_trips_every_field() {
    let input = sensor_query().build().unwrap();
    assert_eq!(input.next_token(), Some("page-2"));
    assert_eq!(input.max_results(), Some(25));
    assert_eq!(input.attribute_name(), Some("room"));
    assert_eq!(input.attribute_value(), Some("kitchen"));
    assert_eq!(input.thing_type_name(), Some("sensor"));
}

#[test]
fn equality_and_hash_are_structural() {
    let a = sensor_query().build().unwrap();
    let b = sensor_query().build().unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    let variants = vec![
        sensor_query().set_next_token(None).build().unwrap(),
        sensor_query().max_results(50).build().unwrap(),
        sensor_query().attribute_name("floor").build().unwrap(),
        sensor_query().attribute_value("garage").build().unwrap(),
        sensor_query().thing_type_name("light").build().unwrap(),
    ];
    for variant in &variants {
        assert_ne!(&a, variant);
        assert_ne!(hash_of(&a), hash_of(variant), "{:?}", variant);
    }
}
