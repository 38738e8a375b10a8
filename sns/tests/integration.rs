/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::Client;
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use sns::error::{GetTopicAttributesErrorKind, ListTopicsErrorKind, PublishErrorKind};
use sns::input::SetTopicAttributesInput;
use sns::model::{MessageAttributeValue, Subscription};
use sns::operation::{GetTopicAttributes, ListTopics, Publish, Subscribe};
use sns::{Config, Credentials, Region};
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
async fn publish() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-www-form-urlencoded")
            .header("content-length", "260")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/sns/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-user-agent, Signature=d94d78c5a3a2c148f63ee414699a2b1254587a9066e724879f477147370794c8")
            .header("x-amz-date", "20210305T134922Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("Action=Publish&Version=2010-03-31&TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aalerts&Message=disk%20almost%20full&MessageAttributes.entry.1.Name=severity&MessageAttributes.entry.1.Value.DataType=String&MessageAttributes.entry.1.Value.StringValue=high"))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .header("content-type", "text/xml")
            .body(r#"<PublishResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <PublishResult>
    <MessageId>94f20ce6-13c5-43a0-9a9e-ca52d816e90b</MessageId>
  </PublishResult>
  <ResponseMetadata>
    <RequestId>f187a3c1-376f-11df-8963-01868b7c937a</RequestId>
  </ResponseMetadata>
</PublishResponse>"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let mut op = Publish::builder()
        .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
        .message("disk almost full")
        .message_attributes(
            "severity",
            MessageAttributeValue::builder()
                .data_type("String")
                .string_value("high")
                .build(),
        )
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let resp = client.call(op).await.expect("request should succeed");
    assert_eq!(
        resp.message_id(),
        Some("94f20ce6-13c5-43a0-9a9e-ca52d816e90b")
    );
    assert_eq!(resp.sequence_number(), None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn list_topics() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-www-form-urlencoded")
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("Action=ListTopics&Version=2010-03-31"))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"<ListTopicsResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <ListTopicsResult>
    <Topics>
      <member>
        <TopicArn>arn:aws:sns:us-east-1:123456789012:alerts</TopicArn>
      </member>
      <member>
        <TopicArn>arn:aws:sns:us-east-1:123456789012:deploys&amp;releases</TopicArn>
      </member>
    </Topics>
    <NextToken>page-2</NextToken>
  </ListTopicsResult>
  <ResponseMetadata>
    <RequestId>3f1478c7-33a9-11df-9540-99d0768312d3</RequestId>
  </ResponseMetadata>
</ListTopicsResponse>"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = ListTopics::builder()
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let resp = client.call(op).await.expect("request should succeed");
    let arns: Vec<_> = resp
        .topics()
        .expect("topics listed")
        .iter()
        .map(|topic| topic.topic_arn().unwrap_or_default())
        .collect();
    assert_eq!(
        arns,
        vec![
            "arn:aws:sns:us-east-1:123456789012:alerts",
            "arn:aws:sns:us-east-1:123456789012:deploys&releases"
        ]
    );
    assert_eq!(resp.next_token(), Some("page-2"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn get_topic_attributes() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("Action=GetTopicAttributes&Version=2010-03-31&TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aalerts"))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"<GetTopicAttributesResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <GetTopicAttributesResult>
    <Attributes>
      <entry><key>Owner</key><value>123456789012</value></entry>
      <entry><key>DisplayName</key><value>Alerts</value></entry>
    </Attributes>
  </GetTopicAttributesResult>
</GetTopicAttributesResponse>"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = GetTopicAttributes::builder()
        .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let resp = client.call(op).await.expect("request should succeed");
    let attributes = resp.attributes().expect("attributes returned");
    assert_eq!(attributes.len(), 2);
    assert_eq!(
        attributes.get("DisplayName").map(|v| v.as_str()),
        Some("Alerts")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn not_found_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("Action=GetTopicAttributes&Version=2010-03-31&TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Agone"))
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header("content-type", "text/xml")
            .body(r#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <Error>
    <Type>Sender</Type>
    <Code>NotFound</Code>
    <Message>Topic does not exist</Message>
  </Error>
  <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
</ErrorResponse>"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = GetTopicAttributes::builder()
        .topic_arn("arn:aws:sns:us-east-1:123456789012:gone")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client.call(op).await.expect_err("topic is gone");
    let err = err.service_error().expect("modeled error");
    assert!(err.is_not_found_exception());
    assert!(matches!(
        err.kind,
        GetTopicAttributesErrorKind::NotFoundException(_)
    ));
    assert_eq!(err.code(), Some("NotFound"));
    assert_eq!(err.message(), Some("Topic does not exist"));
    assert_eq!(
        err.request_id(),
        Some("9dd01905-5012-5f99-8663-4b3ecd0dfaef")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn unexpected_root_element_is_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("Action=ListTopics&Version=2010-03-31"))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"<PublishResponse><PublishResult><MessageId>abc</MessageId></PublishResult></PublishResponse>"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = ListTopics::builder()
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client.call(op).await.expect_err("wrong response document");
    let err = err.service_error().expect("parse failure is reported");
    assert!(matches!(err.kind, ListTopicsErrorKind::Unhandled(_)));
}

#[tokio::test]
async fn truncated_response_is_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("Action=Publish&Version=2010-03-31&TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aalerts&Message=hello"))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body("<PublishResponse><PublishResult><MessageId>94f20ce6")
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = Publish::builder()
        .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
        .message("hello")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client
        .call(op)
        .await
        .expect_err("a partial document is not a successful response");
    let err = err.service_error().expect("parse failure is reported");
    assert!(matches!(err.kind, PublishErrorKind::Unhandled(_)));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn primitive_flags_are_only_sent_when_set() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
                .body(SdkBody::from("Action=Subscribe&Version=2010-03-31&TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aalerts&Protocol=email&Endpoint=ops%40example.com&ReturnSubscriptionArn=true"))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body("<SubscribeResponse><SubscribeResult><SubscriptionArn>arn:aws:sns:us-east-1:123456789012:alerts:1</SubscriptionArn></SubscribeResult></SubscribeResponse>")
                .unwrap(),
        ),
        (
            http::Request::builder()
                .uri(Uri::from_static("https://sns.us-east-1.amazonaws.com/"))
                .body(SdkBody::from("Action=Subscribe&Version=2010-03-31&TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Aalerts&Protocol=email&Endpoint=ops%40example.com"))
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body("<SubscribeResponse><SubscribeResult><SubscriptionArn>pending confirmation</SubscriptionArn></SubscribeResult></SubscribeResponse>")
                .unwrap(),
        ),
    ]);
    let client = Client::new(conn.clone());
    let subscribe = |return_arn: bool| {
        Subscribe::builder()
            .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
            .protocol("email")
            .endpoint("ops@example.com")
            .return_subscription_arn(return_arn)
            .build()
            .unwrap()
            .make_operation(&test_conf())
            .unwrap()
    };
    let confirmed = client.call(subscribe(true)).await.expect("success");
    assert_eq!(
        confirmed.subscription_arn(),
        Some("arn:aws:sns:us-east-1:123456789012:alerts:1")
    );
    let pending = client.call(subscribe(false)).await.expect("success");
    assert_eq!(pending.subscription_arn(), Some("pending confirmation"));
    conn.assert_requests_match(&[]);
}

#[test]
fn message_is_required() {
    let err = Publish::builder()
        .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
        .build()
        .expect_err("message is required");
    assert!(matches!(err, BuildError::MissingField { field: "message", .. }));
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn email_subscription() -> sns::model::subscription::Builder {
    Subscription::builder()
        .subscription_arn("arn:aws:sns:us-east-1:123456789012:alerts:6b0e71bd")
        .owner("123456789012")
        .protocol("email")
        .endpoint("ops@example.com")
        .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
}

#[test]
fn model_round_trips_every_field() {
    let subscription = email_subscription().build();
    assert_eq!(
        subscription.subscription_arn(),
        Some("arn:aws:sns:us-east-1:123456789012:alerts:6b0e71bd")
    );
    assert_eq!(subscription.owner(), Some("123456789012"));
    assert_eq!(subscription.protocol(), Some("email"));
    assert_eq!(subscription.endpoint(), Some("ops@example.com"));
    assert_eq!(
        subscription.topic_arn(),
        Some("arn:aws:sns:us-east-1:123456789012:alerts")
    );
}

#[test]
fn equality_and_hash_are_structural() {
    let a = email_subscription().build();
    let b = email_subscription().build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    let variants = vec![
        email_subscription().subscription_arn("PendingConfirmation").build(),
        email_subscription().owner("210987654321").build(),
        email_subscription().protocol("sms").build(),
        email_subscription().set_endpoint(None).build(),
        email_subscription()
            .topic_arn("arn:aws:sns:us-east-1:123456789012:deploys")
            .build(),
    ];
    for variant in &variants {
        assert_ne!(&a, variant);
        assert_ne!(hash_of(&a), hash_of(variant), "{:?}", variant);
    }

    let input = || {
        SetTopicAttributesInput::builder()
            .topic_arn("arn:aws:sns:us-east-1:123456789012:alerts")
            .attribute_name("DisplayName")
            .attribute_value("Alerts")
    };
    let first = input().build().unwrap();
    assert_eq!(first, input().build().unwrap());
    assert_eq!(hash_of(&first), hash_of(&input().build().unwrap()));
    assert_eq!(first.attribute_name(), Some("DisplayName"));
    assert_eq!(first.attribute_value(), Some("Alerts"));
    let renamed = input().attribute_value("Pager alerts").build().unwrap();
    assert_ne!(first, renamed);
    assert_ne!(hash_of(&first), hash_of(&renamed));
}
