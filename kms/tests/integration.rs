/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, SdkError};
use http::Uri;
use kms::error::{GenerateRandomErrorKind, ListKeysErrorKind};
use kms::input::CreateKeyInput;
use kms::model::{CustomerMasterKeySpec, KeyState, KeyUsageType, OriginType, Tag};
use kms::operation::{DescribeKey, Encrypt, GenerateRandom, ListKeys};
use kms::{Config, Credentials, Region};
use smithy_http::body::SdkBody;
use smithy_http::operation::BuildError;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::time::{Duration, UNIX_EPOCH};

// The credentials in this file are fabricated. The signatures were computed for them offline.

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
async fn generate_random() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "TrentService.GenerateRandom")
            .header("content-length", "20")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/kms/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-target;x-amz-user-agent, Signature=a5eea5a072ee6b2c14ba6888b2bad9f4427189371437bd3287c5b893b4d68880")
            .header("x-amz-date", "20210305T134922Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"NumberOfBytes":64}"#))
            .unwrap(),
        http::Response::builder()
            .status(http::StatusCode::from_u16(200).unwrap())
            .body(r#"{"Plaintext":"AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+Pw=="}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let conf = test_conf();
    let mut op = GenerateRandom::builder()
        .number_of_bytes(64)
        .build()
        .unwrap()
        .make_operation(&conf)
        .expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let resp = client.call(op).await.expect("request should succeed");
    // primitive checksum
    assert_eq!(
        resp.plaintext()
            .expect("blob should exist")
            .as_ref()
            .iter()
            .map(|i| *i as u32)
            .sum::<u32>(),
        2016
    );
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn generate_random_malformed_response() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"NumberOfBytes":64}"#))
            .unwrap(),
        http::Response::builder()
            .status(http::StatusCode::from_u16(200).unwrap())
            // last `}` replaced with a space
            .body(r#"{"Plaintext":"AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+Pw==" "#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = GenerateRandom::builder()
        .number_of_bytes(64)
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client.call(op).await.expect_err("response was malformed");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(err.kind, GenerateRandomErrorKind::Unhandled(_)))
        }
        other => panic!("expected an unhandled service error, got {:?}", other),
    }
}

#[tokio::test]
async fn generate_random_modeled_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "TrentService.GenerateRandom")
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(
                r#"{"NumberOfBytes":64,"CustomKeyStoreId":"does not exist"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(http::StatusCode::from_u16(400).unwrap())
            .header("x-amzn-requestid", "bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
            .header("cache-control", "no-cache, no-store, must-revalidate, private")
            .header("date", "Fri, 05 Mar 2021 15:01:40 GMT")
            .header("content-type", "application/x-amz-json-1.1")
            .header("content-length", "44")
            .body(r#"{"__type":"CustomKeyStoreNotFoundException"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let mut op = GenerateRandom::builder()
        .number_of_bytes(64)
        .custom_key_store_id("does not exist")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614955644));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let err = client.call(op).await.expect_err("this key store doesn't exist");
    let err = err.service_error().expect("modeled error");
    assert!(err.is_custom_key_store_not_found_exception());
    assert!(matches!(
        err.kind,
        GenerateRandomErrorKind::CustomKeyStoreNotFoundException(_)
    ));
    assert_eq!(err.code(), Some("CustomKeyStoreNotFoundException"));
    assert_eq!(
        err.request_id(),
        Some("bfe81a0a-9a08-4e71-9910-cdb5ab6ea3b6")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn error_code_is_sanitized() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("{}"))
            .unwrap(),
        http::Response::builder()
            .status(500)
            .header("content-type", "application/x-amz-json-1.1")
            .body(r#"{"__type":"com.amazonaws.kms#KMSInternalException:http://internal.amazon.com/coral/","message":"try again later"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone()).with_retry_config(
        aws_hyper::RetryConfig::default()
            .with_max_attempts(1)
            .with_base(|| 0_f64),
    );
    let op = ListKeys::builder()
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client.call(op).await.expect_err("internal error");
    let err = err.service_error().expect("modeled error");
    assert_eq!(err.code(), Some("KMSInternalException"));
    assert_eq!(err.message(), Some("try again later"));
    assert!(matches!(err.kind, ListKeysErrorKind::KmsInternalException(_)));
}

#[tokio::test]
async fn unknown_error_code_is_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from("{}"))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "BrandNewException")
            .body(r#"{"message":"not in this model"}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = ListKeys::builder()
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let err = client.call(op).await.expect_err("unmodeled error");
    let err = err.service_error().expect("service responded");
    assert!(matches!(err.kind, ListKeysErrorKind::Unhandled(_)));
    assert_eq!(err.code(), Some("BrandNewException"));
    assert_eq!(err.message(), Some("not in this model"));
    assert!(!err.is_kms_internal_exception());

    let flattened = kms::Error::from(SdkError::ServiceError {
        raw: http::Response::builder().status(400).body(SdkBody::empty()).unwrap(),
        err: kms::error::ListKeysError::unhandled("boom"),
    });
    assert!(matches!(flattened, kms::Error::Unhandled(_)));
}

#[test]
fn missing_required_field() {
    let err = Encrypt::builder()
        .key_id("alias/my-key")
        .build()
        .expect_err("plaintext is required");
    match err {
        BuildError::MissingField { field, .. } => assert_eq!(field, "plaintext"),
        other => panic!("expected a missing field, got {:?}", other),
    }
    let input = Encrypt::builder()
        .key_id("alias/my-key")
        .plaintext(kms::Blob::new("secret"))
        .build()
        .expect("both required fields are set");
    assert_eq!(input.key_id(), Some("alias/my-key"));
    assert!(input.make_operation(&test_conf()).is_ok());
}

#[tokio::test]
async fn unknown_enum_value_is_preserved() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"KeyId":"alias/my-key"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"KeyMetadata":{"AWSAccountId":"123456789012","KeyId":"1234abcd","Enabled":true,"CreationDate":1.614952162E9,"KeyState":"PendingReplicaDeletion"}}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = DescribeKey::builder()
        .key_id("alias/my-key")
        .build()
        .unwrap()
        .make_operation(&test_conf())
        .unwrap();
    let resp = client.call(op).await.expect("success");
    let metadata = resp.key_metadata().expect("metadata present");
    assert_eq!(metadata.aws_account_id(), Some("123456789012"));
    assert_eq!(metadata.enabled(), Some(true));
    assert_eq!(
        metadata.creation_date().map(|d| d.epoch_seconds()),
        Some(1614952162)
    );
    assert_eq!(
        metadata.key_state(),
        Some(&KeyState::Unknown("PendingReplicaDeletion".to_string()))
    );
    assert_eq!(
        metadata.key_state().map(|s| s.as_str()),
        Some("PendingReplicaDeletion")
    );
    assert_eq!(KeyState::from("Enabled"), KeyState::Enabled);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn fluent_client() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "TrentService.GenerateRandom")
            .uri(Uri::from_static("https://kms.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"NumberOfBytes":4}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"Plaintext":"AAECAw=="}"#)
            .unwrap(),
    )]);
    let client = kms::Client::from_conf_conn(test_conf(), conn.clone());
    let resp = client
        .generate_random()
        .number_of_bytes(4)
        .send()
        .await
        .expect("success");
    assert_eq!(
        resp.plaintext().map(|b| b.as_ref().to_vec()),
        Some(vec![0, 1, 2, 3])
    );
    let requests = conn.requests();
    let sent = &requests[0].actual;
    assert!(sent.headers().contains_key("authorization"));
    assert!(sent.headers().contains_key("x-amz-date"));
    drop(requests);
    conn.assert_requests_match(&[]);
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn full_create_key() -> kms::input::create_key_input::Builder {
    CreateKeyInput::builder()
        .policy("{\"Version\":\"2012-10-17\"}")
        .description("payments key")
        .key_usage(KeyUsageType::EncryptDecrypt)
        .customer_master_key_spec(CustomerMasterKeySpec::Rsa2048)
        .origin(OriginType::AwsKms)
        .custom_key_store_id("cks-1234567890abcdef0")
        .bypass_policy_lockout_safety_check(false)
        .tags(Tag::builder().tag_key("team").tag_value("payments").build())
}

#[test]
fn builder_round_trips_every_field() {
    let input = full_create_key().build().unwrap();
    assert_eq!(input.policy(), Some("{\"Version\":\"2012-10-17\"}"));
    assert_eq!(input.description(), Some("payments key"));
    assert_eq!(input.key_usage(), Some(&KeyUsageType::EncryptDecrypt));
    assert_eq!(
        input.customer_master_key_spec(),
        Some(&CustomerMasterKeySpec::Rsa2048)
    );
    assert_eq!(input.origin(), Some(&OriginType::AwsKms));
    assert_eq!(input.custom_key_store_id(), Some("cks-1234567890abcdef0"));
    assert_eq!(input.bypass_policy_lockout_safety_check(), Some(false));
    let tags = input.tags().expect("tags set");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].tag_key(), Some("team"));
    assert_eq!(tags[0].tag_value(), Some("payments"));
}

#[test]
fn equality_and_hash_are_structural() {
    let a = full_create_key().build().unwrap();
    let b = full_create_key().build().unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let variants = vec![
        full_create_key().policy("{}").build().unwrap(),
        full_create_key().description("other key").build().unwrap(),
        full_create_key().key_usage(KeyUsageType::SignVerify).build().unwrap(),
        full_create_key()
            .customer_master_key_spec(CustomerMasterKeySpec::Rsa3072)
            .build()
            .unwrap(),
        full_create_key().origin(OriginType::External).build().unwrap(),
        full_create_key().set_custom_key_store_id(None).build().unwrap(),
        full_create_key()
            .bypass_policy_lockout_safety_check(true)
            .build()
            .unwrap(),
        full_create_key()
            .tags(Tag::builder().tag_key("env").tag_value("prod").build())
            .build()
            .unwrap(),
    ];
    for variant in &variants {
        assert_ne!(&a, variant);
        assert_ne!(hash_of(&a), hash_of(variant), "{:?}", variant);
    }

    let mut seen = HashSet::new();
    seen.insert(KeyState::Enabled);
    seen.insert(KeyState::from("Enabled"));
    assert_eq!(seen.len(), 1);
}
