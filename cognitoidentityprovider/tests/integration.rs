/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::provider::{CredentialsError, CredentialsResult, ProvideCredentials};
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use cognitoidentityprovider::model::{
    AttributeType, DeliveryMediumType, MfaOptionType, StatusType, UserStatusType, UserType,
};
use cognitoidentityprovider::operation::{CreateUserPool, ListUserPools, SignUp};
use cognitoidentityprovider::{Config, Credentials, Region};
use http::header::AUTHORIZATION;
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_types::Instant;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, UNIX_EPOCH};

/// A provider that never has credentials, like an unauthenticated mobile client
struct NoCredentials;

impl ProvideCredentials for NoCredentials {
    fn provide_credentials(&self) -> CredentialsResult {
        Err(CredentialsError::CredentialsNotLoaded)
    }
}

fn conf_with(provider: impl ProvideCredentials + 'static) -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(provider)
        .build()
}

fn test_creds() -> Credentials {
    Credentials::from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None)
}

#[tokio::test]
async fn create_user_pool() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSCognitoIdentityProviderService.CreateUserPool")
            .header("content-length", "24")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/cognito-idp/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-target;x-amz-user-agent, Signature=e52ce54561a431307288c7a60fe044b66e96e47faf83fd7f19d69f0043f18f87")
            .header("x-amz-date", "20210305T134922Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://cognito-idp.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"PoolName":"customers"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"UserPool":{"Id":"us-east-1_AbCdEfGhI","Name":"customers","Status":"Enabled","CreationDate":1.614952162E9}}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let mut op = CreateUserPool::builder()
        .pool_name("customers")
        .build()
        .unwrap()
        .make_operation(&conf_with(test_creds()))
        .unwrap();
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let resp = client.call(op).await.expect("request should succeed");
    let pool = resp.user_pool().expect("pool returned");
    assert_eq!(pool.id(), Some("us-east-1_AbCdEfGhI"));
    assert_eq!(pool.name(), Some("customers"));
    assert_eq!(pool.status(), Some(&StatusType::Enabled));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn sign_up_is_sent_unsigned_without_credentials() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSCognitoIdentityProviderService.SignUp")
            .uri(Uri::from_static("https://cognito-idp.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(
                r#"{"ClientId":"4r1h9example","Username":"jane","Password":"correct horse battery staple"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"UserConfirmed":false,"UserSub":"5f2b9c3d-0000-4a6e-9bbd-0f4a9e8c1a77","CodeDeliveryDetails":{"Destination":"j***@example.com","DeliveryMedium":"EMAIL","AttributeName":"email"}}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = SignUp::builder()
        .client_id("4r1h9example")
        .username("jane")
        .password("correct horse battery staple")
        .build()
        .unwrap()
        .make_operation(&conf_with(NoCredentials))
        .unwrap();
    let resp = client.call(op).await.expect("unsigned request succeeds");
    assert!(!resp.user_confirmed());
    assert_eq!(
        resp.user_sub(),
        Some("5f2b9c3d-0000-4a6e-9bbd-0f4a9e8c1a77")
    );
    assert_eq!(
        resp.code_delivery_details().and_then(|d| d.destination()),
        Some("j***@example.com")
    );
    assert!(!conn.requests()[0].actual.headers().contains_key(AUTHORIZATION));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn sign_up_is_signed_when_credentials_exist() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("https://cognito-idp.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(
                r#"{"ClientId":"4r1h9example","Username":"jane","Password":"hunter2"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{"UserConfirmed":true}"#)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let op = SignUp::builder()
        .client_id("4r1h9example")
        .username("jane")
        .password("hunter2")
        .build()
        .unwrap()
        .make_operation(&conf_with(test_creds()))
        .unwrap();
    let resp = client.call(op).await.expect("success");
    assert!(resp.user_confirmed());
    assert!(conn.requests()[0].actual.headers().contains_key(AUTHORIZATION));
}

#[tokio::test]
async fn signed_operation_fails_without_credentials() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let client = Client::new(conn.clone());
    let op = CreateUserPool::builder()
        .pool_name("customers")
        .build()
        .unwrap()
        .make_operation(&conf_with(NoCredentials))
        .unwrap();
    let err = client.call(op).await.expect_err("signing requires credentials");
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "expected a construction failure, got {:?}",
        err
    );
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn too_many_requests_is_retried() {
    let expected = || {
        http::Request::builder()
            .header("x-amz-target", "AWSCognitoIdentityProviderService.ListUserPools")
            .uri(Uri::from_static("https://cognito-idp.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(r#"{"MaxResults":10}"#))
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (
            expected(),
            http::Response::builder()
                .status(400)
                .header("x-amzn-errortype", "TooManyRequestsException:http://internal.amazon.com/coral/com.amazonaws.cognito.identity.idp.model/")
                .body(r#"{"message":"Rate exceeded"}"#)
                .unwrap(),
        ),
        (
            expected(),
            http::Response::builder()
                .status(200)
                .body(r#"{"UserPools":[{"Id":"us-east-1_AbCdEfGhI","Name":"customers","Status":"Enabled"},{"Id":"us-east-1_ZyXwVuTsR","Name":"staff","Status":"Retired"}]}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::new(conn.clone()).with_retry_config(RetryConfig::default().with_base(|| 0_f64));
    let op = ListUserPools::builder()
        .max_results(10)
        .build()
        .unwrap()
        .make_operation(&conf_with(test_creds()))
        .unwrap();
    let resp = client.call(op).await.expect("retry succeeds");
    let pools = resp.user_pools().expect("pools listed");
    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].name(), Some("customers"));
    assert_eq!(
        pools[1].status(),
        Some(&StatusType::Unknown("Retired".to_string()))
    );
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[test]
fn required_fields_are_reported() {
    let err = SignUp::builder()
        .client_id("4r1h9example")
        .username("jane")
        .build()
        .expect_err("password is required");
    assert_eq!(
        err.to_string(),
        "password was missing. password was not specified but it is required when building SignUpInput"
    );
    assert!(ListUserPools::builder().build().is_err());
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn email_attribute() -> AttributeType {
    AttributeType::builder()
        .name("email")
        .value("jane@example.com")
        .build()
}

fn sms_mfa() -> MfaOptionType {
    MfaOptionType::builder()
        .delivery_medium(DeliveryMediumType::Sms)
        .attribute_name("phone_number")
        .build()
}

fn jane() -> cognitoidentityprovider::model::user_type::Builder {
    UserType::builder()
        .username("jane")
        .attributes(email_attribute())
        .user_create_date(Instant::from_epoch_seconds(1614952162))
        .user_last_modified_date(Instant::from_epoch_seconds(1614952200))
        .enabled(true)
        .user_status(UserStatusType::Confirmed)
        .mfa_options(sms_mfa())
}

#[test]
fn model_round_trips_every_field() {
    let user = jane().build();
    assert_eq!(user.username(), Some("jane"));
    assert_eq!(user.attributes(), Some(&[email_attribute()][..]));
    assert_eq!(
        user.user_create_date(),
        Some(&Instant::from_epoch_seconds(1614952162))
    );
    assert_eq!(
        user.user_last_modified_date(),
        Some(&Instant::from_epoch_seconds(1614952200))
    );
    assert!(user.enabled());
    assert_eq!(user.user_status(), Some(&UserStatusType::Confirmed));
    assert_eq!(user.mfa_options(), Some(&[sms_mfa()][..]));
}

#[test]
fn equality_and_hash_are_structural() {
    let a = jane().build();
    let b = jane().build();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    let variants = vec![
        jane().username("john").build(),
        jane()
            .attributes(AttributeType::builder().name("locale").value("en").build())
            .build(),
        jane()
            .user_create_date(Instant::from_epoch_seconds(1500000000))
            .build(),
        jane().set_user_last_modified_date(None).build(),
        jane().enabled(false).build(),
        jane().user_status(UserStatusType::UnknownValue).build(),
        jane().set_mfa_options(None).build(),
    ];
    for variant in &variants {
        assert_ne!(&a, variant);
        assert_ne!(hash_of(&a), hash_of(variant), "{:?}", variant);
    }
}
