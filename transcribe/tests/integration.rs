/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig};
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, UNIX_EPOCH};
use transcribe::error::StartTranscriptionJobErrorKind;
use transcribe::input::StartTranscriptionJobInput;
use transcribe::model::{LanguageCode, Media, MediaFormat, Settings, TranscriptionJobStatus};
use transcribe::operation::StartTranscriptionJob;
use transcribe::{Config, Credentials, Region};

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

fn interview_job() -> Operation<StartTranscriptionJob, AwsErrorRetryPolicy> {
    let mut op = StartTranscriptionJob::builder()
        .transcription_job_name("interview")
        .language_code(LanguageCode::EnUs)
        .media_format(MediaFormat::Wav)
        .media(
            Media::builder()
                .media_file_uri("s3://media-bucket/interview.wav")
                .build(),
        )
        .build()
        .expect("all required fields set")
        .make_operation(&test_conf())
        .expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    op
}

const JOB_BODY: &str = r#"{"TranscriptionJobName":"interview","LanguageCode":"en-US","MediaFormat":"wav","Media":{"MediaFileUri":"s3://media-bucket/interview.wav"}}"#;

const JOB_RESPONSE: &str = r#"{"TranscriptionJob":{"TranscriptionJobName":"interview","TranscriptionJobStatus":"IN_PROGRESS","LanguageCode":"en-US","MediaFormat":"wav","Media":{"MediaFileUri":"s3://media-bucket/interview.wav"},"CreationTime":1.614952162E9}}"#;

#[tokio::test]
async fn start_transcription_job() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "Transcribe.StartTranscriptionJob")
            .header("content-length", "138")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/transcribe/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-target;x-amz-user-agent, Signature=52d4766fccca358baf7e648f0be5a902ef20523c11ed1196e01653e72b2b0d54")
            .header("x-amz-date", "20210305T134922Z")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://transcribe.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(JOB_BODY))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "6f1c9b8a-3e1f-4c2a-9a54-2b8f0d0d8f11")
            .body(JOB_RESPONSE)
            .unwrap(),
    )]);
    let client = Client::new(conn.clone());
    let resp = client
        .call(interview_job())
        .await
        .expect("request should succeed");
    let job = resp.transcription_job().expect("job returned");
    assert_eq!(job.transcription_job_name(), Some("interview"));
    assert_eq!(
        job.transcription_job_status(),
        Some(&TranscriptionJobStatus::InProgress)
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn limit_exceeded_is_retried() {
    let expected = || {
        http::Request::builder()
            .header("x-amz-target", "Transcribe.StartTranscriptionJob")
            .uri(Uri::from_static("https://transcribe.us-east-1.amazonaws.com/"))
            .body(SdkBody::from(JOB_BODY))
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (
            expected(),
            http::Response::builder()
                .status(400)
                .header("x-amzn-requestid", "0a9b5f4e-2a55-4b3a-bc53-3dbd7d0f3e21")
                .body(r#"{"__type":"LimitExceededException","Message":"Slow down"}"#)
                .unwrap(),
        ),
        (
            expected(),
            http::Response::builder().status(200).body(JOB_RESPONSE).unwrap(),
        ),
    ]);
    let client = Client::new(conn.clone()).with_retry_config(RetryConfig::default().with_base(|| 0_f64));
    let resp = client
        .call(interview_job())
        .await
        .expect("second attempt succeeds");
    assert!(resp.transcription_job().is_some());
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn limit_exceeded_surfaces_after_retries() {
    let throttled = || {
        (
            http::Request::builder()
                .uri(Uri::from_static("https://transcribe.us-east-1.amazonaws.com/"))
                .body(SdkBody::from(JOB_BODY))
                .unwrap(),
            http::Response::builder()
                .status(400)
                .body(r#"{"__type":"LimitExceededException","Message":"Slow down"}"#)
                .unwrap(),
        )
    };
    let conn = TestConnection::new(vec![throttled(), throttled()]);
    let client = Client::new(conn.clone()).with_retry_config(
        RetryConfig::default()
            .with_max_attempts(2)
            .with_base(|| 0_f64),
    );
    let err = client
        .call(interview_job())
        .await
        .expect_err("throttled on every attempt");
    let err = err.service_error().expect("modeled error");
    assert!(err.is_limit_exceeded_exception());
    assert_eq!(err.message(), Some("Slow down"));
    assert!(matches!(
        err.kind,
        StartTranscriptionJobErrorKind::LimitExceededException(_)
    ));
    conn.assert_requests_match(&[]);
}

#[test]
fn enums_round_trip_their_wire_values() {
    assert_eq!(LanguageCode::EnUs.as_str(), "en-US");
    assert_eq!(LanguageCode::from("en-US"), LanguageCode::EnUs);
    assert_eq!(MediaFormat::Wav.as_str(), "wav");
    assert_eq!(
        "FUTURE_STATUS".parse::<TranscriptionJobStatus>(),
        Ok(TranscriptionJobStatus::Unknown("FUTURE_STATUS".to_string()))
    );
    assert!(LanguageCode::values().contains(&"en-US"));
}

#[test]
fn builders_chain_and_replace() {
    let input = StartTranscriptionJob::builder()
        .transcription_job_name("first")
        .set_transcription_job_name(Some("second".to_string()))
        .language_code(LanguageCode::EnUs)
        .media(Media::builder().media_file_uri("s3://b/k.wav").build())
        .build()
        .unwrap();
    assert_eq!(input.transcription_job_name(), Some("second"));
    assert_eq!(
        input.media().and_then(|m| m.media_file_uri()),
        Some("s3://b/k.wav")
    );
    assert!(input.media_format().is_none());
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn diarized() -> Settings {
    Settings::builder()
        .vocabulary_name("product-names")
        .show_speaker_labels(true)
        .max_speaker_labels(2)
        .build()
}

fn full_job() -> transcribe::input::start_transcription_job_input::Builder {
    StartTranscriptionJobInput::builder()
        .transcription_job_name("interview")
        .language_code(LanguageCode::EnUs)
        .media_sample_rate_hertz(16000)
        .media_format(MediaFormat::Wav)
        .media(
            Media::builder()
                .media_file_uri("s3://media-bucket/interview.wav")
                .build(),
        )
        .output_bucket_name("transcripts")
        .output_key("2021/interview.json")
        .output_encryption_kms_key_id("alias/transcripts")
        .settings(diarized())
        .identify_language(false)
        .language_options(LanguageCode::EnUs)
        .language_options(LanguageCode::EnGb)
}

#[test]
fn builder_round_trips_every_field() {
    let input = full_job().build().unwrap();
    assert_eq!(input.transcription_job_name(), Some("interview"));
    assert_eq!(input.language_code(), Some(&LanguageCode::EnUs));
    assert_eq!(input.media_sample_rate_hertz(), Some(16000));
    assert_eq!(input.media_format(), Some(&MediaFormat::Wav));
    assert_eq!(
        input.media().and_then(|m| m.media_file_uri()),
        Some("s3://media-bucket/interview.wav")
    );
    assert_eq!(input.output_bucket_name(), Some("transcripts"));
    assert_eq!(input.output_key(), Some("2021/interview.json"));
    assert_eq!(input.output_encryption_kms_key_id(), Some("alias/transcripts"));
    assert_eq!(input.settings(), Some(&diarized()));
    assert_eq!(
        input.settings().and_then(|s| s.max_speaker_labels()),
        Some(2)
    );
    assert_eq!(input.identify_language(), Some(false));
    assert_eq!(
        input.language_options(),
        Some(&[LanguageCode::EnUs, LanguageCode::EnGb][..])
    );
}

#[test]
fn equality_and_hash_are_structural() {
    let a = full_job().build().unwrap();
    let b = full_job().build().unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    let variants = vec![
        full_job().transcription_job_name("podcast").build().unwrap(),
        full_job().language_code(LanguageCode::EsUs).build().unwrap(),
        full_job().media_sample_rate_hertz(8000).build().unwrap(),
        full_job().media_format(MediaFormat::Mp3).build().unwrap(),
        full_job()
            .media(Media::builder().media_file_uri("s3://media-bucket/podcast.mp3").build())
            .build()
            .unwrap(),
        full_job().output_bucket_name("archive").build().unwrap(),
        full_job().set_output_key(None).build().unwrap(),
        full_job()
            .output_encryption_kms_key_id("alias/other")
            .build()
            .unwrap(),
        full_job()
            .settings(Settings::builder().show_alternatives(true).max_alternatives(3).build())
            .build()
            .unwrap(),
        full_job().identify_language(true).build().unwrap(),
        full_job()
            .language_options(LanguageCode::FrFr)
            .build()
            .unwrap(),
    ];
    for variant in &variants {
        assert_ne!(&a, variant);
        assert_ne!(hash_of(&a), hash_of(variant), "{:?}", variant);
    }
}
