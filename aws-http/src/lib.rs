/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod user_agent;

use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry policy that models AWS error codes as outlined in the SEP
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: &[u16] = &[500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    fn classify_error<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        classify_status(response)
    }
}

fn classify_status<B>(response: &http::Response<B>) -> RetryKind {
    if TRANSIENT_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
        RetryKind::Error(ErrorKind::TransientError)
    } else {
        RetryKind::NotRetryable
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, response: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        let kind = match response {
            Ok(_) => RetryKind::NotRetryable,
            Err(SdkError::ServiceError { err, raw }) => self.classify_error(err, raw),
            Err(SdkError::DispatchFailure(_)) => RetryKind::Error(ErrorKind::TransientError),
            Err(SdkError::ResponseError { raw, .. }) => classify_status(raw),
            Err(SdkError::ConstructionFailure(_)) => RetryKind::NotRetryable,
        };
        tracing::trace!(retry_kind = ?kind, "classified response");
        kind
    }
}

#[cfg(test)]
mod test {
    use crate::AwsErrorRetryPolicy;
    use smithy_http::body::SdkBody;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    struct UnmodeledError;

    struct CodedError {
        code: &'static str,
    }

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    fn make_err<E>(err: E, raw: http::Response<&'static str>) -> Result<SdkSuccess<()>, SdkError<E>> {
        Err(SdkError::ServiceError {
            err,
            raw: raw.map(SdkBody::from),
        })
    }

    fn classify<E: ProvideErrorKind>(
        policy: &AwsErrorRetryPolicy,
        result: &Result<SdkSuccess<()>, SdkError<E>>,
    ) -> RetryKind {
        policy.classify(result.as_ref())
    }

    #[test]
    fn not_an_error() {
        let policy = AwsErrorRetryPolicy::new();
        let test_response = http::Response::new("OK");
        assert_eq!(
            classify(&policy, &make_err(UnmodeledError, test_response)),
            RetryKind::NotRetryable
        );
        let success: Result<SdkSuccess<()>, SdkError<UnmodeledError>> = Ok(SdkSuccess {
            raw: http::Response::new(SdkBody::from("OK")),
            parsed: (),
        });
        assert_eq!(classify(&policy, &success), RetryKind::NotRetryable);
    }

    #[test]
    fn classify_by_response_status() {
        let policy = AwsErrorRetryPolicy::new();
        for status in &[500, 502, 503, 504] {
            let test_resp = http::Response::builder()
                .status(*status)
                .body("error!")
                .unwrap();
            assert_eq!(
                classify(&policy, &make_err(UnmodeledError, test_resp)),
                RetryKind::Error(ErrorKind::TransientError)
            );
        }
        let test_resp = http::Response::builder()
            .status(400)
            .body("error!")
            .unwrap();
        assert_eq!(
            classify(&policy, &make_err(UnmodeledError, test_resp)),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_error_code() {
        let policy = AwsErrorRetryPolicy::new();

        assert_eq!(
            classify(
                &policy,
                &make_err(CodedError { code: "Throttling" }, http::Response::new("OK"))
            ),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );

        assert_eq!(
            classify(
                &policy,
                &make_err(
                    CodedError {
                        code: "RequestTimeout"
                    },
                    http::Response::new("OK")
                )
            ),
            RetryKind::Error(ErrorKind::TransientError)
        )
    }

    #[test]
    fn modeled_error_kind_takes_precedence_over_code() {
        struct ModeledError;
        impl ProvideErrorKind for ModeledError {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ServerError)
            }

            fn code(&self) -> Option<&str> {
                Some("ThrottlingException")
            }
        }
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            classify(&policy, &make_err(ModeledError, http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ServerError)
        );
        let throttled = http::Response::builder()
            .header("x-amz-retry-after", "250")
            .body("")
            .unwrap();
        assert_eq!(
            classify(&policy, &make_err(ModeledError, throttled)),
            RetryKind::Explicit(Duration::from_millis(250))
        );
    }

    #[test]
    fn classify_generic() {
        let mut err = smithy_types::Error::builder();
        err.code("SlowDown");
        let policy = AwsErrorRetryPolicy::new();
        assert_eq!(
            classify(&policy, &make_err(err.build(), http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn classify_by_error_kind() {
        struct ModeledRetries;
        impl ProvideErrorKind for ModeledRetries {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ClientError)
            }

            fn code(&self) -> Option<&str> {
                // code should not be called when `error_kind` is provided
                unimplemented!()
            }
        }

        let policy = AwsErrorRetryPolicy::new();

        assert_eq!(
            classify(&policy, &make_err(ModeledRetries, http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ClientError)
        );
    }

    #[test]
    fn test_retry_after_header() {
        let policy = AwsErrorRetryPolicy::new();
        let test_response = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .body("retry later")
            .unwrap();

        assert_eq!(
            classify(&policy, &make_err(UnmodeledError, test_response)),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn dispatch_failures_are_transient() {
        let policy = AwsErrorRetryPolicy::new();
        let err: Result<SdkSuccess<()>, SdkError<UnmodeledError>> =
            Err(SdkError::DispatchFailure("connection reset".into()));
        assert_eq!(
            classify(&policy, &err),
            RetryKind::Error(ErrorKind::TransientError)
        );
        let err: Result<SdkSuccess<()>, SdkError<UnmodeledError>> =
            Err(SdkError::ConstructionFailure("no region".into()));
        assert_eq!(classify(&policy, &err), RetryKind::NotRetryable);
    }
}
