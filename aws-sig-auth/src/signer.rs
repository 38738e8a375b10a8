/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest};
use aws_sigv4::{PayloadChecksumKind, SigningParams, SigningSettings, UriEncoding};
use aws_types::region::SigningRegion;
use aws_types::SigningService;
use smithy_http::body::SdkBody;
use std::time::SystemTime;

pub use aws_sigv4::http_request::SigningError;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum HttpSignatureType {
    /// The signature is added to the request headers
    HttpRequestHeaders,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signature_type: HttpSignatureType,
    pub signing_options: SigningOptions,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration used by most operations
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signature_type: HttpSignatureType::HttpRequestHeaders,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
            signing_requirements: SigningRequirements::Required,
        }
    }

    /// Configuration for operations that may be called anonymously
    pub fn optional() -> Self {
        let mut config = Self::default_config();
        config.signing_requirements = SigningRequirements::Optional;
        config
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SigningRequirements {
    /// A signature MAY be added if credentials are defined
    Optional,

    /// A signature MUST be added.
    ///
    /// If no credentials are provided, this will return an error without dispatching the operation.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Clone, Debug, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        SigningSettings {
            uri_encoding: if operation_config.signing_options.double_uri_encode {
                UriEncoding::Double
            } else {
                UriEncoding::Single
            },
            payload_checksum_kind: if operation_config.signing_options.content_sha256_header {
                PayloadChecksumKind::XAmzSha256
            } else {
                PayloadChecksumKind::NoHeader
            },
        }
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// Although this function may be used, end users will not typically
    /// interact with this code. It is generally used via middleware in the request pipeline. See [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<SdkBody>,
    ) -> Result<(), SigningError> {
        let params = SigningParams {
            access_key: credentials.access_key_id(),
            secret_key: credentials.secret_access_key(),
            security_token: credentials.session_token(),
            region: request_config.region.as_ref(),
            service_name: request_config.service.as_ref(),
            time: request_config.request_ts,
            settings: Self::settings(operation_config),
        };

        let output = {
            // A body that is already in memory is hashed; streaming bodies are sent unsigned
            let body = request
                .body()
                .bytes()
                .map(SignableBody::Bytes)
                .unwrap_or(SignableBody::UnsignedPayload);
            sign(SignableRequest::from_http(request, body), &params)?
        };
        tracing::trace!(signature = output.signature(), "signed request");
        output.apply_to_request(request);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{OperationSigningConfig, RequestConfig, SigV4Signer, SigningRequirements};
    use aws_auth::Credentials;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;
    use smithy_http::body::SdkBody;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn signs_with_default_config() {
        let mut request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("host", "example.amazonaws.com")
            .body(SdkBody::from(""))
            .unwrap();
        let creds = Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
        );
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("service");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH + Duration::from_secs(1440938160),
            region: &region,
            service: &service,
        };
        SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut request,
            )
            .expect("signing succeeds");
        assert_eq!(
            request.headers()["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(request.body().bytes(), Some(&b""[..]));
    }

    #[test]
    fn optional_config() {
        assert_eq!(
            OperationSigningConfig::optional().signing_requirements,
            SigningRequirements::Optional
        );
        assert!(OperationSigningConfig::default_config().signing_options.double_uri_encode);
    }
}
