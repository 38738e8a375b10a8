/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.

mod canonical_request;

use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use crate::SigningParams;
use canonical_request::{CanonicalRequest, StringToSign, HMAC_256};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use http::{Method, Uri};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SigningError {
    #[error("request has no host header and the URI has no authority")]
    MissingHost,
    #[error("header value could not be used for signing: {0}")]
    InvalidHeaderValue(String),
}

/// The body of a request, as seen by the signer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignableBody<'a> {
    /// A body composed of a slice of bytes
    Bytes(&'a [u8]),
    /// The literal `UNSIGNED-PAYLOAD` is signed in place of a payload hash
    UnsignedPayload,
    /// A hex encoded SHA-256 digest that was computed ahead of time
    Precomputed(String),
}

/// The parts of an HTTP request that take part in the signature.
#[derive(Debug)]
pub struct SignableRequest<'a> {
    pub method: &'a Method,
    pub uri: &'a Uri,
    pub headers: &'a HeaderMap<HeaderValue>,
    pub body: SignableBody<'a>,
}

impl<'a> SignableRequest<'a> {
    /// Borrow the signable parts of `request` with `body` as its payload
    pub fn from_http<B>(request: &'a http::Request<B>, body: SignableBody<'a>) -> Self {
        SignableRequest {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
            body,
        }
    }
}

/// Headers that must be added to the request along with the computed signature.
#[derive(Debug)]
pub struct SigningOutput {
    headers: HeaderMap<HeaderValue>,
    signature: String,
}

impl SigningOutput {
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    /// Adds the signing headers to `request`, replacing existing values
    pub fn apply_to_request<B>(self, request: &mut http::Request<B>) {
        for (name, value) in self.headers.into_iter() {
            if let Some(name) = name {
                request.headers_mut().insert(name, value);
            }
        }
    }
}

/// Produces an `Authorization` header and the `x-amz-*` headers that go with it
pub fn sign(
    request: SignableRequest<'_>,
    params: &SigningParams<'_>,
) -> Result<SigningOutput, SigningError> {
    let creq = CanonicalRequest::from(&request, params)?;
    tracing::trace!(canonical_request = %creq);
    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(
        params.time,
        params.region,
        params.service_name,
        encoded_creq,
    );
    let signing_key = generate_signing_key(
        params.secret_key,
        params.time,
        params.region,
        params.service_name,
    );
    let signature = calculate_signature(signing_key, sts.to_string().as_bytes());

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256, params.access_key, sts.scope, creq.signed_headers, signature
    );
    let mut headers = creq.added_headers;
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&authorization)
            .map_err(|_| SigningError::InvalidHeaderValue(authorization.clone()))?,
    );
    Ok(SigningOutput { headers, signature })
}

#[cfg(test)]
mod tests {
    use super::{sign, SignableBody, SignableRequest};
    use crate::{PayloadChecksumKind, SigningParams, SigningSettings};
    use http::Request;
    use pretty_assertions::assert_eq;
    use std::time::{Duration, UNIX_EPOCH};

    fn params<'a>(service_name: &'a str, settings: SigningSettings) -> SigningParams<'a> {
        SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            security_token: None,
            region: "us-east-1",
            service_name,
            time: UNIX_EPOCH + Duration::from_secs(1440938160),
            settings,
        }
    }

    fn signed<B: AsRef<[u8]>>(
        mut req: Request<B>,
        params: &SigningParams<'_>,
    ) -> (String, Request<B>) {
        let out = {
            let body = SignableBody::Bytes(req.body().as_ref());
            sign(SignableRequest::from_http(&req, body), params).expect("signing succeeds")
        };
        let signature = out.signature().to_string();
        out.apply_to_request(&mut req);
        (signature, req)
    }

    #[test]
    fn get_vanilla() {
        let req = Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("host", "example.amazonaws.com")
            .body("")
            .unwrap();
        let (signature, req) = signed(req, &params("service", SigningSettings::default()));
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(
            req.headers()["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");
    }

    #[test]
    fn host_comes_from_uri_when_header_is_absent() {
        let req = Request::builder()
            .uri("https://example.amazonaws.com/")
            .body("")
            .unwrap();
        let (signature, req) = signed(req, &params("service", SigningSettings::default()));
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert!(req.headers().get("host").is_none());
    }

    #[test]
    fn get_vanilla_query_order_key_case() {
        let req = Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .header("host", "example.amazonaws.com")
            .body("")
            .unwrap();
        let (signature, _) = signed(req, &params("service", SigningSettings::default()));
        assert_eq!(
            signature,
            "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
    }

    #[test]
    fn post_x_www_form_urlencoded() {
        let req = Request::builder()
            .method("POST")
            .uri("https://example.amazonaws.com/")
            .header("host", "example.amazonaws.com")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("Param1=value1")
            .unwrap();
        let (signature, _) = signed(req, &params("service", SigningSettings::default()));
        assert_eq!(
            signature,
            "ff11897932ad3f4e8b18135d722051e5ac45fc38421b1da7b9d196a0fe09473a"
        );
    }

    #[test]
    fn header_values_are_trimmed() {
        let req = Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("host", "example.amazonaws.com")
            .header("My-Header1", "  value1  a   b ")
            .body("")
            .unwrap();
        let (signature, _) = signed(req, &params("service", SigningSettings::default()));
        assert_eq!(
            signature,
            "f8abef309833a862aa415a3a36f92896dd1b70e10846f5761af0278c0a2ded4c"
        );
    }

    #[test]
    fn user_agent_is_not_signed() {
        let req = Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("host", "example.amazonaws.com")
            .header("user-agent", "aws-sdk-rust/0.1.0")
            .body("")
            .unwrap();
        let (signature, _) = signed(req, &params("service", SigningSettings::default()));
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn session_token_and_content_sha() {
        let req = Request::builder()
            .method("POST")
            .uri("https://kms.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "TrentService.ListKeys")
            .body("{}")
            .unwrap();
        let mut params = params(
            "kms",
            SigningSettings {
                payload_checksum_kind: PayloadChecksumKind::XAmzSha256,
                ..Default::default()
            },
        );
        params.security_token = Some("session-token");
        let (signature, req) = signed(req, &params);
        assert_eq!(
            signature,
            "6918b2d441860181af5cf7f1542013a4a9944c162703a0622e7c2af7e8d59175"
        );
        let auth = req.headers()["authorization"].to_str().unwrap();
        assert!(auth.contains(
            "SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date;x-amz-security-token;x-amz-target"
        ));
        assert_eq!(req.headers()["x-amz-security-token"], "session-token");
        assert_eq!(
            req.headers()["x-amz-content-sha256"],
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn encoded_path_is_double_encoded() {
        let req = Request::builder()
            .uri("https://iot.us-east-1.amazonaws.com/things/my%20thing")
            .body("")
            .unwrap();
        let (signature, _) = signed(req, &params("execute-api", SigningSettings::default()));
        assert_eq!(
            signature,
            "89621a6b3cf34f1e6a4bb9ba8a44172641cbfaff20e7fbaab30406a3daaa56ce"
        );
    }
}
