/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides functions for calculating Sigv4 signing keys, signatures, and
//! optional utilities for signing HTTP requests.

mod date_fmt;
pub mod http_request;
pub mod sign;

use std::time::SystemTime;

/// Parameters to use when signing.
#[derive(Debug)]
pub struct SigningParams<'a> {
    /// Access Key ID to use.
    pub access_key: &'a str,
    /// Secret access key to use.
    pub secret_key: &'a str,
    /// (Optional) Security token to use.
    pub security_token: Option<&'a str>,

    /// Region to sign for.
    pub region: &'a str,
    /// AWS Service Name to sign for.
    pub service_name: &'a str,
    /// Timestamp to use in the signature (should be `SystemTime::now()` unless testing).
    pub time: SystemTime,

    /// Additional signing settings.
    pub settings: SigningSettings,
}

/// HTTP signing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningSettings {
    /// Whether the payload hash is also sent as `x-amz-content-sha256`.
    pub payload_checksum_kind: PayloadChecksumKind,
    /// How the path is encoded in the canonical request.
    pub uri_encoding: UriEncoding,
}

impl Default for SigningSettings {
    fn default() -> Self {
        SigningSettings {
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
            uri_encoding: UriEncoding::Double,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadChecksumKind {
    /// Add an `x-amz-content-sha256` header with the payload hash
    XAmzSha256,
    /// Do not add a payload checksum header
    NoHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriEncoding {
    /// Re-encode the already encoded path (every service except S3)
    Double,
    /// Use the path as it appears in the request
    Single,
}
