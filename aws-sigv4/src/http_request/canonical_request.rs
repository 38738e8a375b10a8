/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{SignableBody, SignableRequest};
use crate::date_fmt::{format_date, format_date_time};
use crate::sign::sha256_hex_string;
use crate::{PayloadChecksumKind, SigningParams, UriEncoding};
use http::header::{AUTHORIZATION, HOST, USER_AGENT};
use http::{HeaderMap, HeaderValue};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::time::SystemTime;

pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";
pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub(crate) const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Characters left alone by query encoding: `A-Z a-z 0-9 - _ . ~`
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const PATH_SEGMENT: &AsciiSet = &UNRESERVED.remove(b'/');

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) params: String,
    /// Lowercased names to trimmed values, sorted by name
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) signed_headers: String,
    pub(crate) payload_hash: String,
    /// Headers the signer needs to add to the outgoing request
    pub(crate) added_headers: HeaderMap,
}

impl CanonicalRequest {
    pub(crate) fn from(
        req: &SignableRequest<'_>,
        params: &SigningParams<'_>,
    ) -> Result<CanonicalRequest, super::SigningError> {
        let payload_hash = match &req.body {
            SignableBody::Bytes(data) => sha256_hex_string(data),
            SignableBody::UnsignedPayload => UNSIGNED_PAYLOAD.to_string(),
            SignableBody::Precomputed(digest) => digest.clone(),
        };

        let mut added_headers = HeaderMap::new();
        let date_time = format_date_time(params.time);
        added_headers.insert(X_AMZ_DATE, header_value(&date_time)?);
        if let Some(token) = params.security_token {
            added_headers.insert(X_AMZ_SECURITY_TOKEN, header_value(token)?);
        }
        if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            added_headers.insert(X_AMZ_CONTENT_SHA_256, header_value(&payload_hash)?);
        }

        let mut headers = BTreeMap::new();
        let request_headers = req
            .headers
            .iter()
            .filter(|(name, _)| !added_headers.contains_key(*name));
        for (name, value) in request_headers.chain(added_headers.iter()) {
            if *name == USER_AGENT || *name == AUTHORIZATION {
                continue;
            }
            let value = value
                .to_str()
                .map_err(|_| super::SigningError::InvalidHeaderValue(name.to_string()))?;
            let entry = headers
                .entry(name.as_str().to_string())
                .or_insert_with(String::new);
            if !entry.is_empty() {
                entry.push(',');
            }
            entry.push_str(&trim_all(value));
        }
        if !headers.contains_key(HOST.as_str()) {
            let authority = req
                .uri
                .authority()
                .ok_or(super::SigningError::MissingHost)?;
            headers.insert(HOST.as_str().to_string(), authority.as_str().to_string());
        }
        let signed_headers = headers
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");

        Ok(CanonicalRequest {
            method: req.method.as_str().to_string(),
            path: canonical_path(req.uri.path(), params.settings.uri_encoding),
            params: canonical_query(req.uri.query()),
            headers,
            signed_headers,
            payload_hash,
            added_headers,
        })
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params)?;
        for (name, value) in &self.headers {
            writeln!(f, "{}:{}", name, value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, super::SigningError> {
    HeaderValue::from_str(value)
        .map_err(|_| super::SigningError::InvalidHeaderValue(value.to_string()))
}

/// Trims leading and trailing whitespace and collapses inner runs of spaces
fn trim_all(value: &str) -> Cow<'_, str> {
    let trimmed = value.trim();
    if trimmed.contains("  ") || trimmed.len() != value.len() {
        Cow::Owned(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
    } else {
        Cow::Borrowed(trimmed)
    }
}

fn canonical_path(path: &str, encoding: UriEncoding) -> String {
    let path = if path.is_empty() { "/" } else { path };
    match encoding {
        UriEncoding::Double => utf8_percent_encode(path, PATH_SEGMENT).to_string(),
        UriEncoding::Single => path.to_string(),
    }
}

fn canonical_query(query: Option<&str>) -> String {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return String::new(),
    };
    let mut params: Vec<(String, String)> = query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|param| {
            let (k, v) = match param.find('=') {
                Some(idx) => (&param[..idx], &param[idx + 1..]),
                None => (param, ""),
            };
            (reencode(k), reencode(v))
        })
        .collect();
    params.sort();
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn reencode(value: &str) -> String {
    let decoded = percent_decode_str(value).decode_utf8_lossy();
    utf8_percent_encode(&decoded, UNRESERVED).to_string()
}

#[derive(Debug, PartialEq)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    pub(crate) date_time: String,
    pub(crate) hashed_creq: String,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        time: SystemTime,
        region: &'a str,
        service: &'a str,
        hashed_creq: String,
    ) -> Self {
        StringToSign {
            scope: Scope {
                time,
                region,
                service,
            },
            date_time: format_date_time(time),
            hashed_creq,
        }
    }
}

impl fmt::Display for StringToSign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256, self.date_time, self.scope, self.hashed_creq
        )
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct Scope<'a> {
    pub(crate) time: SystemTime,
    pub(crate) region: &'a str,
    pub(crate) service: &'a str,
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            format_date(self.time),
            self.region,
            self.service
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_path, canonical_query, trim_all};
    use crate::UriEncoding;

    #[test]
    fn query_params_are_sorted_and_encoded() {
        assert_eq!(
            canonical_query(Some("Param2=value2&Param1=value1")),
            "Param1=value1&Param2=value2"
        );
        assert_eq!(canonical_query(Some("a=b%20c&flag")), "a=b%20c&flag=");
        assert_eq!(canonical_query(Some("k=x/y")), "k=x%2Fy");
        assert_eq!(canonical_query(None), "");
    }

    #[test]
    fn paths_are_double_encoded() {
        assert_eq!(
            canonical_path("/things/my%20thing", UriEncoding::Double),
            "/things/my%2520thing"
        );
        assert_eq!(
            canonical_path("/things/my%20thing", UriEncoding::Single),
            "/things/my%20thing"
        );
        assert_eq!(canonical_path("", UriEncoding::Double), "/");
    }

    #[test]
    fn header_values_are_trimmed() {
        assert_eq!(trim_all("  value1  a   b "), "value1 a b");
        assert_eq!(trim_all("plain"), "plain");
    }
}
