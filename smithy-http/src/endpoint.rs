/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, PathAndQuery, Scheme, Uri};
use std::str::FromStr;
use thiserror::Error;

/// API Endpoint
///
/// An endpoint supplies the scheme, the authority and an optional base path for a request.
/// The operation contributes the rest of the path and the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` must contain a scheme and an authority")]
    MissingAuthority(String),
    #[error("failed to build the request URI: {0}")]
    InvalidUri(#[from] http::Error),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// The URI is used exactly as given: no host prefix is added and the region is not
    /// substituted into it.
    ///
    /// # Example
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Point `uri` at this endpoint, keeping its path and query
    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        let (scheme, authority) = match (self.uri.scheme(), self.uri.authority()) {
            (Some(scheme), Some(authority)) => (scheme.clone(), authority.clone()),
            _ => return Err(InvalidEndpoint::MissingAuthority(self.uri.to_string())),
        };
        let path = merge_paths(&self.uri, uri);
        *uri = build(scheme, authority, path)?;
        Ok(())
    }
}

fn build(scheme: Scheme, authority: Authority, path: PathAndQuery) -> Result<Uri, http::Error> {
    Uri::builder()
        .scheme(scheme)
        .authority(authority)
        .path_and_query(path)
        .build()
}

fn merge_paths(endpoint: &Uri, uri: &Uri) -> PathAndQuery {
    let request_path = uri
        .path_and_query()
        .cloned()
        .unwrap_or_else(|| PathAndQuery::from_static("/"));
    let endpoint_path = endpoint.path().trim_end_matches('/');
    if endpoint_path.is_empty() {
        return request_path;
    }
    let merged = format!("{}{}", endpoint_path, request_path.as_str());
    PathAndQuery::from_str(&merged).unwrap_or(request_path)
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use http::Uri;

    #[test]
    fn endpoint_replaces_authority() {
        let endpoint = Endpoint::immutable(Uri::from_static("https://kms.us-east-1.amazonaws.com"));
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("https://kms.us-east-1.amazonaws.com/"));
    }

    #[test]
    fn endpoint_with_base_path() {
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000/iot/"));
        let mut uri = Uri::from_static("/things/lamp?expectedVersion=2");
        endpoint.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:8000/iot/things/lamp?expectedVersion=2")
        );
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let endpoint = Endpoint::immutable(Uri::from_static("/no/authority"));
        let mut uri = Uri::from_static("/");
        assert!(endpoint.set_endpoint(&mut uri).is_err());
    }
}
