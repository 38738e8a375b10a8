/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;

/// Endpoint metadata
///
/// Every generated service carries one of these describing its regional endpoint pattern.
#[derive(Debug, Clone)]
pub struct Metadata {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,

    /// Signature versions supported by this endpoint.
    ///
    /// Currently unused since the SDK only supports SigV4
    pub signature_versions: SignatureVersion,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SignatureVersion {
    V4,
}

impl ResolveAwsEndpoint for Metadata {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::immutable(uri.parse()?);
        let credential_scope = CredentialScope {
            service: self.credential_scope.service.clone(),
            region: self
                .credential_scope
                .region
                .clone()
                .or_else(|| Some(region.clone().into())),
        };
        Ok(AwsEndpoint::new(endpoint, credential_scope))
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::{Metadata, Protocol, SignatureVersion};
    use crate::{CredentialScope, ResolveAwsEndpoint};
    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;
    use http::Uri;

    #[test]
    fn substitutes_region() {
        let metadata = Metadata {
            uri_template: "sns.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
            signature_versions: SignatureVersion::V4,
        };
        let endpoint = metadata
            .resolve_endpoint(&Region::new("eu-west-1"))
            .expect("valid endpoint");
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri).unwrap();
        assert_eq!(uri, Uri::from_static("https://sns.eu-west-1.amazonaws.com/"));
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from(Region::new("eu-west-1")))
        );
        assert_eq!(endpoint.credential_scope().service(), None);
    }

    #[test]
    fn credential_scope_overrides() {
        let metadata = Metadata {
            uri_template: "iot.{region}.amazonaws.com",
            protocol: Protocol::Http,
            credential_scope: CredentialScope::builder()
                .service(SigningService::from_static("execute-api"))
                .build(),
            signature_versions: SignatureVersion::V4,
        };
        let endpoint = metadata
            .resolve_endpoint(&Region::new("us-east-2"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.credential_scope().service(),
            Some(&SigningService::from_static("execute-api"))
        );
        let mut uri = Uri::from_static("/things?maxResults=5");
        endpoint.set_endpoint(&mut uri).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("http://iot.us-east-2.amazonaws.com/things?maxResults=5")
        );
    }

    #[test]
    fn invalid_region_fails() {
        let metadata = Metadata {
            uri_template: "kms.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
            signature_versions: SignatureVersion::V4,
        };
        metadata
            .resolve_endpoint(&Region::new("not a region"))
            .expect_err("spaces are not valid in a host");
    }
}
