/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod env;

use crate::Credentials;
use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available from this provider
    #[error("CredentialsNotLoaded")]
    CredentialsNotLoaded,

    /// The provider found credentials that cannot be used
    #[error("invalid credentials configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

pub type CredentialsResult = Result<Credentials, CredentialsError>;

/// A credentials provider
///
/// Providers are consulted on every request by the signing stage, so they must be cheap to call;
/// providers that talk to the network should cache internally.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> CredentialsResult;
}

pub type CredentialsProvider = Arc<dyn ProvideCredentials>;

pub fn default_provider() -> impl ProvideCredentials {
    env::EnvironmentVariableCredentialsProvider::new()
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> CredentialsResult {
        Ok(self.clone())
    }
}

impl<T: ProvideCredentials + ?Sized> ProvideCredentials for Arc<T> {
    fn provide_credentials(&self) -> CredentialsResult {
        self.as_ref().provide_credentials()
    }
}

#[cfg(test)]
mod test {
    use crate::provider::{CredentialsError, ProvideCredentials};
    use crate::Credentials;
    use std::error::Error;

    #[test]
    fn static_credentials() {
        let creds = Credentials::from_keys("akid", "secret", Some("token".to_string()));
        let provided = creds.provide_credentials().unwrap();
        assert_eq!(provided, creds);
        assert_eq!(provided.provider_name(), "Static");
    }

    #[test]
    fn error_display_and_source() {
        assert_eq!(
            CredentialsError::CredentialsNotLoaded.to_string(),
            "CredentialsNotLoaded"
        );
        let err = CredentialsError::Unhandled("boom".into());
        assert_eq!(err.to_string(), "boom");
        assert!(CredentialsError::CredentialsNotLoaded.source().is_none());
    }
}
