/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The AWS flavored client: a [`smithy_client::Client`] whose middleware resolves the endpoint,
//! sets the user agent and signs every request with SigV4.

#[cfg(feature = "test-util")]
pub use smithy_client::test_connection;

pub use smithy_client::bounds::SmithyConnector;
pub use smithy_client::retry::Config as RetryConfig;
pub use smithy_client::{SdkError, SdkSuccess};

use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_client::bounds;
use smithy_client::retry::RetryHandler;
use smithy_http::operation::Operation;
use smithy_http_tower::map_request::MapRequestLayer;
use std::fmt;
use tower::layer::util::{Identity, Stack};
use tower::{Service, ServiceBuilder};

/// The connector used when none is given: hyper over rustls
pub type StandardConnector = smithy_client::HyperAdapter<smithy_client::Https>;

type AwsMiddlewareStack = Stack<
    MapRequestLayer<SigV4SigningStage>,
    Stack<MapRequestLayer<UserAgentStage>, Stack<MapRequestLayer<AwsEndpointStage>, Identity>>,
>;

/// AWS Middleware Stack
///
/// This implements the middleware stack for this service. It will:
/// 1. Load credentials
/// 2. Sign requests
/// 3. Resolve endpoints
/// 4. Add headers (user agent)
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct AwsMiddleware;

impl AwsMiddleware {
    pub fn new() -> Self {
        AwsMiddleware::default()
    }
}

impl<S> tower::Layer<S> for AwsMiddleware {
    type Service = <AwsMiddlewareStack as tower::Layer<S>>::Service;

    fn layer(&self, inner: S) -> Self::Service {
        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        // These layers can be considered as occurring in order, that is, first resolve the
        // endpoint, then add the user agent, then sign.
        ServiceBuilder::new()
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(signer)
            .service(inner)
    }
}

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The internal connector must implement the following trait bound to be used to dispatch requests:
/// ```rust,ignore
///    S: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
///        + Send
///        + Clone
///        + 'static,
///    S::Error: Into<BoxError> + Send + Sync + 'static,
///    S::Future: Send + 'static,
/// ```
pub struct Client<C = StandardConnector> {
    inner: smithy_client::Client<C, AwsMiddleware>,
}

impl<C> fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl<C> Client<C> {
    pub fn new(connector: C) -> Self {
        Client {
            inner: smithy_client::Builder::new()
                .connector(connector)
                .middleware(AwsMiddleware::new())
                .build(),
        }
    }

    /// Replace the retry configuration of this client
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.inner.set_retry_config(retry_config);
        self
    }
}

impl Client<StandardConnector> {
    /// Construct an `https` based client
    pub fn https() -> Self {
        Client::new(smithy_client::https())
    }
}

impl<C> Client<C>
where
    C: bounds::SmithyConnector,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        RetryHandler: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        bounds::Parsed<<AwsMiddleware as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        self.inner.call(input).await
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        RetryHandler: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        bounds::Parsed<<AwsMiddleware as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        self.inner.call_raw(input).await
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn construct_default_client() {
        let c = crate::Client::https();
        fn is_send_sync<T: Send + Sync>(_c: T) {}
        is_send_sync(c);
    }

    #[cfg(feature = "test-util")]
    #[test]
    fn client_debug_hides_connector() {
        let conn = crate::test_connection::TestConnection::<&'static str>::new(vec![]);
        let client = crate::Client::new(conn);
        assert_eq!(format!("{:?}", client), "Client");
    }
}
