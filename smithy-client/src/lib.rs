/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A Hyper-based Smithy service client.
#![warn(missing_debug_implementations, missing_docs)]

pub mod retry;

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

#[cfg(feature = "hyper")]
mod hyper_impls;

mod builder;
pub use builder::Builder;

#[cfg(feature = "hyper")]
pub use hyper_impls::HyperAdapter;
#[cfg(feature = "rustls")]
pub use hyper_impls::https;

/// Type alias for the standard HTTPS connector used by the generated clients.
#[cfg(feature = "rustls")]
pub type Https = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

use smithy_http::operation::Operation;
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use std::error::Error;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::{info_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

/// Smithy service client.
///
/// The service client is customizeable in a number of ways (see [`Builder`]). The middleware
/// fills out the [`http::Request`] for each higher-level operation so that it can ultimately be
/// sent to the remote host. The middleware is responsible for filling in any request parameters
/// that aren't specified by the Smithy protocol definition, such as those used for routing (like
/// the URL), authentication, and authorization.
///
/// The middleware takes the form of a [`tower::Layer`] that wraps the actual connection for each
/// request. The [`tower::Service`] that the middleware produces must accept requests of the type
/// [`smithy_http::operation::Request`] and return responses of the type
/// [`http::Response<SdkBody>`](smithy_http::body::SdkBody).
#[derive(Debug)]
pub struct Client<Connector, Middleware, RetryPolicy = retry::Standard> {
    connector: Connector,
    middleware: Middleware,
    retry_policy: RetryPolicy,
}

impl<C, M> Client<C, M> {
    /// Set the standard retry policy's configuration.
    pub fn set_retry_config(&mut self, config: retry::Config) {
        self.retry_policy.with_config(config);
    }
}

impl<C, M, R> Client<C, M, R>
where
    C: bounds::SmithyConnector,
    M: bounds::SmithyMiddleware<C>,
    R: retry::NewRequestPolicy,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        R::Policy: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        bounds::Parsed<<M as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        self.call_raw(input).await.map(|res| res.parsed)
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
        R::Policy: bounds::SmithyRetryPolicy<O, T, E, Retry>,
        // There is only one implementation of Service for Parsed (ParseResponseService) and it
        // applies whenever the bounds on C, M and R hold, but the compiler cannot see that.
        bounds::Parsed<<M as bounds::SmithyMiddleware<C>>::Service, O, Retry>:
            Service<Operation<O, Retry>, Response = SdkSuccess<T>, Error = SdkError<E>> + Clone,
    {
        let connector = self.connector.clone();
        let span = match input.metadata() {
            Some(metadata) => info_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => info_span!("send_operation"),
        };
        let mut svc = ServiceBuilder::new()
            // Create a new request-scoped policy
            .retry(self.retry_policy.new_request_policy())
            .layer(ParseResponseLayer::<O, Retry>::new())
            // These layers can be considered as occurring in order. That is, first invoke the
            // customer-provided middleware, then dispatch over the wire.
            .layer(&self.middleware)
            .layer(DispatchLayer::new())
            .service(connector);
        async move { svc.ready().await?.call(input).await }
            .instrument(span)
            .await
    }
}

/// This module holds convenient short-hands for the otherwise fairly extensive trait bounds
/// required for `call` and friends.
///
/// The short-hands will one day be true [trait aliases], but for now they are traits with blanket
/// implementations. Also, due to [compiler limitations], the bounds repeat a number of associated
/// types with bounds so that those bounds [do not need to be repeated] at the call site.
///
/// [trait aliases]: https://rust-lang.github.io/rfcs/1733-trait-alias.html
/// [compiler limitations]: https://github.com/rust-lang/rust/issues/20671
/// [do not need to be repeated]: https://github.com/rust-lang/rust/issues/20671#issuecomment-529752828
pub mod bounds {
    use super::*;
    use smithy_http::body::SdkBody;
    use smithy_http::response::ParseHttpResponse;
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::ProvideErrorKind;
    use tower::Layer;

    /// A service that has parsed a raw Smithy response.
    pub type Parsed<S, O, Retry> =
        smithy_http_tower::parse_response::ParseResponseService<S, O, Retry>;

    /// A low-level Smithy connector that maps from [`http::Request`] to [`http::Response`].
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyConnector:
        Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = <Self as SmithyConnector>::Error,
            Future = <Self as SmithyConnector>::Future,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound inference.
        type Error: Into<BoxError> + Send + Sync + 'static;

        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        type Future: Send + 'static;
    }

    impl<T> SmithyConnector for T
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
        type Error = T::Error;
        type Future = T::Future;
    }

    /// A Smithy middleware service that adjusts [`smithy_http::operation::Request`]s.
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyMiddlewareService:
        Service<
        smithy_http::operation::Request,
        Response = http::Response<SdkBody>,
        Error = smithy_http_tower::SendOperationError,
        Future = <Self as SmithyMiddlewareService>::Future,
    >
    {
        /// Forwarding type to `<Self as Service>::Future` for bound inference.
        type Future: Send + 'static;
    }

    impl<T> SmithyMiddlewareService for T
    where
        T: Service<
            smithy_http::operation::Request,
            Response = http::Response<SdkBody>,
            Error = smithy_http_tower::SendOperationError,
        >,
        T::Future: Send + 'static,
    {
        type Future = T::Future;
    }

    /// A Smithy middleware layer (i.e., factory).
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyMiddleware<C>:
        Layer<
        smithy_http_tower::dispatch::DispatchService<C>,
        Service = <Self as SmithyMiddleware<C>>::Service,
    >
    {
        /// Forwarding type to `<Self as Layer>::Service` for bound inference.
        type Service: SmithyMiddlewareService + Send + Clone + 'static;
    }

    impl<T, C> SmithyMiddleware<C> for T
    where
        T: Layer<smithy_http_tower::dispatch::DispatchService<C>>,
        T::Service: SmithyMiddlewareService + Send + Clone + 'static,
    {
        type Service = T::Service;
    }

    /// A Smithy retry policy.
    ///
    /// This trait has a blanket implementation for all compatible types, and should never need to
    /// be implemented.
    pub trait SmithyRetryPolicy<O, T, E, Retry>:
        tower::retry::Policy<Operation<O, Retry>, SdkSuccess<T>, SdkError<E>> + Clone
    {
        /// Forwarding type to `O` for bound inference.
        type O: ParseHttpResponse<Output = Result<T, Self::E>> + Send + Sync + Clone + 'static;
        /// Forwarding type to `E` for bound inference.
        type E: Error + ProvideErrorKind;
        /// Forwarding type to `Retry` for bound inference.
        type Retry: ClassifyResponse<SdkSuccess<T>, SdkError<Self::E>>;
    }

    impl<R, O, T, E, Retry> SmithyRetryPolicy<O, T, E, Retry> for R
    where
        R: tower::retry::Policy<Operation<O, Retry>, SdkSuccess<T>, SdkError<E>> + Clone,
        O: ParseHttpResponse<Output = Result<T, E>> + Send + Sync + Clone + 'static,
        E: Error + ProvideErrorKind,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        type O = O;
        type E = E;
        type Retry = Retry;
    }
}

#[cfg(test)]
mod tests {
    use crate::retry::Config;
    use crate::test_connection::TestConnection;
    use crate::{Builder, SdkError, SdkSuccess};
    use bytes::Bytes;
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{self, Operation};
    use smithy_http::response::ParseStrictResponse;
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::fmt::{self, Display, Formatter};
    use tower::layer::util::Identity;

    #[derive(Debug)]
    struct ServerFault;

    impl Display for ServerFault {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write!(f, "server fault")
        }
    }

    impl std::error::Error for ServerFault {}

    impl ProvideErrorKind for ServerFault {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            Some(ErrorKind::ServerError)
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    #[derive(Clone)]
    struct ParseBody;

    impl ParseStrictResponse for ParseBody {
        type Output = Result<String, ServerFault>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(ServerFault)
            }
        }
    }

    #[derive(Clone)]
    struct RetryServiceErrors;

    impl<T, E: ProvideErrorKind> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for RetryServiceErrors {
        fn classify(&self, response: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
            match response {
                Err(SdkError::ServiceError { err, .. }) => err
                    .retryable_error_kind()
                    .map(RetryKind::Error)
                    .unwrap_or(RetryKind::NotRetryable),
                _ => RetryKind::NotRetryable,
            }
        }
    }

    fn operation() -> Operation<ParseBody, RetryServiceErrors> {
        let request = http::Request::builder()
            .uri("https://test-service.test-region.amazonaws.com/")
            .body(SdkBody::from("request body"))
            .unwrap();
        Operation::new(operation::Request::new(request), ParseBody)
            .with_metadata(operation::Metadata::new("TestOperation", "test-service"))
            .with_retry_policy(RetryServiceErrors)
    }

    fn event(status: u16, body: &'static str) -> (http::Request<SdkBody>, http::Response<&'static str>) {
        (
            http::Request::builder()
                .uri("https://test-service.test-region.amazonaws.com/")
                .body(SdkBody::from("request body"))
                .unwrap(),
            http::Response::builder().status(status).body(body).unwrap(),
        )
    }

    #[tokio::test]
    async fn retries_until_success() {
        let conn = TestConnection::new(vec![
            event(500, "boom"),
            event(503, "boom"),
            event(200, "done"),
        ]);
        let mut client = Builder::new()
            .connector(conn.clone())
            .middleware(Identity::new())
            .build();
        client.set_retry_config(Config::default().with_base(|| 0_f64));
        let out = client.call(operation()).await.expect("succeeds on third attempt");
        assert_eq!(out, "done");
        assert_eq!(conn.requests().len(), 3);
        conn.assert_requests_match(&[]);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let conn = TestConnection::new(vec![
            event(500, "boom"),
            event(500, "boom"),
            event(500, "boom"),
            event(200, "never"),
        ]);
        let mut client = Builder::new()
            .connector(conn.clone())
            .middleware(Identity::new())
            .build();
        client.set_retry_config(Config::default().with_base(|| 0_f64));
        let err = client.call(operation()).await.expect_err("all attempts fail");
        match err {
            SdkError::ServiceError { raw, .. } => assert_eq!(raw.status(), 500),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(conn.requests().len(), 3);
    }

    #[tokio::test]
    async fn dispatch_failure_is_reported() {
        let conn = TestConnection::<&'static str>::new(vec![]);
        let client = Builder::new()
            .connector(conn)
            .middleware(Identity::new())
            .build();
        let err = client.call(operation()).await.expect_err("no responses loaded");
        assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
    }
}
