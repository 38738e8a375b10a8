/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Builder;
use http::Request;
use hyper::client::connect::Connect;
use smithy_http::body::SdkBody;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Adapter from a [`hyper::Client`] to a connector usable by a [`Client`](crate::Client).
///
/// Hyper returns responses with a [`hyper::Body`]; the adapter wraps it in an [`SdkBody`] so the
/// rest of the stack sees a single body type.
#[derive(Clone, Debug)]
pub struct HyperAdapter<C>(hyper::Client<C, SdkBody>);

impl<C> From<hyper::Client<C, SdkBody>> for HyperAdapter<C> {
    fn from(client: hyper::Client<C, SdkBody>) -> Self {
        Self(client)
    }
}

impl<C> Service<Request<SdkBody>> for HyperAdapter<C>
where
    C: Connect + Clone + Send + Sync + 'static,
{
    type Response = http::Response<SdkBody>;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.0.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Request<SdkBody>) -> Self::Future {
        let fut = self.0.call(req);
        Box::pin(async move { Ok(fut.await?.map(SdkBody::from)) })
    }
}

impl<M, R> Builder<(), M, R> {
    /// Connect to the service using the provided `hyper` client.
    pub fn hyper<HC>(self, connector: hyper::Client<HC, SdkBody>) -> Builder<HyperAdapter<HC>, M, R>
    where
        HC: Connect + Clone + Send + Sync + 'static,
    {
        self.connector(HyperAdapter::from(connector))
    }

    /// Connect to the service over HTTPS using rustls with the platform's native roots.
    #[cfg(feature = "rustls")]
    pub fn rustls(self) -> Builder<HyperAdapter<crate::Https>, M, R> {
        self.connector(https())
    }
}

/// An HTTPS connector with HTTP/1.1 and HTTP/2 enabled.
#[cfg(feature = "rustls")]
pub fn https() -> HyperAdapter<crate::Https> {
    let https = hyper_rustls::HttpsConnector::with_native_roots();
    HyperAdapter::from(hyper::Client::builder().build::<_, SdkBody>(https))
}
