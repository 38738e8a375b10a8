/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::{Body, SizeHint};
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests and for holding responses once they
/// leave the connector. In-memory bodies can be cloned, which is what makes retries possible.
#[derive(Debug)]
pub struct SdkBody {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Once(Option<Bytes>),
    Streaming(hyper::Body),
    Taken,
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody {
            inner: Inner::Once(None),
        }
    }

    /// A body that has been moved out of a response. Polling it is an error.
    pub fn taken() -> Self {
        SdkBody { inner: Inner::Taken }
    }

    /// Returns the in-memory contents of this body, or `None` for a streaming body
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Once(Some(bytes)) => Some(bytes.as_ref()),
            Inner::Once(None) => Some(&[][..]),
            _ => None,
        }
    }

    /// Clone the body if it is held in memory
    pub fn try_clone(&self) -> Option<Self> {
        match &self.inner {
            Inner::Once(bytes) => Some(SdkBody {
                inner: Inner::Once(bytes.clone()),
            }),
            _ => None,
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.size_hint().exact()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(s.into_bytes())
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody {
            inner: Inner::Once(Some(bytes)),
        }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl From<hyper::Body> for SdkBody {
    fn from(body: hyper::Body) -> Self {
        SdkBody {
            inner: Inner::Streaming(body),
        }
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        match &mut self.inner {
            Inner::Once(opt) => Poll::Ready(opt.take().map(Ok)),
            Inner::Streaming(body) => Pin::new(body)
                .poll_data(cx)
                .map(|chunk| chunk.map(|res| res.map_err(|err| err.into()))),
            Inner::Taken => Poll::Ready(Some(Err("a taken body cannot be polled".into()))),
        }
    }

    fn poll_trailers(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        match &mut self.inner {
            Inner::Streaming(body) => Pin::new(body).poll_trailers(cx).map_err(|err| err.into()),
            _ => Poll::Ready(Ok(None)),
        }
    }

    fn is_end_stream(&self) -> bool {
        match &self.inner {
            Inner::Once(None) | Inner::Taken => true,
            Inner::Once(Some(bytes)) => bytes.is_empty(),
            Inner::Streaming(body) => body.is_end_stream(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.inner {
            Inner::Once(None) => SizeHint::with_exact(0),
            Inner::Once(Some(bytes)) => SizeHint::with_exact(bytes.len() as u64),
            Inner::Streaming(body) => body.size_hint(),
            Inner::Taken => SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[test]
    fn in_memory_bodies_clone() {
        let body = SdkBody::from("hello world!");
        let cloned = body.try_clone().expect("in-memory bodies are cloneable");
        assert_eq!(cloned.bytes(), Some("hello world!".as_bytes()));
        assert_eq!(body.content_length(), Some(12));
    }

    #[test]
    fn streaming_bodies_do_not_clone() {
        let body = SdkBody::from(hyper::Body::from("streaming"));
        assert!(body.try_clone().is_none());
        assert!(body.bytes().is_none());
    }

    #[test]
    fn empty_body_is_end_of_stream() {
        assert!(SdkBody::empty().is_end_stream());
        assert_eq!(SdkBody::empty().bytes(), Some(&[][..]));
        assert!(!SdkBody::from("data").is_end_stream());
    }

    #[tokio::test]
    async fn read_streaming_body() {
        let body = SdkBody::from(hyper::Body::from("some data"));
        let data = hyper::body::to_bytes(body).await.expect("body is readable");
        assert_eq!(data.as_ref(), b"some data");
    }

    #[tokio::test]
    async fn taken_body_errors() {
        let body = SdkBody::taken();
        assert!(hyper::body::to_bytes(body).await.is_err());
    }
}
