/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod instant;
pub mod retry;

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use crate::instant::Instant;

/// Binary data, base64 encoded on the wire by the JSON and query protocols.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// Generic error that carries the protocol level details of a failed call
///
/// Generated error types keep one of these next to their modeled variant so the code, message
/// and request id of a response stay available even for errors the client does not model.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Default, Debug)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::retry::ProvideErrorKind;
    use crate::{Blob, Error};

    #[test]
    fn blob_exposes_bytes() {
        let blob = Blob::new("hello");
        assert_eq!(blob.as_ref(), b"hello");
        assert_eq!(blob.clone().into_inner(), b"hello".to_vec());
        assert_eq!(blob, Blob::new(b"hello".to_vec()));
    }

    #[test]
    fn error_display() {
        let err = Error::builder()
            .code("NotFound")
            .message("topic does not exist")
            .request_id("abc-123")
            .build();
        assert_eq!(
            format!("{}", err),
            "Error { code: \"NotFound\", message: \"topic does not exist\", request_id: \"abc-123\" }"
        );
        assert_eq!(ProvideErrorKind::code(&err), Some("NotFound"));
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn builder_resets_after_build() {
        let mut builder = Error::builder();
        builder.code("Throttling");
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first.code(), Some("Throttling"));
        assert_eq!(second, Error::default());
    }
}
