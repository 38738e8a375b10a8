/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON support for the `awsJson1.1` and `restJson1` protocols.
//!
//! Generated shapes derive `serde` traits directly; this crate supplies the field adapters for
//! the types serde cannot handle on its own (blobs and timestamps) and the protocol level error
//! parsing shared by every JSON service.

pub mod error;
pub mod serde_blob;
pub mod serde_instant;

use serde::de::DeserializeOwned;

/// Deserialize a response body, treating an empty body as the default value.
///
/// Operations without output members may answer with no body at all.
pub fn deserialize_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
}

/// Serialize a request body.
pub fn serialize_body<T: serde::Serialize>(body: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(body)
}

#[cfg(test)]
mod test {
    use crate::deserialize_body;
    use serde::Deserialize;

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Output {
        #[serde(rename = "KeyId")]
        key_id: Option<String>,
    }

    #[test]
    fn empty_body_is_default() {
        assert_eq!(deserialize_body::<Output>(b"").unwrap(), Output::default());
        assert_eq!(deserialize_body::<Output>(b"  \n").unwrap(), Output::default());
    }

    #[test]
    fn unknown_members_are_ignored() {
        let out: Output = deserialize_body(br#"{"KeyId": "abc", "Extra": [1, 2]}"#).unwrap();
        assert_eq!(out.key_id.as_deref(), Some("abc"));
    }

    #[test]
    fn malformed_body_fails() {
        deserialize_body::<Output>(b"{").expect_err("truncated body");
    }
}
