/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = "smithy_json::serde_blob")]` adapter: an optional [`Blob`] as a base64 string.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use smithy_types::Blob;

pub fn serialize<S: Serializer>(value: &Option<Blob>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(blob) => serializer.serialize_str(&base64::encode(blob.as_ref())),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Blob>, D::Error> {
    let encoded: Option<String> = Option::deserialize(deserializer)?;
    encoded
        .map(|data| {
            base64::decode(&data)
                .map(Blob::new)
                .map_err(|err| D::Error::custom(format!("invalid base64 blob: {}", err)))
        })
        .transpose()
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Blob;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Shape {
        #[serde(
            rename = "Plaintext",
            default,
            with = "crate::serde_blob",
            skip_serializing_if = "Option::is_none"
        )]
        plaintext: Option<Blob>,
    }

    #[test]
    fn blob_is_base64() {
        let shape = Shape {
            plaintext: Some(Blob::new("hello")),
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"Plaintext":"aGVsbG8="}"#);
        assert_eq!(serde_json::from_str::<Shape>(&json).unwrap(), shape);
    }

    #[test]
    fn missing_blob_is_none() {
        assert_eq!(serde_json::to_string(&Shape { plaintext: None }).unwrap(), "{}");
        assert_eq!(
            serde_json::from_str::<Shape>("{}").unwrap(),
            Shape { plaintext: None }
        );
    }

    #[test]
    fn invalid_base64_fails() {
        serde_json::from_str::<Shape>(r#"{"Plaintext":"%%%"}"#).expect_err("not base64");
    }
}
