/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `#[serde(with = "smithy_json::serde_instant")]` adapter: an optional [`Instant`] as epoch
//! seconds, the default timestamp format of the JSON protocols.

use serde::{Deserialize, Deserializer, Serializer};
use smithy_types::Instant;

pub fn serialize<S: Serializer>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(instant) if instant.has_nanos() => {
            serializer.serialize_f64(instant.epoch_fractional_seconds())
        }
        Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Instant>, D::Error> {
    let seconds: Option<f64> = Option::deserialize(deserializer)?;
    Ok(seconds.map(Instant::from_f64))
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Shape {
        #[serde(
            rename = "CreationDate",
            default,
            with = "crate::serde_instant",
            skip_serializing_if = "Option::is_none"
        )]
        creation_date: Option<Instant>,
    }

    #[test]
    fn whole_seconds() {
        let shape = Shape {
            creation_date: Some(Instant::from_epoch_seconds(1576540098)),
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert_eq!(json, r#"{"CreationDate":1576540098}"#);
        assert_eq!(serde_json::from_str::<Shape>(&json).unwrap(), shape);
    }

    #[test]
    fn fractional_seconds() {
        let parsed: Shape = serde_json::from_str(r#"{"CreationDate":1576540098.5}"#).unwrap();
        let instant = parsed.creation_date.expect("set");
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"CreationDate":1576540098.5}"#
        );
    }

    #[test]
    fn integer_and_absent_values() {
        let parsed: Shape = serde_json::from_str(r#"{"CreationDate":0}"#).unwrap();
        assert_eq!(parsed.creation_date, Some(Instant::from_epoch_seconds(0)));
        let parsed: Shape = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.creation_date, None);
    }
}
