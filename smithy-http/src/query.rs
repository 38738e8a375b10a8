/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing HTTP query strings

use crate::label::BASE_SET;
use smithy_types::instant::Format;
use smithy_types::Instant;

/// Percent-encode a query string key or value
pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    percent_encoding::utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    fmt_string(t.fmt(format))
}

/// Accumulates `key=value` pairs into a query string appended to a path
#[derive(Debug)]
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    /// Append a pair. Both key and value are encoded.
    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(key));
        self.out.push('=');
        self.out.push_str(&fmt_string(value));
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, fmt_timestamp, Writer};
    use smithy_types::instant::Format;
    use smithy_types::Instant;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
    }

    #[test]
    fn timestamps() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            fmt_timestamp(&instant, Format::DateTime),
            "2019-12-16T23%3A48%3A18Z"
        );
    }

    #[test]
    fn writer_appends_pairs() {
        let mut path = String::from("/things");
        let mut writer = Writer::new(&mut path);
        writer.push_kv("maxResults", "10");
        writer.push_kv("thingTypeName", "light bulb");
        assert_eq!(path, "/things?maxResults=10&thingTypeName=light%20bulb");

        let mut path = String::from("/endpoint?a=b");
        Writer::new(&mut path).push_kv("endpointType", "iot:Data-ATS");
        assert_eq!(path, "/endpoint?a=b&endpointType=iot%3AData-ATS");
    }
}
