/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as HTTP labels, the `{name}` segments of a request URI

use percent_encoding::AsciiSet;

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Characters that are escaped in a URI path segment. Unreserved characters (RFC 3986) pass
/// through untouched.
pub(crate) const BASE_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `t` for use as a URI path label
///
/// Greedy labels (`{key+}`) keep their `/` separators.
pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let set = if greedy { GREEDY } else { BASE_SET };
    percent_encoding::utf8_percent_encode(t.as_ref(), set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;
    use proptest::prelude::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(fmt_string("my thing", false), "my%20thing");
        assert_eq!(fmt_string("a/b", false), "a%2Fb");
        assert_eq!(fmt_string("a/b", true), "a/b");
        assert_eq!(fmt_string("lamp-01_v2.~", false), "lamp-01_v2.~");
    }

    proptest! {
        #[test]
        fn labels_never_contain_separators(s in ".*") {
            let encoded = fmt_string(&s, false);
            prop_assert!(!encoded.contains('/'));
            prop_assert!(!encoded.contains('?'));
            let decoded = percent_encoding::percent_decode_str(&encoded).decode_utf8().unwrap();
            prop_assert_eq!(decoded, s);
        }
    }
}
