/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{pretty_comparison, ProtocolTestFailure};

fn rewrite_url_encoded_body(input: &str) -> String {
    let mut entries: Vec<String> = input
        .split('&')
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_string())
        .collect();
    if entries.len() > 2 {
        // keep `Action` and `Version` in front, order the remaining parameters
        entries[2..].sort();
    }
    entries.join("\n&")
}

/// Compare two form bodies, ignoring the order of the parameters after `Action` and `Version`
pub(crate) fn try_url_encoded_form_equivalent(
    actual: &str,
    expected: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual = rewrite_url_encoded_body(actual);
    let expected = rewrite_url_encoded_body(expected);
    if actual == expected {
        Ok(())
    } else {
        Err(pretty_comparison(&actual, &expected))
    }
}

#[cfg(test)]
mod tests {
    use crate::urlencoded::try_url_encoded_form_equivalent;

    #[test]
    fn test_url_encoded_form_equivalent() {
        assert!(try_url_encoded_form_equivalent(
            "Action=Publish&Version=2010-03-31",
            "Action=Publish&Version=2010-03-31",
        )
        .is_ok());
        assert!(try_url_encoded_form_equivalent(
            "Action=Publish&Version=2010-03-31&Message=hi&TopicArn=arn",
            "Action=Publish&Version=2010-03-31&TopicArn=arn&Message=hi",
        )
        .is_ok());
        assert!(try_url_encoded_form_equivalent(
            "Action=Publish&Version=2010-03-31&Message=hi",
            "Action=Publish&Version=2010-03-31&Message=bye",
        )
        .is_err());
        assert!(try_url_encoded_form_equivalent(
            "Action=Publish&Version=2010-03-31",
            "Action=Subscribe&Version=2010-03-31",
        )
        .is_err());
    }
}
