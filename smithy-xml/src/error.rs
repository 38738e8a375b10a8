/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error parsing for AWS Query responses

use crate::decode::{elements, parse, text, XmlError};
use smithy_types::Error as GenericError;

/// Parse `<ErrorResponse><Error><Code/><Message/></Error><RequestId/></ErrorResponse>`.
pub fn parse_generic_error(body: &[u8]) -> Result<GenericError, XmlError> {
    let doc = parse(body)?;
    let root = doc.root_element();
    if root.tag_name().name() != "ErrorResponse" {
        return Err(XmlError::UnexpectedElement {
            expected: "ErrorResponse".to_string(),
            found: root.tag_name().name().to_string(),
        });
    }
    let mut err_builder = GenericError::builder();
    for node in elements(root) {
        match node.tag_name().name() {
            "Error" => {
                for field in elements(node) {
                    match field.tag_name().name() {
                        "Code" => {
                            err_builder.code(text(field));
                        }
                        "Message" => {
                            err_builder.message(text(field));
                        }
                        _ => {}
                    }
                }
            }
            "RequestId" => {
                err_builder.request_id(text(node));
            }
            _ => {}
        }
    }
    Ok(err_builder.build())
}

#[cfg(test)]
mod test {
    use crate::error::parse_generic_error;
    use smithy_types::Error;

    #[test]
    fn parses_error_response() {
        let body = br#"<ErrorResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
            <Error>
                <Type>Sender</Type>
                <Code>NotFound</Code>
                <Message>Topic does not exist</Message>
            </Error>
            <RequestId>9dd01905-5012-5f99-8663-4b3ecd0dfaef</RequestId>
        </ErrorResponse>"#;
        assert_eq!(
            parse_generic_error(body).unwrap(),
            Error::builder()
                .code("NotFound")
                .message("Topic does not exist")
                .request_id("9dd01905-5012-5f99-8663-4b3ecd0dfaef")
                .build()
        );
    }

    #[test]
    fn tolerates_missing_fields() {
        let body = br#"<ErrorResponse><Error><Code>InternalError</Code></Error></ErrorResponse>"#;
        let err = parse_generic_error(body).unwrap();
        assert_eq!(err.code(), Some("InternalError"));
        assert_eq!(err.message(), None);
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn rejects_other_documents() {
        parse_generic_error(b"<PublishResponse/>").expect_err("not an error document");
        parse_generic_error(b"Service Unavailable").expect_err("not XML");
    }
}
