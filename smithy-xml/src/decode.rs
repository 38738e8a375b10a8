/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::instant::Format;
use smithy_types::{Blob, Instant};
use std::str::FromStr;
use thiserror::Error;

pub use roxmltree::{Document, Node};

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("body was not valid UTF-8")]
    InvalidUtf8,
    #[error("invalid XML: {0}")]
    InvalidXml(#[from] roxmltree::Error),
    #[error("expected element `{expected}`, found `{found}`")]
    UnexpectedElement { expected: String, found: String },
    #[error("document ended before `{0}` was closed")]
    Incomplete(String),
    #[error("element `{0}` is missing")]
    MissingElement(String),
    #[error("invalid {kind} in `{element}`: `{value}`")]
    InvalidValue {
        kind: &'static str,
        element: String,
        value: String,
    },
}

/// Parse a response body into a document.
///
/// roxmltree closes elements that are still open at the end of the input, so a truncated body
/// would otherwise parse; the root element must be closed by the last tag of the input.
pub fn parse(body: &[u8]) -> Result<Document, XmlError> {
    let text = std::str::from_utf8(body).map_err(|_| XmlError::InvalidUtf8)?;
    let doc = Document::parse(text)?;
    let root = doc.root_element();
    if !root_is_closed(text, root) {
        return Err(XmlError::Incomplete(root.tag_name().name().to_string()));
    }
    Ok(doc)
}

fn root_is_closed(text: &str, root: Node) -> bool {
    let text = text.trim_end();
    if !text.ends_with('>') {
        return false;
    }
    if text.ends_with("/>") && !root.has_children() {
        return true;
    }
    let closing = match text.rfind("</") {
        Some(idx) => text[idx + 2..text.len() - 1].trim(),
        None => return false,
    };
    let local_name = closing.rsplit(':').next().unwrap_or(closing);
    local_name == root.tag_name().name()
}

/// Locate `<{operation}Result>` inside `<{operation}Response>`.
///
/// Operations without output members answer with a response element and no result element, so
/// a missing result is `Ok(None)`; a root element with the wrong name is an error.
pub fn result_wrapper<'a, 'input>(
    doc: &'a Document<'input>,
    operation: &str,
) -> Result<Option<Node<'a, 'input>>, XmlError> {
    let root = doc.root_element();
    let expected = format!("{}Response", operation);
    if root.tag_name().name() != expected {
        return Err(XmlError::UnexpectedElement {
            expected,
            found: root.tag_name().name().to_string(),
        });
    }
    let result = format!("{}Result", operation);
    Ok(elements(root).find(|node| node.tag_name().name() == result))
}

/// Child elements of `node`, skipping text, comments and whitespace.
pub fn elements<'a, 'input: 'a>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Members of a wrapped list (`<Topics><member>..</member></Topics>`).
pub fn list_members<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    member_name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    elements(node).filter(move |child| child.tag_name().name() == member_name)
}

/// Entries of a wrapped map (`<Attributes><entry><key/><value/></entry></Attributes>`).
pub fn map_entries<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    key_name: &str,
    value_name: &str,
) -> Result<Vec<(String, Node<'a, 'input>)>, XmlError> {
    let mut out = Vec::new();
    for entry in elements(node).filter(|child| child.tag_name().name() == "entry") {
        let key = elements(entry)
            .find(|child| child.tag_name().name() == key_name)
            .ok_or_else(|| XmlError::MissingElement(key_name.to_string()))?;
        let value = elements(entry)
            .find(|child| child.tag_name().name() == value_name)
            .ok_or_else(|| XmlError::MissingElement(value_name.to_string()))?;
        out.push((text(key), value));
    }
    Ok(out)
}

/// The unescaped text content of an element. An empty element yields an empty string.
pub fn text(node: Node) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

fn parse_primitive<T: FromStr>(node: Node, kind: &'static str) -> Result<T, XmlError> {
    let value = text(node);
    value.trim().parse().map_err(|_| XmlError::InvalidValue {
        kind,
        element: node.tag_name().name().to_string(),
        value,
    })
}

pub fn parse_bool(node: Node) -> Result<bool, XmlError> {
    parse_primitive(node, "boolean")
}

pub fn parse_i32(node: Node) -> Result<i32, XmlError> {
    parse_primitive(node, "integer")
}

pub fn parse_i64(node: Node) -> Result<i64, XmlError> {
    parse_primitive(node, "long")
}

pub fn parse_f64(node: Node) -> Result<f64, XmlError> {
    parse_primitive(node, "double")
}

pub fn parse_blob(node: Node) -> Result<Blob, XmlError> {
    let value = text(node);
    base64::decode(value.trim())
        .map(Blob::new)
        .map_err(|_| XmlError::InvalidValue {
            kind: "blob",
            element: node.tag_name().name().to_string(),
            value,
        })
}

pub fn parse_instant(node: Node, format: Format) -> Result<Instant, XmlError> {
    let value = text(node);
    Instant::from_str(value.trim(), format).map_err(|_| XmlError::InvalidValue {
        kind: "timestamp",
        element: node.tag_name().name().to_string(),
        value,
    })
}

#[cfg(test)]
mod test {
    use crate::decode::{
        elements, list_members, map_entries, parse, parse_blob, parse_bool, parse_i32,
        parse_instant, result_wrapper, text, XmlError,
    };
    use proptest::prelude::*;
    use smithy_types::instant::Format;
    use smithy_types::{Blob, Instant};

    #[test]
    fn finds_result_wrapper() {
        let body = br#"<CreateTopicResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
            <CreateTopicResult>
                <TopicArn>arn:aws:sns:us-east-1:123456789012:orders</TopicArn>
            </CreateTopicResult>
            <ResponseMetadata><RequestId>a8dec8b3</RequestId></ResponseMetadata>
        </CreateTopicResponse>"#;
        let doc = parse(body).unwrap();
        let result = result_wrapper(&doc, "CreateTopic").unwrap().expect("result present");
        let arn = elements(result).next().unwrap();
        assert_eq!(arn.tag_name().name(), "TopicArn");
        assert_eq!(text(arn), "arn:aws:sns:us-east-1:123456789012:orders");
    }

    #[test]
    fn missing_result_is_none() {
        let body = br#"<DeleteTopicResponse><ResponseMetadata><RequestId>1</RequestId></ResponseMetadata></DeleteTopicResponse>"#;
        let doc = parse(body).unwrap();
        assert!(result_wrapper(&doc, "DeleteTopic").unwrap().is_none());
    }

    #[test]
    fn wrong_root_is_an_error() {
        let doc = parse(b"<Other/>").unwrap();
        match result_wrapper(&doc, "CreateTopic") {
            Err(XmlError::UnexpectedElement { expected, found }) => {
                assert_eq!(expected, "CreateTopicResponse");
                assert_eq!(found, "Other");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn invalid_documents() {
        assert!(matches!(
            parse(b"<a>"),
            Err(XmlError::InvalidXml(_)) | Err(XmlError::Incomplete(_))
        ));
        assert!(matches!(parse(b"<<"), Err(XmlError::InvalidXml(_))));
        assert!(matches!(parse(&[0xff, 0xfe]), Err(XmlError::InvalidUtf8)));
    }

    #[test]
    fn truncated_documents_are_rejected() {
        for body in [
            &b"<PublishResponse><PublishResult><MessageId>abc"[..],
            &b"<PublishResponse><PublishResult><MessageId>abc</MessageId>"[..],
            &b"<PublishResponse><PublishResult><MessageId/>"[..],
            &b"<PublishResponse><PublishResult></PublishResult"[..],
        ]
        .iter()
        {
            assert!(
                matches!(parse(body), Err(XmlError::InvalidXml(_)) | Err(XmlError::Incomplete(_))),
                "accepted {:?}",
                std::str::from_utf8(body)
            );
        }
    }

    #[test]
    fn complete_documents_are_accepted() {
        assert!(parse(b"<a/>").is_ok());
        assert!(parse(b"<a></a>\n  ").is_ok());
        assert!(parse(b"<ns:a xmlns:ns=\"urn:x\"><b/></ns:a>").is_ok());
        assert!(parse(b"<a>\n<b>c</b>\n</a >").is_ok());
    }

    #[test]
    fn lists_and_maps() {
        let body = br#"<Result>
            <Topics><member>a</member><member>b</member></Topics>
            <Attributes>
                <entry><key>Owner</key><value>123</value></entry>
                <entry><key>Policy</key><value>{&quot;Version&quot;:&quot;2012&quot;}</value></entry>
            </Attributes>
        </Result>"#;
        let doc = parse(body).unwrap();
        let mut children = elements(doc.root_element());
        let topics = children.next().unwrap();
        let members: Vec<_> = list_members(topics, "member").map(text).collect();
        assert_eq!(members, vec!["a", "b"]);
        let attributes = children.next().unwrap();
        let entries = map_entries(attributes, "key", "value").unwrap();
        let entries: Vec<_> = entries.into_iter().map(|(k, v)| (k, text(v))).collect();
        assert_eq!(
            entries,
            vec![
                ("Owner".to_string(), "123".to_string()),
                ("Policy".to_string(), r#"{"Version":"2012"}"#.to_string())
            ]
        );
    }

    #[test]
    fn map_entry_without_value() {
        let doc = parse(b"<Attributes><entry><key>Owner</key></entry></Attributes>").unwrap();
        assert!(matches!(
            map_entries(doc.root_element(), "key", "value"),
            Err(XmlError::MissingElement(_))
        ));
    }

    #[test]
    fn primitives() {
        let doc = parse(b"<v>true</v>").unwrap();
        assert!(parse_bool(doc.root_element()).unwrap());
        let doc = parse(b"<v> 42 </v>").unwrap();
        assert_eq!(parse_i32(doc.root_element()).unwrap(), 42);
        let doc = parse(b"<v>aGk=</v>").unwrap();
        assert_eq!(parse_blob(doc.root_element()).unwrap(), Blob::new("hi"));
        let doc = parse(b"<v>2019-12-16T23:48:18Z</v>").unwrap();
        assert_eq!(
            parse_instant(doc.root_element(), Format::DateTime).unwrap(),
            Instant::from_epoch_seconds(1576540098)
        );
        let doc = parse(b"<v>nope</v>").unwrap();
        assert!(matches!(
            parse_i32(doc.root_element()),
            Err(XmlError::InvalidValue { kind: "integer", .. })
        ));
    }

    proptest! {
        #[test]
        fn text_round_trips_escaped_content(s in "[a-zA-Z0-9 <>&\"']{0,32}") {
            let escaped = s
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;")
                .replace('\'', "&apos;");
            let body = format!("<v>{}</v>", escaped);
            let doc = parse(body.as_bytes()).unwrap();
            prop_assert_eq!(text(doc.root_element()), s);
        }
    }
}
