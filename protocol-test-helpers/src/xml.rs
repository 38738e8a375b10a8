/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{pretty_comparison, ProtocolTestFailure};
use roxmltree::{Node, NodeType};
use std::fmt::Write;

/// Assert that two XML documents are equivalent
///
/// This will normalize documents and attempts to determine if it is OK to sort members or not by
/// using a heuristic to determine if the tag represents a list (which should not be reordered)
pub(crate) fn try_xml_equivalent(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    if actual == expected {
        return Ok(());
    }
    let norm_1 = normalize_xml(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        expected: "actual document to be valid XML".to_string(),
        found: format!("{}\n{}", e, actual),
    })?;
    let norm_2 = normalize_xml(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
        expected: "expected document to be valid XML".to_string(),
        found: format!("{}", e),
    })?;
    if norm_1 == norm_2 {
        Ok(())
    } else {
        Err(pretty_comparison(&norm_1, &norm_2))
    }
}

/// Normalize a raw XML string into a canonical form
///
/// Whitespace only text nodes are dropped. Sibling elements are sorted unless they share a tag
/// name, in which case they are treated as list members and keep their order.
pub(crate) fn normalize_xml(s: &str) -> Result<String, String> {
    let rotree = roxmltree::Document::parse(s).map_err(|e| e.to_string())?;
    let root = rotree.root_element();
    if !closes_root(s, root) {
        return Err(format!(
            "document ended before `{}` was closed",
            root.tag_name().name()
        ));
    }
    Ok(unparse_tag(root, 1))
}

/// roxmltree implicitly closes elements left open at the end of the input.
fn closes_root(s: &str, root: Node) -> bool {
    let s = s.trim_end();
    if !s.ends_with('>') {
        return false;
    }
    if s.ends_with("/>") && !root.has_children() {
        return true;
    }
    match s.rfind("</") {
        Some(idx) => {
            let closing = s[idx + 2..s.len() - 1].trim();
            closing.rsplit(':').next() == Some(root.tag_name().name())
        }
        None => false,
    }
}

fn unparse_tag(tag: Node, depth: usize) -> String {
    let mut out = String::new();
    out.push_str(&unparse_start_element(tag));
    let mut child_nodes = tag
        .children()
        // flat_map over empty/ignored nodes
        .flat_map(|node| unparse_node(node, depth + 1))
        .collect::<Vec<_>>();
    if !is_list(tag) {
        child_nodes.sort();
    }
    for node in child_nodes {
        out.push('\n');
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&node)
    }
    out.push('\n');
    for _ in 0..depth - 1 {
        out.push_str("  ");
    }
    write!(&mut out, "</{}>", tag.tag_name().name()).expect("writing to a string cannot fail");
    out
}

fn unparse_node(n: Node, depth: usize) -> Option<String> {
    match n.node_type() {
        NodeType::Element => Some(unparse_tag(n, depth)),
        NodeType::Text => {
            let o = n.text().map(|t| t.trim().to_string())?;
            if o.is_empty() {
                None
            } else {
                Some(o)
            }
        }
        _ => None,
    }
}

fn unparse_start_element(n: Node) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(n.tag_name().name());
    let mut attributes: Vec<String> = n
        .attributes()
        .iter()
        .map(|attr| format!("{}=\"{}\"", attr.name(), attr.value()))
        .collect();
    attributes.sort();
    for attribute in attributes {
        out.push(' ');
        out.push_str(&attribute);
    }
    out.push('>');
    out
}

fn is_list(node: Node) -> bool {
    // a flat list looks like: <Foo>1</Foo><Foo>2</Foo>
    // a wrapped list looks like: <member>1</member><member>2</member>
    let elements: Vec<_> = node.children().filter(|n| n.is_element()).collect();
    match elements.first() {
        None => false,
        Some(first) => {
            elements.len() > 1
                && elements
                    .iter()
                    .all(|n| n.tag_name().name() == first.tag_name().name())
        }
    }
}

#[cfg(test)]
mod test {
    use crate::xml::try_xml_equivalent;

    #[test]
    fn basic_tests() {
        let d1 = r#"<ListTopicsResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
            <ListTopicsResult>
                <Topics><member><TopicArn>arn:a</TopicArn></member></Topics>
                <NextToken>abc</NextToken>
            </ListTopicsResult>
        </ListTopicsResponse>"#;
        let d2 = r#"<ListTopicsResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/"><ListTopicsResult><NextToken>abc</NextToken><Topics><member><TopicArn>arn:a</TopicArn></member></Topics></ListTopicsResult></ListTopicsResponse>"#;
        try_xml_equivalent(d1, d2).expect("members may be reordered");
    }

    #[test]
    fn list_order_is_significant() {
        let d1 = r#"<Topics><member>a</member><member>b</member></Topics>"#;
        let d2 = r#"<Topics><member>b</member><member>a</member></Topics>"#;
        try_xml_equivalent(d1, d2).expect_err("lists are ordered");
    }

    #[test]
    fn text_differences_are_reported() {
        let d1 = r#"<Error><Code>NotFound</Code></Error>"#;
        let d2 = r#"<Error><Code>InternalError</Code></Error>"#;
        try_xml_equivalent(d1, d2).expect_err("text differs");
    }

    #[test]
    fn invalid_xml_is_reported() {
        try_xml_equivalent("<a>", "<a></a>").expect_err("unterminated element");
        try_xml_equivalent("<a><b>1</b>", "<a><b>1</b></a>").expect_err("root left open");
        try_xml_equivalent("<a><b/></a>", "<a><b/>").expect_err("expected left open");
    }

    #[test]
    fn self_closing_and_prefixed_roots() {
        try_xml_equivalent("<a/>", "<a></a>").expect("empty elements match");
        try_xml_equivalent(
            r#"<p:a xmlns:p="urn:x"><b>1</b></p:a>"#,
            r#"<p:a xmlns:p="urn:x"><b>1</b></p:a >"#,
        )
        .expect("prefixed root is closed");
    }
}
