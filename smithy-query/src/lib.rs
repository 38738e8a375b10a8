/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for the Smithy AWS Query protocol

use smithy_types::instant::Format;
use smithy_types::{Blob, Instant};
use std::borrow::Cow;
use urlencoding::encode;

/// Writes an AWS Query form body.
///
/// The writer emits `Action` and `Version` first; values are written through
/// [`QueryValueWriter`]s obtained by prefix, so nested structures, lists and maps compose their
/// parameter names (`Attributes.entry.1.key`).
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes a single value, or a list or map of values, under a parameter name.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Starts a new prefix.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    /// Returns a [`QueryMapWriter`] for this prefix.
    ///
    /// `key_name` and `value_name` default to `key` and `value`; members with a custom
    /// location name pass their own.
    pub fn start_map(self, key_name: &'a str, value_name: &'a str) -> QueryMapWriter<'a> {
        QueryMapWriter::new(self.output, self.prefix, key_name, value_name)
    }

    /// Returns a [`QueryListWriter`] for this prefix, with members written as `prefix.member.N`.
    pub fn start_list(self, member_name: &'a str) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, member_name)
    }

    /// Writes a boolean value.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes an integer value.
    pub fn number(mut self, value: i64) {
        self.write_param_name();
        self.output.push_str(&value.to_string());
    }

    /// Writes a string value.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Writes a blob as base64.
    pub fn blob(self, value: &Blob) {
        self.string(&base64::encode(value.as_ref()))
    }

    /// Writes a timestamp; the AWS Query protocol defaults to ISO-8601 date-time.
    pub fn instant(self, instant: &Instant, format: Format) {
        self.string(&instant.fmt(format))
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

/// Writes `prefix.entry.N.key` / `prefix.entry.N.value` pairs.
#[must_use]
pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    key_name: &'a str,
    value_name: &'a str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        key_name: &'a str,
        value_name: &'a str,
    ) -> QueryMapWriter<'a> {
        QueryMapWriter {
            output,
            prefix,
            key_name,
            value_name,
            next_index: 1,
        }
    }

    /// Writes the key of the next entry and returns the writer for its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter {
        let entry = format!("{}.entry.{}", self.prefix, self.next_index);
        self.next_index += 1;
        self.output.push('&');
        self.output.push_str(&format!("{}.{}", entry, self.key_name));
        self.output.push('=');
        self.output.push_str(&encode(key));
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", entry, self.value_name)),
        )
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes `prefix.member.N` values.
#[must_use]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    member_name: &'a str,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(output: &'a mut String, prefix: Cow<'a, str>, member_name: &'a str) -> QueryListWriter<'a> {
        QueryListWriter {
            output,
            prefix,
            member_name,
            next_index: 1,
        }
    }

    /// Returns the writer for the next member of the list.
    pub fn entry(&mut self) -> QueryValueWriter {
        let prefix = format!("{}.{}.{}", self.prefix, self.member_name, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    pub fn finish(self) {
        // Calling this drops self
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use pretty_assertions::assert_eq;
    use smithy_types::instant::Format;
    use smithy_types::{Blob, Instant};

    #[test]
    fn query_simple() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Publish", "2010-03-31");
        writer.prefix("TopicArn").string("arn:aws:sns:us-east-1:123456789012:my-topic");
        writer.prefix("Message").string("hello world & friends");
        writer.finish();
        assert_eq!(
            "Action=Publish&Version=2010-03-31\
            &TopicArn=arn%3Aaws%3Asns%3Aus-east-1%3A123456789012%3Amy-topic\
            &Message=hello%20world%20%26%20friends",
            out
        );
    }

    #[test]
    fn query_list_and_map() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "CreateTopic", "2010-03-31");
        writer.prefix("Name").string("orders");
        let mut tags = writer.prefix("Tags").start_list("member");
        let mut tag = tags.entry();
        tag.prefix("Key").string("team");
        tag.prefix("Value").string("payments");
        let mut tag = tags.entry();
        tag.prefix("Key").string("stage");
        tag.prefix("Value").string("prod");
        tags.finish();
        let mut attributes = writer.prefix("Attributes").start_map("key", "value");
        attributes.entry("DisplayName").string("Orders");
        attributes.entry("FifoTopic").string("false");
        attributes.finish();
        writer.finish();
        assert_eq!(
            "Action=CreateTopic&Version=2010-03-31\
            &Name=orders\
            &Tags.member.1.Key=team&Tags.member.1.Value=payments\
            &Tags.member.2.Key=stage&Tags.member.2.Value=prod\
            &Attributes.entry.1.key=DisplayName&Attributes.entry.1.value=Orders\
            &Attributes.entry.2.key=FifoTopic&Attributes.entry.2.value=false",
            out
        );
    }

    #[test]
    fn query_renamed_map_and_nested_values() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Publish", "2010-03-31");
        let mut attributes = writer
            .prefix("MessageAttributes")
            .start_map("Name", "Value");
        let mut value = attributes.entry("color");
        value.prefix("DataType").string("String");
        value.prefix("StringValue").string("blue");
        let mut value = attributes.entry("payload");
        value.prefix("DataType").string("Binary");
        value.prefix("BinaryValue").blob(&Blob::new("hi"));
        attributes.finish();
        writer.finish();
        assert_eq!(
            "Action=Publish&Version=2010-03-31\
            &MessageAttributes.entry.1.Name=color\
            &MessageAttributes.entry.1.Value.DataType=String\
            &MessageAttributes.entry.1.Value.StringValue=blue\
            &MessageAttributes.entry.2.Name=payload\
            &MessageAttributes.entry.2.Value.DataType=Binary\
            &MessageAttributes.entry.2.Value.BinaryValue=aGk%3D",
            out
        );
    }

    #[test]
    fn query_scalars() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "Test", "1");
        writer.prefix("Enabled").boolean(true);
        writer.prefix("Count").number(-5);
        writer
            .prefix("At")
            .instant(&Instant::from_epoch_seconds(1576540098), Format::DateTime);
        writer.finish();
        assert_eq!(
            "Action=Test&Version=1&Enabled=true&Count=-5&At=2019-12-16T23%3A48%3A18Z",
            out
        );
    }
}
