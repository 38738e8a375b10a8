/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Abstractions for decoding the XML documents returned by AWS Query services
pub mod decode;
pub mod error;
