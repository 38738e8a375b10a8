/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fs::File;
use std::io::Write;
use std::process;

use kms::{Blob, Client, Config, Region};

use aws_types::region::{EnvironmentProvider, ProvideRegion};

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The region
    #[structopt(short, long)]
    region: Option<String>,

    /// Specifies the encryption key
    #[structopt(short, long)]
    key: String,

    /// Specifies the text to encrypt
    #[structopt(short, long)]
    text: String,

    /// Specifies the name of the file to store the encrypted text in
    #[structopt(short, long)]
    out: String,

    /// Whether to display additional runtime information
    #[structopt(short, long)]
    verbose: bool,
}

/// Encrypts a string with a KMS key and writes the base64 encoded ciphertext to a file.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let Opt {
        key,
        out,
        region,
        text,
        verbose,
    } = Opt::from_args();

    let region = EnvironmentProvider::new()
        .region()
        .or_else(|| region.as_ref().map(|region| Region::new(region.clone())))
        .unwrap_or_else(|| Region::new("us-west-2"));

    if verbose {
        println!("KMS client version: {}\n", kms::PKG_VERSION);
        println!("Region: {:?}", &region);
        println!("Key:    {}", key);
        println!("Text:   {}", text);
        println!("Out:    {}", out);
    }

    let config = Config::builder().region(region).build();
    let client = Client::from_conf(config);

    let resp = match client
        .encrypt()
        .key_id(key)
        .plaintext(Blob::new(text.as_bytes()))
        .send()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Encryption failure: {}", e);
            process::exit(1);
        }
    };

    let encoded = match resp.ciphertext_blob() {
        Some(blob) => base64::encode(blob.as_ref()),
        None => {
            eprintln!("The response carried no ciphertext");
            process::exit(1);
        }
    };

    let written = File::create(&out).and_then(|mut file| file.write_all(encoded.as_bytes()));
    if let Err(e) = written {
        eprintln!("Unable to write {}: {}", out, e);
        process::exit(1);
    }

    if verbose {
        println!("Wrote the following to {}", &out);
        println!("{}", encoded);
    }
}
