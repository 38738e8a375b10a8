/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::ProvideRegion;
use iot::{Client, Config, Error, Region, PKG_VERSION};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The default AWS Region.
    #[structopt(short, long)]
    default_region: Option<String>,

    /// Only list things of this type.
    #[structopt(short, long)]
    thing_type: Option<String>,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

/// Lists every thing in the registry, following `nextToken` until the last page.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let Opt {
        default_region,
        thing_type,
        verbose,
    } = Opt::from_args();

    let region = default_region
        .as_ref()
        .map(|region| Region::new(region.clone()))
        .or_else(|| aws_types::region::default_provider().region())
        .unwrap_or_else(|| Region::new("us-west-2"));

    if verbose {
        println!("IoT version: {}", PKG_VERSION);
        println!("Region:      {:?}", &region);
        println!();
    }

    let client = Client::from_conf(Config::builder().region(region).build());

    let mut next_token: Option<String> = None;
    let mut count = 0;
    loop {
        let rsp = client
            .list_things()
            .set_next_token(next_token.take())
            .set_thing_type_name(thing_type.clone())
            .send()
            .await?;
        for thing in rsp.things().unwrap_or_default() {
            count += 1;
            println!(
                "{}  {}",
                thing.thing_name().unwrap_or_default(),
                thing.thing_arn().unwrap_or_default()
            );
        }
        match rsp.next_token() {
            Some(token) => next_token = Some(token.to_string()),
            None => break,
        }
    }

    println!();
    println!("Found {} things", count);

    Ok(())
}
