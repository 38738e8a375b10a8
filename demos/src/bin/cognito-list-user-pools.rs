/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::ProvideRegion;
use cognitoidentityprovider::{Client, Config, Error, Region, PKG_VERSION};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The default AWS Region.
    #[structopt(short, long)]
    default_region: Option<String>,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

/// Lists the user pools of the account, ten at a time.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let Opt {
        default_region,
        verbose,
    } = Opt::from_args();

    let region = default_region
        .as_ref()
        .map(|region| Region::new(region.clone()))
        .or_else(|| aws_types::region::default_provider().region())
        .unwrap_or_else(|| Region::new("us-west-2"));

    if verbose {
        println!("Cognito Identity Provider version: {}", PKG_VERSION);
        println!("Region:                            {:?}", &region);
        println!();
    }

    let client = Client::from_conf(Config::builder().region(region).build());

    let mut next_token = None;
    loop {
        let rsp = client
            .list_user_pools()
            .max_results(10)
            .set_next_token(next_token)
            .send()
            .await?;
        for pool in rsp.user_pools().unwrap_or_default() {
            println!("  ID:     {}", pool.id().unwrap_or_default());
            println!("  Name:   {}", pool.name().unwrap_or_default());
            println!(
                "  Status: {}",
                pool.status().map(|s| s.as_str()).unwrap_or_default()
            );
            if let Some(created) = pool.creation_date() {
                println!("  Created (epoch seconds): {}", created.epoch_seconds());
            }
            println!();
        }
        next_token = rsp.next_token().map(|token| token.to_string());
        if next_token.is_none() {
            break;
        }
    }

    Ok(())
}
