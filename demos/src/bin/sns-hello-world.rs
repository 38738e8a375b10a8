/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::ProvideRegion;
use sns::{Client, Config, Error, Region, PKG_VERSION};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    /// The default AWS Region.
    #[structopt(short, long)]
    default_region: Option<String>,

    /// Specifies the email address to subscribe to the topic.
    #[structopt(short, long)]
    email_address: String,

    /// The message to publish.
    #[structopt(short, long, default_value = "hello sns!")]
    message: String,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

/// Subscribes an email address to the last topic of the account and publishes a message to it.
/// If the email address has not been confirmed for the topic, a confirmation request is sent.
/// # Arguments
///
/// * `-e EMAIL_ADDRESS` - The email address of a user subscribing to the topic.
/// * `[-m MESSAGE]` - The message to publish.
/// * `[-d DEFAULT-REGION]` - The Region in which the client is created.
///    If not supplied, uses the value of the **AWS_REGION** environment variable.
///    If the environment variable is not set, defaults to **us-west-2**.
/// * `[-v]` - Whether to display additional information.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let Opt {
        default_region,
        email_address,
        message,
        verbose,
    } = Opt::from_args();

    let region = default_region
        .as_ref()
        .map(|region| Region::new(region.clone()))
        .or_else(|| aws_types::region::default_provider().region())
        .unwrap_or_else(|| Region::new("us-west-2"));

    if verbose {
        println!("SNS version:   {}", PKG_VERSION);
        println!("Region:        {:?}", &region);
        println!("Email address: {}", &email_address);
        println!();
    }

    let conf = Config::builder().region(region).build();
    let client = Client::from_conf(conf);

    let topics = client.list_topics().send().await?;
    let topic_arn = match topics
        .topics()
        .and_then(|topics| topics.last())
        .and_then(|topic| topic.topic_arn())
    {
        Some(arn) => arn.to_string(),
        None => {
            eprintln!("No topics found, create one first");
            std::process::exit(1);
        }
    };

    println!("Receiving on topic with ARN: `{}`", topic_arn);

    let rsp = client
        .subscribe()
        .topic_arn(&topic_arn)
        .protocol("email")
        .endpoint(email_address)
        .send()
        .await?;

    println!("Added a subscription: {:?}", rsp);

    let rsp = client
        .publish()
        .topic_arn(&topic_arn)
        .message(message)
        .send()
        .await?;

    println!("Published message: {:?}", rsp.message_id().unwrap_or_default());

    Ok(())
}
