/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::region::ProvideRegion;
use structopt::StructOpt;
use transcribe::model::{LanguageCode, Media, MediaFormat};
use transcribe::{Client, Config, Error, Region, PKG_VERSION};

#[derive(Debug, StructOpt)]
struct Opt {
    /// The default AWS Region.
    #[structopt(short, long)]
    default_region: Option<String>,

    /// The name of the transcription job.
    #[structopt(short, long)]
    job_name: String,

    /// The S3 URI of the media file, eg. `s3://bucket/recording.wav`.
    #[structopt(short, long)]
    uri: String,

    /// The language spoken in the media file.
    #[structopt(short, long, default_value = "en-US", parse(from_str))]
    language: LanguageCode,

    /// The format of the media file.
    #[structopt(short, long, default_value = "wav", parse(from_str))]
    format: MediaFormat,

    /// Whether to display additional information.
    #[structopt(short, long)]
    verbose: bool,
}

/// Starts an asynchronous transcription job and prints its initial status.
#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let Opt {
        default_region,
        job_name,
        uri,
        language,
        format,
        verbose,
    } = Opt::from_args();

    let region = default_region
        .as_ref()
        .map(|region| Region::new(region.clone()))
        .or_else(|| aws_types::region::default_provider().region())
        .unwrap_or_else(|| Region::new("us-west-2"));

    if verbose {
        println!("Transcribe version: {}", PKG_VERSION);
        println!("Region:             {:?}", &region);
        println!("Job:                {}", &job_name);
        println!("Media:              {} ({})", &uri, format.as_str());
        println!();
    }

    let client = Client::from_conf(Config::builder().region(region).build());

    let rsp = client
        .start_transcription_job()
        .transcription_job_name(job_name)
        .language_code(language)
        .media_format(format)
        .media(Media::builder().media_file_uri(uri).build())
        .send()
        .await?;

    if let Some(job) = rsp.transcription_job() {
        println!(
            "Job {} is {}",
            job.transcription_job_name().unwrap_or_default(),
            job.transcription_job_status()
                .map(|status| status.as_str())
                .unwrap_or("UNKNOWN")
        );
    }

    Ok(())
}
