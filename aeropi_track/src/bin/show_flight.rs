/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use aeropi_common::init_tracing;
use aeropi_track::{
    load_config, AeroPiConfig, FlightIdentity, normalize::{normalize, fit_line},
    flightaware::{FlightAwareConfig, FlightAwareProvider, FlightInfoProvider},
    render::{Page, page_lines}
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "retrieve and show FlightAware metadata for a list of flights")]
struct Args {
    /// optional RON config file (FlightAware settings and display width)
    #[arg(short,long)]
    config: Option<PathBuf>,

    #[arg(num_args=1..)]
    flights: Vec<String>,
}

#[tokio::main]
async fn main()->Result<()> {
    init_tracing();
    let args = Args::parse();

    let (fa_config, width) = if let Some(path) = &args.config {
        let config: AeroPiConfig = load_config( path)?;
        (config.flightaware, config.width)
    } else {
        (FlightAwareConfig::default(), aeropi_track::DEFAULT_WIDTH)
    };
    let provider = FlightAwareProvider::new( fa_config)?;

    for ident in &args.flights {
        let Some(flight) = FlightIdentity::new( ident) else { continue };
        println!("------- flight: {}", flight);

        match provider.lookup( &flight).await {
            Ok(raw) => {
                println!("{raw:#?}");
                let metadata = normalize( raw, width);
                for page in [Page::Page1, Page::Page2] {
                    println!("{:?}:", page);
                    for line in page_lines( page, &metadata) {
                        println!("  |{}|", fit_line( line, width));
                    }
                }
            }
            Err(e) => println!("lookup failed: {e}")
        }
    }

    Ok(())
}
