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

use std::{path::PathBuf, sync::{Arc, atomic::{AtomicBool,Ordering}}};
use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use aeropi_common::{init_tracing, info, warn, process::{set_ctrlc_handler, exit}};
use aeropi_track::{load_config, display::ConsoleDisplay, flightaware::FlightAwareProvider, lifecycle::Coordinator};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "track the closest aircraft of a local ADS-B feed and show its flight info")]
struct Args {
    /// RON config file
    #[arg(short,long, default_value="configs/aeropi.ron")]
    config: PathBuf,

    /// don't launch the receiver process (feed is managed externally)
    #[arg(long)]
    no_receiver: bool,
}

#[tokio::main]
async fn main()->Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = load_config( &args.config)?;
    if args.no_receiver { config.receiver = None }

    // install the handler before launching anything so that early signals still get a full teardown.
    // First ctrl-c requests an orderly shutdown, a second one exits right away
    let token = CancellationToken::new();
    let handler_token = token.clone();
    let requested = AtomicBool::new(false);
    set_ctrlc_handler( move || {
        if requested.swap( true, Ordering::SeqCst) {
            exit(1)
        } else {
            info!("shutdown requested");
            handler_token.cancel();
        }
    })?;

    let provider = Arc::new( FlightAwareProvider::new( config.flightaware.clone())?);
    let coordinator = Coordinator::start( config, provider, Box::new( ConsoleDisplay::new()), token).await?;

    coordinator.run().await?;
    Ok(())
}
