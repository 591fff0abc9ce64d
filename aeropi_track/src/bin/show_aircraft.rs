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
use anyhow::{Result,anyhow};
use clap::Parser;
use aeropi_track::{load_config, telemetry::read_snapshot};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "show the aircraft records of a receiver snapshot file and the selected flight")]
struct Args {
    /// RON config file that defines the bounding region
    #[arg(short,long, default_value="configs/aeropi.ron")]
    config: PathBuf,

    /// the aircraft.json file to read
    path: PathBuf,
}

fn main()->Result<()> {
    let args = Args::parse();
    let config = load_config( &args.config)?;

    let snapshot = read_snapshot( &args.path)?.ok_or_else( || anyhow!("file not found: {:?}", args.path))?;
    for ac in &snapshot.aircraft {
        let mark = if ac.is_within( &config.region) { "*" } else { " " };
        println!("{mark} {ac}");
    }

    match snapshot.select_flight( &config.region) {
        Some(flight) => println!("selected: {flight}"),
        None => println!("no aircraft of interest")
    }
    Ok(())
}
