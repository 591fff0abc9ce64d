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

//! AeroPi tracks the closest in-range aircraft of a local ADS-B receiver feed, enriches it with flight
//! metadata from FlightAware and shows the result on a two-line character display.
//!
//! The crate is organized around three continuously running activities:
//!   - the tracking loop ([`tracker`]) which polls the receiver snapshot file, selects the aircraft of interest and
//!     retrieves its metadata on identity changes
//!   - the rendering loop ([`render`]) which pages through the shared [`display::DisplayState`]
//!   - the lifecycle [`lifecycle::Coordinator`] which starts both loops and tears them down exactly once

use std::{fmt, path::{Path,PathBuf}, sync::Arc, time::Duration};
use serde::{Serialize,Deserialize};

pub mod errors;
use errors::Result;

pub mod telemetry;
use telemetry::BoundingRegion;

pub mod normalize;
pub mod flightaware;
use flightaware::FlightAwareConfig;

pub mod display;
pub mod render;
pub mod tracker;

pub mod receiver;
use receiver::ReceiverConfig;

pub mod lifecycle;

/// default column count of the reference 16x2 character display
pub const DEFAULT_WIDTH: usize = 16;

/// the callsign of the currently selected aircraft. Callsigns are stored trimmed and are never empty
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct FlightIdentity(String);

impl FlightIdentity {
    /// returns None if the (trimmed) callsign is empty
    pub fn new (callsign: &str)->Option<Self> {
        let cs = callsign.trim();
        if cs.is_empty() { None } else { Some( FlightIdentity( cs.to_string())) }
    }

    pub fn as_str (&self)->&str { self.0.as_str() }
}

impl fmt::Display for FlightIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}", self.0)
    }
}

/// the application configuration, normally loaded from a RON file such as `configs/aeropi.ron`
#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct AeroPiConfig {
    pub region: BoundingRegion,

    pub data_dir: PathBuf, // where the receiver writes its snapshot files
    #[serde(default="default_aircraft_file")]
    pub aircraft_file: String,

    #[serde(default)]
    pub receiver: Option<ReceiverConfig>, // if None the feed is managed externally

    pub poll_interval: Duration, // tracking loop cadence
    pub tick_interval: Duration, // rendering loop cadence
    pub greeting_duration: Duration,

    #[serde(default="default_width")]
    pub width: usize,

    pub flightaware: FlightAwareConfig,
}

fn default_aircraft_file()->String { "aircraft.json".to_string() }
fn default_width()->usize { DEFAULT_WIDTH }

impl AeroPiConfig {
    /// the full path of the telemetry snapshot file
    pub fn aircraft_path (&self)->PathBuf {
        self.data_dir.join( self.aircraft_file.as_str())
    }
}

pub fn load_config (path: impl AsRef<Path>)->Result<AeroPiConfig> {
    Ok( aeropi_common::config::load_config_path( path)? )
}
