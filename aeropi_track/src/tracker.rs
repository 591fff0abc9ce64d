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

//! the tracking loop that polls the receiver snapshot file, selects the aircraft of interest and retrieves
//! metadata when the selected flight changes

use std::{path::{Path,PathBuf}, sync::Arc, time::Duration};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use aeropi_common::{debug,info,warn};

use crate::FlightIdentity;
use crate::telemetry::{BoundingRegion, AircraftSnapshot, read_snapshot};
use crate::flightaware::FlightInfoProvider;
use crate::normalize::normalize;
use crate::display::SharedDisplayState;

/// what a single poll did to the display state
#[derive(Debug,Clone,PartialEq)]
pub enum PollOutcome {
    NoTelemetry,              // snapshot file does not exist (yet)
    Unchanged,                // same selection as before
    Cleared,                  // no (more) aircraft of interest
    Updated(FlightIdentity),  // new flight with metadata
    LookupFailed(FlightIdentity),
    Cancelled,                // shut down while looking up metadata
}

pub struct Tracker {
    aircraft_path: PathBuf,
    region: BoundingRegion,
    width: usize,
    provider: Arc<dyn FlightInfoProvider>,
    state: SharedDisplayState,

    // the last selected flight. This is tracked separately from the display state so that a failed lookup
    // is not retried while the selection stays the same
    current: Option<FlightIdentity>,
}

impl Tracker {
    pub fn new (aircraft_path: impl Into<PathBuf>, region: BoundingRegion, width: usize,
                provider: Arc<dyn FlightInfoProvider>, state: SharedDisplayState)->Self {
        Tracker { aircraft_path: aircraft_path.into(), region, width, provider, state, current: None }
    }

    /// the selection of the current snapshot file. Unreadable or malformed files count as "no aircraft"
    fn select (&self)->Option<Option<FlightIdentity>> {
        match read_snapshot( &self.aircraft_path) {
            Ok(Some(snapshot)) => {
                if !snapshot.has_positions() { debug!("no positions in snapshot yet") }
                Some( snapshot.select_flight( &self.region))
            }
            Ok(None) => None,
            Err(e) => {
                debug!("telemetry unavailable: {}", e);
                Some(None)
            }
        }
    }

    /// one iteration of the tracking loop
    pub async fn poll (&mut self, token: &CancellationToken)->PollOutcome {
        let Some(selection) = self.select() else { return PollOutcome::NoTelemetry };

        match selection {
            None => {
                self.current = None;
                if self.state.clear() {
                    info!("no aircraft in range, clearing display");
                    PollOutcome::Cleared
                } else {
                    debug!("no aircraft in range");
                    PollOutcome::Unchanged
                }
            }
            Some(flight) if self.current.as_ref() == Some(&flight) => PollOutcome::Unchanged,
            Some(flight) => {
                info!("new flight of interest: {}", flight);
                self.current = Some(flight.clone());

                let result = self.provider.lookup( &flight).await;
                if token.is_cancelled() { return PollOutcome::Cancelled }

                match result {
                    Ok(raw) => {
                        let metadata = normalize( raw, self.width);
                        info!("retrieved metadata for {}: {:?}", flight, metadata);
                        self.state.set( flight.clone(), metadata);
                        PollOutcome::Updated(flight)
                    }
                    Err(e) => {
                        warn!("metadata lookup for {} failed: {}", flight, e);
                        self.state.clear();
                        PollOutcome::LookupFailed(flight)
                    }
                }
            }
        }
    }

    /// poll every `poll_interval` until the token gets cancelled
    pub async fn run (mut self, poll_interval: Duration, token: CancellationToken) {
        debug!("tracking loop started");
        while !token.is_cancelled() {
            self.poll( &token).await;

            tokio::select! {
                _ = token.cancelled() => break,
                _ = sleep( poll_interval) => {}
            }
        }
        debug!("tracking loop terminated");
    }
}
