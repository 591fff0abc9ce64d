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

//! the enrichment client that retrieves flight metadata from FlightAware.
//!
//! A lookup takes two chained requests:
//!   1. the public flight page `{base_url}/live/flight/{ident}`, which embeds a session token in a
//!      `trackpollGlobals` script block (`"TOKEN":"..."`)
//!   2. the trackpoll endpoint `{base_url}/ajax/trackpoll.rvt?token={token}&locale=en_US&summary=1`, which
//!      returns a JSON object with flight records keyed by internal flight-session ids
//!
//! There are no retries. Any failure along the way is reported as an error and it is up to the caller to
//! decide if and when to try again.

use std::time::Duration;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use indexmap::IndexMap;
use aeropi_common::net::{build_client, get_text, get_json};

use crate::FlightIdentity;
use crate::normalize::RawFlightInfo;
use crate::errors::{Result,parse_error,op_failed};

/// abstraction of the metadata source used by the tracking loop. Lookups are slow (seconds) and can fail
#[async_trait]
pub trait FlightInfoProvider: Send + Sync {
    async fn lookup (&self, flight: &FlightIdentity)->Result<RawFlightInfo>;
}

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct FlightAwareConfig {
    pub base_url: String,
    pub timeout: Duration, // per request
    pub user_agent: String,
}

impl Default for FlightAwareConfig {
    fn default()->Self {
        FlightAwareConfig {
            base_url: "https://www.flightaware.com".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("aeropi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

pub struct FlightAwareProvider {
    config: FlightAwareConfig,
    client: Client,
}

impl FlightAwareProvider {
    pub fn new (config: FlightAwareConfig)->Result<Self> {
        let client = build_client( config.timeout, config.user_agent.as_str())?;
        Ok( FlightAwareProvider { config, client } )
    }

    pub fn flight_page_url (&self, flight: &FlightIdentity)->String {
        format!("{}/live/flight/{}", self.base_url(), flight.as_str())
    }

    pub fn trackpoll_url (&self, token: &str)->String {
        format!("{}/ajax/trackpoll.rvt?token={}&locale=en_US&summary=1", self.base_url(), token)
    }

    fn base_url (&self)->&str {
        self.config.base_url.trim_end_matches('/')
    }
}

#[async_trait]
impl FlightInfoProvider for FlightAwareProvider {
    async fn lookup (&self, flight: &FlightIdentity)->Result<RawFlightInfo> {
        let page = get_text( &self.client, self.flight_page_url( flight).as_str()).await?;
        let token = extract_token( page.as_str()).ok_or_else( || op_failed!("no trackpoll token for flight {}", flight))?;

        let response: TrackpollResponse = get_json( &self.client, self.trackpoll_url( token).as_str()).await?;
        parse_trackpoll( response)
    }
}

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new( r#""TOKEN":"(.*?)""#).unwrap();
}

const TOKEN_MARKER: &'static str = "trackpollGlobals";

/// get the session token of the first `"TOKEN":"..."` occurrence after the `trackpollGlobals` marker
pub fn extract_token (page: &str)->Option<&str> {
    let i0 = page.find( TOKEN_MARKER)?;
    TOKEN_RE.captures( &page[i0..])
        .and_then( |cap| cap.get(1))
        .map( |m| m.as_str())
        .filter( |s| !s.is_empty())
}

//--- the parts of the trackpoll response we need

/// the trackpoll response. Flight records are keyed by flight-session ids and kept in document order since
/// the first one is the current flight. Records are only parsed on demand
#[derive(Deserialize,Debug)]
pub struct TrackpollResponse {
    pub flights: IndexMap<String,Value>,
}

#[derive(Deserialize,Debug)]
struct TrackpollFlight {
    #[serde(default)]
    airline: Option<Airline>,

    #[serde(rename="activityLog")]
    activity_log: ActivityLog,
}

#[derive(Deserialize,Debug)]
struct Airline {
    #[serde(rename="fullName", default)]
    full_name: Option<String>,
}

#[derive(Deserialize,Debug)]
struct ActivityLog {
    flights: Vec<ActivityFlight>,
}

#[derive(Deserialize,Debug)]
struct ActivityFlight {
    origin: Origin,

    #[serde(rename="aircraftTypeFriendly", default)]
    aircraft_type: Option<String>,
}

#[derive(Deserialize,Debug)]
struct Origin {
    #[serde(rename="friendlyName", default)]
    friendly_name: Option<String>,

    #[serde(rename="friendlyLocation", default)]
    friendly_location: Option<String>,
}

/// extract metadata from the first flight record of a trackpoll response. The record has to contain
/// an activity log with at least one flight that has an origin
pub fn parse_trackpoll (response: TrackpollResponse)->Result<RawFlightInfo> {
    let Some((key,entry)) = response.flights.into_iter().next() else {
        return Err( parse_error!("empty flights in trackpoll response"))
    };

    let entry: TrackpollFlight = serde_json::from_value( entry)
        .map_err( |e| parse_error!("malformed trackpoll flight {}: {}", key, e))?;
    let flight = entry.activity_log.flights.into_iter().next()
        .ok_or_else( || parse_error!("no activity log flights for {}", key))?;

    Ok( RawFlightInfo {
        airline_name: entry.airline.and_then( |a| a.full_name),
        aircraft_type: flight.aircraft_type,
        origin_airport: flight.origin.friendly_name,
        origin_country: flight.origin.friendly_location,
    })
}
