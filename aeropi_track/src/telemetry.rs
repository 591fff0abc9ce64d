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

//! the telemetry model of the receiver feed and the bounding region filter that selects the aircraft of interest.
//!
//! The receiver (dump1090) periodically overwrites an `aircraft.json` snapshot file:
//! ```json
//! { "now": 1700000000.1, "messages": 1234,
//!   "aircraft": [
//!     { "hex": "a1b2c3", "flight": "UAL123  ", "alt_baro": 9000, "lat": 37.1, "lon": -122.2, ... },
//!     { "hex": "a4b5c6", "alt_baro": "ground", ... }
//!   ]
//! }
//! ```
//! All per-aircraft fields are optional. We only keep the ones we need for filtering.

use std::{fmt, path::Path};
use serde::{Serialize,Deserialize,Deserializer};
use aeropi_common::fs::filepath_contents;

use crate::FlightIdentity;
use crate::errors::Result;

/// lat/lon bounds plus altitude ceiling (in feet, as reported by the feed). All bounds are exclusive
#[derive(Deserialize,Serialize,Debug,Clone,Copy,PartialEq)]
pub struct BoundingRegion {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub alt_max: f64,
}

impl BoundingRegion {
    pub fn contains (&self, lat: f64, lon: f64, alt: f64)->bool {
        lat > self.lat_min && lat < self.lat_max &&
        lon > self.lon_min && lon < self.lon_max &&
        alt < self.alt_max
    }
}

/// a single aircraft entry of a snapshot
#[derive(Deserialize,Serialize,Debug,Clone,Default,PartialEq)]
pub struct AircraftRecord {
    #[serde(default)]
    pub flight: Option<String>, // callsign, blank padded

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default, deserialize_with="deserialize_alt_baro")]
    pub alt_baro: Option<f64>, // ft, "ground" is mapped to 0
}

impl AircraftRecord {
    pub fn new (flight: &str, lat: f64, lon: f64, alt_baro: f64)->Self {
        AircraftRecord { flight: Some(flight.to_string()), lat: Some(lat), lon: Some(lon), alt_baro: Some(alt_baro) }
    }

    /// the trimmed callsign if there is a non-blank one
    pub fn callsign (&self)->Option<&str> {
        self.flight.as_deref().map( |s| s.trim()).filter( |s| !s.is_empty())
    }

    pub fn has_position (&self)->bool {
        self.lat.is_some() && self.lon.is_some()
    }

    /// does this record have a callsign and a position/altitude that is inside of the region
    pub fn is_within (&self, region: &BoundingRegion)->bool {
        match (self.callsign(), self.lat, self.lon, self.alt_baro) {
            (Some(_), Some(lat), Some(lon), Some(alt)) => region.contains( lat, lon, alt),
            _ => false
        }
    }
}

impl fmt::Display for AircraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Aircraft( cs: {:?}", self.callsign().unwrap_or(""))?;
        if let (Some(lat),Some(lon)) = (self.lat,self.lon) { write!( f, ", pos: ({lat:.4},{lon:.4})")?; }
        if let Some(alt) = self.alt_baro { write!( f, ", alt: {alt:.0}")?; }
        write!( f, ")")
    }
}

fn deserialize_alt_baro<'de,D> (deserializer: D)->std::result::Result<Option<f64>,D::Error> where D: Deserializer<'de> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AltBaro { Feet(f64), Label(String) }

    Ok( match Option::<AltBaro>::deserialize( deserializer)? {
        Some(AltBaro::Feet(ft)) => Some(ft),
        Some(AltBaro::Label(s)) if s == "ground" => Some(0.0),
        _ => None
    })
}

/// the aircraft list of the receiver at a given point in time, in source order
#[derive(Deserialize,Serialize,Debug,Clone,Default,PartialEq)]
pub struct AircraftSnapshot {
    #[serde(default)]
    pub now: Option<f64>,

    #[serde(default)]
    pub aircraft: Vec<AircraftRecord>,
}

impl AircraftSnapshot {
    pub fn new (aircraft: Vec<AircraftRecord>)->Self {
        AircraftSnapshot { now: None, aircraft }
    }

    pub fn from_json (bytes: &[u8])->Result<Self> {
        Ok( serde_json::from_slice( bytes)? )
    }

    /// false if the receiver has not produced any positions yet
    pub fn has_positions (&self)->bool {
        self.aircraft.iter().any( |ac| ac.has_position())
    }

    /// all records that satisfy the region bounds, in source order
    pub fn within<'a> (&'a self, region: &'a BoundingRegion)->impl Iterator<Item=&'a AircraftRecord> + 'a {
        self.aircraft.iter().filter( move |ac| ac.is_within( region))
    }

    /// select at most one aircraft of interest. Ties are resolved by source order (first match wins) - there is
    /// no distance ranking
    pub fn select_flight (&self, region: &BoundingRegion)->Option<FlightIdentity> {
        self.within( region).next().and_then( |ac| ac.callsign()).and_then( FlightIdentity::new)
    }
}

/// read the snapshot file. Returns `Ok(None)` if the file does not exist (yet), which is not an error
pub fn read_snapshot (path: impl AsRef<Path>)->Result<Option<AircraftSnapshot>> {
    let path = path.as_ref();
    if path.is_file() {
        let data = filepath_contents( &path)?;
        Ok( Some( AircraftSnapshot::from_json( data.as_slice())?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &'static str = r#"{ "now": 1700000000.1, "messages": 4711, "aircraft": [
        { "hex": "a00001", "alt_baro": 3000, "rssi": -20.1 },
        { "hex": "a00002", "flight": "        ", "alt_baro": 3000, "lat": 37.5, "lon": -122.5 },
        { "hex": "a00003", "flight": "SKW5432 ", "alt_baro": "ground", "lat": 37.6, "lon": -122.4 },
        { "hex": "a00004", "flight": "UAL123  ", "alt_baro": 8500.0, "lat": 37.4, "lon": -122.3 }
    ]}"#;

    fn region()->BoundingRegion {
        BoundingRegion { lat_min: 37.0, lat_max: 38.0, lon_min: -123.0, lon_max: -122.0, alt_max: 10000.0 }
    }

    #[test]
    fn test_parse_snapshot() {
        let snapshot = AircraftSnapshot::from_json( SNAPSHOT.as_bytes()).unwrap();
        assert_eq!( snapshot.aircraft.len(), 4);
        assert!( snapshot.has_positions());

        assert_eq!( snapshot.aircraft[0].callsign(), None);
        assert_eq!( snapshot.aircraft[0].alt_baro, Some(3000.0));
        assert_eq!( snapshot.aircraft[1].callsign(), None);
        assert_eq!( snapshot.aircraft[2].callsign(), Some("SKW5432"));
        assert_eq!( snapshot.aircraft[2].alt_baro, Some(0.0));
        assert_eq!( snapshot.aircraft[3].alt_baro, Some(8500.0));
    }

    #[test]
    fn test_select_first_in_source_order() {
        let snapshot = AircraftSnapshot::from_json( SNAPSHOT.as_bytes()).unwrap();
        let selected = snapshot.select_flight( &region());
        assert_eq!( selected.as_ref().map(|f| f.as_str()), Some("SKW5432"));
        assert_eq!( snapshot.within( &region()).count(), 2);
    }

    #[test]
    fn test_no_positions_yet() {
        let snapshot = AircraftSnapshot::from_json( br#"{"now": 1.0, "aircraft": [{"hex":"abc123","flight":"ABC123"}]}"#).unwrap();
        assert!( !snapshot.has_positions());
        assert!( snapshot.select_flight( &region()).is_none());

        let snapshot = AircraftSnapshot::from_json( br#"{"now": 1.0}"#).unwrap();
        assert!( snapshot.aircraft.is_empty());
        assert!( snapshot.select_flight( &region()).is_none());
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let r = region();
        assert!( r.contains( 37.5, -122.5, 9999.0));
        assert!( !r.contains( 37.0, -122.5, 100.0));
        assert!( !r.contains( 37.5, -122.0, 100.0));
        assert!( !r.contains( 37.5, -122.5, 10000.0));
    }

    #[test]
    fn test_unknown_altitude_label() {
        let snapshot = AircraftSnapshot::from_json( br#"{"aircraft": [{"flight":"X1","lat":37.5,"lon":-122.5,"alt_baro":"n/a"}]}"#).unwrap();
        assert_eq!( snapshot.aircraft[0].alt_baro, None);
        assert!( snapshot.select_flight( &region()).is_none());
    }
}
