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

//! normalization of raw flight metadata into strings that fit a fixed-width character display

use serde::{Serialize,Deserialize};

/// flight metadata as returned by a [`crate::flightaware::FlightInfoProvider`]. All fields are optional
#[derive(Debug,Clone,Default,PartialEq,Eq,Serialize,Deserialize)]
pub struct RawFlightInfo {
    pub airline_name: Option<String>,
    pub aircraft_type: Option<String>,
    pub origin_airport: Option<String>,
    pub origin_country: Option<String>,
}

/// display ready flight metadata. Once created this is never modified
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct FlightMetadata {
    pub airline_name: Option<String>,
    pub aircraft_type: Option<String>,
    pub origin_airport: Option<String>,
    pub origin_country: Option<String>,
}

impl From<FlightMetadata> for RawFlightInfo {
    fn from (md: FlightMetadata)->Self {
        RawFlightInfo {
            airline_name: md.airline_name,
            aircraft_type: md.aircraft_type,
            origin_airport: md.origin_airport,
            origin_country: md.origin_country,
        }
    }
}

/// ordered (substring,alias) list for long aircraft type names. Order matters: "737 MAX" has to be checked before "737"
const AIRCRAFT_ALIASES: [(&str,&str);8] = [
    ("777", "Boeing 777"),
    ("A320", "Airbus A320"),
    ("737 MAX", "Boeing 737 MAX"),
    ("737", "Boeing 737"),
    ("A380", "Airbus A380"),
    ("787", "Boeing 787"),
    ("A319", "Airbus A319"),
    ("A350", "Airbus A350"),
];

#[inline]
fn char_len (s: &str)->usize { s.chars().count() }

/// abbreviate raw metadata so that it fits into `width` columns where we know how to.
/// Strings we can't abbreviate are left as is (they get truncated when rendered)
pub fn normalize (raw: RawFlightInfo, width: usize)->FlightMetadata {
    FlightMetadata {
        airline_name: raw.airline_name.map( |s| normalize_airline( s, width)),
        aircraft_type: Some( normalize_aircraft_type( raw.aircraft_type, width)),
        origin_airport: raw.origin_airport.map( |s| normalize_airport( s, width)),
        origin_country: raw.origin_country,
    }
}

pub fn normalize_airline (name: String, width: usize)->String {
    if char_len(&name) > width {
        name.replace("Airways", "A.").replace("Airlines", "A.")
    } else {
        name
    }
}

pub fn normalize_aircraft_type (aircraft_type: Option<String>, width: usize)->String {
    match aircraft_type {
        Some(s) if char_len(&s) > width => {
            AIRCRAFT_ALIASES.iter()
                .find( |(pattern,_)| s.contains( pattern))
                .map( |(_,alias)| alias.to_string())
                .unwrap_or(s)
        }
        Some(s) => s,
        None => "?".to_string()
    }
}

pub fn normalize_airport (name: String, width: usize)->String {
    if char_len(&name) > width {
        let name = name.replace("International", "Int'l");
        if char_len(&name) > width {
            name.replace("Int'l", "Int").replace("Airport", "Apt.")
        } else {
            name
        }
    } else {
        name
    }
}

/// render text left justified and blank padded or truncated to exactly `width` columns. Missing or empty text
/// is shown as a single "?" placeholder
pub fn fit_line (text: Option<&str>, width: usize)->String {
    match text {
        Some(s) if !s.is_empty() => pad_line( s, width),
        _ => pad_line( "?", width)
    }
}

/// pad or truncate to exactly `width` columns, without placeholder substitution
pub fn pad_line (text: &str, width: usize)->String {
    let mut line: String = text.chars().take(width).collect();
    let n = char_len(&line);
    for _ in n..width { line.push(' ') }
    line
}
