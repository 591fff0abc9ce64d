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

use std::{path::{Path,PathBuf}, sync::{Arc, atomic::{AtomicUsize,AtomicBool,Ordering}}, time::Duration};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use aeropi_track::{
    FlightIdentity,
    errors::{Result,AeroPiError},
    telemetry::BoundingRegion,
    normalize::RawFlightInfo,
    flightaware::FlightInfoProvider,
    display::{DisplayState, SharedDisplayState},
    tracker::{Tracker, PollOutcome}
};

/// counts lookups, optionally failing or cancelling a token while the lookup is in flight
#[derive(Default)]
struct MockProvider {
    lookups: AtomicUsize,
    fail: AtomicBool,
    cancel_on_lookup: Option<CancellationToken>,
}

impl MockProvider {
    fn failing()->Self {
        let provider = MockProvider::default();
        provider.fail.store( true, Ordering::SeqCst);
        provider
    }

    fn lookups (&self)->usize { self.lookups.load( Ordering::SeqCst) }
}

#[async_trait]
impl FlightInfoProvider for MockProvider {
    async fn lookup (&self, flight: &FlightIdentity)->Result<RawFlightInfo> {
        self.lookups.fetch_add( 1, Ordering::SeqCst);
        if let Some(token) = &self.cancel_on_lookup { token.cancel() }

        if self.fail.load( Ordering::SeqCst) {
            Err( AeroPiError::OpFailedError( format!("no connection for {}", flight)))
        } else {
            Ok( RawFlightInfo {
                airline_name: Some("United Airlines".into()),
                aircraft_type: Some("Airbus A320neo (twin-jet)".into()),
                origin_airport: Some("San Francisco International".into()),
                origin_country: Some("San Francisco, CA".into()),
            })
        }
    }
}

fn region()->BoundingRegion {
    BoundingRegion { lat_min: 37.5, lat_max: 37.7, lon_min: -122.45, lon_max: -122.25, alt_max: 10000.0 }
}

fn write_aircraft (path: &Path, flights: &[&str]) {
    let records: Vec<String> = flights.iter()
        .map( |f| format!(r#"{{"hex":"a00001","flight":"{:<8}","alt_baro":5000,"lat":37.6,"lon":-122.35}}"#, f))
        .collect();
    std::fs::write( path, format!(r#"{{"now":1700000000.0,"aircraft":[{}]}}"#, records.join(","))).unwrap();
}

fn tracker (path: &Path, provider: Arc<MockProvider>, state: &SharedDisplayState)->Tracker {
    Tracker::new( path, region(), 16, provider, state.clone())
}

#[tokio::test]
async fn test_missing_file_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let provider = Arc::new( MockProvider::default());
    let state = SharedDisplayState::new();
    let token = CancellationToken::new();

    let mut tracker = tracker( &path, provider.clone(), &state);
    assert_eq!( tracker.poll( &token).await, PollOutcome::NoTelemetry);
    assert!( state.is_empty());
    assert_eq!( provider.lookups(), 0);
}

#[tokio::test]
async fn test_lookup_once_per_identity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let provider = Arc::new( MockProvider::default());
    let state = SharedDisplayState::new();
    let token = CancellationToken::new();
    let abc = FlightIdentity::new("ABC123").unwrap();

    write_aircraft( &path, &["ABC123"]);
    let mut tracker = tracker( &path, provider.clone(), &state);

    assert_eq!( tracker.poll( &token).await, PollOutcome::Updated( abc.clone()));
    assert_eq!( provider.lookups(), 1);

    for _ in 0..5 {
        assert_eq!( tracker.poll( &token).await, PollOutcome::Unchanged);
    }
    assert_eq!( provider.lookups(), 1);

    match state.snapshot() {
        DisplayState::Showing{ flight, metadata } => {
            assert_eq!( flight, abc);
            assert_eq!( metadata.airline_name.as_deref(), Some("United Airlines"));
            assert_eq!( metadata.aircraft_type.as_deref(), Some("Airbus A320"));
            assert_eq!( metadata.origin_airport.as_deref(), Some("San Francisco Int"));
        }
        DisplayState::Empty => panic!("display should show ABC123")
    }

    // a new identity triggers a new lookup
    write_aircraft( &path, &["DEF456", "ABC123"]);
    assert_eq!( tracker.poll( &token).await, PollOutcome::Updated( FlightIdentity::new("DEF456").unwrap()));
    assert_eq!( provider.lookups(), 2);
}

#[tokio::test]
async fn test_failed_lookup_is_not_retried() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let provider = Arc::new( MockProvider::failing());
    let state = SharedDisplayState::new();
    let token = CancellationToken::new();
    let abc = FlightIdentity::new("ABC123").unwrap();

    write_aircraft( &path, &["ABC123"]);
    let mut tracker = tracker( &path, provider.clone(), &state);

    assert_eq!( tracker.poll( &token).await, PollOutcome::LookupFailed( abc.clone()));
    assert!( state.is_empty());

    assert_eq!( tracker.poll( &token).await, PollOutcome::Unchanged);
    assert_eq!( tracker.poll( &token).await, PollOutcome::Unchanged);
    assert_eq!( provider.lookups(), 1);
    assert!( state.is_empty());

    // once the aircraft left and came back we try again
    write_aircraft( &path, &[]);
    tracker.poll( &token).await;
    write_aircraft( &path, &["ABC123"]);
    assert_eq!( tracker.poll( &token).await, PollOutcome::LookupFailed( abc));
    assert_eq!( provider.lookups(), 2);
}

#[tokio::test]
async fn test_clears_when_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let provider = Arc::new( MockProvider::default());
    let state = SharedDisplayState::new();
    let token = CancellationToken::new();

    write_aircraft( &path, &["ABC123"]);
    let mut tracker = tracker( &path, provider.clone(), &state);
    tracker.poll( &token).await;
    assert!( !state.is_empty());

    std::fs::write( &path, r#"{"now":1700000010.0,"aircraft":[{"hex":"a00002","flight":"FAR001","alt_baro":35000,"lat":37.6,"lon":-122.35}]}"#).unwrap();
    assert_eq!( tracker.poll( &token).await, PollOutcome::Cleared);
    assert!( state.is_empty());

    for _ in 0..2 {
        assert_eq!( tracker.poll( &token).await, PollOutcome::Unchanged);
        assert!( state.is_empty());
    }
    assert_eq!( provider.lookups(), 1);
}

#[tokio::test]
async fn test_malformed_file_counts_as_no_aircraft() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let provider = Arc::new( MockProvider::default());
    let state = SharedDisplayState::new();
    let token = CancellationToken::new();

    write_aircraft( &path, &["ABC123"]);
    let mut tracker = tracker( &path, provider.clone(), &state);
    tracker.poll( &token).await;
    assert!( !state.is_empty());

    std::fs::write( &path, "").unwrap();
    assert_eq!( tracker.poll( &token).await, PollOutcome::Cleared);
    assert!( state.is_empty());
}

#[tokio::test]
async fn test_no_write_after_cancel_during_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let token = CancellationToken::new();
    let provider = Arc::new( MockProvider { cancel_on_lookup: Some(token.clone()), ..MockProvider::default() });
    let state = SharedDisplayState::new();

    write_aircraft( &path, &["ABC123"]);
    let mut tracker = tracker( &path, provider.clone(), &state);
    assert_eq!( tracker.poll( &token).await, PollOutcome::Cancelled);
    assert!( state.is_empty());
}

#[tokio::test]
async fn test_loop_exits_when_cancelled_during_sleep() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");
    let provider = Arc::new( MockProvider::default());
    let state = SharedDisplayState::new();
    let token = CancellationToken::new();

    write_aircraft( &path, &["ABC123"]);
    let tracker = tracker( &path, provider.clone(), &state);
    let task = tokio::spawn( tracker.run( Duration::from_secs(30), token.clone()));

    tokio::time::sleep( Duration::from_millis(200)).await; // first poll is immediate, then the loop sleeps
    assert_eq!( provider.lookups(), 1);
    assert!( !state.is_empty());

    token.cancel();
    tokio::time::timeout( Duration::from_secs(2), task).await.expect("tracking loop did not terminate").unwrap();

    // nobody is polling anymore
    write_aircraft( &path, &[]);
    tokio::time::sleep( Duration::from_millis(100)).await;
    assert!( !state.is_empty());
    assert_eq!( provider.lookups(), 1);
}
