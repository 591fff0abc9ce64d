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

//! the rendering loop that pages through the shared display state on a fixed cadence

use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use aeropi_common::{debug,warn};

use crate::display::{DisplayState, SharedDisplayState, SharedDisplay, lock_display};
use crate::normalize::FlightMetadata;
use crate::errors::Result;

/// number of ticks per page
pub const PAGE_TICKS: u32 = 5;
/// ticks of a full page cycle (after which the tick counter resets)
pub const CYCLE_TICKS: u32 = 2 * PAGE_TICKS;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Page {
    Splash,
    Page1, // airline / aircraft type
    Page2, // origin airport / origin country
}

/// the page state machine. The tick counter is owned by the rendering loop, it only advances while there is
/// something to show and it is not reset when the display goes back to the splash
#[derive(Debug,Default)]
pub struct Pager {
    tick: u32,
}

impl Pager {
    pub fn new ()->Self { Pager { tick: 0 } }

    pub fn tick (&self)->u32 { self.tick }

    pub fn page_for_tick (tick: u32)->Page {
        if tick % CYCLE_TICKS < PAGE_TICKS { Page::Page1 } else { Page::Page2 }
    }

    /// the page to show for the given state, advancing the cycle if the state is populated
    pub fn next_page (&mut self, state: &DisplayState)->Page {
        if state.is_empty() {
            Page::Splash
        } else {
            let page = Self::page_for_tick( self.tick);
            self.tick += 1;
            if self.tick >= CYCLE_TICKS { self.tick = 0 }
            page
        }
    }
}

/// the two lines of a metadata page
pub fn page_lines<'a> (page: Page, metadata: &'a FlightMetadata)->[Option<&'a str>;2] {
    match page {
        Page::Page1 => [metadata.airline_name.as_deref(), metadata.aircraft_type.as_deref()],
        Page::Page2 => [metadata.origin_airport.as_deref(), metadata.origin_country.as_deref()],
        Page::Splash => [None,None]
    }
}

pub struct Renderer {
    state: SharedDisplayState,
    display: SharedDisplay,
    pager: Pager,
}

impl Renderer {
    pub fn new (state: SharedDisplayState, display: SharedDisplay)->Self {
        Renderer { state, display, pager: Pager::new() }
    }

    /// render one frame from a consistent copy of the display state
    pub fn render (&mut self)->Result<Page> {
        let state = self.state.snapshot();
        let page = self.pager.next_page( &state);
        let mut display = lock_display( &self.display);

        match &state {
            DisplayState::Showing{ metadata, .. } => {
                let [top,bottom] = page_lines( page, metadata);
                display.show_fields( top, bottom)?;
            }
            DisplayState::Empty => display.splash()?
        }
        Ok(page)
    }

    /// render every `tick_interval` until the token gets cancelled. Sink errors are logged and do not terminate the loop
    pub async fn run (mut self, tick_interval: Duration, token: CancellationToken) {
        debug!("rendering loop started");
        while !token.is_cancelled() {
            if let Err(e) = self.render() {
                warn!("failed to render display: {}", e);
            }

            tokio::select! {
                _ = token.cancelled() => break,
                _ = sleep( tick_interval) => {}
            }
        }
        debug!("rendering loop terminated");
    }
}
