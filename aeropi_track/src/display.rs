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

//! the shared display state and the output side of the two-line character display

use std::{io::{self,Write}, sync::{Arc,Mutex,MutexGuard}};
use chrono::Local;

use crate::FlightIdentity;
use crate::normalize::{FlightMetadata, fit_line, pad_line};
use crate::errors::{Result,display_error};

/// what the display currently announces. This is either completely empty or fully populated - there is no
/// identity without metadata (or vice versa)
#[derive(Debug,Clone,PartialEq,Default)]
pub enum DisplayState {
    #[default]
    Empty,
    Showing { flight: FlightIdentity, metadata: FlightMetadata }
}

impl DisplayState {
    pub fn flight (&self)->Option<&FlightIdentity> {
        match self {
            DisplayState::Showing{flight,..} => Some(flight),
            DisplayState::Empty => None
        }
    }

    pub fn is_empty (&self)->bool { matches!( self, DisplayState::Empty) }
}

/// the DisplayState that is shared between the tracking loop (writer) and the rendering loop (reader).
/// All updates replace the whole state under the lock, readers only get consistent copies
#[derive(Debug,Clone,Default)]
pub struct SharedDisplayState(Arc<Mutex<DisplayState>>);

impl SharedDisplayState {
    pub fn new ()->Self { SharedDisplayState::default() }

    fn lock (&self)->MutexGuard<'_,DisplayState> {
        // a panicking writer can't leave a partial state behind since we only ever assign complete values
        self.0.lock().unwrap_or_else( |poisoned| poisoned.into_inner())
    }

    pub fn set (&self, flight: FlightIdentity, metadata: FlightMetadata) {
        *self.lock() = DisplayState::Showing { flight, metadata };
    }

    /// reset to Empty, returning true if there was something to clear
    pub fn clear (&self)->bool {
        let mut state = self.lock();
        let was_showing = !state.is_empty();
        *state = DisplayState::Empty;
        was_showing
    }

    pub fn snapshot (&self)->DisplayState {
        self.lock().clone()
    }

    pub fn current_flight (&self)->Option<FlightIdentity> {
        self.lock().flight().cloned()
    }

    pub fn is_empty (&self)->bool {
        self.lock().is_empty()
    }
}

/// display row (1-based as on the hardware)
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum Row { Top = 1, Bottom = 2 }

impl Row {
    pub fn index (&self)->usize { *self as usize - 1 }
}

/// the output device. Each call overwrites the previous content of the given row. Implementations
/// get lines that are already padded/truncated to the display width
pub trait DisplaySink: Send {
    fn show (&mut self, row: Row, line: &str)->Result<()>;
}

pub const SPLASH: [&'static str;2] = ["AERO", "   PI"];
pub const GREETING: &'static str = "Hello, sky!";
pub const GOODBYE: &'static str = "Goodbye, sky!";

/// the formatting front end of a DisplaySink
pub struct Display {
    sink: Box<dyn DisplaySink>,
    width: usize,
}

impl Display {
    pub fn new (sink: Box<dyn DisplaySink>, width: usize)->Self {
        Display { sink, width }
    }

    /// show verbatim text (blank padded)
    pub fn show_text (&mut self, row: Row, text: &str)->Result<()> {
        self.sink.show( row, pad_line( text, self.width).as_str())
    }

    /// show an optional metadata field, using the "?" placeholder for missing values
    pub fn show_field (&mut self, row: Row, field: Option<&str>)->Result<()> {
        self.sink.show( row, fit_line( field, self.width).as_str())
    }

    pub fn show_fields (&mut self, top: Option<&str>, bottom: Option<&str>)->Result<()> {
        self.show_field( Row::Top, top)?;
        self.show_field( Row::Bottom, bottom)
    }

    pub fn splash (&mut self)->Result<()> {
        self.show_text( Row::Top, SPLASH[0])?;
        self.show_text( Row::Bottom, SPLASH[1])
    }

    pub fn greeting (&mut self)->Result<()> {
        self.show_text( Row::Top, GREETING)?;
        self.show_text( Row::Bottom, "")
    }

    pub fn goodbye (&mut self)->Result<()> {
        self.show_text( Row::Top, GOODBYE)?;
        let exit_time = format!("Exit at {}", Local::now().format("%H:%M:%S"));
        self.show_text( Row::Bottom, exit_time.as_str())
    }
}

/// the Display shared between the rendering loop and the lifecycle coordinator
pub type SharedDisplay = Arc<Mutex<Display>>;

pub fn shared_display (sink: Box<dyn DisplaySink>, width: usize)->SharedDisplay {
    Arc::new( Mutex::new( Display::new( sink, width)))
}

pub fn lock_display (display: &SharedDisplay)->MutexGuard<'_,Display> {
    display.lock().unwrap_or_else( |poisoned| poisoned.into_inner())
}

/// a DisplaySink that writes framed rows to stdout. Unchanged rows are not re-written
pub struct ConsoleDisplay {
    rows: [Option<String>;2],
}

impl ConsoleDisplay {
    pub fn new ()->Self { ConsoleDisplay { rows: [None,None] } }
}

impl DisplaySink for ConsoleDisplay {
    fn show (&mut self, row: Row, line: &str)->Result<()> {
        let idx = row.index();
        if self.rows[idx].as_deref() != Some(line) {
            let mut stdout = io::stdout().lock();
            writeln!( stdout, "{} |{}|", row as usize, line).map_err( |e| display_error!("stdout: {}", e))?;
            self.rows[idx] = Some(line.to_string());
        }
        Ok(())
    }
}
