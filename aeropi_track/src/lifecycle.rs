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

//! the lifecycle coordinator that starts the receiver and both loops, and tears everything down exactly once

use std::{sync::Arc, time::Duration};
use tokio::{task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;
use aeropi_common::{fs::{ensure_dir,reset_dir}, info, warn, error};

use crate::AeroPiConfig;
use crate::flightaware::FlightInfoProvider;
use crate::display::{DisplaySink, SharedDisplay, SharedDisplayState, shared_display, lock_display};
use crate::tracker::Tracker;
use crate::render::Renderer;
use crate::receiver::ReceiverProcess;
use crate::errors::Result;

pub struct Coordinator {
    token: CancellationToken,
    state: SharedDisplayState,
    display: SharedDisplay,
    receiver: Option<ReceiverProcess>,
    tracking_task: Option<JoinHandle<()>>,
    rendering_task: Option<JoinHandle<()>>,
    is_torn_down: bool,
}

impl Coordinator {
    /// prepare the data dir, launch the receiver (if configured), show the greeting and then spawn the tracking
    /// and rendering loops. Cancelling `token` requests shutdown. The token should be hooked up to signal handlers
    /// before calling this so that a shutdown request during startup skips the loops but still gets a teardown
    pub async fn start (config: AeroPiConfig, provider: Arc<dyn FlightInfoProvider>, sink: Box<dyn DisplaySink>,
                        token: CancellationToken)->Result<Self> {
        let state = SharedDisplayState::new();
        let display = shared_display( sink, config.width);

        // we only wipe the data dir if we own the process that writes to it
        let receiver = if let Some(receiver_config) = &config.receiver {
            reset_dir( &config.data_dir)?;
            Some( ReceiverProcess::spawn( receiver_config, &config.data_dir)?)
        } else {
            ensure_dir( &config.data_dir)?;
            None
        };

        let mut coordinator = Coordinator {
            token, state, display, receiver,
            tracking_task: None,
            rendering_task: None,
            is_torn_down: false
        };

        coordinator.state.clear();
        if let Err(e) = lock_display( &coordinator.display).greeting() {
            warn!("failed to show greeting: {}", e);
        }

        tokio::select! {
            _ = coordinator.token.cancelled() => {
                info!("shutdown requested before loops were started");
                return Ok(coordinator)
            }
            _ = sleep( config.greeting_duration) => {}
        }

        let tracker = Tracker::new( config.aircraft_path(), config.region, config.width, provider, coordinator.state.clone());
        coordinator.tracking_task = Some( tokio::spawn( tracker.run( config.poll_interval, coordinator.token.clone())));

        let renderer = Renderer::new( coordinator.state.clone(), coordinator.display.clone());
        coordinator.rendering_task = Some( tokio::spawn( renderer.run( config.tick_interval, coordinator.token.clone())));

        info!("aeropi started");
        Ok(coordinator)
    }

    /// the token that requests shutdown when cancelled. This can be cloned into signal handlers
    pub fn shutdown_token (&self)->CancellationToken { self.token.clone() }

    pub fn display_state (&self)->SharedDisplayState { self.state.clone() }

    pub fn is_torn_down (&self)->bool { self.is_torn_down }

    /// the process id of the receiver we launched, if it is still under our control
    pub fn receiver_pid (&self)->Option<u32> {
        self.receiver.as_ref().and_then( |r| r.id())
    }

    /// wait until shutdown is requested and then tear down
    pub async fn run (mut self)->Result<()> {
        self.token.cancelled().await;
        self.teardown().await;
        Ok(())
    }

    /// stop both loops, show the goodbye message and terminate the receiver. Failures are logged but never keep us
    /// from completing the teardown. Returns false if we already were torn down
    pub async fn teardown (&mut self)->bool {
        if self.is_torn_down { return false }
        self.is_torn_down = true;

        info!("shutting down");
        self.token.cancel();

        for (name,task) in [("tracking", self.tracking_task.take()), ("rendering", self.rendering_task.take())] {
            if let Some(task) = task {
                if let Err(e) = task.await {
                    error!("{} loop did not terminate normally: {}", name, e);
                }
            }
        }

        // both loops are done, nobody else is writing to the display anymore
        if let Err(e) = lock_display( &self.display).goodbye() {
            error!("failed to show goodbye: {}", e);
        }

        if let Some(receiver) = self.receiver.take() {
            if let Err(e) = receiver.terminate().await {
                error!("failed to terminate receiver: {}", e);
            }
        }

        info!("shutdown complete");
        true
    }
}

impl Drop for Coordinator {
    fn drop (&mut self) {
        // loops terminate on their own and the receiver is killed by its handle
        self.token.cancel();
    }
}
