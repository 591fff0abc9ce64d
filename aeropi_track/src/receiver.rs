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

//! the handle of the external ADS-B receiver process (e.g. dump1090) that writes the snapshot files

use std::{path::Path, process::{ExitStatus,Stdio}, time::Duration};
use serde::{Serialize,Deserialize};
use tokio::{process::{Command,Child}, time::timeout};
use aeropi_common::{info,warn};

use crate::errors::{Result,op_failed};

/// placeholder in receiver args that is replaced with the configured data dir
pub const DATA_DIR_PLACEHOLDER: &'static str = "{data_dir}";

#[derive(Deserialize,Serialize,Debug,Clone)]
pub struct ReceiverConfig {
    pub cmd: String,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default="default_stop_timeout")]
    pub stop_timeout: Duration,
}

fn default_stop_timeout()->Duration { Duration::from_secs(3) }

impl ReceiverConfig {
    pub fn expanded_args (&self, data_dir: &Path)->Vec<String> {
        let dir = data_dir.to_string_lossy();
        self.args.iter().map( |a| a.replace( DATA_DIR_PLACEHOLDER, dir.as_ref())).collect()
    }
}

/// the running receiver. The process is killed if the handle is dropped without calling [`ReceiverProcess::terminate`]
#[derive(Debug)]
pub struct ReceiverProcess {
    cmd: String,
    child: Child,
    stop_timeout: Duration,
}

impl ReceiverProcess {
    pub fn spawn (config: &ReceiverConfig, data_dir: &Path)->Result<Self> {
        let mut cmd = Command::new( config.cmd.as_str());
        cmd
            .args( config.expanded_args( data_dir))
            .stdin( Stdio::null())
            .stdout( Stdio::null())
            .stderr( Stdio::null())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err( |e| op_failed!("failed to launch receiver {}: {}", config.cmd, e))?;
        info!("started receiver {} (pid {:?})", config.cmd, child.id());

        Ok( ReceiverProcess { cmd: config.cmd.clone(), child, stop_timeout: config.stop_timeout } )
    }

    pub fn id (&self)->Option<u32> { self.child.id() }

    /// kill the receiver and reap it, waiting at most for the configured stop timeout
    pub async fn terminate (mut self)->Result<Option<ExitStatus>> {
        if let Some(status) = self.child.try_wait()? {
            warn!("receiver {} already terminated: {}", self.cmd, status);
            return Ok(Some(status))
        }

        self.child.start_kill()?;
        let status = timeout( self.stop_timeout, self.child.wait()).await??;
        info!("receiver {} terminated: {}", self.cmd, status);
        Ok(Some(status))
    }
}
