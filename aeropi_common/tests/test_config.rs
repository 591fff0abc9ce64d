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

use std::time::Duration;
use serde::Deserialize;
use aeropi_common::config::{config_from_str, load_config_path, ConfigError};

#[derive(Deserialize,Debug,PartialEq)]
struct TestConfig {
    name: String,
    interval: Duration,
    #[serde(default)]
    args: Vec<String>,
}

#[test]
fn test_config_from_str() {
    let config: TestConfig = config_from_str( r#"TestConfig( name: "dump1090", interval: (secs: 2, nanos: 0) )"#).unwrap();
    assert_eq!( config, TestConfig { name: "dump1090".into(), interval: Duration::from_secs(2), args: vec![] });

    let res: Result<TestConfig,ConfigError> = config_from_str( r#"( name: "x" )"#);
    assert!( matches!( res, Err(ConfigError::RonSerdeError(_))));
}

#[test]
fn test_load_config_path() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("test.ron");
    std::fs::write( &path, r#"( name: "x", interval: (secs: 0, nanos: 500000000), args: ["--quiet"] )"#).unwrap();

    let config: TestConfig = load_config_path( &path).unwrap();
    assert_eq!( config.interval, Duration::from_millis(500));
    assert_eq!( config.args, vec!["--quiet".to_string()]);

    let res: Result<TestConfig,ConfigError> = load_config_path( tmp.path().join("missing.ron"));
    assert!( matches!( res, Err(ConfigError::IOError(_))));
}
