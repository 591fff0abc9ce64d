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

//! common utility functions for network operations

use std::time::Duration;
use reqwest::{Client, StatusCode, Response};
use serde::de::DeserializeOwned;

use crate::define_error;

define_error!{ pub NetError =
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    StatusError(StatusCode) : "response status {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// create a client that bounds every request (connect + transfer) by `timeout`
pub fn build_client (timeout: Duration, user_agent: &str)->Result<Client> {
    Ok( Client::builder()
        .timeout( timeout)
        .connect_timeout( timeout)
        .user_agent( user_agent)
        .build()? )
}

/// GET url and return the response body as text. Non-OK status codes are reported as errors
pub async fn get_text (client: &Client, url: &str)->Result<String> {
    let response = checked_get( client, url).await?;
    Ok( response.text().await? )
}

/// GET url and deserialize the JSON response body. Non-OK status codes are reported as errors
pub async fn get_json<T> (client: &Client, url: &str)->Result<T> where T: DeserializeOwned {
    let response = checked_get( client, url).await?;
    Ok( response.json::<T>().await? )
}

async fn checked_get (client: &Client, url: &str)->Result<Response> {
    let response = client.get( url).send().await?;

    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::NOT_FOUND => Err( NetError::NotFoundError( url.to_string())),
        other => Err( NetError::StatusError(other))
    }
}
