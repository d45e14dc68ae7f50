// Cirrus Conformance Library for OpenStack-Compatible Object Storage
// Copyright 2025 Cirrus Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core traits for request and response handling.

use super::obs_request::ObsRequest;
use crate::obs::error::Error;
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete HTTP request.
///
/// Implemented by all request builders; the conversion sets the HTTP
/// method, resolves container/object path segments, and attaches query
/// parameters, headers and the request body.
pub trait ToObsRequest: Sized {
    /// Consumes this request builder and returns an [`ObsRequest`].
    fn to_obs_request(self) -> Result<ObsRequest, Error>;
}

/// Trait for converting HTTP responses into strongly typed response
/// objects.
///
/// The final step of the request pipeline: takes the original request and
/// the transport outcome, and builds the typed response. Unexpected 4xx/5xx
/// statuses arrive as errors and propagate unmodified.
#[async_trait]
pub trait FromObsResponse: Sized {
    async fn from_obs_response(
        req: ObsRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all API request builders.
///
/// Couples a builder to its response type and provides the async
/// [`send`](ObsApi::send) method executing the request.
#[async_trait]
pub trait ObsApi: ToObsRequest {
    /// The response type associated with this request builder.
    type ObsResponse: FromObsResponse;

    /// Sends the request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::ObsResponse, Error> {
        let mut req: ObsRequest = self.to_obs_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::ObsResponse::from_obs_response(req, resp).await
    }
}
