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

//! ObsRequest struct and implementation for executing HTTP requests.

use crate::obs::client::ObsClient;
use crate::obs::error::Error;
use crate::obs::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// Generic request to the storage service
pub struct ObsRequest {
    pub(crate) client: ObsClient,

    method: Method,

    #[builder(default, setter(into))]
    pub(crate) container: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,

    /// Addresses the bare service root instead of the account path; version
    /// discovery lives there.
    #[builder(default = false)]
    service_root: bool,
}

impl ObsRequest {
    /// Execute the request, returning the raw response. Only used in
    /// [`ObsApi::send()`](crate::obs::types::ObsApi::send).
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .clone()
            .execute(
                self.method.clone(),
                &mut self.headers,
                &self.query_params,
                self.container.as_deref(),
                self.object.as_deref(),
                self.body.clone(),
                self.service_root,
            )
            .await
    }
}
