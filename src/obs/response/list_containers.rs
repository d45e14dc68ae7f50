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

use crate::obs::api_schema;
use crate::obs::error::Error;
use crate::obs::headers::HeaderProfile;
use crate::obs::response::a_response_traits::{HasConformantHeaders, HasDate, HasTransId};
use crate::obs::schema;
use crate::obs::types::{ContainerEntry, ObsRequest};
use crate::{impl_from_obs_response, impl_has_obs_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of the
/// [`list_containers()`](crate::obs::ObsClient::list_containers) API.
#[derive(Clone, Debug)]
pub struct ListContainersResponse {
    request: ObsRequest,
    status_code: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_obs_response!(ListContainersResponse);
impl_has_obs_fields!(ListContainersResponse);

impl HasTransId for ListContainersResponse {}
impl HasDate for ListContainersResponse {}
impl HasConformantHeaders for ListContainersResponse {
    const PROFILE: HeaderProfile = HeaderProfile::General;
}

impl ListContainersResponse {
    /// Parsed listing entries. Only meaningful for `format=json` requests;
    /// an empty 204 body yields an empty list.
    pub fn entries(&self) -> Result<Vec<ContainerEntry>, Error> {
        if self.body.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as text, one container name per line for `format=txt` requests.
    pub fn text(&self) -> Result<String, Error> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// Validates status code and body shape against the account listing
    /// descriptor. JSON listings only.
    pub fn validate(&self) -> Result<(), Error> {
        let body: serde_json::Value = if self.body.is_empty() {
            serde_json::Value::Array(Vec::new())
        } else {
            serde_json::from_slice(&self.body)?
        };
        schema::validate(
            &api_schema::account::LIST_CONTAINERS,
            self.status_code.as_u16(),
            &body,
        )?;
        Ok(())
    }
}
