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
use crate::obs::response::a_response_traits::{
    HasConformantHeaders, HasContainer, HasDate, HasTransId,
};
use crate::obs::schema;
use crate::obs::types::{ObjectEntry, ObsRequest};
use crate::{impl_from_obs_response, impl_has_obs_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of the
/// [`list_container()`](crate::obs::ObsClient::list_container) API.
#[derive(Clone, Debug)]
pub struct ListContainerResponse {
    request: ObsRequest,
    status_code: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_obs_response!(ListContainerResponse);
impl_has_obs_fields!(ListContainerResponse);

impl HasContainer for ListContainerResponse {}
impl HasTransId for ListContainerResponse {}
impl HasDate for ListContainerResponse {}
impl HasConformantHeaders for ListContainerResponse {
    const PROFILE: HeaderProfile = HeaderProfile::General;
}

impl ListContainerResponse {
    /// Parsed listing entries. Only meaningful for `format=json` requests;
    /// an empty 204 body yields an empty list.
    pub fn entries(&self) -> Result<Vec<ObjectEntry>, Error> {
        if self.body.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as text, one object name per line for `format=txt` requests.
    pub fn text(&self) -> Result<String, Error> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// Validates status code and body shape against the container listing
    /// descriptor. JSON listings only.
    pub fn validate(&self) -> Result<(), Error> {
        let body: serde_json::Value = if self.body.is_empty() {
            serde_json::Value::Array(Vec::new())
        } else {
            serde_json::from_slice(&self.body)?
        };
        schema::validate(
            &api_schema::container::LIST_OBJECTS,
            self.status_code.as_u16(),
            &body,
        )?;
        Ok(())
    }
}
