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

use crate::obs::error::Error;
use crate::obs::headers::HeaderProfile;
use crate::obs::response::a_response_traits::{HasConformantHeaders, HasDate, HasTransId};
use crate::obs::types::ObsRequest;
use crate::{impl_from_obs_response, impl_has_obs_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;

/// Per-request summary the bulk middleware reports in the response body.
///
/// Deleting an already-absent path is not an error; it is counted in
/// `not_found`.
#[derive(Clone, Debug, Deserialize)]
pub struct BulkDeleteSummary {
    #[serde(rename = "Number Deleted", default)]
    pub deleted: u64,
    #[serde(rename = "Number Not Found", default)]
    pub not_found: u64,
    #[serde(rename = "Response Status", default)]
    pub response_status: String,
    #[serde(rename = "Response Body", default)]
    pub response_body: String,
    /// `[path, status]` pairs for entries the server rejected.
    #[serde(rename = "Errors", default)]
    pub errors: Vec<(String, String)>,
}

/// Response of the [`bulk_delete()`](crate::obs::ObsClient::bulk_delete)
/// and
/// [`bulk_delete_via_post()`](crate::obs::ObsClient::bulk_delete_via_post)
/// APIs.
#[derive(Clone, Debug)]
pub struct BulkDeleteResponse {
    request: ObsRequest,
    status_code: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_obs_response!(BulkDeleteResponse);
impl_has_obs_fields!(BulkDeleteResponse);

impl HasTransId for BulkDeleteResponse {}
impl HasDate for BulkDeleteResponse {}
impl HasConformantHeaders for BulkDeleteResponse {
    const PROFILE: HeaderProfile = HeaderProfile::Bulk;
}

impl BulkDeleteResponse {
    /// Parses the JSON summary body.
    pub fn summary(&self) -> Result<BulkDeleteSummary, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
