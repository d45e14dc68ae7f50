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
use crate::obs::types::ObsRequest;
use crate::{impl_from_obs_response, impl_has_obs_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct VersionLink {
    pub href: String,
    pub rel: String,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MediaType {
    pub base: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

/// One entry of the version discovery document.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiVersion {
    pub status: String,
    pub updated: String,
    pub id: String,
    #[serde(default)]
    pub links: Vec<VersionLink>,
    #[serde(default)]
    pub min_version: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "media-types")]
    pub media_types: Vec<MediaType>,
}

#[derive(Deserialize)]
struct VersionsDocument {
    versions: Vec<ApiVersion>,
}

/// Response of the
/// [`list_api_versions()`](crate::obs::ObsClient::list_api_versions) API.
/// The expected status is 300 Multiple Choices.
#[derive(Clone, Debug)]
pub struct ListApiVersionsResponse {
    request: ObsRequest,
    status_code: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_obs_response!(ListApiVersionsResponse);
impl_has_obs_fields!(ListApiVersionsResponse);

impl HasTransId for ListApiVersionsResponse {}
impl HasDate for ListApiVersionsResponse {}
impl HasConformantHeaders for ListApiVersionsResponse {
    const PROFILE: HeaderProfile = HeaderProfile::General;
}

impl ListApiVersionsResponse {
    /// Parsed version entries.
    pub fn versions(&self) -> Result<Vec<ApiVersion>, Error> {
        let doc: VersionsDocument = serde_json::from_slice(&self.body)?;
        Ok(doc.versions)
    }

    /// Validates status code and body shape against the version listing
    /// descriptor.
    pub fn validate(&self) -> Result<(), Error> {
        let body: serde_json::Value = serde_json::from_slice(&self.body)?;
        schema::validate(
            &api_schema::versions::LIST_VERSIONS,
            self.status_code.as_u16(),
            &body,
        )?;
        Ok(())
    }
}
