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

use crate::obs::client::ObsClient;
use crate::obs::error::Error;
use crate::obs::header_constants::ACCEPT;
use crate::obs::multimap_ext::{Multimap, MultimapExt};
use crate::obs::response::ListApiVersionsResponse;
use crate::obs::types::{ObsApi, ObsRequest, ToObsRequest};
use http::Method;

/// Argument builder for the
/// [`list_api_versions()`](crate::obs::ObsClient::list_api_versions) API.
///
/// Version discovery addresses the bare service root, not the account
/// path, and answers 300 Multiple Choices.
#[derive(Clone, Debug)]
pub struct ListApiVersions {
    client: ObsClient,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
}

impl ListApiVersions {
    pub(crate) fn new(client: ObsClient) -> Self {
        Self {
            client,
            extra_headers: None,
            extra_query_params: None,
        }
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }
}

impl ObsApi for ListApiVersions {
    type ObsResponse = ListApiVersionsResponse;
}

impl ToObsRequest for ListApiVersions {
    fn to_obs_request(self) -> Result<ObsRequest, Error> {
        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(ACCEPT, "application/json");

        Ok(ObsRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .service_root(true)
            .build())
    }
}
