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
use crate::obs::multimap_ext::{Multimap, MultimapExt};
use crate::obs::response::ListContainersResponse;
use crate::obs::types::{ListingFormat, ObsApi, ObsRequest, ToObsRequest};
use http::Method;

/// Argument builder for the
/// [`list_containers()`](crate::obs::ObsClient::list_containers) API.
#[derive(Clone, Debug)]
pub struct ListContainers {
    client: ObsClient,

    format: ListingFormat,
    prefix: Option<String>,
    marker: Option<String>,
    limit: Option<u32>,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
}

impl ListContainers {
    pub(crate) fn new(client: ObsClient) -> Self {
        Self {
            client,
            format: ListingFormat::default(),
            prefix: None,
            marker: None,
            limit: None,
            extra_headers: None,
            extra_query_params: None,
        }
    }

    /// Response body format; defaults to JSON.
    pub fn format(mut self, format: ListingFormat) -> Self {
        self.format = format;
        self
    }

    /// Only list containers whose name starts with the prefix.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Only list containers sorting after the marker.
    pub fn marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Cap the number of entries returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
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

impl ObsApi for ListContainers {
    type ObsResponse = ListContainersResponse;
}

impl ToObsRequest for ListContainers {
    fn to_obs_request(self) -> Result<ObsRequest, Error> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("format", self.format.as_str());
        if let Some(v) = self.prefix {
            query_params.add("prefix", v);
        }
        if let Some(v) = self.marker {
            query_params.add("marker", v);
        }
        if let Some(v) = self.limit {
            query_params.add("limit", v.to_string());
        }

        Ok(ObsRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
