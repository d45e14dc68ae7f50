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
use crate::obs::header_constants::{ACCEPT, CONTENT_TYPE};
use crate::obs::multimap_ext::{Multimap, MultimapExt};
use crate::obs::response::BulkDeleteResponse;
use crate::obs::types::{ObsApi, ObsRequest, PathToDelete, ToObsRequest};
use crate::obs::utils::{check_container_name, check_object_name, url_encode, url_encode_object_name};
use bytes::Bytes;
use http::Method;

/// Argument builder for the
/// [`bulk_delete()`](crate::obs::ObsClient::bulk_delete) and
/// [`bulk_delete_via_post()`](crate::obs::ObsClient::bulk_delete_via_post)
/// APIs.
///
/// The request body is a newline-separated list of `container/object` and
/// bare `container` entries. The POST variant exists for environments where
/// DELETE cannot carry a body.
#[derive(Clone, Debug)]
pub struct BulkDelete {
    client: ObsClient,
    paths: Vec<PathToDelete>,
    via_post: bool,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
}

impl BulkDelete {
    pub(crate) fn new(client: ObsClient, paths: Vec<PathToDelete>) -> Self {
        Self {
            client,
            paths,
            via_post: false,
            extra_headers: None,
            extra_query_params: None,
        }
    }

    /// Send the path list via POST instead of DELETE.
    pub fn via_post(mut self, via_post: bool) -> Self {
        self.via_post = via_post;
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

impl ObsApi for BulkDelete {
    type ObsResponse = BulkDeleteResponse;
}

impl ToObsRequest for BulkDelete {
    fn to_obs_request(self) -> Result<ObsRequest, Error> {
        if self.paths.is_empty() {
            return Err(Error::EmptyPathList);
        }

        let mut lines: Vec<String> = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            check_container_name(path.container())?;
            match path.object() {
                Some(object) => {
                    check_object_name(object)?;
                    lines.push(format!(
                        "{}/{}",
                        url_encode(path.container()),
                        url_encode_object_name(object)
                    ));
                }
                None => lines.push(url_encode(path.container())),
            }
        }
        let body: Bytes = lines.join("\n").into();

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("bulk-delete", "");

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(CONTENT_TYPE, "text/plain");
        headers.add(ACCEPT, "application/json");

        let method = if self.via_post {
            Method::POST
        } else {
            Method::DELETE
        };

        Ok(ObsRequest::builder()
            .client(self.client)
            .method(method)
            .query_params(query_params)
            .headers(headers)
            .body(body)
            .build())
    }
}
