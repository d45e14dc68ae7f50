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
use crate::obs::response::ExtractArchiveResponse;
use crate::obs::types::{ArchiveFormat, ObsApi, ObsRequest, ToObsRequest};
use crate::obs::utils::{check_container_name, check_object_name};
use bytes::Bytes;
use http::Method;

/// Argument builder for the
/// [`extract_archive()`](crate::obs::ObsClient::extract_archive) bulk
/// upload API.
///
/// The archive's directory entries become containers and its file entries
/// become objects. Without an upload path the archive is expanded at the
/// account level; with a container (and optional object prefix) the
/// entries are created below that path.
#[derive(Clone, Debug)]
pub struct ExtractArchive {
    client: ObsClient,
    data: Bytes,
    archive_format: ArchiveFormat,

    container: Option<String>,
    object_prefix: Option<String>,

    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
}

impl ExtractArchive {
    pub(crate) fn new(client: ObsClient, data: Bytes) -> Self {
        Self {
            client,
            data,
            archive_format: ArchiveFormat::default(),
            container: None,
            object_prefix: None,
            extra_headers: None,
            extra_query_params: None,
        }
    }

    /// Archive format of the uploaded body; defaults to plain tar.
    pub fn archive_format(mut self, archive_format: ArchiveFormat) -> Self {
        self.archive_format = archive_format;
        self
    }

    /// Expand the archive below this container instead of the account.
    pub fn container<S: Into<String>>(mut self, container: S) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Prefix object names with this path below the container.
    pub fn object_prefix<S: Into<String>>(mut self, object_prefix: S) -> Self {
        self.object_prefix = Some(object_prefix.into());
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

impl ObsApi for ExtractArchive {
    type ObsResponse = ExtractArchiveResponse;
}

impl ToObsRequest for ExtractArchive {
    fn to_obs_request(self) -> Result<ObsRequest, Error> {
        if let Some(container) = &self.container {
            check_container_name(container)?;
        }
        if let Some(prefix) = &self.object_prefix {
            if self.container.is_none() {
                return Err(Error::UrlBuildError(String::from(
                    "object prefix provided without container name",
                )));
            }
            check_object_name(prefix)?;
        }

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("extract-archive", self.archive_format.as_str());

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(ACCEPT, "application/json");

        Ok(ObsRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .container(self.container)
            .object(self.object_prefix)
            .query_params(query_params)
            .headers(headers)
            .body(self.data)
            .build())
    }
}
