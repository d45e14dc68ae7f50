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

use super::ObsClient;
use crate::obs::builders::ExtractArchive;
use bytes::Bytes;

impl ObsClient {
    /// Creates an [`ExtractArchive`] request builder uploading a
    /// tar-formatted archive through the bulk upload endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cirrus::obs::ObsClient;
    /// use cirrus::obs::response::a_response_traits::HasConformantHeaders;
    /// use cirrus::obs::types::ObsApi;
    ///
    /// # async fn example(client: ObsClient, tar_bytes: Vec<u8>) {
    /// let resp = client.extract_archive(tar_bytes).send().await.unwrap();
    /// resp.check_headers().unwrap();
    /// println!("created {} file(s)", resp.summary().unwrap().files_created);
    /// # }
    /// ```
    pub fn extract_archive<D: Into<Bytes>>(&self, data: D) -> ExtractArchive {
        ExtractArchive::new(self.clone(), data.into())
    }
}
