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
use crate::obs::builders::BulkDelete;
use crate::obs::types::PathToDelete;

impl ObsClient {
    /// Creates a [`BulkDelete`] request builder deleting the listed
    /// `container/object` and bare `container` paths in one DELETE request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cirrus::obs::ObsClient;
    /// use cirrus::obs::types::{ObsApi, PathToDelete};
    ///
    /// # async fn example(client: ObsClient) {
    /// let paths = vec![
    ///     PathToDelete::from(("photos", "2020/cat.jpg")),
    ///     PathToDelete::from("photos"),
    /// ];
    /// let resp = client.bulk_delete(paths).send().await.unwrap();
    /// assert!(resp.summary().unwrap().errors.is_empty());
    /// # }
    /// ```
    pub fn bulk_delete(&self, paths: Vec<PathToDelete>) -> BulkDelete {
        BulkDelete::new(self.clone(), paths)
    }

    /// Like [`bulk_delete`](ObsClient::bulk_delete), but sends the path
    /// list via POST, for environments where DELETE cannot carry a body.
    pub fn bulk_delete_via_post(&self, paths: Vec<PathToDelete>) -> BulkDelete {
        BulkDelete::new(self.clone(), paths).via_post(true)
    }
}
