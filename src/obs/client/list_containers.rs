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
use crate::obs::builders::ListContainers;

impl ObsClient {
    /// Creates a [`ListContainers`] request builder listing the account's
    /// containers.
    ///
    /// To execute the request, call
    /// [`ListContainers::send()`](crate::obs::types::ObsApi::send), which
    /// returns a
    /// [`ListContainersResponse`](crate::obs::response::ListContainersResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cirrus::obs::ObsClient;
    /// use cirrus::obs::types::ObsApi;
    ///
    /// # async fn example(client: ObsClient) {
    /// let resp = client.list_containers().send().await.unwrap();
    /// for entry in resp.entries().unwrap() {
    ///     println!("{}", entry.name);
    /// }
    /// # }
    /// ```
    pub fn list_containers(&self) -> ListContainers {
        ListContainers::new(self.clone())
    }
}
