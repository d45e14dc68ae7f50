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

//! Argument builders for [`ObsClient`](crate::obs::client::ObsClient) APIs

mod bulk_delete;
mod extract_archive;
mod list_api_versions;
mod list_container;
mod list_containers;

pub use bulk_delete::BulkDelete;
pub use extract_archive::ExtractArchive;
pub use list_api_versions::ListApiVersions;
pub use list_container::ListContainer;
pub use list_containers::ListContainers;
