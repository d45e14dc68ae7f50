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

//! Typed responses of the client operations.

pub mod a_response_traits;
mod bulk_delete;
mod extract_archive;
mod list_api_versions;
mod list_container;
mod list_containers;

pub use bulk_delete::{BulkDeleteResponse, BulkDeleteSummary};
pub use extract_archive::{ExtractArchiveResponse, ExtractArchiveSummary};
pub use list_api_versions::{ApiVersion, ListApiVersionsResponse, MediaType, VersionLink};
pub use list_container::ListContainerResponse;
pub use list_containers::ListContainersResponse;
