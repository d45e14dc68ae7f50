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

//! Core types for object storage request and response handling.

mod listing;
mod obs_request;
mod traits;

pub use listing::{
    ArchiveFormat, ContainerEntry, ListingFormat, ObjectEntry, PathToDelete, ValidName,
};
pub use obs_request::ObsRequest;
pub use traits::{FromObsResponse, ObsApi, ToObsRequest};
