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

pub const ACCEPT: &str = "accept";
pub const CONTENT_LENGTH: &str = "content-length";
pub const CONTENT_TYPE: &str = "content-type";
pub const DATE: &str = "date";
pub const HOST: &str = "host";
pub const TRANSFER_ENCODING: &str = "transfer-encoding";

pub const X_AUTH_TOKEN: &str = "x-auth-token";
pub const X_TRANS_ID: &str = "x-trans-id";
pub const X_TIMESTAMP: &str = "x-timestamp";
pub const X_STORAGE_POLICY: &str = "x-storage-policy";
