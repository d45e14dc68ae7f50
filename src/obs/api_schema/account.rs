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

use crate::obs::schema::{ResponseSpec, SchemaNode};
use once_cell::sync::Lazy;

/// JSON account listing: one entry per container. An empty account answers
/// 204 with no body.
pub static LIST_CONTAINERS: Lazy<ResponseSpec> = Lazy::new(|| ResponseSpec {
    status_codes: vec![200, 204],
    response_body: Some(SchemaNode::array(SchemaNode::object(
        vec![
            ("name", SchemaNode::string()),
            ("count", SchemaNode::Integer),
            ("bytes", SchemaNode::Integer),
            ("last_modified", SchemaNode::string()),
        ],
        &["name", "count", "bytes"],
    ))),
});
