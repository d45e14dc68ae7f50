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

use crate::obs::schema::{ResponseSpec, SchemaNode, StringFormat};
use once_cell::sync::Lazy;

fn links() -> SchemaNode {
    SchemaNode::array(SchemaNode::object(
        vec![
            ("href", SchemaNode::string_with_format(StringFormat::Uri)),
            ("rel", SchemaNode::string()),
            ("type", SchemaNode::string()),
        ],
        &["href", "rel"],
    ))
}

fn media_types() -> SchemaNode {
    SchemaNode::array(SchemaNode::object(
        vec![
            ("base", SchemaNode::string()),
            ("type", SchemaNode::string()),
        ],
        &["base", "type"],
    ))
}

/// Version discovery answers 300 Multiple Choices with the list of API
/// versions the endpoint serves.
pub static LIST_VERSIONS: Lazy<ResponseSpec> = Lazy::new(|| ResponseSpec {
    status_codes: vec![300],
    response_body: Some(SchemaNode::object(
        vec![(
            "versions",
            SchemaNode::array(SchemaNode::object(
                vec![
                    ("status", SchemaNode::string()),
                    ("updated", SchemaNode::string()),
                    ("id", SchemaNode::string()),
                    ("links", links()),
                    ("min_version", SchemaNode::string()),
                    ("version", SchemaNode::string()),
                    ("media-types", media_types()),
                ],
                &[
                    "status",
                    "updated",
                    "id",
                    "links",
                    "min_version",
                    "version",
                    "media-types",
                ],
            )),
        )],
        &["versions"],
    )),
});
