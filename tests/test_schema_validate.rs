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

//! Validation of the version discovery document against its descriptor.

use cirrus::obs::api_schema::versions::LIST_VERSIONS;
use cirrus::obs::schema::{validate, MismatchKind};
use serde_json::{json, Value};

fn version_listing_body() -> Value {
    json!({
        "versions": [
            {
                "status": "CURRENT",
                "updated": "2020-01-01T00:00:00Z",
                "id": "v3.0",
                "links": [
                    {"href": "http://x/v3", "rel": "self"}
                ],
                "min_version": "3.0",
                "version": "3.0",
                "media-types": []
            }
        ]
    })
}

#[test]
fn version_listing_matches_descriptor() {
    validate(&LIST_VERSIONS, 300, &version_listing_body()).unwrap();
}

#[test]
fn missing_id_reports_field_path() {
    let mut body = version_listing_body();
    body["versions"][0].as_object_mut().unwrap().remove("id");

    let err = validate(&LIST_VERSIONS, 300, &body).unwrap_err();
    assert_eq!(err.path, "versions[0].id");
    assert_eq!(err.kind, MismatchKind::MissingField);
}

#[test]
fn unexpected_status_code_is_the_first_violation() {
    // Status is checked before the body; the missing required field is not
    // reached.
    let mut body = version_listing_body();
    body["versions"][0].as_object_mut().unwrap().remove("id");

    let err = validate(&LIST_VERSIONS, 200, &body).unwrap_err();
    assert!(err.path.is_empty());
    assert!(matches!(err.kind, MismatchKind::Status { .. }));
}

#[test]
fn malformed_link_href_reports_nested_path() {
    let mut body = version_listing_body();
    body["versions"][0]["links"][0]["href"] = json!("not a uri");

    let err = validate(&LIST_VERSIONS, 300, &body).unwrap_err();
    assert_eq!(err.path, "versions[0].links[0].href");
    assert!(matches!(err.kind, MismatchKind::Format { .. }));
}

#[test]
fn extra_version_fields_are_permitted() {
    let mut body = version_listing_body();
    body["versions"][0]
        .as_object_mut()
        .unwrap()
        .insert("deployment".to_string(), json!("staging"));

    validate(&LIST_VERSIONS, 300, &body).unwrap();
}
