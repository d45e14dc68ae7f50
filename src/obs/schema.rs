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

//! Declarative response shape validation.
//!
//! A [`ResponseSpec`] describes the accepted status codes and the expected
//! body shape of one API operation; [`validate`] walks a parsed JSON body
//! against it and reports the first violation, carrying a field path such as
//! `versions[0].links[1].href`.
//!
//! Schemas are a lower bound, not an exact match: unknown extra keys in the
//! body are permitted. Static descriptors live in
//! [`api_schema`](crate::obs::api_schema).

use serde_json::Value;
use std::fmt;

/// String value formats with their own well-formedness rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringFormat {
    /// Value must parse as a URI with a scheme and an authority or path.
    Uri,
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringFormat::Uri => write!(f, "uri"),
        }
    }
}

/// Expected shape of one JSON value, recursively composed.
#[derive(Clone, Debug)]
pub enum SchemaNode {
    /// Body must be a mapping; every name in `required` must be present;
    /// properties present in the body are validated against their
    /// sub-schema. Property order is preserved so violation reporting is
    /// deterministic.
    Object {
        properties: Vec<(String, SchemaNode)>,
        required: Vec<String>,
    },
    /// Body must be an ordered sequence; every element is validated against
    /// `items` when given.
    Array { items: Option<Box<SchemaNode>> },
    String { format: Option<StringFormat> },
    Integer,
    Number,
    Boolean,
}

impl SchemaNode {
    /// Builds an object node.
    ///
    /// # Panics
    ///
    /// Panics if `required` is not a subset of the property names; a
    /// descriptor violating that invariant is a programming error.
    pub fn object<K: Into<String>>(properties: Vec<(K, SchemaNode)>, required: &[&str]) -> Self {
        let properties: Vec<(String, SchemaNode)> = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect();
        for name in required {
            assert!(
                properties.iter().any(|(k, _)| k == name),
                "required field {name:?} is not among the declared properties"
            );
        }
        SchemaNode::Object {
            properties,
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array {
            items: Some(Box::new(items)),
        }
    }

    pub fn array_untyped() -> Self {
        SchemaNode::Array { items: None }
    }

    pub fn string() -> Self {
        SchemaNode::String { format: None }
    }

    pub fn string_with_format(format: StringFormat) -> Self {
        SchemaNode::String {
            format: Some(format),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Object { .. } => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::String { .. } => "string",
            SchemaNode::Integer => "integer",
            SchemaNode::Number => "number",
            SchemaNode::Boolean => "boolean",
        }
    }
}

/// Expected status codes and body shape of one API operation.
///
/// `status_codes` is a set because some operations multiplex success codes
/// (version discovery answers 300 for a multiple-choices listing).
#[derive(Clone, Debug)]
pub struct ResponseSpec {
    pub status_codes: Vec<u16>,
    pub response_body: Option<SchemaNode>,
}

/// The violation a failed validation reports.
#[derive(Clone, Debug, PartialEq)]
pub enum MismatchKind {
    Status { expected: Vec<u16>, actual: u16 },
    MissingField,
    Type {
        expected: &'static str,
        actual: &'static str,
    },
    Format { format: StringFormat, value: String },
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::Status { expected, actual } => {
                write!(f, "status code {actual} not in expected set {expected:?}")
            }
            MismatchKind::MissingField => write!(f, "required field missing"),
            MismatchKind::Type { expected, actual } => {
                write!(f, "expected {expected}, got {actual}")
            }
            MismatchKind::Format { format, value } => {
                write!(f, "{value:?} is not a well-formed {format}")
            }
        }
    }
}

/// First violation found while validating a response against a
/// [`ResponseSpec`]. `path` locates the offending field
/// (`versions[0].links[1].href`); it is empty for status code violations.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaMismatch {
    pub path: String,
    pub kind: MismatchKind,
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "response {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

impl std::error::Error for SchemaMismatch {}

/// Validates a response (status code + parsed body) against a descriptor.
///
/// Returns the first violation found, in the order: status code, missing
/// required field, type mismatch, format mismatch.
pub fn validate(
    spec: &ResponseSpec,
    status_code: u16,
    body: &Value,
) -> Result<(), SchemaMismatch> {
    if !spec.status_codes.contains(&status_code) {
        return Err(SchemaMismatch {
            path: String::new(),
            kind: MismatchKind::Status {
                expected: spec.status_codes.clone(),
                actual: status_code,
            },
        });
    }
    match &spec.response_body {
        Some(node) => validate_node(node, body, ""),
        None => Ok(()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn type_mismatch(path: &str, node: &SchemaNode, value: &Value) -> SchemaMismatch {
    SchemaMismatch {
        path: path.to_string(),
        kind: MismatchKind::Type {
            expected: node.type_name(),
            actual: json_type_name(value),
        },
    }
}

fn validate_node(node: &SchemaNode, value: &Value, path: &str) -> Result<(), SchemaMismatch> {
    match node {
        SchemaNode::Object {
            properties,
            required,
        } => {
            let Some(map) = value.as_object() else {
                return Err(type_mismatch(path, node, value));
            };
            for name in required {
                if !map.contains_key(name) {
                    return Err(SchemaMismatch {
                        path: join(path, name),
                        kind: MismatchKind::MissingField,
                    });
                }
            }
            for (name, sub) in properties {
                if let Some(v) = map.get(name) {
                    validate_node(sub, v, &join(path, name))?;
                }
            }
            Ok(())
        }
        SchemaNode::Array { items } => {
            let Some(seq) = value.as_array() else {
                return Err(type_mismatch(path, node, value));
            };
            if let Some(items) = items {
                for (i, v) in seq.iter().enumerate() {
                    validate_node(items, v, &format!("{path}[{i}]"))?;
                }
            }
            Ok(())
        }
        SchemaNode::String { format } => {
            let Some(s) = value.as_str() else {
                return Err(type_mismatch(path, node, value));
            };
            if let Some(StringFormat::Uri) = format {
                if !is_valid_uri(s) {
                    return Err(SchemaMismatch {
                        path: path.to_string(),
                        kind: MismatchKind::Format {
                            format: StringFormat::Uri,
                            value: s.to_string(),
                        },
                    });
                }
            }
            Ok(())
        }
        SchemaNode::Integer => {
            if value.as_i64().is_some() || value.as_u64().is_some() {
                Ok(())
            } else {
                Err(type_mismatch(path, node, value))
            }
        }
        SchemaNode::Number => {
            if value.is_number() {
                Ok(())
            } else {
                Err(type_mismatch(path, node, value))
            }
        }
        SchemaNode::Boolean => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(type_mismatch(path, node, value))
            }
        }
    }
}

fn is_valid_uri(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(parsed) => parsed.has_host() || !parsed.path().is_empty(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_spec() -> ResponseSpec {
        ResponseSpec {
            status_codes: vec![200, 204],
            response_body: Some(SchemaNode::object(
                vec![
                    ("name", SchemaNode::string()),
                    ("bytes", SchemaNode::Integer),
                    ("link", SchemaNode::string_with_format(StringFormat::Uri)),
                    (
                        "tags",
                        SchemaNode::array(SchemaNode::string()),
                    ),
                ],
                &["name", "bytes"],
            )),
        }
    }

    #[test]
    fn test_accepts_matching_body() {
        let body = json!({"name": "c1", "bytes": 42, "link": "http://x/v1", "tags": ["a"]});
        assert!(validate(&sample_spec(), 200, &body).is_ok());
    }

    #[test]
    fn test_extra_keys_are_permitted() {
        let body = json!({"name": "c1", "bytes": 0, "unknown": {"deep": true}});
        assert!(validate(&sample_spec(), 204, &body).is_ok());
    }

    #[test]
    fn test_status_violation_wins_over_body() {
        let body = json!({"bytes": "wrong"});
        let err = validate(&sample_spec(), 500, &body).unwrap_err();
        assert_eq!(
            err.kind,
            MismatchKind::Status {
                expected: vec![200, 204],
                actual: 500
            }
        );
        assert!(err.path.is_empty());
    }

    #[test]
    fn test_missing_required_wins_over_type() {
        // "name" is absent and "bytes" has the wrong type; the missing
        // required field must be reported first.
        let body = json!({"bytes": "wrong"});
        let err = validate(&sample_spec(), 200, &body).unwrap_err();
        assert_eq!(err.path, "name");
        assert_eq!(err.kind, MismatchKind::MissingField);
    }

    #[test]
    fn test_type_mismatch_reports_path() {
        let body = json!({"name": "c1", "bytes": "forty-two"});
        let err = validate(&sample_spec(), 200, &body).unwrap_err();
        assert_eq!(err.path, "bytes");
        assert_eq!(
            err.kind,
            MismatchKind::Type {
                expected: "integer",
                actual: "string"
            }
        );
    }

    #[test]
    fn test_array_elements_report_indexed_path() {
        let body = json!({"name": "c1", "bytes": 1, "tags": ["ok", 7]});
        let err = validate(&sample_spec(), 200, &body).unwrap_err();
        assert_eq!(err.path, "tags[1]");
    }

    #[test]
    fn test_uri_format() {
        let body = json!({"name": "c1", "bytes": 1, "link": "no scheme here"});
        let err = validate(&sample_spec(), 200, &body).unwrap_err();
        assert_eq!(err.path, "link");
        assert!(matches!(err.kind, MismatchKind::Format { .. }));
    }

    #[test]
    #[should_panic(expected = "not among the declared properties")]
    fn test_required_must_be_declared() {
        SchemaNode::object(vec![("a", SchemaNode::string())], &["b"]);
    }

    quickcheck! {
        // A schema is a lower bound: validation succeeds exactly when every
        // required field is present (types held constant).
        fn prop_required_fields_are_a_lower_bound(present: Vec<bool>) -> bool {
            const FIELDS: [&str; 4] = ["name", "count", "bytes", "status"];
            let spec = ResponseSpec {
                status_codes: vec![200],
                response_body: Some(SchemaNode::object(
                    FIELDS.iter().map(|f| (*f, SchemaNode::string())).collect(),
                    &FIELDS,
                )),
            };
            let mask: Vec<bool> = (0..FIELDS.len())
                .map(|i| present.get(i).copied().unwrap_or(false))
                .collect();
            let mut body = serde_json::Map::new();
            for (i, field) in FIELDS.iter().enumerate() {
                if mask[i] {
                    body.insert((*field).to_string(), Value::String(String::from("v")));
                }
            }
            let outcome = validate(&spec, 200, &Value::Object(body)).is_ok();
            outcome == mask.iter().all(|m| *m)
        }
    }
}
