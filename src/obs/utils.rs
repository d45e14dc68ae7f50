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

//! Various utility and helper functions

use crate::obs::error::Error;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

// NON_ALPHANUMERIC already escapes everything non-alphanumeric (it includes
// all the reserved characters). So we only remove the unreserved characters
// from this set.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Object names may contain '/' as pseudo-directory separators; those must
// survive encoding so the server sees the full path.
const OBJECT_PATH_ESCAPE: &AsciiSet = &QUERY_ESCAPE.remove(b'/');

/// Percent-encodes a query key, query value or single path segment.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// Percent-encodes an object name, keeping '/' separators intact.
pub fn url_encode_object_name(name: &str) -> String {
    utf8_percent_encode(name, OBJECT_PATH_ESCAPE).collect()
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT")?,
        Utc,
    ))
}

/// Validates given container name
pub fn check_container_name(container_name: &str) -> Result<(), Error> {
    if container_name.trim().is_empty() {
        return Err(Error::InvalidContainerName(String::from(
            "container name cannot be empty",
        )));
    }

    if container_name.len() > 256 {
        return Err(Error::InvalidContainerName(String::from(
            "container name cannot be greater than 256 bytes",
        )));
    }

    if container_name.contains('/') {
        return Err(Error::InvalidContainerName(String::from(
            "container name cannot contain '/'",
        )));
    }

    Ok(())
}

/// Validates given object name
pub fn check_object_name(object_name: &str) -> Result<(), Error> {
    if object_name.is_empty() {
        return Err(Error::InvalidObjectName(String::from(
            "object name cannot be empty",
        )));
    }

    if object_name.len() > 1024 {
        return Err(Error::InvalidObjectName(String::from(
            "object name cannot be greater than 1024 bytes",
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encode_keeps_unreserved() {
        assert_eq!(url_encode("abc-123_~."), "abc-123_~.");
        assert_eq!(url_encode("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_url_encode_object_name_keeps_separators() {
        assert_eq!(url_encode_object_name("photos/2020/a b.jpg"), "photos/2020/a%20b.jpg");
    }

    #[test]
    fn test_from_http_header_value() {
        assert!(from_http_header_value("Wed, 12 Mar 2014 10:44:52 GMT").is_ok());
        assert!(from_http_header_value("not a date").is_err());
    }

    #[test]
    fn test_check_container_name() {
        assert!(check_container_name("a-container").is_ok());
        assert!(check_container_name("").is_err());
        assert!(check_container_name("   ").is_err());
        assert!(check_container_name("a/b").is_err());
        assert!(check_container_name(&"x".repeat(257)).is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("photos/2020/cat.jpg").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name(&"x".repeat(1025)).is_err());
    }
}
