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

//! Response header conformance checks.
//!
//! [`check_headers`] is a pure function over a header map: it verifies that
//! the standard response headers are present and well-formed. Bulk
//! operation responses stream their bodies and legitimately omit
//! `content-length`, carrying `transfer-encoding` instead; the
//! [`HeaderProfile`] selects which set applies. Extra, unknown headers are
//! always permitted.

use crate::obs::header_constants::{
    CONTENT_LENGTH, CONTENT_TYPE, DATE, TRANSFER_ENCODING, X_TRANS_ID,
};
use crate::obs::utils::from_http_header_value;
use http::HeaderMap;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // Opaque token: printable ASCII, no whitespace.
    static ref TRANS_ID_REGEX: Regex = Regex::new(r"^[\x21-\x7e]+$").unwrap();
    // token "/" token, optionally followed by parameters.
    static ref MIME_TYPE_REGEX: Regex =
        Regex::new(r"^[-!#$%&'*+.^_`|~0-9A-Za-z]+/[-!#$%&'*+.^_`|~0-9A-Za-z]+\s*(;.*)?$").unwrap();
}

/// Which set of response headers is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderProfile {
    /// Plain responses: `content-length`, `content-type`, `x-trans-id`,
    /// `date`.
    General,
    /// Bulk upload/delete responses: `transfer-encoding` in place of
    /// `content-length`.
    Bulk,
}

impl HeaderProfile {
    pub fn required_headers(self) -> &'static [&'static str] {
        match self {
            HeaderProfile::General => &[CONTENT_LENGTH, CONTENT_TYPE, X_TRANS_ID, DATE],
            HeaderProfile::Bulk => &[TRANSFER_ENCODING, CONTENT_TYPE, X_TRANS_ID, DATE],
        }
    }
}

/// Names of the headers that failed the conformance check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeaderFormatError {
    pub missing: Vec<String>,
    pub malformed: Vec<String>,
}

impl HeaderFormatError {
    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

impl fmt::Display for HeaderFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "header conformance failed; missing: {:?}, malformed: {:?}",
            self.missing, self.malformed
        )
    }
}

impl std::error::Error for HeaderFormatError {}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<Result<&'a str, ()>> {
    headers.get(name).map(|v| v.to_str().map_err(|_| ()))
}

/// Checks that every header the profile requires is present and that every
/// known header present is well-formed.
///
/// `body_len`, when known, is checked against `content-length`; pass `None`
/// when the body length is unavailable (the length format is still
/// verified).
pub fn check_headers(
    headers: &HeaderMap,
    body_len: Option<u64>,
    profile: HeaderProfile,
) -> Result<(), HeaderFormatError> {
    let mut outcome = HeaderFormatError::default();

    for name in profile.required_headers() {
        if !headers.contains_key(*name) {
            outcome.missing.push((*name).to_string());
        }
    }

    match header_str(headers, DATE) {
        Some(Ok(v)) if from_http_header_value(v).is_ok() => {}
        Some(_) => outcome.malformed.push(DATE.to_string()),
        None => {}
    }

    match header_str(headers, X_TRANS_ID) {
        Some(Ok(v)) if TRANS_ID_REGEX.is_match(v) => {}
        Some(_) => outcome.malformed.push(X_TRANS_ID.to_string()),
        None => {}
    }

    match header_str(headers, CONTENT_TYPE) {
        Some(Ok(v)) if MIME_TYPE_REGEX.is_match(v) => {}
        Some(_) => outcome.malformed.push(CONTENT_TYPE.to_string()),
        None => {}
    }

    match header_str(headers, CONTENT_LENGTH) {
        Some(Ok(v)) => match v.parse::<u64>() {
            Ok(n) if body_len.is_none() || body_len == Some(n) => {}
            _ => outcome.malformed.push(CONTENT_LENGTH.to_string()),
        },
        Some(Err(())) => outcome.malformed.push(CONTENT_LENGTH.to_string()),
        None => {}
    }

    match header_str(headers, TRANSFER_ENCODING) {
        Some(Ok(v)) if !v.trim().is_empty() => {}
        Some(_) => outcome.malformed.push(TRANSFER_ENCODING.to_string()),
        None => {}
    }

    if outcome.is_empty() {
        Ok(())
    } else {
        Err(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn header_map(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (key, value) in pairs {
            map.insert(*key, HeaderValue::from_static(value));
        }
        map
    }

    fn general_headers() -> HeaderMap {
        header_map(&[
            ("content-length", "2"),
            ("content-type", "application/json; charset=utf-8"),
            ("x-trans-id", "txb48a4d1b9db64703a6bf5-0067a2b1cd"),
            ("date", "Wed, 12 Mar 2014 10:44:52 GMT"),
        ])
    }

    #[test]
    fn test_general_profile_accepts_well_formed() {
        assert!(check_headers(&general_headers(), Some(2), HeaderProfile::General).is_ok());
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let mut headers = general_headers();
        headers.remove("date");
        let err = check_headers(&headers, Some(2), HeaderProfile::General).unwrap_err();
        assert_eq!(err.missing, vec!["date".to_string()]);
    }

    #[test]
    fn test_bulk_profile_accepts_chunked_without_length() {
        let headers = header_map(&[
            ("transfer-encoding", "chunked"),
            ("content-type", "application/json"),
            ("x-trans-id", "tx000a"),
            ("date", "Wed, 12 Mar 2014 10:44:52 GMT"),
        ]);
        assert!(check_headers(&headers, None, HeaderProfile::Bulk).is_ok());
    }

    #[test]
    fn test_bulk_profile_requires_transfer_encoding() {
        let err = check_headers(&general_headers(), Some(2), HeaderProfile::Bulk).unwrap_err();
        assert_eq!(err.missing, vec!["transfer-encoding".to_string()]);
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut headers = general_headers();
        headers.insert("date", HeaderValue::from_static("yesterday"));
        let err = check_headers(&headers, Some(2), HeaderProfile::General).unwrap_err();
        assert_eq!(err.malformed, vec!["date".to_string()]);
    }

    #[test]
    fn test_content_length_must_match_body() {
        let err = check_headers(&general_headers(), Some(3), HeaderProfile::General).unwrap_err();
        assert_eq!(err.malformed, vec!["content-length".to_string()]);
    }

    #[test]
    fn test_malformed_content_type_is_rejected() {
        let mut headers = general_headers();
        headers.insert("content-type", HeaderValue::from_static("not a mime type"));
        let err = check_headers(&headers, Some(2), HeaderProfile::General).unwrap_err();
        assert_eq!(err.malformed, vec!["content-type".to_string()]);
    }

    #[test]
    fn test_extra_headers_are_permitted() {
        let mut headers = general_headers();
        headers.insert("x-extra-anything", HeaderValue::from_static("ignored"));
        assert!(check_headers(&headers, Some(2), HeaderProfile::General).is_ok());
    }
}
