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

use crate::obs::header_constants::X_TRANS_ID;
use http::HeaderMap;

/// Typed error returned when the server answers an API operation with an
/// unexpected 4xx/5xx status. 2xx and 3xx responses are never converted into
/// this type because some operations multiplex success codes (version
/// discovery answers 300).
///
/// Transport-level failures are surfaced as
/// [`Error::HttpError`](crate::obs::error::Error::HttpError) instead and are
/// never retried; these are infrastructure tests, and a transient failure
/// should be visible, not masked.
#[derive(Clone, Debug)]
pub struct ApiErrorResponse {
    status_code: u16,
    reason: String,
    headers: HeaderMap,
    body: String,
}

impl ApiErrorResponse {
    pub(crate) async fn from_response(resp: reqwest::Response) -> Self {
        let status_code = resp.status().as_u16();
        let reason = resp
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let headers = resp.headers().clone();
        let body = resp.text().await.unwrap_or_default();
        Self {
            status_code,
            reason,
            headers,
            body,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }
    pub fn reason(&self) -> &str {
        &self.reason
    }
    /// Headers as returned by the server.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    /// Transaction id assigned by the server, if any.
    pub fn trans_id(&self) -> Option<&str> {
        self.headers.get(X_TRANS_ID).and_then(|v| v.to_str().ok())
    }
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "operation failed: \n\tstatus code: {} {}\n\tx-trans-id: {:?}\n\tbody: {}",
            self.status_code,
            self.reason,
            self.trans_id(),
            self.body,
        )
    }
}

impl std::error::Error for ApiErrorResponse {}
