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

//! Response traits for accessing response metadata, plus the macros that
//! implement the boilerplate on each response type.

use crate::obs::header_constants::X_TRANS_ID;
use crate::obs::headers::{self, HeaderFormatError, HeaderProfile};
use crate::obs::types::ObsRequest;
use crate::obs::utils::{from_http_header_value, UtcTime};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

#[macro_export]
/// Implements the `FromObsResponse` trait for the specified types.
macro_rules! impl_from_obs_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::obs::types::FromObsResponse for $ty {
                async fn from_obs_response(
                    request: $crate::obs::types::ObsRequest,
                    response: Result<reqwest::Response, $crate::obs::error::Error>,
                ) -> Result<Self, $crate::obs::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        status_code: resp.status(),
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasObsFields` trait for the specified types.
macro_rules! impl_has_obs_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::obs::response::a_response_traits::HasObsFields for $ty {
                fn request(&self) -> &$crate::obs::types::ObsRequest {
                    &self.request
                }

                fn status_code(&self) -> ::http::StatusCode {
                    self.status_code
                }

                fn headers(&self) -> &::http::HeaderMap {
                    &self.headers
                }

                fn body(&self) -> &::bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Access to the raw fields every response carries.
pub trait HasObsFields {
    /// The request that was sent to the service.
    fn request(&self) -> &ObsRequest;
    /// HTTP status code returned by the server.
    fn status_code(&self) -> StatusCode;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the name of the container the request addressed.
pub trait HasContainer: HasObsFields {
    #[inline]
    fn container(&self) -> &str {
        self.request().container.as_deref().unwrap_or_default()
    }
}

/// Returns the transaction id the server assigned to this request
/// (`x-trans-id`).
pub trait HasTransId: HasObsFields {
    #[inline]
    fn trans_id(&self) -> Option<&str> {
        self.headers()
            .get(X_TRANS_ID)
            .and_then(|v| v.to_str().ok())
    }
}

/// Returns the response `date` header, parsed.
pub trait HasDate: HasObsFields {
    fn date(&self) -> Option<UtcTime> {
        self.headers()
            .get("date")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| from_http_header_value(v).ok())
    }
}

/// Checks this response's headers against the profile the operation calls
/// for. Bulk operation responses stream and omit `content-length`, so they
/// use [`HeaderProfile::Bulk`].
pub trait HasConformantHeaders: HasObsFields {
    const PROFILE: HeaderProfile;

    fn check_headers(&self) -> Result<(), HeaderFormatError> {
        headers::check_headers(
            self.headers(),
            Some(self.body().len() as u64),
            Self::PROFILE,
        )
    }
}
