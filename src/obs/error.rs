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

//! Error definitions for object storage operations

use crate::obs::error_response::ApiErrorResponse;
use crate::obs::headers::HeaderFormatError;
use crate::obs::schema::SchemaMismatch;
use thiserror::Error;

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("{0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("invalid container name: {0}")]
    InvalidContainerName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("{0}")]
    InvalidBaseUrl(String),

    #[error("{0}")]
    UrlBuildError(String),

    #[error("path list for bulk delete must not be empty")]
    EmptyPathList,

    /// The response shape or status code disagrees with the expected
    /// descriptor.
    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatch),

    /// A required response header is missing or fails its format check.
    #[error(transparent)]
    HeaderFormat(#[from] HeaderFormatError),

    /// The server answered with an unexpected 4xx/5xx status.
    #[error(transparent)]
    ApiError(#[from] ApiErrorResponse),
}
