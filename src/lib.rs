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

//! # Cirrus (`cirrus-rs`)
//!
//! This crate provides a strongly-typed, async interface to
//! OpenStack-Swift-compatible object storage APIs, together with the
//! conformance checks used to exercise a live service: declarative response
//! schema validation and response header well-formedness checks.
//!
//! Each supported operation has a corresponding request builder (e.g.
//! [`obs::builders::ListContainers`], [`obs::builders::ExtractArchive`],
//! [`obs::builders::BulkDelete`]), which allows configuring request
//! parameters using a fluent builder pattern.
//!
//! All request builders implement the [`obs::types::ObsApi`] trait, which
//! provides the async [`send`](crate::obs::types::ObsApi::send) method to
//! execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use cirrus::obs::ObsClient;
//! use cirrus::obs::creds::StaticProvider;
//! use cirrus::obs::http::BaseUrl;
//! use cirrus::obs::response::ListContainersResponse;
//! use cirrus::obs::types::ObsApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
//!     let provider = StaticProvider::new("AUTH_tk0123456789abcdef");
//!     let client = ObsClient::new(base_url, Some(provider), None, None).unwrap();
//!
//!     let resp: ListContainersResponse = client
//!         .list_containers()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     for entry in resp.entries().unwrap() {
//!         println!("{}: {} objects", entry.name, entry.count);
//!     }
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`obs::ObsClient`] returns a builder struct
//! - Builders implement [`obs::types::ToObsRequest`] for request conversion
//!   and [`obs::types::ObsApi`] for execution
//! - Responses implement [`obs::types::FromObsResponse`] and expose lazy,
//!   typed accessors over the raw body
//! - Responses can be checked against static schema descriptors
//!   ([`obs::api_schema`]) and header profiles ([`obs::headers`])

#![allow(clippy::result_large_err)]

pub mod obs;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
