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

use cirrus::obs::creds::StaticProvider;
use cirrus::obs::http::BaseUrl;
use cirrus::obs::ObsClient;
use std::path::{Path, PathBuf};

/// Connection parameters of the service under test, resolved from the
/// environment. The auth handshake is external: `STORAGE_URL` is the
/// endpoint (including the account path) and `AUTH_TOKEN` the session
/// token it handed out.
#[derive(Clone)]
pub struct TestContext {
    pub client: ObsClient,
    pub base_url: BaseUrl,
    pub auth_token: String,
    pub ignore_cert_check: Option<bool>,
    pub ssl_cert_file: Option<PathBuf>,
}

impl TestContext {
    pub fn new_from_env() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        const DEFAULT_STORAGE_URL: &str = "http://127.0.0.1:8080/v1/AUTH_test";

        let storage_url: String =
            std::env::var("STORAGE_URL").unwrap_or(DEFAULT_STORAGE_URL.to_string());
        log::debug!("STORAGE_URL={storage_url}");
        let auth_token: String = std::env::var("AUTH_TOKEN").unwrap_or_default();
        log::debug!("AUTH_TOKEN=*****");
        let ssl_cert_file: Option<PathBuf> = match std::env::var("SSL_CERT_FILE") {
            Ok(value) if !value.is_empty() => Some(Path::new(&value).to_path_buf()),
            _ => None,
        };
        log::debug!("SSL_CERT_FILE={ssl_cert_file:?}");
        let ignore_cert_check: bool = std::env::var("IGNORE_CERT_CHECK").is_ok();
        log::debug!("IGNORE_CERT_CHECK={ignore_cert_check}");

        let base_url: BaseUrl = storage_url.parse().unwrap();

        let static_provider = StaticProvider::new(&auth_token);
        let client = ObsClient::new(
            base_url.clone(),
            Some(static_provider),
            ssl_cert_file.as_deref(),
            Some(ignore_cert_check),
        )
        .unwrap();

        Self {
            client,
            base_url,
            auth_token,
            ignore_cert_check: Some(ignore_cert_check),
            ssl_cert_file,
        }
    }
}
