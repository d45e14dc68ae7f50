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

//! Object storage service client to perform account, container and bulk
//! operations.

mod bulk_delete;
mod extract_archive;
mod list_api_versions;
mod list_container;
mod list_containers;

use crate::obs::creds::Provider;
use crate::obs::error::Error;
use crate::obs::error_response::ApiErrorResponse;
use crate::obs::header_constants::X_AUTH_TOKEN;
use crate::obs::http::{BaseUrl, Url};
use crate::obs::multimap_ext::{Multimap, MultimapExt};
use bytes::Bytes;
use http::Method;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

/// Builder for [`ObsClient`].
pub struct ObsClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ssl_cert_file: Option<PathBuf>,
    ignore_cert_check: bool,
}

impl ObsClientBuilder {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            ssl_cert_file: None,
            ignore_cert_check: false,
        }
    }

    /// Credential provider for the session token. Without one, requests are
    /// performed anonymously.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check.unwrap_or(false);
        self
    }

    pub fn build(self) -> Result<ObsClient, Error> {
        let mut builder = reqwest::Client::builder();

        if self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(path) = &self.ssl_cert_file {
            let mut buf = Vec::new();
            File::open(path)?.read_to_end(&mut buf)?;
            for cert in reqwest::Certificate::from_pem_bundle(&buf)? {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(ObsClient {
            http_client: builder.build()?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
            }),
        })
    }
}

/// Object storage service client.
///
/// If a credential provider is passed, every request carries the session
/// token in `x-auth-token`; else requests are performed anonymously.
#[derive(Clone, Debug)]
pub struct ObsClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl ObsClient {
    /// Returns a client for the given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use cirrus::obs::ObsClient;
    /// use cirrus::obs::creds::StaticProvider;
    /// use cirrus::obs::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
    /// let provider = StaticProvider::new("AUTH_tk0123456789abcdef");
    /// let client = ObsClient::new(base_url, Some(provider), None, None).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        provider: Option<P>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        ObsClientBuilder::new(base_url)
            .provider(provider)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Executes a request against the service. 2xx and 3xx responses pass
    /// through to response parsing (some operations multiplex success
    /// codes); 4xx/5xx responses are converted into
    /// [`ApiErrorResponse`]. Nothing is retried.
    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn execute(
        &self,
        method: Method,
        headers: &mut Multimap,
        query_params: &Multimap,
        container_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<Bytes>,
        service_root: bool,
    ) -> Result<reqwest::Response, Error> {
        let url: Url = if service_root {
            self.shared.base_url.build_root_url(query_params)
        } else {
            self.shared
                .base_url
                .build_url(query_params, container_name, object_name)?
        };

        if let Some(provider) = &self.shared.provider {
            let creds = provider.fetch();
            headers.add(X_AUTH_TOKEN, creds.auth_token);
        }

        log::debug!("{method} {url}");

        let mut req = self.http_client.request(method, url.to_string());
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key.as_str(), value.as_str());
            }
        }
        if let Some(bytes) = body {
            req = req.body(bytes);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(Error::ApiError(ApiErrorResponse::from_response(resp).await));
        }

        log::debug!("received {status} with {} header(s)", resp.headers().len());
        Ok(resp)
    }
}
