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

use crate::obs::error::Error;
use crate::obs::multimap_ext::{Multimap, MultimapExt};
use crate::obs::utils::{url_encode, url_encode_object_name};
use hyper::Uri;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            f.write_str(&format!("{}:{}", self.host, self.port))?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Base URL of the storage service: scheme, host, port and the account path
/// handed out by the auth layer (e.g. `/v1/AUTH_test`).
///
/// The service is always addressed path-style: container and object names
/// are appended to the account path.
#[derive(Clone, Debug)]
pub struct BaseUrl {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub account_path: String,
}

impl BaseUrl {
    /// Builds a URL below the account path.
    ///
    /// An object name requires a container name; container and object names
    /// are percent-encoded ('/' separators inside object names survive).
    pub fn build_url(
        &self,
        query_params: &Multimap,
        container_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, Error> {
        if object_name.is_some() && container_name.is_none() {
            return Err(Error::UrlBuildError(String::from(
                "object name provided without container name",
            )));
        }

        let mut path = self.account_path.clone();
        if let Some(container) = container_name {
            path.push('/');
            path.push_str(&url_encode(container));
            if let Some(object) = object_name {
                path.push('/');
                path.push_str(&url_encode_object_name(object));
            }
        }
        if path.is_empty() {
            path.push('/');
        }

        Ok(Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path,
            query: query_params.clone(),
        })
    }

    /// Builds a URL at the bare service root, ignoring the account path.
    /// Version discovery lives there.
    pub fn build_root_url(&self, query_params: &Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query_params.clone(),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri = s.parse::<Uri>()?;

        let https = match uri.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(scheme) => {
                return Err(Error::InvalidBaseUrl(format!(
                    "scheme must be http or https, got {scheme}"
                )));
            }
        };

        let host = uri
            .host()
            .ok_or_else(|| Error::InvalidBaseUrl(String::from("valid host must be provided")))?
            .to_string();
        let port = uri.port_u16().unwrap_or(0);

        if uri.query().is_some() {
            return Err(Error::InvalidBaseUrl(String::from(
                "query in base URL is not supported",
            )));
        }

        let account_path = uri.path().trim_end_matches('/').to_string();

        Ok(BaseUrl {
            https,
            host,
            port,
            account_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_https() {
        let url: BaseUrl = "storage.example.com".parse().unwrap();
        assert!(url.https);
        assert_eq!(url.host, "storage.example.com");
        assert_eq!(url.port, 0);
        assert_eq!(url.account_path, "");
    }

    #[test]
    fn test_parse_account_path_and_port() {
        let url: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test/".parse().unwrap();
        assert!(!url.https);
        assert_eq!(url.port, 8080);
        assert_eq!(url.account_path, "/v1/AUTH_test");
    }

    #[test]
    fn test_parse_rejects_unknown_scheme() {
        assert!("ftp://host/v1".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn test_build_url_paths() {
        let base: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
        let q = Multimap::new();

        let account = base.build_url(&q, None, None).unwrap();
        assert_eq!(account.to_string(), "http://127.0.0.1:8080/v1/AUTH_test");

        let container = base.build_url(&q, Some("photos"), None).unwrap();
        assert_eq!(
            container.to_string(),
            "http://127.0.0.1:8080/v1/AUTH_test/photos"
        );

        let object = base
            .build_url(&q, Some("photos"), Some("2020/cat 1.jpg"))
            .unwrap();
        assert_eq!(
            object.to_string(),
            "http://127.0.0.1:8080/v1/AUTH_test/photos/2020/cat%201.jpg"
        );

        assert!(base.build_url(&q, None, Some("oops")).is_err());
    }

    #[test]
    fn test_build_root_url_ignores_account_path() {
        let base: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
        let url = base.build_root_url(&Multimap::new());
        assert_eq!(url.to_string(), "http://127.0.0.1:8080/");
    }
}
