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

//! Credential providers
//!
//! The authentication handshake itself (Keystone, TempAuth, ...) is an
//! external collaborator; providers only hand out the resulting session
//! token to be sent as `x-auth-token`.

#[derive(Clone, Debug)]
/// Credentials contain the auth token for a storage session
pub struct Credentials {
    pub auth_token: String,
}

/// Provider trait to fetch credentials
pub trait Provider: std::fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with the given auth token
    ///
    /// # Examples
    ///
    /// ```
    /// use cirrus::obs::creds::StaticProvider;
    /// let provider = StaticProvider::new("AUTH_tk0123456789abcdef");
    /// ```
    pub fn new(auth_token: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                auth_token: auth_token.to_string(),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}
