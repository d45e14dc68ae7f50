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

//! Listing entries and bulk-operation parameter types.

use serde::Deserialize;
use std::fmt;

/// Response body format of listing operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingFormat {
    #[default]
    Json,
    Txt,
}

impl ListingFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingFormat::Json => "json",
            ListingFormat::Txt => "txt",
        }
    }
}

/// Archive format accepted by the bulk upload endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArchiveFormat {
    #[default]
    Tar,
    TarGz,
    TarBz2,
}

impl ArchiveFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ArchiveFormat::Tar => "tar",
            ArchiveFormat::TarGz => "tar.gz",
            ArchiveFormat::TarBz2 => "tar.bz2",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One container in a JSON account listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ContainerEntry {
    pub name: String,
    pub count: u64,
    pub bytes: u64,
    /// ISO 8601 timestamp; not reported by every deployment.
    #[serde(default)]
    pub last_modified: Option<String>,
}

/// One object in a JSON container listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ObjectEntry {
    pub name: String,
    #[serde(default)]
    pub hash: Option<String>,
    pub bytes: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

pub trait ValidName: Into<String> {}
impl ValidName for String {}
impl ValidName for &str {}
impl ValidName for &String {}

/// One entry of a bulk delete path list: a `container/object` pair or a
/// bare container. Built via the `From` conversions.
#[derive(Clone, Debug)]
pub struct PathToDelete {
    container: String,
    object: Option<String>,
}

/// A container name alone deletes the (empty) container.
impl<C: ValidName> From<C> for PathToDelete {
    fn from(container: C) -> Self {
        Self {
            container: container.into(),
            object: None,
        }
    }
}

/// A tuple of container and object names deletes one object.
impl<C: ValidName, O: ValidName> From<(C, O)> for PathToDelete {
    fn from((container, object): (C, O)) -> Self {
        Self {
            container: container.into(),
            object: Some(object.into()),
        }
    }
}

impl PathToDelete {
    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn object(&self) -> Option<&str> {
        self.object.as_deref()
    }
}
