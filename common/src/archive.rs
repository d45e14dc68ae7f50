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

use crate::utils::rand_object_name;
use bytes::Bytes;
use tempfile::TempDir;
use thiserror::Error;

/// Archive or temp-resource creation failed. Fatal to the test, never
/// retried.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// On-disk fixture for bulk upload tests: one temp directory holding one
/// temp file. The directory name becomes the container name and the file
/// name the object name once the archive is expanded server-side.
///
/// The backing directory lives as long as the fixture and is removed on
/// drop, whatever the test outcome.
#[derive(Debug)]
pub struct ArchiveFixture {
    tmp_dir: TempDir,
    pub container_name: String,
    pub object_name: String,
}

impl ArchiveFixture {
    pub fn create() -> Result<ArchiveFixture, FixtureError> {
        let tmp_dir = tempfile::Builder::new().prefix("bulk").tempdir()?;
        let container_name = tmp_dir
            .path()
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        let object_name = rand_object_name();
        std::fs::write(tmp_dir.path().join(&object_name), b"bulk upload fixture")?;

        Ok(ArchiveFixture {
            tmp_dir,
            container_name,
            object_name,
        })
    }

    /// Packs the fixture into an in-memory tar stream, rooted at the
    /// container name.
    pub fn to_tar(&self) -> Result<Bytes, FixtureError> {
        let mut builder = tar::Builder::new(Vec::new());
        builder.append_dir_all(&self.container_name, self.tmp_dir.path())?;
        let data = builder.into_inner()?;
        Ok(Bytes::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names_come_from_the_tree() {
        let fixture = ArchiveFixture::create().unwrap();
        assert!(fixture.container_name.starts_with("bulk"));
        assert!(!fixture.object_name.is_empty());
    }

    #[test]
    fn test_tar_contains_container_and_object_paths() {
        let fixture = ArchiveFixture::create().unwrap();
        let data = fixture.to_tar().unwrap();

        let mut archive = tar::Archive::new(data.as_ref());
        let paths: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| {
                e.unwrap()
                    .path()
                    .unwrap()
                    .to_string_lossy()
                    .trim_end_matches('/')
                    .to_string()
            })
            .collect();

        let object_path = format!("{}/{}", fixture.container_name, fixture.object_name);
        assert!(paths.contains(&object_path), "paths: {paths:?}");
    }
}
