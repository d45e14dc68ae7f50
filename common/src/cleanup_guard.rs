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

use crate::test_context::TestContext;
use cirrus::obs::error::Error;
use cirrus::obs::types::{ObsApi, PathToDelete};
use cirrus::obs::ObsClient;
use std::thread;
use tokio::time::timeout;

/// Cleanup guard that removes the container, contents included, when it is
/// dropped. Dropping runs on every exit path, assertion failures included.
pub struct CleanupGuard {
    client: ObsClient,
    container_name: String,
}

impl CleanupGuard {
    pub fn new(ctx: &TestContext, container_name: &str) -> Self {
        Self {
            client: ctx.client.clone(),
            container_name: container_name.to_string(),
        }
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        let client = self.client.clone();
        let container_name = self.container_name.clone();

        // Detach from the test's runtime: spawn a thread with its own
        // runtime and block until the cleanup is done.
        thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();

            rt.block_on(async {
                match timeout(
                    std::time::Duration::from_secs(60),
                    purge_container(client, &container_name),
                )
                .await
                {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        eprintln!("Error removing container '{container_name}':\n{e}")
                    }
                    Err(_) => {
                        eprintln!("Cleanup timeout after 60s while removing container {container_name}")
                    }
                }
            });
        })
        .join()
        .unwrap();
    }
}

/// Deletes the container and everything in it via the bulk delete endpoint.
/// An already-absent container is not an error.
pub async fn purge_container(client: ObsClient, container_name: &str) -> Result<(), Error> {
    let listing = match client.list_container(container_name).send().await {
        Ok(resp) => resp,
        Err(Error::ApiError(e)) if e.status_code() == 404 => return Ok(()),
        Err(e) => return Err(e),
    };

    let mut paths: Vec<PathToDelete> = listing
        .entries()?
        .into_iter()
        .map(|entry| PathToDelete::from((container_name, entry.name.as_str())))
        .collect();
    paths.push(PathToDelete::from(container_name));

    client.bulk_delete(paths).send().await?;
    Ok(())
}
