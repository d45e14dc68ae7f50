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

use cirrus::obs::response::a_response_traits::{HasConformantHeaders, HasObsFields};
use cirrus::obs::types::ObsApi;
use cirrus_common::archive::ArchiveFixture;
use cirrus_common::cleanup_guard::CleanupGuard;
use cirrus_common::test_context::TestContext;

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn extract_archive() {
    let ctx = TestContext::new_from_env();

    // Directory and file contained in the directory correspond to the
    // container and its object.
    let fixture = ArchiveFixture::create().unwrap();
    let data = fixture.to_tar().unwrap();

    let resp = ctx.client.extract_archive(data).send().await.unwrap();
    let _cleanup = CleanupGuard::new(&ctx, &fixture.container_name);

    // Bulk upload responses stream: no content-length, transfer-encoding
    // takes its place.
    assert!(resp.headers().contains_key("transfer-encoding"));
    assert!(resp.headers().contains_key("content-type"));
    assert!(resp.headers().contains_key("x-trans-id"));
    assert!(resp.headers().contains_key("date"));
    resp.check_headers().unwrap();

    let summary = resp.summary().unwrap();
    assert!(summary.errors.is_empty(), "errors: {:?}", summary.errors);
    assert_eq!(summary.files_created, 1);

    let resp = ctx.client.list_containers().send().await.unwrap();
    resp.check_headers().unwrap();
    resp.validate().unwrap();
    let containers: Vec<String> = resp
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert!(containers.contains(&fixture.container_name));

    let resp = ctx
        .client
        .list_container(&fixture.container_name)
        .send()
        .await
        .unwrap();
    resp.check_headers().unwrap();
    resp.validate().unwrap();
    let objects: Vec<String> = resp
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert!(objects.contains(&fixture.object_name));
}
