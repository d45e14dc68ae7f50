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
use cirrus::obs::response::BulkDeleteResponse;
use cirrus::obs::types::{ListingFormat, ObsApi, PathToDelete};
use cirrus_common::archive::ArchiveFixture;
use cirrus_common::cleanup_guard::CleanupGuard;
use cirrus_common::test_context::TestContext;

/// Uploads a fresh one-container/one-object archive and returns its names.
async fn upload_fixture(ctx: &TestContext) -> (String, String, CleanupGuard) {
    let fixture = ArchiveFixture::create().unwrap();
    let data = fixture.to_tar().unwrap();
    ctx.client.extract_archive(data).send().await.unwrap();
    let guard = CleanupGuard::new(ctx, &fixture.container_name);
    (fixture.container_name, fixture.object_name, guard)
}

fn assert_bulk_headers(resp: &BulkDeleteResponse) {
    // Bulk delete responses stream: no content-length, transfer-encoding
    // takes its place.
    assert!(resp.headers().contains_key("transfer-encoding"));
    assert!(resp.headers().contains_key("content-type"));
    assert!(resp.headers().contains_key("x-trans-id"));
    assert!(resp.headers().contains_key("date"));
    resp.check_headers().unwrap();
}

async fn assert_contents_deleted(ctx: &TestContext, container_name: &str) {
    let resp = ctx
        .client
        .list_containers()
        .format(ListingFormat::Txt)
        .send()
        .await
        .unwrap();
    resp.check_headers().unwrap();
    let body = resp.text().unwrap();
    assert!(!body.lines().any(|line| line == container_name));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn bulk_delete() {
    let ctx = TestContext::new_from_env();
    let (container_name, object_name, _cleanup) = upload_fixture(&ctx).await;

    let paths = vec![
        PathToDelete::from((container_name.as_str(), object_name.as_str())),
        PathToDelete::from(container_name.as_str()),
    ];
    let resp = ctx.client.bulk_delete(paths).send().await.unwrap();

    assert_bulk_headers(&resp);

    let summary = resp.summary().unwrap();
    assert!(summary.errors.is_empty(), "errors: {:?}", summary.errors);
    assert_eq!(summary.deleted, 2);

    assert_contents_deleted(&ctx, &container_name).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn bulk_delete_by_post() {
    let ctx = TestContext::new_from_env();
    let (container_name, object_name, _cleanup) = upload_fixture(&ctx).await;

    let paths = vec![
        PathToDelete::from((container_name.as_str(), object_name.as_str())),
        PathToDelete::from(container_name.as_str()),
    ];
    let resp = ctx.client.bulk_delete_via_post(paths).send().await.unwrap();

    assert_bulk_headers(&resp);

    let summary = resp.summary().unwrap();
    assert!(summary.errors.is_empty(), "errors: {:?}", summary.errors);
    assert_eq!(summary.deleted, 2);

    assert_contents_deleted(&ctx, &container_name).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn bulk_delete_of_absent_paths_is_idempotent() {
    let ctx = TestContext::new_from_env();
    let (container_name, object_name, _cleanup) = upload_fixture(&ctx).await;

    let paths = vec![
        PathToDelete::from((container_name.as_str(), object_name.as_str())),
        PathToDelete::from(container_name.as_str()),
    ];
    ctx.client
        .bulk_delete(paths.clone())
        .send()
        .await
        .unwrap();

    // Deleting again must not error; absent paths are merely counted.
    let resp = ctx.client.bulk_delete(paths).send().await.unwrap();
    assert_bulk_headers(&resp);

    let summary = resp.summary().unwrap();
    assert!(summary.errors.is_empty(), "errors: {:?}", summary.errors);
    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.not_found, 2);

    assert_contents_deleted(&ctx, &container_name).await;
}
