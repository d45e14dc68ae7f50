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
use cirrus::obs::types::{ListingFormat, ObsApi};
use cirrus_common::archive::ArchiveFixture;
use cirrus_common::cleanup_guard::CleanupGuard;
use cirrus_common::test_context::TestContext;

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_containers_json() {
    let ctx = TestContext::new_from_env();

    // Make sure at least one container exists.
    let fixture = ArchiveFixture::create().unwrap();
    let data = fixture.to_tar().unwrap();
    ctx.client.extract_archive(data).send().await.unwrap();
    let _cleanup = CleanupGuard::new(&ctx, &fixture.container_name);

    let resp = ctx.client.list_containers().send().await.unwrap();

    // Plain GETs carry a fixed content-length.
    assert!(resp.headers().contains_key("content-length"));
    resp.check_headers().unwrap();
    resp.validate().unwrap();

    let entries = resp.entries().unwrap();
    assert!(entries.iter().any(|e| e.name == fixture.container_name));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_containers_respects_limit() {
    let ctx = TestContext::new_from_env();

    let fixture = ArchiveFixture::create().unwrap();
    let data = fixture.to_tar().unwrap();
    ctx.client.extract_archive(data).send().await.unwrap();
    let _cleanup = CleanupGuard::new(&ctx, &fixture.container_name);

    let resp = ctx
        .client
        .list_containers()
        .limit(1)
        .send()
        .await
        .unwrap();
    resp.validate().unwrap();
    assert!(resp.entries().unwrap().len() <= 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
async fn list_containers_txt() {
    let ctx = TestContext::new_from_env();

    let fixture = ArchiveFixture::create().unwrap();
    let data = fixture.to_tar().unwrap();
    ctx.client.extract_archive(data).send().await.unwrap();
    let _cleanup = CleanupGuard::new(&ctx, &fixture.container_name);

    let resp = ctx
        .client
        .list_containers()
        .format(ListingFormat::Txt)
        .send()
        .await
        .unwrap();
    resp.check_headers().unwrap();

    let body = resp.text().unwrap();
    assert!(body.lines().any(|line| line == fixture.container_name));
}
