//! Integration tests for link-folder membership.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_add_association_is_idempotent() {
    let app = TestApp::new().await;
    let folder = app.create_folder("Campaigns", None).await;
    let link = Uuid::new_v4();

    for _ in 0..2 {
        let response = app
            .request("POST", &format!("/api/links/{link}/folders/{folder}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    assert_eq!(app.link_folder_ids(link).await, vec![folder]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_add_association_requires_existing_folder() {
    let app = TestApp::new().await;
    let link = Uuid::new_v4();
    let missing = Uuid::new_v4();

    let response = app
        .request("POST", &format!("/api/links/{link}/folders/{missing}"), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_remove_association_is_idempotent() {
    let app = TestApp::new().await;
    let folder = app.create_folder("Campaigns", None).await;
    let link = Uuid::new_v4();

    for _ in 0..2 {
        let response = app
            .request(
                "DELETE",
                &format!("/api/links/{link}/folders/{folder}"),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    assert!(app.link_folder_ids(link).await.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_replace_associations_reads_back_exactly() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", None).await;
    let c = app.create_folder("C", None).await;
    let link = Uuid::new_v4();

    app.request(
        "PUT",
        &format!("/api/links/{link}/folders"),
        Some(json!({ "folder_ids": [a, b] })),
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/links/{link}/folders"),
            Some(json!({ "folder_ids": [b, c] })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let mut ids = app.link_folder_ids(link).await;
    ids.sort();
    let mut expected = vec![b, c];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_replace_rejects_unknown_folder() {
    let app = TestApp::new().await;
    let link = Uuid::new_v4();

    let response = app
        .request(
            "PUT",
            &format!("/api/links/{link}/folders"),
            Some(json!({ "folder_ids": [Uuid::new_v4()] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_batch_move_swaps_source_for_target() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", None).await;
    let c = app.create_folder("C", None).await;
    let link = Uuid::new_v4();

    app.request(
        "PUT",
        &format!("/api/links/{link}/folders"),
        Some(json!({ "folder_ids": [a, b] })),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/links/batch-move",
            Some(json!({
                "link_ids": [link],
                "target_folder_id": c,
                "source_folder_id": a
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let mut ids = app.link_folder_ids(link).await;
    ids.sort();
    let mut expected = vec![b, c];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_batch_move_without_source_is_additive() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", None).await;
    let link = Uuid::new_v4();

    app.request(
        "PUT",
        &format!("/api/links/{link}/folders"),
        Some(json!({ "folder_ids": [a] })),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/links/batch-move",
            Some(json!({
                "link_ids": [link],
                "target_folder_id": b,
                "source_folder_id": null
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let mut ids = app.link_folder_ids(link).await;
    ids.sort();
    let mut expected = vec![a, b];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_batch_move_handles_multiple_links() {
    let app = TestApp::new().await;
    let source = app.create_folder("Source", None).await;
    let target = app.create_folder("Target", None).await;
    let links = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

    for link in &links {
        app.request(
            "POST",
            &format!("/api/links/{link}/folders/{source}"),
            None,
        )
        .await;
    }

    let response = app
        .request(
            "POST",
            "/api/links/batch-move",
            Some(json!({
                "link_ids": links,
                "target_folder_id": target,
                "source_folder_id": source
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for link in &links {
        assert_eq!(app.link_folder_ids(*link).await, vec![target]);
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_remove_all_clears_link_memberships() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", None).await;
    let link = Uuid::new_v4();

    app.request(
        "PUT",
        &format!("/api/links/{link}/folders"),
        Some(json!({ "folder_ids": [a, b] })),
    )
    .await;

    let response = app
        .request("DELETE", &format!("/api/links/{link}/folders"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["removed"], json!(2));

    assert!(app.link_folder_ids(link).await.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_folder_links_listing_paginates() {
    let app = TestApp::new().await;
    let folder = app.create_folder("Big", None).await;

    for _ in 0..3 {
        let link = Uuid::new_v4();
        app.request(
            "POST",
            &format!("/api/links/{link}/folders/{folder}"),
            None,
        )
        .await;
    }

    let response = app
        .request(
            "GET",
            &format!("/api/folders/{folder}/links?page=1&per_page=2"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_items"], json!(3));
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(response.body["data"]["has_next"], json!(true));
}
