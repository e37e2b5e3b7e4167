//! Integration tests for folder operations.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_list_folders_creates_default() {
    let app = TestApp::new().await;

    let folders = app.list_folders().await;

    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["is_default"], json!(true));
    assert_eq!(folders[0]["name"], json!("All Links"));
    assert!(folders[0]["parent_id"].is_null());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_ensure_default_is_idempotent() {
    let app = TestApp::new().await;

    app.list_folders().await;
    let folders = app.list_folders().await;

    let defaults: Vec<_> = folders
        .iter()
        .filter(|f| f["is_default"].as_bool() == Some(true))
        .collect();
    assert_eq!(defaults.len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_folder_rejects_empty_name() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "   ", "parent_id": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_folder_rejects_missing_parent() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({
                "name": "Orphan",
                "parent_id": "00000000-0000-0000-0000-999999999999"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_assigns_sequential_positions() {
    let app = TestApp::new().await;

    // Ensure the default folder (position 1) exists first.
    app.list_folders().await;
    app.create_folder("first", None).await;
    app.create_folder("second", None).await;

    let folders = app.list_folders().await;
    let positions: Vec<(String, i64)> = folders
        .iter()
        .filter(|f| f["is_default"].as_bool() != Some(true))
        .map(|f| {
            (
                f["name"].as_str().unwrap().to_string(),
                f["position"].as_i64().unwrap(),
            )
        })
        .collect();

    assert!(positions.contains(&("first".to_string(), 2)));
    assert!(positions.contains(&("second".to_string(), 3)));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_rename_folder() {
    let app = TestApp::new().await;
    let folder_id = app.create_folder("Old Name", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{folder_id}"),
            Some(json!({ "name": "New Name" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], json!("New Name"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_delete_default_folder_is_forbidden() {
    let app = TestApp::new().await;
    let default_id = app.default_folder_id().await;

    let response = app
        .request("DELETE", &format!("/api/folders/{default_id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    // The store is unchanged: the default folder is still present.
    assert_eq!(app.default_folder_id().await, default_id);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_delete_reparents_children_to_default() {
    let app = TestApp::new().await;
    let default_id = app.default_folder_id().await;
    let parent_id = app.create_folder("Parent", None).await;
    let child_id = app.create_folder("Child", Some(parent_id)).await;

    let link_id = uuid::Uuid::new_v4();
    let response = app
        .request(
            "POST",
            &format!("/api/links/{link_id}/folders/{parent_id}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/folders/{parent_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let folders = app.list_folders().await;
    assert!(folders.iter().all(|f| f["id"].as_str()
        != Some(parent_id.to_string().as_str())));

    let child = folders
        .iter()
        .find(|f| f["id"].as_str() == Some(child_id.to_string().as_str()))
        .expect("Child folder disappeared");
    assert_eq!(
        child["parent_id"].as_str(),
        Some(default_id.to_string().as_str())
    );

    // The deleted folder's associations are gone too.
    assert!(app.link_folder_ids(link_id).await.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_delete_missing_folder_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "DELETE",
            "/api/folders/00000000-0000-0000-0000-999999999999",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reorder_moves_sibling_up() {
    let app = TestApp::new().await;
    let x = app.create_folder("x", None).await;
    let y = app.create_folder("y", None).await;
    let z = app.create_folder("z", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{y}/reorder"),
            Some(json!({ "direction": "up" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let siblings = response.body["data"].as_array().unwrap();
    let order: Vec<String> = siblings
        .iter()
        .filter(|f| f["is_default"].as_bool() != Some(true))
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(order, vec![y.to_string(), x.to_string(), z.to_string()]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reorder_up_then_down_restores_order() {
    let app = TestApp::new().await;
    app.create_folder("x", None).await;
    let y = app.create_folder("y", None).await;
    app.create_folder("z", None).await;

    let before: Vec<String> = app
        .list_folders()
        .await
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();

    app.request(
        "PUT",
        &format!("/api/folders/{y}/reorder"),
        Some(json!({ "direction": "up" })),
    )
    .await;
    app.request(
        "PUT",
        &format!("/api/folders/{y}/reorder"),
        Some(json!({ "direction": "down" })),
    )
    .await;

    let after: Vec<String> = app
        .list_folders()
        .await
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reorder_at_boundary_is_noop() {
    let app = TestApp::new().await;
    let default_id = app.default_folder_id().await;

    let before: Vec<String> = app
        .list_folders()
        .await
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{default_id}/reorder"),
            Some(json!({ "direction": "up" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after: Vec<String> = app
        .list_folders()
        .await
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_move_into_descendant_is_rejected() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(a)).await;
    let c = app.create_folder("C", Some(b)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{a}/move"),
            Some(json!({ "new_parent_id": c })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], json!("CYCLE"));

    // Tree unchanged: A is still a root.
    let folders = app.list_folders().await;
    let a_row = folders
        .iter()
        .find(|f| f["id"].as_str() == Some(a.to_string().as_str()))
        .unwrap();
    assert!(a_row["parent_id"].is_null());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_move_to_self_is_rejected() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{a}/move"),
            Some(json!({ "new_parent_id": a })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_move_to_null_promotes_to_root() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(a)).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{b}/move"),
            Some(json!({ "new_parent_id": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["parent_id"].is_null());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_tree_endpoint_nests_children() {
    let app = TestApp::new().await;
    let a = app.create_folder("A", None).await;
    let b = app.create_folder("B", Some(a)).await;

    let response = app.request("GET", "/api/folders/tree", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let roots = response.body["data"].as_array().unwrap();
    let a_node = roots
        .iter()
        .find(|n| n["id"].as_str() == Some(a.to_string().as_str()))
        .expect("A missing from tree");
    assert_eq!(
        a_node["children"][0]["id"].as_str(),
        Some(b.to_string().as_str())
    );
    assert_eq!(a_node["children"][0]["depth"], json!(1));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_request_without_identity_is_unauthorized() {
    let app = TestApp::new().await;

    use axum::body::Body;
    use tower::ServiceExt;

    let request = http::Request::builder()
        .method("GET")
        .uri("/api/folders")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
