use crate::helpers::{add_project, get_json_response_body, TestApp};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_collection_if_no_projects(app: &mut TestApp) {
    let response = app.get_projects_list().await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Failed to get projects list"
    );

    let expected_body = json!({"projects": []});
    let actual_body = get_json_response_body(response).await;
    assert_eq!(actual_body, expected_body);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_valid_list_for_valid_requests(app: &mut TestApp) {
    let projects = [("Harbour Tower", "Active"), ("Canal Bridge", "Planning")];
    let mut ids = vec![];
    for (name, status) in projects.iter() {
        ids.push(add_project(app, name, status).await);
    }

    let response = app.get_projects_list().await;
    assert_eq!(response.status().as_u16(), 200);

    let expected_body = json!({
        "projects": [
            {"id": ids[0], "name": "Harbour Tower", "status": "Active"},
            {"id": ids[1], "name": "Canal Bridge", "status": "Planning"}
        ]
    });
    assert_eq!(get_json_response_body(response).await, expected_body);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_502_if_backend_fails(app: &mut TestApp) {
    app.set_backend_unavailable(true).await;
    let response = app.get_projects_list().await;
    assert_eq!(response.status().as_u16(), 502);
}
