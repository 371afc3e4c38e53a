use crate::helpers::{
    add_member, add_profile, get_json_response_body, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_for_valid_requests(app: &mut TestApp) {
    let project_id = "1c7e5a93-4d2b-4f68-a0e9-5b3d8c2f7a14";
    let user_id = add_profile(app, Some("Ana"), Some("Ruiz")).await;
    let membership_id =
        add_member(app, project_id, &user_id, Some("Engineer")).await;

    let response = app
        .put_member(&membership_id, &json!({"role": "Site Manager"}))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({"membershipId": membership_id, "role": "Site Manager"})
    );

    let team = get_json_response_body(app.get_team(project_id).await).await;
    assert_eq!(team["members"][0]["role"], "Site Manager");

    let response = app.put_member(&membership_id, &json!({"role": null})).await;
    assert_eq!(response.status().as_u16(), 200);

    let team = get_json_response_body(app.get_team(project_id).await).await;
    assert_eq!(team["members"][0]["role"], "Team Member");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_role(app: &mut TestApp) {
    let user_id = add_profile(app, None, None).await;
    let membership_id = add_member(
        app,
        "1c7e5a93-4d2b-4f68-a0e9-5b3d8c2f7a14",
        &user_id,
        None,
    )
    .await;

    let response = app.put_member(&membership_id, &json!({"role": "  "})).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_non_existent_membership_id(app: &mut TestApp) {
    let response = app
        .put_member(
            "60d8e457-8934-48ce-9d16-f503bd7ef085",
            &json!({"role": "Engineer"}),
        )
        .await;
    assert_eq!(
        response.status().as_u16(),
        404,
        "Should return 404 for non-existent membership IDs",
    );
}
