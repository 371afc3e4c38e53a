use crate::helpers::{add_profile, get_json_response_body, TestApp};
use site_dashboard::ErrorResponse;
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_with_refreshed_team(app: &mut TestApp) {
    let project_id = "6b2f9d4a-0e1c-4a7b-93d5-8c6e2f1a0b37";

    let schema = json!({
      "$schema": "http://json-schema.org/draft-04/schema#",
      "description": "",
      "type": "object",
      "properties": {
        "membershipId": {
          "type": "string",
          "minLength": 36,
          "maxLength": 36
        },
        "projectId": {
          "type": "string",
          "minLength": 36,
          "maxLength": 36
        },
        "members": {
          "type": "array"
        }
      },
      "required": [
        "membershipId",
        "projectId",
        "members"
      ]
    });

    let members = [("Ted", "Foreman"), ("Dougal", "Labourer")];

    for (count, (name, role)) in members.iter().enumerate() {
        let user_id = add_profile(app, Some(name), None).await;
        let response = app
            .post_add_member(&json!(
            {
                "projectId": project_id,
                "userId": user_id,
                "role": role
            }))
            .await;

        assert_eq!(
            response.status().as_u16(),
            201,
            "Failed to add member: {}",
            name
        );

        let response_body = get_json_response_body(response).await;

        assert!(
            jsonschema::is_valid(&schema, &response_body),
            "response does not match schema"
        );

        assert_eq!(
            response_body.get("projectId").unwrap(),
            project_id,
            "Response should contain expected projectId. Response: {}",
            response_body
        );

        let team = response_body["members"].as_array().unwrap();
        assert_eq!(
            team.len(),
            count + 1,
            "Response should contain the refreshed team"
        );
        let added = &team[count];
        assert_eq!(added["id"], response_body["membershipId"]);
        assert_eq!(added["name"], *name);
        assert_eq!(added["role"], *role);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_request(app: &mut TestApp) {
    let test_cases = [
        json!({
            "projectId": "6b2f9d4a-0e1c-4a7b-93d5-8c6e2f1a0b37"
        }),
        json!({
            "userId": "9d1e4b27-83c6-4f0a-b5d2-71e0c8a4f3b6"
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_add_member(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_input(app: &mut TestApp) {
    let project_id = "6b2f9d4a-0e1c-4a7b-93d5-8c6e2f1a0b37";
    let user_id = "9d1e4b27-83c6-4f0a-b5d2-71e0c8a4f3b6";

    let test_cases = [
        (
            json!({
                "projectId": project_id,
                "userId": user_id,
                "role": ""
            }),
            "Validation error: Member role cannot be empty",
        ),
        (
            json!({
                "projectId": project_id,
                "userId": user_id,
                "role": "a".repeat(256)
            }),
            "Validation error: Max role length is 255 characters",
        ),
        (
            json!({
                "projectId": "ge9915f0-a4c2-48fb-977b-9f4f959c5729",
                "userId": user_id
            }),
            "Validation error: Invalid project ID: failed to parse a UUID",
        ),
        (
            json!({
                "projectId": project_id,
                "userId": "foo"
            }),
            "Validation error: Invalid user ID: failed to parse a UUID",
        ),
    ];

    for (body, expected_error) in test_cases.iter() {
        let response = app.post_add_member(body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            body
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            expected_error.to_string()
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_if_already_a_member(app: &mut TestApp) {
    let user_id = add_profile(app, Some("Ted"), Some("Crilly")).await;
    let request = json!(
        {
            "projectId": "6b2f9d4a-0e1c-4a7b-93d5-8c6e2f1a0b37",
            "userId": user_id
        }
    );

    let response = app.post_add_member(&request).await;
    assert_eq!(
        response.status().as_u16(),
        201,
        "Should return 201 for valid requests",
    );

    let response = app.post_add_member(&request).await;
    assert_eq!(
        response.status().as_u16(),
        409,
        "Should return 409 when the user is already a member",
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_500_if_backend_rejects_write(app: &mut TestApp) {
    app.set_backend_unavailable(true).await;

    let response = app
        .post_add_member(&json!({
            "projectId": "6b2f9d4a-0e1c-4a7b-93d5-8c6e2f1a0b37",
            "userId": "9d1e4b27-83c6-4f0a-b5d2-71e0c8a4f3b6"
        }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_without_members_if_refetch_fails(app: &mut TestApp) {
    let project_id = "6b2f9d4a-0e1c-4a7b-93d5-8c6e2f1a0b37";
    let user_id = add_profile(app, Some("Ted"), Some("Crilly")).await;
    let request = json!(
        {
            "projectId": project_id,
            "userId": user_id,
            "role": "Foreman"
        }
    );

    app.set_backend_reads_unavailable(true).await;
    let response = app.post_add_member(&request).await;
    assert_eq!(
        response.status().as_u16(),
        201,
        "Stored membership should be reported even if the team cannot be read"
    );

    let response_body = get_json_response_body(response).await;
    assert!(
        response_body.get("members").is_none(),
        "Response should not contain a team list. Response: {}",
        response_body
    );
    let membership_id = response_body["membershipId"]
        .as_str()
        .expect("Response should contain membershipId")
        .to_owned();

    app.set_backend_reads_unavailable(false).await;
    let team = get_json_response_body(app.get_team(project_id).await).await;
    let members = team["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["id"], membership_id);
    assert_eq!(members[0]["role"], "Foreman");

    let response = app.post_add_member(&request).await;
    assert_eq!(response.status().as_u16(), 409);
}
