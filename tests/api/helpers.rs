use reqwest::{Response, StatusCode};
use serde_json::Value;
use site_dashboard::{
    app_state::AppState,
    domain::{Profile, Project, ProjectId, UserId},
    services::data_stores::HashmapMembershipStore,
    utils::constants::test,
    Application,
};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub membership_store: Arc<RwLock<HashmapMembershipStore>>,
}

impl TestApp {
    pub async fn new() -> Self {
        let membership_store =
            Arc::new(RwLock::new(HashmapMembershipStore::default()));

        let app_state =
            AppState::new(membership_store.clone(), test::QUERY_TIMEOUT);

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            http_client,
            membership_store,
        }
    }

    pub async fn get_projects_list(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/projects/list", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_team(&self, project_id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/projects/team", &self.address))
            .query(&[("projectId", project_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_member_projects(
        &self,
        member_id: &str,
    ) -> reqwest::Response {
        self.http_client
            .get(format!("{}/members/projects", &self.address))
            .query(&[("memberId", member_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_add_member<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/projects/add-member", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_member<Body>(
        &self,
        membership_id: &str,
        body: &Body,
    ) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/projects/update-member", &self.address))
            .json(body)
            .query(&[("membershipId", membership_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_member(&self, membership_id: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/projects/remove-member", &self.address))
            .query(&[("membershipId", membership_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn set_backend_unavailable(&self, unavailable: bool) {
        self.membership_store
            .write()
            .await
            .set_unavailable(unavailable);
    }

    pub async fn set_backend_reads_unavailable(&self, unavailable: bool) {
        self.membership_store
            .write()
            .await
            .set_reads_unavailable(unavailable);
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

pub async fn add_profile(
    app: &mut TestApp,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> String {
    let profile = Profile::new(
        UserId::default(),
        first_name.map(str::to_owned),
        last_name.map(str::to_owned),
        None,
    );
    let id = profile.id.as_ref().to_string();
    app.membership_store.write().await.add_profile(profile);
    id
}

pub async fn add_project(app: &mut TestApp, name: &str, status: &str) -> String {
    let project = Project::new(
        ProjectId::default(),
        Some(name.to_owned()),
        Some(status.to_owned()),
    );
    let id = project.id.as_ref().to_string();
    app.membership_store.write().await.add_project(project);
    id
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn add_member(
    app: &mut TestApp,
    project_id: &str,
    user_id: &str,
    role: Option<&str>,
) -> String {
    let response = app
        .post_add_member(&serde_json::json!({
            "projectId": project_id,
            "userId": user_id,
            "role": role
        }))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = get_json_response_body(response).await;
    body.get("membershipId")
        .expect("Failed to read membershipId from JSON response")
        .as_str()
        .expect("Failed to create str from membershipId field")
        .to_owned()
}
