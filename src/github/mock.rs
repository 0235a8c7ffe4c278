//! wiremock-based tracker mock server for testing.
//!
//! HTTP-level mocking of the issue API consumed by `GitHubClient`. Used by
//! every test that exercises the client against real request/response pairs.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! mock.issues_page(1, &[mock_issue(1, "Title", "open", &["bug"])]).await;
//! let client = mock.client();
//! ```

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

const OWNER: &str = "owner";
const REPO: &str = "repo";

/// Mock user JSON matching the `User` model.
pub fn mock_user(login: &str) -> serde_json::Value {
    json!({
        "login": login,
        "avatar_url": format!("https://avatars.example.com/{login}"),
    })
}

/// Mock label JSON matching the `Label` model.
pub fn mock_label(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "color": "d73a4a",
        "description": null,
    })
}

/// Mock issue JSON matching the `Issue` model.
pub fn mock_issue(number: u64, title: &str, state: &str, labels: &[&str]) -> serde_json::Value {
    let labels: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(i, name)| mock_label(i as i64 + 1, name))
        .collect();
    json!({
        "id": number as i64 * 1000,
        "number": number,
        "title": title,
        "body": "Test body",
        "state": state,
        "labels": labels,
        "created_at": "2024-12-01T00:00:00Z",
        "updated_at": "2024-12-02T00:00:00Z",
        "user": mock_user("testuser"),
        "html_url": format!("https://github.com/{OWNER}/{REPO}/issues/{number}"),
    })
}

/// Mock comment JSON matching the `Comment` model.
pub fn mock_comment(id: i64, body: &str) -> serde_json::Value {
    json!({
        "id": id,
        "body": body,
        "user": mock_user("testuser"),
        "created_at": "2024-12-02T00:00:00Z",
        "updated_at": "2024-12-02T00:00:00Z",
        "html_url": format!("https://github.com/{OWNER}/{REPO}/issues/1#issuecomment-{id}"),
    })
}

pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// A `GitHubClient` pointed at this mock server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_api_base(&self.server.uri(), OWNER, REPO, "test-token").unwrap()
    }

    fn repo_path(&self, tail: &str) -> String {
        format!("/repos/{OWNER}/{REPO}{tail}")
    }

    /// Mock one page of GET /issues.
    pub async fn issues_page(&self, page: u32, issues: &[serde_json::Value]) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("/issues")))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(issues))
            .mount(&self.server)
            .await;
    }

    /// Mock one page of GET /issues that only matches a `labels` filter.
    pub async fn issues_page_labeled(&self, page: u32, labels: &str, issues: &[serde_json::Value]) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("/issues")))
            .and(query_param("page", page.to_string()))
            .and(query_param("labels", labels))
            .respond_with(ResponseTemplate::new(200).set_body_json(issues))
            .mount(&self.server)
            .await;
    }

    /// Mock GET /issues with the given status for every page.
    pub async fn issues_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("/issues")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn get_issue(&self, number: u64, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/issues/{number}"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn get_issue_not_found(&self, number: u64) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/issues/{number}"))))
            .respond_with(ResponseTemplate::new(404))
            .mount(&self.server)
            .await;
    }

    pub async fn create_issue(&self, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(self.repo_path("/issues")))
            .respond_with(ResponseTemplate::new(201).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn update_issue(&self, number: u64, body: serde_json::Value) {
        Mock::given(method("PATCH"))
            .and(path(self.repo_path(&format!("/issues/{number}"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn labels(&self, labels: &[serde_json::Value]) {
        Mock::given(method("GET"))
            .and(path(self.repo_path("/labels")))
            .respond_with(ResponseTemplate::new(200).set_body_json(labels))
            .mount(&self.server)
            .await;
    }

    pub async fn comments(&self, number: u64, comments: &[serde_json::Value]) {
        Mock::given(method("GET"))
            .and(path(self.repo_path(&format!("/issues/{number}/comments"))))
            .respond_with(ResponseTemplate::new(200).set_body_json(comments))
            .mount(&self.server)
            .await;
    }

    pub async fn create_comment(&self, number: u64, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(self.repo_path(&format!("/issues/{number}/comments"))))
            .respond_with(ResponseTemplate::new(201).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
