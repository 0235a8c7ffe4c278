//! HTTP client for the tracker's issue API.
//!
//! A thin typed accessor: every operation is one request/response pair (list
//! issues auto-paginates), nothing is retried, and failures carry the upstream
//! status text. Mutations are remote only; nothing is cached here.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode};
use serde_json::json;

use super::error::{GitHubError, Result};
use super::models::{Comment, CreateIssueParams, Issue, Label, UpdateIssueParams};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const PAGE_SIZE: usize = 100;

#[derive(Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    /// `{api_base}/repos/{owner}/{repo}`
    base_url: String,
}

impl GitHubClient {
    /// Build a client for one repository. The token comes from the
    /// `GITHUB_TOKEN` environment variable; it is the only credential the
    /// dashboard holds.
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").map_err(|_| GitHubError::MissingToken)?;
        Self::with_api_base(DEFAULT_API_BASE, owner, repo, &token)
    }

    /// Build a client against a custom API base URL. Tests point this at a
    /// local mock server.
    pub fn with_api_base(api_base: &str, owner: &str, repo: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GitHubError::Validation("Token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: format!("{}/repos/{owner}/{repo}", api_base.trim_end_matches('/')),
        })
    }

    /// Fetch every issue matching `state` (and optionally a comma-separated
    /// label filter), following pagination until the server returns a short
    /// page. Pages are concatenated in server order (created, descending).
    pub async fn list_issues(&self, state: &str, labels: Option<&str>) -> Result<Vec<Issue>> {
        let mut all = Vec::new();
        let mut page = 1usize;

        loop {
            let mut query = vec![
                ("state", state.to_string()),
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
                ("sort", "created".to_string()),
                ("direction", "desc".to_string()),
            ];
            if let Some(labels) = labels {
                query.push(("labels", labels.to_string()));
            }

            tracing::debug!(page, state, "fetching issues page");
            let response = self
                .http
                .get(format!("{}/issues", self.base_url))
                .query(&query)
                .send()
                .await?;
            let response = check_status(response, "fetch issues")?;
            let issues: Vec<Issue> = response.json().await?;

            let short_page = issues.len() < PAGE_SIZE;
            all.extend(issues);
            if short_page {
                break;
            }
            page += 1;
        }

        Ok(all)
    }

    pub async fn get_issue(&self, number: u64) -> Result<Issue> {
        let response = self
            .http
            .get(format!("{}/issues/{number}", self.base_url))
            .send()
            .await?;
        let response = check_status(response, "fetch issue")?;
        Ok(response.json().await?)
    }

    /// Create an issue. The title must be non-empty after trimming; that is
    /// checked before any network call.
    pub async fn create_issue(&self, params: &CreateIssueParams) -> Result<Issue> {
        if params.title.trim().is_empty() {
            return Err(GitHubError::Validation("Title is required".to_string()));
        }

        let response = self
            .http
            .post(format!("{}/issues", self.base_url))
            .json(params)
            .send()
            .await?;
        let response = check_status(response, "create issue")?;
        Ok(response.json().await?)
    }

    /// Partial update: fields left `None` are unchanged server-side.
    pub async fn update_issue(&self, number: u64, params: &UpdateIssueParams) -> Result<Issue> {
        let response = self
            .http
            .patch(format!("{}/issues/{number}", self.base_url))
            .json(params)
            .send()
            .await?;
        let response = check_status(response, "update issue")?;
        Ok(response.json().await?)
    }

    pub async fn list_labels(&self) -> Result<Vec<Label>> {
        let response = self
            .http
            .get(format!("{}/labels", self.base_url))
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?;
        let response = check_status(response, "fetch labels")?;
        Ok(response.json().await?)
    }

    pub async fn list_comments(&self, number: u64) -> Result<Vec<Comment>> {
        let response = self
            .http
            .get(format!("{}/issues/{number}/comments", self.base_url))
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?;
        let response = check_status(response, "fetch comments")?;
        Ok(response.json().await?)
    }

    /// Post a comment. The body must be non-empty after trimming; checked
    /// before any network call.
    pub async fn create_comment(&self, number: u64, body: &str) -> Result<Comment> {
        if body.trim().is_empty() {
            return Err(GitHubError::Validation(
                "Comment body is required".to_string(),
            ));
        }

        let response = self
            .http
            .post(format!("{}/issues/{number}/comments", self.base_url))
            .json(&json!({ "body": body }))
            .send()
            .await?;
        let response = check_status(response, "create comment")?;
        Ok(response.json().await?)
    }
}

/// Map a non-success response to a `Fetch` error carrying the status text.
fn check_status(response: Response, action: &'static str) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(GitHubError::Fetch {
            action,
            status: status_text(response.status()),
        })
    }
}

fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => status.as_u16().to_string(),
    }
}
