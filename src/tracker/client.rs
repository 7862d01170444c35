//! Issue tracker REST client implementation.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::tracker::error::TrackerError;
use crate::tracker::notes::{self, NoteEntry};

/// Tracker version object, as returned by the version listing endpoint.
#[derive(Deserialize)]
struct ProjectVersion {
    id: i64,
}

/// Tracker search response body.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<SearchIssue>,
}

/// One issue from the tracker search response.
#[derive(Deserialize)]
struct SearchIssue {
    key: String,
    fields: IssueFields,
}

/// Issue fields consumed by the compilation.
#[derive(Deserialize)]
struct IssueFields {
    summary: String,
    #[serde(rename = "issueType")]
    issue_type: IssueType,
    /// Rich-text release notes custom field; its `content` holds the nested
    /// block structure fed to the flattener.
    #[serde(rename = "customfield_10030", default)]
    release_notes: Option<Value>,
}

/// Issue type descriptor.
#[derive(Deserialize)]
struct IssueType {
    name: String,
}

/// One issue assembled into the release compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    /// Issue summary line.
    pub title: String,
    /// Tracker-assigned issue key, e.g. `PROJ-42`.
    pub external_key: String,
    /// Display name of the issue type.
    pub issue_type: String,
    /// Flattened release note entries, in original rich-text order.
    pub release_notes: Vec<NoteEntry>,
}

/// Successful outcome of a release compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCompilation {
    /// Identifier of the resolved release version.
    pub version_id: i64,
    /// Issues linked to that version, in tracker response order.
    pub issues: Vec<IssueRecord>,
}

/// Outcome of a release compilation, with tracker failures as values.
pub type ReleaseCompilationResult = Result<ReleaseCompilation, TrackerError>;

/// Client for the issue tracker's REST API.
///
/// Holds the credentials as a prebuilt `Basic` header; each operation issues
/// exactly one request, with no retries or caching at this layer.
pub struct TrackerClient {
    http: Client,
    base_url: String,
    auth_header: String,
}

impl TrackerClient {
    /// Creates a new tracker client for the given base URL and credentials.
    pub fn new(base_url: &str, user: &str, api_key: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .with_context(|| format!("Invalid tracker URL: {base_url}"))?;

        let auth_header = format!("Basic {}", STANDARD.encode(format!("{user}:{api_key}")));

        Ok(Self {
            http: Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Resolves the target release version for a project.
    ///
    /// Lists the project's versions and returns the id of the last entry in
    /// response order; the tracker appends new versions, so the last entry is
    /// the upcoming release. An empty list is [`TrackerError::VersionNotFound`],
    /// which callers must treat as fatal for the compilation rather than
    /// proceeding to issue listing.
    pub async fn resolve_version_id(&self, project_key: &str) -> Result<i64, TrackerError> {
        let url = format!("{}/rest/api/3/project/{project_key}/version", self.base_url);
        debug!(url = %url, "Listing tracker versions");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TrackerError::Network(format!(
                "HTTP {} from version listing",
                response.status()
            )));
        }

        let versions: Vec<ProjectVersion> = response
            .json()
            .await
            .map_err(|e| TrackerError::MalformedResponse(e.to_string()))?;

        match versions.last() {
            Some(version) => {
                debug!(version_id = version.id, "Resolved release version");
                Ok(version.id)
            }
            None => Err(TrackerError::VersionNotFound),
        }
    }

    /// Lists the issues linked to a resolved release version.
    ///
    /// Issues a single search filtered by project and fix version, and maps
    /// each hit into an [`IssueRecord`] with its release notes flattened.
    /// Response order is preserved.
    pub async fn list_issues_for_version(
        &self,
        project_key: &str,
        version_id: i64,
    ) -> ReleaseCompilationResult {
        let url = format!(
            "{}/rest/api/3/search?project={project_key} and fixVersion = {version_id}",
            self.base_url
        );
        debug!(url = %url, "Searching tracker issues for fix version");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TrackerError::Network(format!(
                "HTTP {} from issue search",
                response.status()
            )));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| TrackerError::MalformedResponse(e.to_string()))?;

        let issues: Vec<IssueRecord> = search
            .issues
            .into_iter()
            .map(|issue| IssueRecord {
                title: issue.fields.summary,
                external_key: issue.key,
                issue_type: issue.fields.issue_type.name,
                release_notes: notes::flatten(
                    issue.fields.release_notes.as_ref().and_then(|v| v.get("content")),
                ),
            })
            .collect();

        info!(
            version_id,
            issue_count = issues.len(),
            "Compiled issues for release version"
        );

        Ok(ReleaseCompilation { version_id, issues })
    }

    /// Resolves the release version and compiles its linked issues.
    ///
    /// The version lookup must fully resolve before the issue search is
    /// issued; any failure, including an absent version, short-circuits the
    /// pipeline and comes back as the error arm of the result.
    pub async fn compile_release(&self, project_key: &str) -> ReleaseCompilationResult {
        let version_id = self.resolve_version_id(project_key).await?;
        self.list_issues_for_version(project_key, version_id).await
    }
}
