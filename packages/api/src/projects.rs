//! Project endpoints (`/api/projects/*`).

use reqwest::RequestBuilder;
use serde::Deserialize;

use crate::client::{ensure_success, ApiClient, Reply};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{Project, ProjectPayload};

#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    projects: Option<Vec<Project>>,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    project: Option<Project>,
}

impl ProjectsResponse {
    fn into_projects(self) -> Result<Vec<Project>, ApiError> {
        ensure_success(self.success, &self.message)?;
        self.projects.ok_or(ApiError::Rejected {
            message: self.message,
        })
    }
}

impl ProjectResponse {
    fn into_reply(self) -> Result<Reply<Option<Project>>, ApiError> {
        ensure_success(self.success, &self.message)?;
        Ok(Reply {
            data: self.project,
            message: self.message,
        })
    }
}

impl ApiClient {
    /// All projects owned by the signed-in user, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let body: ProjectsResponse = self
            .send(self.request(Endpoint::ListProjects))
            .await?;
        body.into_projects()
    }

    /// Projects whose name, URL or description match `query`.
    pub async fn search_projects(&self, query: &str) -> Result<Vec<Project>, ApiError> {
        let body: ProjectsResponse = self.send(self.search_request(query)).await?;
        body.into_projects()
    }

    fn search_request(&self, query: &str) -> RequestBuilder {
        self.request(Endpoint::SearchProjects)
            .query(&[("query", query)])
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ApiError> {
        let body: ProjectResponse = self
            .send(self.request(Endpoint::GetProject(id)))
            .await?;
        let reply = body.into_reply()?;
        reply.data.ok_or(ApiError::Rejected {
            message: reply.message,
        })
    }

    pub async fn create_project(
        &self,
        payload: &ProjectPayload,
    ) -> Result<Reply<Option<Project>>, ApiError> {
        let body: ProjectResponse = self
            .send(
                self.request(Endpoint::CreateProject)
                    .json(payload),
            )
            .await?;
        body.into_reply()
    }

    pub async fn update_project(
        &self,
        id: &str,
        payload: &ProjectPayload,
    ) -> Result<Reply<Option<Project>>, ApiError> {
        let body: ProjectResponse = self
            .send(
                self.request(Endpoint::UpdateProject(id))
                    .json(payload),
            )
            .await?;
        body.into_reply()
    }
}
