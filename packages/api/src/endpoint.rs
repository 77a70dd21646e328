//! Method and path for every call the client makes.

use reqwest::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    Login,
    Register,
    Logout,
    CurrentUser,
    VerifyEmail,
    ResendVerification,
    UploadProfilePic,
    ListProjects,
    SearchProjects,
    GetProject(&'a str),
    CreateProject,
    UpdateProject(&'a str),
}

impl Endpoint<'_> {
    pub(crate) fn method(&self) -> Method {
        match self {
            Endpoint::CurrentUser
            | Endpoint::ListProjects
            | Endpoint::SearchProjects
            | Endpoint::GetProject(_) => Method::GET,
            Endpoint::UpdateProject(_) => Method::PUT,
            _ => Method::POST,
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/auth/login".to_string(),
            Endpoint::Register => "/api/auth/register".to_string(),
            Endpoint::Logout => "/api/auth/logout".to_string(),
            Endpoint::CurrentUser => "/api/auth/getUser".to_string(),
            Endpoint::VerifyEmail => "/api/auth/verifyEmail".to_string(),
            Endpoint::ResendVerification => "/api/auth/resendVerification".to_string(),
            Endpoint::UploadProfilePic => "/api/auth/upload-profile-pic".to_string(),
            Endpoint::ListProjects => "/api/projects/get".to_string(),
            Endpoint::SearchProjects => "/api/projects/search".to_string(),
            Endpoint::GetProject(id) => format!("/api/projects/{id}"),
            Endpoint::CreateProject => "/api/projects/create".to_string(),
            Endpoint::UpdateProject(id) => format!("/api/projects/update/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiClient;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::new("https://api.example.com"))
    }

    fn built(endpoint: Endpoint<'_>) -> (Method, String) {
        let request = client().request(endpoint).build().unwrap();
        (request.method().clone(), request.url().to_string())
    }

    #[test]
    fn test_auth_endpoints() {
        let cases = [
            (Endpoint::Login, Method::POST, "/api/auth/login"),
            (Endpoint::Register, Method::POST, "/api/auth/register"),
            (Endpoint::Logout, Method::POST, "/api/auth/logout"),
            (Endpoint::CurrentUser, Method::GET, "/api/auth/getUser"),
            (Endpoint::VerifyEmail, Method::POST, "/api/auth/verifyEmail"),
            (
                Endpoint::ResendVerification,
                Method::POST,
                "/api/auth/resendVerification",
            ),
            (
                Endpoint::UploadProfilePic,
                Method::POST,
                "/api/auth/upload-profile-pic",
            ),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(
                built(endpoint),
                (method, format!("https://api.example.com{path}")),
                "{endpoint:?}"
            );
        }
    }

    #[test]
    fn test_project_endpoints() {
        let cases = [
            (Endpoint::ListProjects, Method::GET, "/api/projects/get"),
            (Endpoint::SearchProjects, Method::GET, "/api/projects/search"),
            (Endpoint::GetProject("p1"), Method::GET, "/api/projects/p1"),
            (Endpoint::CreateProject, Method::POST, "/api/projects/create"),
            (
                Endpoint::UpdateProject("p1"),
                Method::PUT,
                "/api/projects/update/p1",
            ),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(
                built(endpoint),
                (method, format!("https://api.example.com{path}")),
                "{endpoint:?}"
            );
        }
    }
}
