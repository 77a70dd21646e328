//! # API crate — typed client for the AccessLens HTTP API
//!
//! Everything the UI needs to talk to the remote API and to keep track of who
//! is signed in. No Dioxus here: the session logic is plain data so it can be
//! exercised in unit tests with an in-memory store.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Auth endpoints (`/api/auth/*`), their request bodies, and the client-side [`Session`] |
//! | [`projects`] | Project endpoints (`/api/projects/*`) |
//! | [`models`] | [`User`] and [`Project`] as the API sends them |
//! | [`config`] | [`ApiConfig`]: the API origin from `API_BASE_URL` |
//! | [`error`] | [`ApiError`]: transport, status, rejection and decode failures |
//!
//! ## Calls
//!
//! All calls are `async` methods on [`ApiClient`]:
//!
//! - **Auth**: `login`, `register`, `logout`, `current_user`, `verify_email`,
//!   `resend_verification`, `upload_profile_pic`
//! - **Projects**: `list_projects`, `search_projects`, `get_project`,
//!   `create_project`, `update_project`

pub mod auth;
mod client;
pub mod config;
mod endpoint;
pub mod error;
pub mod models;
pub mod projects;

pub use auth::{
    LoginRequest, ProfilePicRequest, RegisterRequest, Session, VerifyEmailRequest,
    USER_STORAGE_KEY,
};
pub use client::{ApiClient, Reply};
pub use config::ApiConfig;
pub use error::{ApiError, NETWORK_ERROR_MESSAGE};
pub use models::{Project, ProjectPayload, User};

/// URL parser used to validate project addresses before they are sent.
pub use reqwest::Url;
