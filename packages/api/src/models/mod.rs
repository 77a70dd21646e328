//! Data models exchanged with the remote API.

mod project;
mod user;

pub use project::{Project, ProjectPayload};
pub use user::User;
