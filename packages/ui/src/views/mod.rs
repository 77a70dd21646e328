//! Route screens shared by the web and desktop apps.
//!
//! Views navigate by path so they stay independent of each platform's
//! `Route` enum.

use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

mod home;
pub use home::HomeView;

mod create_project;
pub use create_project::CreateProjectView;

mod dashboard;
pub use dashboard::DashboardView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod verify_email;
pub use verify_email::VerifyEmailView;

mod profile_update;
pub use profile_update::ProfileUpdateView;
