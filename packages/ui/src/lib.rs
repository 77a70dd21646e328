//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod views;

pub const APP_CSS: Asset = asset!("/assets/styling/app.css");

mod storage;
pub use storage::{make_store, PlatformStore};

mod navbar;
pub use navbar::{nav_items, NavItem, Navbar};

mod auth;
pub use auth::{sign_out, use_api, use_auth, AuthProvider, AuthState, RequireAuth, SessionGate};

mod sidebar;
pub use sidebar::RecentProjects;

pub mod dates;
pub mod forms;

pub mod components;
