//! Campus web client.
//!
//! A Dioxus single-page app for the course platform: catalog, cart,
//! enrollments, live-session scheduling, and role-gated admin rosters.
//! Everything runs in the browser against an in-memory directory seeded
//! with demo data, so the full flow works without a backend.

pub mod app;
pub mod app_root;
pub mod error;

pub use app::{components, pages, routes};
pub use error::ApiError;
