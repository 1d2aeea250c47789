//! Mock API boundary.
//!
//! Operations are `async fn`s backed by the in-memory [`directory`] and
//! seeded from [`fixtures`]. Each call awaits a short simulated round trip
//! so the UI exercises real suspension points; swapping in an HTTP
//! transport later means replacing these bodies, not their signatures or
//! the pages that call them.

pub mod admin;
pub mod auth;
pub mod courses;
pub mod directory;
pub mod enrollments;
pub mod fixtures;
pub mod live;

/// Await a simulated network round trip. No-op off web.
pub(crate) async fn simulate_latency() {
    #[cfg(feature = "web")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(350)).await;
}
