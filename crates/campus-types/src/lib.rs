//! Shared type definitions for Campus
//!
//! This crate contains lightweight type definitions that are shared across
//! the Campus application: the role model, account and catalog DTOs, and the
//! form validation helpers. It has no UI or transport dependencies, so a
//! future server can reuse it unchanged.

pub mod auth;
pub mod catalog;
pub mod roles;
pub mod validation;

pub use roles::Role;
