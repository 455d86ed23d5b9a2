//! Roster API Library
//!
//! This library provides the core functionality for the Roster API:
//! the user domain, the repository contract handlers depend on, and the
//! in-memory infrastructure adapter.

pub mod api;
pub mod domain;
pub mod infrastructure;
