//! Issue tracker API client module.
//!
//! Thin typed accessor over the tracker's HTTP surface: list/get/create/update
//! issues, list labels, list/create comments. Authentication via the
//! `GITHUB_TOKEN` environment variable.

mod client;
pub(crate) mod error;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use client::GitHubClient;
pub use error::GitHubError;
