//! GitHub adapter
//!
//! HTTP implementation of the GitHub client port.

pub mod client;

pub use client::GitHubClientImpl;
