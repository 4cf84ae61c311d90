//! # API Shared
//!
//! Transport-level types and services shared by the HealthHelp API crates.
//!
//! Contains:
//! - `HealthService` and its `HealthRes` response
//!
//! Used by `api-rest` and the `healthhelp-run` binary.

pub mod health;

pub use health::{HealthRes, HealthService};
