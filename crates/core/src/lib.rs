//! # HealthHelp Core
//!
//! Serialization layer for the HealthHelp emergency-response backend.
//!
//! This crate turns persisted records into transmittable representations and validates
//! inbound data:
//! - one mapper per entity ([`serializers`]), all implementing [`Represent`]
//! - absolute URLs for uploaded documents and images ([`context`])
//! - type/presence checks plus the hospital bed-capacity rule ([`validation`])
//!
//! **No API concerns**: routing, HTTP servers and request parsing belong in `api-rest`.
//! Persistence is owned by the caller; records arrive fully loaded.

pub mod config;
pub mod constants;
pub mod context;
mod error;
pub mod records;
pub mod serializers;
pub mod validation;

pub use config::CoreConfig;
pub use context::{BuildAbsoluteUri, MappingContext, RequestContext};
pub use error::{HealthHelpError, HealthHelpResult};
pub use healthhelp_types::FileRef;
pub use serializers::{represent_many, to_mapping, Represent};
pub use validation::{parse_input, Validate};
