//! Shared type definitions for the Mergington activity sign-up board.
//!
//! The [`Activity`] record is the unit of state held by the store in
//! `mergington-core`; the payload types are the JSON bodies the API
//! returns. Every type derives `ts-rs` so the static dashboard can use
//! matching `TypeScript` definitions.
//!
//! # Modules
//!
//! - [`activity`] -- The activity record and the name-keyed catalog
//! - [`payloads`] -- Signup confirmation, error and health bodies

pub mod activity;
pub mod payloads;

pub use activity::{Activity, ActivityCatalog};
pub use payloads::{ErrorDetail, HealthResponse, SignupResponse};
