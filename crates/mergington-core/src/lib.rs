//! Activity store, seed catalog, and configuration for the Mergington
//! activity sign-up board.
//!
//! # Modules
//!
//! - [`store`] -- [`ActivityStore`], the lock-guarded in-memory catalog
//!   that list and signup operate on.
//! - [`seed`] -- The built-in Mergington High School catalog and seed
//!   validation.
//! - [`config`] -- Configuration loading from `mergington-config.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- [`StoreError`] returned by store mutations.

pub mod config;
pub mod error;
pub mod seed;
pub mod store;

pub use config::BoardConfig;
pub use error::StoreError;
pub use store::{ActivityStore, Enrollment};
