//! Profile Loader
//!
//! Loads the data behind a user profile page: the user record and the
//! organizations the user belongs to, fetched concurrently.
//!
//! This crate provides:
//! - Typed user and organization models
//! - Response envelope normalization
//! - An HTTP client for the profile API behind the `ProfileApi` trait
//! - `ProfileLoader`, producing an immutable `ProfileBundle`

pub mod bundle;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod loader;
pub mod models;

pub use bundle::{format_date, Breadcrumb, ProfileBundle};
pub use client::{HttpProfileApi, ProfileApi};
pub use config::ClientConfig;
pub use envelope::Payload;
pub use error::{ConfigError, ErrorKind, LoadError, LoadResult, LOAD_FAILED_MESSAGE};
pub use loader::ProfileLoader;
pub use models::{OrganizationSummary, Status, UserProfile};
