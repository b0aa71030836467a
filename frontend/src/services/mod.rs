//! Backend services.
//!
//! This module provides services for communicating with the extraction
//! service:
//!
//! # Services
//!
//! - [`api`] - Upload, status and image endpoints
//! - [`poll`] - Status polling loop with a cancellation handle

pub mod api;
pub mod poll;

pub use api::*;
pub use poll::*;
