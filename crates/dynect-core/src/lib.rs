//! Core types for the DynECT DNS management API client.
//!
//! This crate provides the transport-free building blocks used across the library:
//!
//! - **Types**: record kinds, resource paths, request payloads and the response
//!   [`Envelope`]
//! - **Shaping**: the [`flatten`] and [`strip_reference`] transforms applied to
//!   decoded responses
//! - **Errors**: the [`DynectError`] taxonomy
//!
//! # Example
//!
//! ```rust
//! use dynect_core::{RecordKind, ResourcePath};
//!
//! let path = ResourcePath::record(RecordKind::A, "example.com", "www.example.com", Some("123"));
//! assert_eq!(path.to_string(), "ARecord/example.com/www.example.com/123");
//! ```

#![doc(html_root_url = "https://docs.rs/dynect-core/0.3.0")]

mod error;
pub mod types;

pub use error::{DynectError, Result};
pub use types::*;
