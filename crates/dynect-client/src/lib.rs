//! HTTP session for the DynECT DNS management API.
//!
//! This crate provides the [`Session`] that authenticates against the service
//! and the resource accessors built on top of it.
//!
//! ```rust,no_run
//! use dynect_client::{Credentials, RecordKind, RecordRequest, Rdata, Session};
//!
//! # async fn run() -> dynect_client::Result<()> {
//! let session = Session::new()?;
//! session.connect(&Credentials::from_env()?).await?;
//!
//! session
//!     .records()
//!     .add(RecordKind::A, "example.com", "www.example.com", &RecordRequest::new(Rdata::a("192.0.2.10")))
//!     .await?;
//! session.zones().publish("example.com").await?;
//!
//! session.disconnect().await?;
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/dynect-client/0.3.0")]

mod config;
mod session;
mod transport;
pub mod api;

pub use config::*;
pub use dynect_core::*;
pub use session::{Session, SessionBuilder};
pub use transport::{HttpRequest, ReqwestTransport, Transport};
