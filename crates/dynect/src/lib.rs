//! Rust client for the DynECT DNS management REST API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dynect::{Credentials, RecordKind, Session};
//!
//! #[tokio::main]
//! async fn main() -> dynect::Result<()> {
//!     let session = Session::new()?;
//!     session
//!         .connect(&Credentials::new("customer", "user", "password"))
//!         .await?;
//!
//!     // Create a zone and an address record, then publish
//!     session.zones().create("hostmaster@example.com", "example.com", 3600).await?;
//!     session.records().add_a("example.com", "www.example.com", "192.0.2.10", 0).await?;
//!     session.zones().publish("example.com").await?;
//!
//!     // Read it back
//!     for id in session.records().list(RecordKind::A, "example.com", "www.example.com").await? {
//!         let record = session
//!             .records()
//!             .get(RecordKind::A, "example.com", "www.example.com", Some(&id))
//!             .await?;
//!         println!("{id}: {:?}", record.get("address"));
//!     }
//!
//!     session.disconnect().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dynect/0.3.0")]

// Re-export core types
pub use dynect_core::*;

// Re-export client
pub use dynect_client::api;
pub use dynect_client::{
    Credentials, HttpRequest, ReqwestTransport, Session, SessionBuilder, Transport,
    AUTH_TOKEN_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
