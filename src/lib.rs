//! Rust and Python-facing client for the Taiwan Judicial Yuan judgment
//! open-data API (`https://data.judicial.gov.tw/jdg/api`).
//!
//! Public API layers:
//! - [`JudicialClient`]/[`BlockingJudicialClient`]: async and blocking clients
//!   for the `Auth`, `JList` and `JDoc` endpoints.
//! - [`ChangeBatch`], [`Document`], [`Attachment`], [`FullText`]: decoded payloads.
//! - [`ClientError`]: unified error type used by all clients.
//! - [`service_window`]: helpers for the service's nightly availability window.
//!
//! ```no_run
//! use tw_judicial::BlockingJudicialClient;
//!
//! fn main() -> Result<(), tw_judicial::ClientError> {
//!     let client = BlockingJudicialClient::from_default_server()?;
//!     let token = client.authenticate("user", "password")?;
//!     for batch in client.list_changes(&token)? {
//!         println!("{}: {} documents", batch.date, batch.list.len());
//!     }
//!     let document = client.get_document(&token, "TPBA,113,訴,501,20240808,1")?;
//!     println!("{}", document.title);
//!     Ok(())
//! }
//! ```

mod blocking_client;
mod client;
mod error;
mod models;
mod protocol;
pub mod service_window;

/// Blocking judicial API client.
pub use blocking_client::BlockingJudicialClient;
/// Async judicial API client.
pub use client::{DEFAULT_TIMEOUT, JudicialClient};
/// Error type returned by all client operations.
pub use error::ClientError;
pub use models::{Attachment, ChangeBatch, Document, FullText};
pub use protocol::DEFAULT_SERVER_URL;

#[cfg(feature = "python")]
mod python;
