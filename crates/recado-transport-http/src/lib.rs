//! # recado-transport-http
//!
//! Streamed transport binding: a long-lived SSE channel for pushing
//! notifications to callers, a companion POST endpoint for submitting
//! request envelopes, and the session table that tracks open
//! connections.

pub mod error;
pub mod router;
pub mod server;
pub mod session;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
pub use session::{SessionId, SessionTable};
