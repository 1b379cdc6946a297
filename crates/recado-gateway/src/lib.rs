//! # recado-gateway
//!
//! Outbound client for the messaging gateway's send-text endpoint.
//! Defines the `MessageGateway` port and the reqwest-backed adapter.
//! Every failure — transport or provider — is returned as a
//! `SendOutcome` data value; the client never propagates an error.

pub mod client;
pub mod outcome;

pub use client::{HttpGateway, MessageGateway};
pub use outcome::SendOutcome;
