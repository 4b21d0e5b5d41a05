//! Guardian API interaction module
//!
//! Core functionality for talking to the Guardian data protection service:
//! authentication against the identity service, the HTTP transport, and the
//! top-level client that owns one manager per collection.
//!
//! # Module Structure
//!
//! - [`auth`] - identity service token acquisition and caching
//! - [`http`] - HTTP transport for REST API calls
//! - [`client`] - main client wiring managers to the transport

pub mod auth;
pub mod client;
pub mod http;

pub use client::ApiClient;
