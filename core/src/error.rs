//! Error types for the todo API client.
//!
//! # Design
//! No status code gets special treatment: every non-2xx response lands in
//! `HttpError` with the raw status and body for the diagnostic log. The
//! controller collapses all variants into a single user-facing failure.

use thiserror::Error;

use crate::controller::Ticket;

/// Errors produced while building, executing or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Misuse of the controller's request lifecycle by its host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("no request in flight for ticket {0}")]
    UnexpectedCompletion(Ticket),
}
