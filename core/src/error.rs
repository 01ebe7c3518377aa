//! Error types for the Roblox API client.
//!
//! # Design
//! Each step of an operation fails with its own variant: the transport, the
//! status check, the JSON decode, request encoding, argument validation, and
//! the "expected one entity, got none" case. A 404 from the remote is a plain
//! `HttpError`; `NotFound` is reserved for empty result sets.

use thiserror::Error;

/// Errors returned by every service operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport failed: {0}")]
    TransportError(String),

    /// The server answered with a status other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// An argument was rejected before any request was sent.
    #[error("invalid argument: {0}")]
    ValidationError(String),

    /// The response was well-formed but held no matching entity.
    #[error("resource not found")]
    NotFound,
}
