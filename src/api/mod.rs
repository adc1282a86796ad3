//! HTTP API layer translating requests into domain operations.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access logging middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
