//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a clean API for HTTP
//! handlers:
//!
//! - [`services::ShortenerService`] - code generation and collision
//!   resolution
//! - [`services::ExpanderService`] - short reference resolution

pub mod services;
