//! Concrete URL store implementations.
//!
//! Both backends implement [`crate::domain::repositories::UrlRepository`]
//! with equivalent observable behavior; the backend is selected at startup
//! from configuration.
//!
//! - [`MemoryUrlRepository`] - process-local, two maps under one lock
//! - [`PgUrlRepository`] - PostgreSQL table with two unique constraints

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::{ConstraintMap, PgUrlRepository};
