//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; concrete implementations live
//! in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod url_repository;

pub use url_repository::{
    ORIGINAL_URL_KEY, PutOutcome, SHORTED_URL_KEY, StoreError, UrlKind, UrlRepository,
};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
