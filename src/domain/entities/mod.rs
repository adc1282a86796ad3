//! Core domain entities representing the business data model.
//!
//! The service has a single entity: [`UrlPair`], the association between an
//! original URL and its short code. Entities are plain data structures
//! without business logic.

pub mod url_pair;

pub use url_pair::UrlPair;
