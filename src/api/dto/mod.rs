//! Data Transfer Objects for request/response serialization.

pub mod expand;
pub mod shorten;

pub use expand::{ExpandRequest, ExpandResponse};
pub use shorten::{ShortenRequest, ShortenResponse};
