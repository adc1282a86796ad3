//! Business logic services for the application layer.

pub mod expander_service;
pub mod shortener_service;

pub use expander_service::{ExpandError, ExpanderService};
pub use shortener_service::{ShortenError, ShortenerService};
