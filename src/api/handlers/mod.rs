//! HTTP request handlers.

pub mod expand;
pub mod shorten;

pub use expand::{expand_handler, redirect_handler};
pub use shorten::shorten_handler;
