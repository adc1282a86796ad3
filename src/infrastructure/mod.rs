//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - URL store implementations (in-memory and PostgreSQL)

pub mod persistence;
