//! tc-core: stable foundation for the topology calculator.
//!
//! Contains:
//! - numeric (Real, finiteness check, incidence classification)
//! - parse (lenient coercion of user-typed numbers)
//! - ids (compact 1-based IDs for nodes and branches)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod parse;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use ids::*;
pub use numeric::*;
pub use parse::{parse_dimension, parse_lenient};
