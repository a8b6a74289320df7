//! tc-client: client for the remote topology-computation service.
//!
//! The service receives a reduced incidence matrix and answers with a
//! spanning tree/link partition, the column order (tree branches first),
//! the reordered incidence matrix and the tie-set (B) and cut-set (C)
//! matrices. This crate serializes the request, performs the single
//! round-trip and normalizes the answer into a [`TopologyResult`] or a
//! [`ComputationError`].

pub mod config;
pub mod error;
pub mod result;
pub mod service;
pub mod wire;

pub use config::ClientConfig;
pub use error::{ComputationError, FALLBACK_MESSAGE};
pub use result::{TopologyResult, validate_partition};
pub use service::{HttpTopologyClient, TopologyService, interpret_response};
