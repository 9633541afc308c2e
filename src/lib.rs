//! Linear issue operations over GraphQL, shaped for agent tool-calling.
//!
//! The operations in [`ops`] are generic over the [`client::GraphQl`] seam
//! and return either a typed payload or a structured `{error}` value;
//! transport and GraphQL-level failures propagate as [`error::LinearError`].

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod mutation;
pub mod ops;
pub mod resolve;
pub mod responses;
pub mod types;

#[cfg(test)]
pub(crate) mod testkit;

pub use client::{GraphQl, LinearClient};
pub use config::Config;
pub use error::{LinearError, Result};
