//! Shared GraphQL response plumbing used across operations.

use serde::{Deserialize, Deserializer};

/// GraphQL connections wrap their items in `{ "nodes": [...] }`.
#[derive(Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

/// Flatten a connection to its nodes while deserializing, so callers never
/// see the `nodes` nesting.
pub fn connection_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Connection::deserialize(deserializer).map(|connection| connection.nodes)
}
