use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Comment {
    pub id: String,
    pub body: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub user: Option<CommentAuthor>,
}

/// Only the author's display name travels downstream.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CommentAuthor {
    pub name: String,
}
