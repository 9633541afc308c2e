use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::GraphQl;
use crate::error::Result;
use crate::ops::ToolReply;
use crate::resolve::{resolve_issue, Lookup, MatchMode};
use crate::types::Comment;

const CREATE_COMMENT_MUTATION: &str = r#"
mutation CreateComment($issueId: String!, $body: String!) {
    commentCreate(input: { issueId: $issueId, body: $body }) {
        success
        comment {
            id
            body
            createdAt
            user {
                name
            }
        }
    }
}
"#;

#[derive(Deserialize)]
struct CreateCommentResponse {
    #[serde(rename = "commentCreate")]
    comment_create: CommentCreated,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentCreated {
    pub success: bool,
    pub comment: Option<Comment>,
}

/// Add a markdown comment to an issue. Identifier resolution happens first;
/// a miss returns the error payload and no mutation is issued.
pub async fn add_comment(
    client: &impl GraphQl,
    identifier: &str,
    body: &str,
    mode: MatchMode,
) -> Result<ToolReply<CommentCreated>> {
    let issue = match resolve_issue(client, identifier, mode).await? {
        Lookup::Hit(issue) => issue,
        Lookup::Miss(message) => return Ok(ToolReply::error(message)),
    };

    let data = client
        .execute(
            CREATE_COMMENT_MUTATION,
            Some(json!({ "issueId": issue.id, "body": body })),
        )
        .await?;
    let response: CreateCommentResponse = serde_json::from_value(data)?;
    Ok(ToolReply::Success(response.comment_create))
}
