use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::client::GraphQl;
use crate::error::Result;
use crate::filter::{FilterClause, IssueFilter};
use crate::mutation::IssueUpdateBuilder;
use crate::ops::ToolReply;
use crate::resolve::{resolve_issue, resolve_state, resolve_user, Lookup, MatchMode};
use crate::responses::Connection;
use crate::types::{Issue, IssueSummary, SummaryState};

/// Largest page the search and listing operations will request, regardless
/// of the caller's limit.
pub const MAX_PAGE_SIZE: u32 = 50;

pub const NO_FIELDS_MESSAGE: &str =
    "No fields to update. Provide at least one of: title, description, priority, assignee_email";

const SUMMARY_SELECTION: &str = "\
            id
            identifier
            title
            priority
            priorityLabel
            url
            state {
                name
                type
            }
            assignee {
                name
            }
            team {
                key
                name
            }";

const SEARCH_ISSUES_QUERY: &str = r#"
query SearchIssues($term: String!, $limit: Int!) {
    searchIssues(term: $term, first: $limit) {
        nodes {
            id
            identifier
            title
            priority
            priorityLabel
            url
            state {
                name
                type
            }
            assignee {
                name
            }
            team {
                key
                name
            }
        }
    }
}
"#;

const UPDATE_STATUS_MUTATION: &str = r#"
mutation UpdateIssueStatus($issueId: String!, $stateId: String!) {
    issueUpdate(id: $issueId, input: { stateId: $stateId }) {
        success
        issue {
            id
            identifier
            title
            state {
                name
                type
            }
        }
    }
}
"#;

#[derive(Deserialize)]
struct SearchIssuesResponse {
    #[serde(rename = "searchIssues")]
    search_issues: Connection<IssueSummary>,
}

#[derive(Deserialize)]
struct ListIssuesResponse {
    issues: Connection<IssueSummary>,
}

#[derive(Serialize, Debug)]
pub struct SearchReply {
    pub issues: Vec<IssueSummary>,
}

#[derive(Deserialize)]
struct UpdateStatusResponse {
    #[serde(rename = "issueUpdate")]
    issue_update: StatusUpdate,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct StatusUpdate {
    pub success: bool,
    pub issue: Option<StatusIssue>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct StatusIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub state: SummaryState,
}

#[derive(Deserialize)]
struct UpdateFieldsResponse {
    #[serde(rename = "issueUpdate")]
    issue_update: FieldsUpdate,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct FieldsUpdate {
    pub success: bool,
    pub issue: Option<UpdatedIssue>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UpdatedIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    #[serde(rename = "priorityLabel", default, skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<String>,
    pub state: StateName,
    pub assignee: Option<AssigneeRef>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct StateName {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct AssigneeRef {
    pub name: String,
    pub email: Option<String>,
}

/// Sparse field updates for [`update_issue`]. `Some` means "was supplied",
/// including empty strings.
#[derive(Debug, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub assignee_email: Option<String>,
}

/// Fetch the full projection of one issue by its human-facing identifier.
pub async fn get_issue(
    client: &impl GraphQl,
    identifier: &str,
    mode: MatchMode,
) -> Result<ToolReply<Issue>> {
    match resolve_issue(client, identifier, mode).await? {
        Lookup::Hit(issue) => Ok(ToolReply::Success(issue)),
        Lookup::Miss(message) => Ok(ToolReply::error(message)),
    }
}

/// Search issues by free text, or list them through structured filters when
/// no text query is given. A text query takes over wholesale: structured
/// filters do not combine with full-text search.
pub async fn search_issues(
    client: &impl GraphQl,
    query: Option<&str>,
    filter: &IssueFilter,
    limit: u32,
) -> Result<SearchReply> {
    let limit = limit.min(MAX_PAGE_SIZE);

    if let Some(term) = query {
        let data = client
            .execute(
                SEARCH_ISSUES_QUERY,
                Some(json!({ "term": term, "limit": limit })),
            )
            .await?;
        let response: SearchIssuesResponse = serde_json::from_value(data)?;
        return Ok(SearchReply {
            issues: response.search_issues.nodes,
        });
    }

    let clause = filter.to_clause();
    let document = list_issues_document(&clause);
    let mut variables = clause.bindings;
    variables.insert("limit".to_string(), json!(limit));

    let data = client
        .execute(&document, Some(Value::Object(variables)))
        .await?;
    let response: ListIssuesResponse = serde_json::from_value(data)?;
    Ok(SearchReply {
        issues: response.issues.nodes,
    })
}

fn list_issues_document(clause: &FilterClause) -> String {
    let mut declarations = vec!["$limit: Int!"];
    declarations.extend_from_slice(&clause.declarations);
    format!(
        "query ListIssues({}) {{\n    issues(first: $limit{}) {{\n        nodes {{\n{}\n        }}\n    }}\n}}",
        declarations.join(", "),
        clause.fragment,
        SUMMARY_SELECTION,
    )
}

/// Move an issue to the named workflow state of its own team. The chain is
/// identifier -> team -> state; any miss aborts before the mutation.
pub async fn update_issue_status(
    client: &impl GraphQl,
    identifier: &str,
    state_name: &str,
    mode: MatchMode,
) -> Result<ToolReply<StatusUpdate>> {
    let issue = match resolve_issue(client, identifier, mode).await? {
        Lookup::Hit(issue) => issue,
        Lookup::Miss(message) => return Ok(ToolReply::error(message)),
    };

    let state = match resolve_state(client, &issue.team.id, state_name).await? {
        Lookup::Hit(state) => state,
        Lookup::Miss(message) => return Ok(ToolReply::error(message)),
    };

    let data = client
        .execute(
            UPDATE_STATUS_MUTATION,
            Some(json!({ "issueId": issue.id, "stateId": state.id })),
        )
        .await?;
    let response: UpdateStatusResponse = serde_json::from_value(data)?;
    Ok(ToolReply::Success(response.issue_update))
}

/// Apply a sparse field update. The composed mutation mentions only the
/// supplied fields; with nothing supplied the operation fails before any
/// mutation request.
pub async fn update_issue(
    client: &impl GraphQl,
    identifier: &str,
    update: IssueUpdate,
    mode: MatchMode,
) -> Result<ToolReply<FieldsUpdate>> {
    let issue = match resolve_issue(client, identifier, mode).await? {
        Lookup::Hit(issue) => issue,
        Lookup::Miss(message) => return Ok(ToolReply::error(message)),
    };

    let mut builder = IssueUpdateBuilder::new(issue.id);
    if let Some(title) = update.title {
        builder.title(title);
    }
    if let Some(description) = update.description {
        builder.description(description);
    }
    if let Some(priority) = update.priority {
        builder.priority(priority);
    }
    if let Some(email) = update.assignee_email {
        match resolve_user(client, &email).await? {
            Lookup::Hit(user) => builder.assignee_id(user.id),
            Lookup::Miss(message) => return Ok(ToolReply::error(message)),
        }
    }

    let Some(mutation) = builder.build() else {
        return Ok(ToolReply::error(NO_FIELDS_MESSAGE));
    };

    let data = client
        .execute(&mutation.document, Some(mutation.variables))
        .await?;
    let response: UpdateFieldsResponse = serde_json::from_value(data)?;
    Ok(ToolReply::Success(response.issue_update))
}
