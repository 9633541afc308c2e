//! Multi-step resolution: human-facing identifiers to canonical issue
//! records, state names to team-scoped state ids, emails to user ids.
//! Every resolver performs a live round-trip; nothing is memoized.

use serde::Deserialize;
use serde_json::json;

use crate::client::GraphQl;
use crate::error::Result;
use crate::responses::Connection;
use crate::types::{Issue, User, WorkflowState};

/// Domain-level lookup outcome. A `Miss` carries the user-facing message
/// and short-circuits the operation as a structured `{error}` payload;
/// infrastructure failures stay in `Result::Err` and propagate.
#[derive(Debug)]
pub enum Lookup<T> {
    Hit(T),
    Miss(String),
}

/// How identifier resolution treats a search page with no exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Fall back to the first search hit. Risky but useful when the caller
    /// pasted a slightly mangled identifier.
    #[default]
    BestEffort,
    /// Report not-found unless a result matches the identifier exactly.
    Exact,
}

// Linear has no exact lookup by identifier, so resolution goes through
// full-text search bounded to one result page.
const SEARCH_ISSUE_QUERY: &str = r#"
query GetIssue($term: String!) {
    searchIssues(term: $term, first: 1) {
        nodes {
            id
            identifier
            title
            description
            priority
            priorityLabel
            url
            createdAt
            updatedAt
            state {
                id
                name
                type
            }
            assignee {
                id
                name
                email
            }
            team {
                id
                key
                name
            }
            labels {
                nodes {
                    id
                    name
                    color
                }
            }
            project {
                id
                name
            }
            comments {
                nodes {
                    id
                    body
                    createdAt
                    user {
                        name
                    }
                }
            }
        }
    }
}
"#;

const TEAM_STATES_QUERY: &str = r#"
query GetTeamStates($teamId: String!) {
    team(id: $teamId) {
        states {
            nodes {
                id
                name
                type
            }
        }
    }
}
"#;

const FIND_USER_QUERY: &str = r#"
query FindUser($email: String!) {
    users(filter: { email: { eq: $email } }) {
        nodes {
            id
            name
            email
        }
    }
}
"#;

#[derive(Deserialize)]
struct SearchIssuesResponse {
    #[serde(rename = "searchIssues")]
    search_issues: Connection<Issue>,
}

#[derive(Deserialize)]
struct TeamStatesResponse {
    team: Option<TeamStates>,
}

#[derive(Deserialize)]
struct TeamStates {
    states: Connection<WorkflowState>,
}

#[derive(Deserialize)]
struct UsersResponse {
    users: Connection<User>,
}

/// Find the canonical issue for a human-facing identifier like `SRE-152`.
/// An exact identifier match within the page wins; otherwise the first hit
/// is returned (or a miss, in [`MatchMode::Exact`]).
pub async fn resolve_issue(
    client: &impl GraphQl,
    identifier: &str,
    mode: MatchMode,
) -> Result<Lookup<Issue>> {
    let data = client
        .execute(SEARCH_ISSUE_QUERY, Some(json!({ "term": identifier })))
        .await?;
    let response: SearchIssuesResponse = serde_json::from_value(data)?;
    let mut issues = response.search_issues.nodes;

    if issues.is_empty() {
        return Ok(Lookup::Miss(format!("Issue {identifier} not found")));
    }

    if let Some(index) = issues.iter().position(|issue| issue.identifier == identifier) {
        return Ok(Lookup::Hit(issues.swap_remove(index)));
    }

    match mode {
        MatchMode::BestEffort => Ok(Lookup::Hit(issues.swap_remove(0))),
        MatchMode::Exact => Ok(Lookup::Miss(format!("Issue {identifier} not found"))),
    }
}

/// Find a workflow state by name within one team. States are only valid in
/// the scope of the team that owns them, so the query is keyed by team id.
/// A miss enumerates every valid state name so the caller can self-correct.
pub async fn resolve_state(
    client: &impl GraphQl,
    team_id: &str,
    state_name: &str,
) -> Result<Lookup<WorkflowState>> {
    let data = client
        .execute(TEAM_STATES_QUERY, Some(json!({ "teamId": team_id })))
        .await?;
    let response: TeamStatesResponse = serde_json::from_value(data)?;
    let mut states = response
        .team
        .map(|team| team.states.nodes)
        .unwrap_or_default();

    let wanted = state_name.to_lowercase();
    if let Some(index) = states
        .iter()
        .position(|state| state.name.to_lowercase() == wanted)
    {
        return Ok(Lookup::Hit(states.swap_remove(index)));
    }

    let available = states
        .iter()
        .map(|state| state.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(Lookup::Miss(format!(
        "State '{state_name}' not found. Available states: {available}"
    )))
}

/// Find a user by email. The equality filter is the remote system's,
/// case-sensitive; emails are unique there, so the first node wins.
pub async fn resolve_user(client: &impl GraphQl, email: &str) -> Result<Lookup<User>> {
    let data = client
        .execute(FIND_USER_QUERY, Some(json!({ "email": email })))
        .await?;
    let response: UsersResponse = serde_json::from_value(data)?;
    let mut users = response.users.nodes;

    if users.is_empty() {
        return Ok(Lookup::Miss(format!(
            "User with email '{email}' not found"
        )));
    }
    Ok(Lookup::Hit(users.swap_remove(0)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::fake::FakeTransport;
    use crate::testkit::{issue_node, search_reply, states_reply};

    #[tokio::test]
    async fn exact_identifier_match_wins() {
        let client = FakeTransport::replying(vec![search_reply(vec![
            issue_node("SRE-15"),
            issue_node("SRE-152"),
        ])]);
        let lookup = resolve_issue(&client, "SRE-152", MatchMode::BestEffort)
            .await
            .unwrap();
        match lookup {
            Lookup::Hit(issue) => assert_eq!(issue.identifier, "SRE-152"),
            Lookup::Miss(message) => panic!("unexpected miss: {message}"),
        }
        assert_eq!(client.variables(0)["term"], "SRE-152");
    }

    #[tokio::test]
    async fn best_effort_falls_back_to_first_hit() {
        let client =
            FakeTransport::replying(vec![search_reply(vec![issue_node("SRE-1520")])]);
        let lookup = resolve_issue(&client, "SRE-152", MatchMode::BestEffort)
            .await
            .unwrap();
        match lookup {
            Lookup::Hit(issue) => assert_eq!(issue.identifier, "SRE-1520"),
            Lookup::Miss(message) => panic!("unexpected miss: {message}"),
        }
    }

    #[tokio::test]
    async fn exact_mode_refuses_inexact_hits() {
        let client =
            FakeTransport::replying(vec![search_reply(vec![issue_node("SRE-1520")])]);
        let lookup = resolve_issue(&client, "SRE-152", MatchMode::Exact)
            .await
            .unwrap();
        match lookup {
            Lookup::Miss(message) => assert_eq!(message, "Issue SRE-152 not found"),
            Lookup::Hit(issue) => panic!("unexpected hit: {}", issue.identifier),
        }
    }

    #[tokio::test]
    async fn empty_search_page_is_a_miss() {
        let client = FakeTransport::replying(vec![search_reply(vec![])]);
        let lookup = resolve_issue(&client, "SRE-1", MatchMode::BestEffort)
            .await
            .unwrap();
        match lookup {
            Lookup::Miss(message) => assert_eq!(message, "Issue SRE-1 not found"),
            Lookup::Hit(issue) => panic!("unexpected hit: {}", issue.identifier),
        }
    }

    #[tokio::test]
    async fn state_name_matches_case_insensitively() {
        let client = FakeTransport::replying(vec![states_reply(&["Todo", "Done"])]);
        let lookup = resolve_state(&client, "team-1", "dOnE").await.unwrap();
        match lookup {
            Lookup::Hit(state) => assert_eq!(state.name, "Done"),
            Lookup::Miss(message) => panic!("unexpected miss: {message}"),
        }
        assert_eq!(client.variables(0)["teamId"], "team-1");
    }

    #[tokio::test]
    async fn state_miss_enumerates_the_team_states() {
        let client =
            FakeTransport::replying(vec![states_reply(&["Backlog", "Todo", "In Progress"])]);
        let lookup = resolve_state(&client, "team-1", "Shipped").await.unwrap();
        match lookup {
            Lookup::Miss(message) => assert_eq!(
                message,
                "State 'Shipped' not found. Available states: Backlog, Todo, In Progress"
            ),
            Lookup::Hit(state) => panic!("unexpected hit: {}", state.name),
        }
    }

    #[tokio::test]
    async fn user_resolution_uses_first_node() {
        let client = FakeTransport::replying(vec![json!({
            "users": { "nodes": [
                { "id": "user-1", "name": "Ada", "email": "ada@example.com" }
            ] }
        })]);
        let lookup = resolve_user(&client, "ada@example.com").await.unwrap();
        match lookup {
            Lookup::Hit(user) => assert_eq!(user.id, "user-1"),
            Lookup::Miss(message) => panic!("unexpected miss: {message}"),
        }
        assert_eq!(client.variables(0)["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn unknown_email_is_a_miss() {
        let client = FakeTransport::replying(vec![json!({ "users": { "nodes": [] } })]);
        let lookup = resolve_user(&client, "ghost@example.com").await.unwrap();
        match lookup {
            Lookup::Miss(message) => {
                assert_eq!(message, "User with email 'ghost@example.com' not found")
            }
            Lookup::Hit(user) => panic!("unexpected hit: {}", user.id),
        }
    }
}
