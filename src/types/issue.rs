use serde::{Deserialize, Serialize};

use crate::responses::connection_nodes;

use super::{Comment, Project, Team, User};

/// Full issue projection as returned by `get_issue`. Everything is fetched
/// per call and never cached.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    #[serde(rename = "priorityLabel", default, skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub state: WorkflowState,
    pub assignee: Option<User>,
    pub team: Team,
    #[serde(default, deserialize_with = "connection_nodes")]
    pub labels: Vec<Label>,
    pub project: Option<Project>,
    #[serde(default, deserialize_with = "connection_nodes")]
    pub comments: Vec<Comment>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Workflow state scoped to the team that owns it. `position` is only
/// selected by the teams listing.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct WorkflowState {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Abbreviated projection used by issue search and listing.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IssueSummary {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub priority: i32,
    #[serde(rename = "priorityLabel", default, skip_serializing_if = "Option::is_none")]
    pub priority_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub state: SummaryState,
    pub assignee: Option<SummaryAssignee>,
    pub team: SummaryTeam,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SummaryState {
    pub name: String,
    #[serde(rename = "type")]
    pub state_type: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SummaryAssignee {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SummaryTeam {
    pub key: String,
    pub name: String,
}
