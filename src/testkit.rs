//! Canned GraphQL `data` subtrees shared by the operation and resolver tests.

use serde_json::{json, Value};

pub(crate) fn issue_node(identifier: &str) -> Value {
    json!({
        "id": format!("uuid-{identifier}"),
        "identifier": identifier,
        "title": format!("Title of {identifier}"),
        "description": null,
        "priority": 2,
        "priorityLabel": "High",
        "url": format!("https://linear.app/issue/{identifier}"),
        "createdAt": "2026-01-05T09:00:00.000Z",
        "updatedAt": "2026-01-06T09:00:00.000Z",
        "state": { "id": "state-1", "name": "Todo", "type": "unstarted" },
        "assignee": null,
        "team": { "id": "team-1", "key": "SRE", "name": "Site Reliability" },
        "labels": { "nodes": [] },
        "project": null,
        "comments": { "nodes": [] }
    })
}

/// Like [`issue_node`], but with labels and comments attached.
pub(crate) fn annotated_issue_node(identifier: &str) -> Value {
    let mut node = issue_node(identifier);
    node["labels"] = json!({ "nodes": [
        { "id": "label-1", "name": "bug", "color": "#eb5757" },
        { "id": "label-2", "name": "ops", "color": "#5e6ad2" }
    ] });
    node["comments"] = json!({ "nodes": [
        {
            "id": "comment-1",
            "body": "rolled back the deploy",
            "createdAt": "2026-01-05T10:00:00.000Z",
            "user": { "name": "Ada" }
        }
    ] });
    node
}

pub(crate) fn search_reply(nodes: Vec<Value>) -> Value {
    json!({ "searchIssues": { "nodes": nodes } })
}

pub(crate) fn states_reply(names: &[&str]) -> Value {
    let nodes: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| json!({ "id": format!("state-{i}"), "name": name, "type": "started" }))
        .collect();
    json!({ "team": { "states": { "nodes": nodes } } })
}

pub(crate) fn summary_node(identifier: &str) -> Value {
    json!({
        "id": format!("uuid-{identifier}"),
        "identifier": identifier,
        "title": format!("Title of {identifier}"),
        "priority": 3,
        "priorityLabel": "Medium",
        "url": format!("https://linear.app/issue/{identifier}"),
        "state": { "name": "Todo", "type": "unstarted" },
        "assignee": null,
        "team": { "key": "SRE", "name": "Site Reliability" }
    })
}
