use serde::{Deserialize, Serialize};

use crate::client::GraphQl;
use crate::error::Result;
use crate::responses::{connection_nodes, Connection};
use crate::types::WorkflowState;

const LIST_TEAMS_QUERY: &str = r#"
query ListTeams {
    teams {
        nodes {
            id
            name
            key
            states {
                nodes {
                    id
                    name
                    type
                    position
                }
            }
        }
    }
}
"#;

#[derive(Deserialize)]
struct TeamsResponse {
    teams: Connection<TeamWithStates>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TeamWithStates {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(deserialize_with = "connection_nodes")]
    pub states: Vec<WorkflowState>,
}

#[derive(Serialize, Debug)]
pub struct TeamsReply {
    pub teams: Vec<TeamWithStates>,
}

/// List every team with its workflow states. No filtering or pagination
/// control; the remote default page applies.
pub async fn list_teams(client: &impl GraphQl) -> Result<TeamsReply> {
    let data = client.execute(LIST_TEAMS_QUERY, None).await?;
    let response: TeamsResponse = serde_json::from_value(data)?;
    Ok(TeamsReply {
        teams: response.teams.nodes,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::fake::FakeTransport;

    #[tokio::test]
    async fn teams_come_back_with_flattened_states() {
        let client = FakeTransport::replying(vec![json!({ "teams": { "nodes": [
            {
                "id": "team-1",
                "key": "SRE",
                "name": "Site Reliability",
                "states": { "nodes": [
                    { "id": "state-0", "name": "Todo", "type": "unstarted", "position": 0.0 },
                    { "id": "state-1", "name": "Done", "type": "completed", "position": 1.0 }
                ] }
            }
        ] } })]);

        let reply = list_teams(&client).await.unwrap();
        assert_eq!(reply.teams.len(), 1);
        let team = &reply.teams[0];
        assert_eq!(team.key, "SRE");
        assert_eq!(team.states.len(), 2);
        assert_eq!(team.states[1].name, "Done");
        assert_eq!(team.states[1].position, Some(1.0));
    }
}
