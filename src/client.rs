use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LinearError, Result};

const API_ENDPOINT: &str = "https://api.linear.app/graphql";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam over "execute a GraphQL document with variables, get the `data`
/// subtree back". Operations are generic over this so they run against a
/// recording fake in tests.
#[allow(async_fn_in_trait)]
pub trait GraphQl {
    async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value>;
}

pub struct LinearClient {
    http: Client,
    api_key: String,
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize, Debug)]
struct GraphQlErrorEntry {
    message: String,
}

impl LinearClient {
    pub fn new(api_key: String) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, api_key })
    }
}

impl GraphQl for LinearClient {
    async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .http
            .post(API_ENDPOINT)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LinearError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body: GraphQlResponse = response.json().await?;

        // A 2xx response can still carry request-level failures.
        if let Some(errors) = body.errors {
            return Err(LinearError::GraphQl {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        body.data.ok_or(LinearError::EmptyResponse)
    }
}
