use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use shared::dynamodb::Store;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub const STATUS_OK: &str = "200";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// API Gateway proxy shaped reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Response {
    pub fn ok_json(body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Self {
            status_code: STATUS_OK.to_string(),
            headers,
            body,
        }
    }
}

/// Reads the whole table once and returns it as a JSON array body.
///
/// Store failures are returned as-is; there is no error envelope.
pub async fn handle<S: Store>(store: &S, event: &Value) -> Result<Response> {
    debug!("{}", event);

    let users = store.scan_all().await?;
    let body = serde_json::to_string(&users)?;
    info!("{} user(s) retrieved, {} bytes serialized", users.len(), body.len());

    Ok(Response::ok_json(body))
}
