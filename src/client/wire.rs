use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body POSTed to `/connections` to open a connection.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub connector_name: String,
    pub connection_props: HashMap<String, String>,
}

/// Connection document the service answers with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionState {
    pub id: String,
    pub token: String,
    pub connector_name: String,
    pub connection_props: HashMap<String, String>,
    pub is_connected: bool,
    pub error: String,
}

/// One page of query results. `eof` and `results` are forwarded to the
/// caller untouched; pagination is their concern.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryResponse {
    pub id: String,
    pub eof: bool,
    pub results: Vec<Value>,
}
