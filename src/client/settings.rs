use std::collections::HashMap;

use serde::Deserialize;

/// Host-supplied configuration: where the query service lives, how to open a
/// connection on it, and the one query string this activity will run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub url: String,
    pub ucs_connection_id: String,
    pub ucs_connection_token: String,
    pub connector_name: String,
    pub connector_props: HashMap<String, String>,
    pub query: String,
}
