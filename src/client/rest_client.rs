use std::time::Duration;

use tracing::debug;
use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::client::{ClientError, ConnectionRequest, ConnectionState, QueryResponse, Settings};
use crate::query::QueryDescription;

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(20);

/// An established connection on the query service. The token rides along on
/// every query request.
#[derive(Debug, Clone, Default)]
pub struct Connection {
    pub id: String,
    pub token: String,
}

/// Thin HTTP client for the query service: open a connection, run translated
/// queries against it.
#[derive(Debug, Clone)]
pub struct YukonClient {
    http: reqwest::Client,
    base_url: Url,
}

impl YukonClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        if base_url.is_empty() {
            return Err(ClientError::MissingSetting("url"));
        }

        let base_url = Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(RESPONSE_TIMEOUT).build()?;

        Ok(Self { http, base_url })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        Self::new(&settings.url)
    }

    /// Opens a connection as configured: brokered through UCS when a UCS
    /// connection id is present, natively through the connector otherwise.
    pub async fn connect(&self, settings: &Settings) -> Result<Connection, ClientError> {
        if !settings.ucs_connection_id.is_empty() {
            return self.connect_via_ucs(settings);
        }
        self.connect_native(settings).await
    }

    async fn connect_native(&self, settings: &Settings) -> Result<Connection, ClientError> {
        if settings.connector_name.is_empty() {
            return Err(ClientError::MissingSetting("connectorName"));
        }

        let request = ConnectionRequest {
            connector_name: settings.connector_name.clone(),
            connection_props: settings.connector_props.clone(),
        };

        let uri = format!("{}/connections", self.base());
        debug!(%uri, connector = %settings.connector_name, "opening connection");

        let response = self.http.post(&uri).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::BadStatus(response.status()));
        }

        let state: ConnectionState = response.json().await?;
        if !state.is_connected {
            let reason = if state.error.is_empty() {
                "connection failed".to_string()
            } else {
                state.error
            };
            return Err(ClientError::ConnectionRefused(reason));
        }

        debug!(id = %state.id, "connection established");
        Ok(Connection { id: state.id, token: state.token })
    }

    // Token-brokered connections are not served by the service yet; only the
    // settings contract is honored.
    fn connect_via_ucs(&self, settings: &Settings) -> Result<Connection, ClientError> {
        if settings.ucs_connection_token.is_empty() {
            return Err(ClientError::MissingSetting("ucsConnectionToken"));
        }

        Ok(Connection::default())
    }

    /// Runs one translated query and returns the raw result page.
    pub async fn execute(
        &self,
        connection: &Connection,
        description: &QueryDescription,
    ) -> Result<QueryResponse, ClientError> {
        let uri = self.query_url(&connection.id, description)?;
        debug!(%uri, "executing query");

        let response = self
            .http
            .get(uri)
            .header("Token", &connection.token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::BadStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    /// `{base}/connections/{id}/query/{table}?$select=…&…` with the table
    /// segment and every pair value percent-encoded.
    fn query_url(
        &self,
        connection_id: &str,
        description: &QueryDescription,
    ) -> Result<Url, ClientError> {
        let table: String = byte_serialize(description.table.as_bytes()).collect();

        let mut uri = format!(
            "{}/connections/{}/query/{}",
            self.base(),
            connection_id,
            table
        );

        for (i, (key, value)) in description.query_pairs().iter().enumerate() {
            uri.push(if i == 0 { '?' } else { '&' });
            uri.push_str(key);
            uri.push('=');
            uri.extend(byte_serialize(value.as_bytes()));
        }

        Ok(Url::parse(&uri)?)
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
