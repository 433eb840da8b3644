/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! Authentication module for the Salesforce API
//!
//! Performs the OAuth2 password grant and owns the resulting session. The
//! session is replaced wholesale on every successful login; there is no
//! refresh and no expiry tracking.

use crate::config::Config;
use crate::constants::{CONTENT_TYPE_FORM, OAUTH_TOKEN_PATH, USER_AGENT};
use crate::error::AuthError;
use crate::model::auth::TokenResponse;
use crate::model::http::{endpoint_url, make_http_request};
use crate::model::requests::TokenRequest;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Authentication manager for the Salesforce API
///
/// Handles the password grant against the token endpoint and stores the
/// decoded token response for the client to read. Login is idempotent and
/// re-runnable; each success overwrites the previous session.
pub struct Auth {
    config: Arc<Config>,
    http_client: Client,
    session: Arc<RwLock<Option<TokenResponse>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Performs the OAuth2 password grant against the token endpoint.
    ///
    /// The request body carries `grant_type=password`, the client
    /// credentials, the username, and the password with the security token
    /// appended. No bearer token is attached.
    ///
    /// A transport failure or an undecodable body funnels into the same
    /// error path as a rejected grant, with empty remote fields.
    ///
    /// # Returns
    /// * `Ok(TokenResponse)` - The new session, already stored
    /// * `Err(AuthError)` - If the endpoint did not return a usable
    ///   access token
    pub async fn login(&self) -> Result<TokenResponse, AuthError> {
        let url = endpoint_url(&self.config.rest_api.base_url, OAUTH_TOKEN_PATH);
        let request = TokenRequest::password_grant(&self.config.credentials);

        let data = match serde_urlencoded::to_string(&request) {
            Ok(data) => data,
            Err(e) => {
                error!("failed to encode token request: {e}");
                return Err(AuthError::new("", ""));
            }
        };

        debug!("requesting password grant for {}", request.username);

        let headers = vec![
            ("Content-Type", CONTENT_TYPE_FORM.to_string()),
            ("Content-Length", data.len().to_string()),
        ];

        let body = match make_http_request(&self.http_client, Method::POST, &url, headers, Some(data))
            .await
        {
            Ok(response) => response.json::<Value>().await.unwrap_or_else(|e| {
                error!("token endpoint returned an undecodable body: {e}");
                Value::Null
            }),
            Err(e) => {
                error!("token request failed: {e}");
                Value::Null
            }
        };

        let token = TokenResponse::from_exchange(body)?;

        let mut session = self.session.write().await;
        *session = Some(token.clone());

        info!("authenticated as {}", self.config.credentials.username);
        Ok(token)
    }

    /// Returns a snapshot of the current session, if any
    pub async fn session(&self) -> Option<TokenResponse> {
        self.session.read().await.clone()
    }

    /// Returns the current access token, or an empty string before the first
    /// successful login. Callers attach it without any pre-check.
    pub async fn access_token(&self) -> String {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_default()
    }
}
