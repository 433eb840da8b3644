/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! Client for the Salesforce REST API
//!
//! This module provides a small client around the org's REST endpoints:
//! - Password-grant authentication against the OAuth2 token endpoint
//! - A generic `fetch` primitive for arbitrary paths
//! - Convenience calls for query, search, create, patch and delete
//!
//! # Example
//! ```ignore
//! use sf_client::client::Client;
//! use sf_client::config::Config;
//!
//! let config = Config::new();
//! let client = Client::new(config).await?;
//!
//! let result = client.query("SELECT Id FROM Contact").await;
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::{CONTENT_TYPE_FORM, CONTENT_TYPE_JSON, SERVICES_DATA_PATH, USER_AGENT};
use crate::error::{AppError, AuthError};
use crate::model::auth::TokenResponse;
use crate::model::http::{encode_params, endpoint_url, make_http_request};
use crate::model::requests::QueryParams;
use crate::model::responses::{CreateRecordResponse, QueryResponse, SearchResponse};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Client for the Salesforce REST API
///
/// Wraps the HTTP calls to the data services endpoints and delegates the
/// session lifecycle to [`Auth`]. Failed calls on the convenience surface
/// yield `None` rather than an error; authentication is the only operation
/// that reports failure explicitly.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client and performs initial authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AuthError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AuthError> {
        let client = Self::new_lazy(config);
        client.authenticate().await?;
        Ok(client)
    }

    /// Creates a new client without authenticating.
    ///
    /// Requests made before [`authenticate`](Self::authenticate) succeeds
    /// carry an empty bearer token; the server rejects them, this client
    /// does not.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new_lazy(config: Config) -> Self {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone()));

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Performs the OAuth2 password grant, replacing any previous session
    ///
    /// # Returns
    /// * `Ok(TokenResponse)` - The new session
    /// * `Err(AuthError)` - If the token endpoint did not return a usable
    ///   access token
    pub async fn authenticate(&self) -> Result<TokenResponse, AuthError> {
        self.auth.login().await
    }

    /// Returns a snapshot of the current session, if any
    pub async fn session(&self) -> Option<TokenResponse> {
        self.auth.session().await
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Generic request primitive with the silent-failure contract.
    ///
    /// Any failure (encoding, transport, timeout, undecodable body) is
    /// logged and swallowed; the caller receives `None` and infers failure
    /// from the absence of expected fields. See [`try_fetch`](Self::try_fetch)
    /// for the strict variant.
    ///
    /// # Arguments
    /// * `path` - Endpoint path below the base URL
    /// * `params` - Request parameters, `None` for a bodyless request
    /// * `method` - HTTP method
    /// * `content_type` - Content type; JSON encoding is selected iff it
    ///   contains "json" (case-insensitive)
    /// * `auth` - Whether to attach the bearer token
    pub async fn fetch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&B>,
        method: Method,
        content_type: &str,
        auth: bool,
    ) -> Option<T> {
        match self
            .try_fetch(path, params, method.clone(), content_type, auth)
            .await
        {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("swallowing failed {} {}: {}", method, path, e);
                None
            }
        }
    }

    /// Generic request primitive, strict variant.
    ///
    /// Builds and sends one request:
    /// - Parameters are JSON-encoded when `content_type` contains "json",
    ///   form-urlencoded otherwise.
    /// - For GET the encoded parameters are appended to the path after `?`,
    ///   whatever the encoding. A JSON blob in the query string is only
    ///   meaningful to callers who asked for it.
    /// - For every other method the encoded parameters become the body, with
    ///   an explicit Content-Length header (0 when `params` is `None`).
    /// - With `auth` the current access token is attached as
    ///   `Authorization: Bearer <token>`, empty before the first login.
    ///
    /// The response status is not inspected; the body is decoded as JSON
    /// whatever the outcome.
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded response body
    /// * `Err(AppError)` - Encoding, transport or decode failure
    pub async fn try_fetch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&B>,
        method: Method,
        content_type: &str,
        auth: bool,
    ) -> Result<T, AppError> {
        let encoded = match params {
            Some(p) => Some(encode_params(p, content_type)?),
            None => None,
        };

        let mut url = endpoint_url(&self.config.rest_api.base_url, path);
        let mut headers: Vec<(&str, String)> = vec![("Content-Type", content_type.to_string())];

        let body = if method == Method::GET {
            if let Some(data) = encoded {
                url = format!("{url}?{data}");
            }
            None
        } else {
            let data = encoded.unwrap_or_default();
            headers.push(("Content-Length", data.len().to_string()));
            Some(data)
        };

        if auth {
            // The token is empty until authenticate() succeeds; the header
            // is attached regardless, with no pre-check.
            let token = self.auth.access_token().await;
            headers.push(("Authorization", format!("Bearer {token}")));
        }

        let response = make_http_request(&self.http_client, method, &url, headers, body).await?;

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Runs a SOSL search
    ///
    /// # Arguments
    /// * `query` - SOSL statement, sent as the `q` parameter
    pub async fn search(&self, query: &str) -> Option<SearchResponse> {
        let params = QueryParams { q: query };
        self.fetch(
            &format!("{SERVICES_DATA_PATH}/search"),
            Some(&params),
            Method::GET,
            CONTENT_TYPE_FORM,
            true,
        )
        .await
    }

    /// Runs a SOQL query
    ///
    /// # Arguments
    /// * `query` - SOQL statement, sent as the `q` parameter
    pub async fn query(&self, query: &str) -> Option<QueryResponse> {
        let params = QueryParams { q: query };
        self.fetch(
            &format!("{SERVICES_DATA_PATH}/query"),
            Some(&params),
            Method::GET,
            CONTENT_TYPE_FORM,
            true,
        )
        .await
    }

    /// Creates a record
    ///
    /// # Arguments
    /// * `object` - sObject API name, e.g. "Contact"
    /// * `params` - Field values, sent as the JSON body
    pub async fn create<B: Serialize>(
        &self,
        object: &str,
        params: &B,
    ) -> Option<CreateRecordResponse> {
        self.fetch(
            &format!("{SERVICES_DATA_PATH}/sobjects/{object}"),
            Some(params),
            Method::POST,
            CONTENT_TYPE_JSON,
            true,
        )
        .await
    }

    /// Partially updates a record.
    ///
    /// The server answers 204 with an empty body on success, which the
    /// decode step turns into `None`.
    ///
    /// # Arguments
    /// * `object` - sObject API name
    /// * `id` - Record id
    /// * `params` - Field values to change, sent as the JSON body
    pub async fn patch<B: Serialize>(&self, object: &str, id: &str, params: &B) -> Option<Value> {
        self.fetch(
            &format!("{SERVICES_DATA_PATH}/sobjects/{object}/{id}"),
            Some(params),
            Method::PATCH,
            CONTENT_TYPE_JSON,
            true,
        )
        .await
    }

    /// Deletes a record. Sends no parameters and an empty body.
    ///
    /// # Arguments
    /// * `object` - sObject API name
    /// * `id` - Record id
    pub async fn delete(&self, object: &str, id: &str) -> Option<Value> {
        self.fetch::<(), Value>(
            &format!("{SERVICES_DATA_PATH}/sobjects/{object}/{id}"),
            None,
            Method::DELETE,
            CONTENT_TYPE_JSON,
            true,
        )
        .await
    }
}

impl Default for Client {
    fn default() -> Self {
        let config = Config::default();
        Self::new_lazy(config)
    }
}
