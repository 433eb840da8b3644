/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::error::AuthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

/// Decoded response of the OAuth2 token endpoint.
///
/// Only `access_token` is required; the remaining fields are whatever the
/// server chose to include, with unrecognized keys preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent API requests
    pub access_token: String,
    /// URL of the org the session is bound to
    pub instance_url: Option<String>,
    /// Identity URL of the authenticated user
    pub id: Option<String>,
    /// Token type (typically "Bearer")
    pub token_type: Option<String>,
    /// Issue time as epoch milliseconds, transmitted as a string
    pub issued_at: Option<String>,
    /// Signature over the id and issued_at values
    pub signature: Option<String>,
    /// Any further fields returned by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenResponse {
    /// Interprets a decoded token endpoint body.
    ///
    /// A body carrying a non-empty `access_token` becomes a session; anything
    /// else (OAuth error payload, null from a failed round trip, unexpected
    /// shape) becomes an [`AuthError`] with the remote `error` and
    /// `error_description` fields, empty when absent.
    ///
    /// # Arguments
    /// * `body` - Decoded JSON body of the token endpoint response
    pub fn from_exchange(body: Value) -> Result<Self, AuthError> {
        let usable = body
            .get("access_token")
            .and_then(Value::as_str)
            .is_some_and(|token| !token.is_empty());

        if !usable {
            return Err(AuthError::from_body(&body));
        }

        serde_json::from_value(body.clone()).map_err(|e| {
            error!("token response did not match the expected shape: {e}");
            AuthError::from_body(&body)
        })
    }

    /// Issue time of the token, when the server reported one
    pub fn issued_at_utc(&self) -> Option<DateTime<Utc>> {
        let millis = self.issued_at.as_deref()?.parse::<i64>().ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}
