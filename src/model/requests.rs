/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::config::Credentials;
use serde::Serialize;

/// Form body of the OAuth2 password grant
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    /// Grant type, always "password"
    pub grant_type: &'a str,
    /// Consumer key of the connected app
    pub client_id: &'a str,
    /// Consumer secret of the connected app
    pub client_secret: &'a str,
    /// Username of the integration user
    pub username: &'a str,
    /// Password with the security token appended, no delimiter in between
    pub password: String,
}

impl<'a> TokenRequest<'a> {
    /// Builds the password grant body from the configured credentials.
    ///
    /// The platform expects the security token appended directly to the
    /// password; an empty token leaves the password untouched.
    pub fn password_grant(credentials: &'a Credentials) -> Self {
        Self {
            grant_type: "password",
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            username: &credentials.username,
            password: format!("{}{}", credentials.password, credentials.security_token),
        }
    }
}

/// Single-parameter query string used by the query and search endpoints
#[derive(Debug, Clone, Serialize)]
pub struct QueryParams<'a> {
    /// SOQL or SOSL statement
    pub q: &'a str,
}
