/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::constants::DEFAULT_TIMEOUT_SECS;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Salesforce API
pub struct Credentials {
    /// Consumer key of the connected app
    pub client_id: String,
    /// Consumer secret of the connected app
    pub client_secret: String,
    /// Username of the integration user
    pub username: String,
    /// Password of the integration user
    pub password: String,
    /// Security token issued for the user, appended to the password during
    /// the token exchange. May be empty for orgs that waive it.
    pub security_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Salesforce API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the org, e.g. `https://mydomain.my.salesforce.com`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, loading a `.env`
    /// file first when one is present.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("SF_USERNAME", String::from("default_username"));
        let password = get_env_or_default("SF_PASSWORD", String::from("default_password"));
        let client_id = get_env_or_default("SF_CLIENT_ID", String::from("default_client_id"));
        let client_secret =
            get_env_or_default("SF_CLIENT_SECRET", String::from("default_client_secret"));

        // Check if we are using default values
        if username == "default_username" {
            error!("SF_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("SF_PASSWORD not found in environment variables or .env file");
        }
        if client_id == "default_client_id" {
            error!("SF_CLIENT_ID not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
                username,
                password,
                security_token: get_env_or_default("SF_SECURITY_TOKEN", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SF_BASE_URL",
                    String::from("https://login.salesforce.com"),
                ),
                timeout: get_env_or_default("SF_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit values.
    ///
    /// Every value is stored verbatim: nothing is trimmed, validated or
    /// normalized, not even the base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the org
    /// * `client_id` - Consumer key of the connected app
    /// * `client_secret` - Consumer secret of the connected app
    /// * `username` - Username of the integration user
    /// * `password` - Password of the integration user
    /// * `security_token` - Security token for the user, may be empty
    pub fn with_credentials(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        security_token: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
                username: username.into(),
                password: password.into(),
                security_token: security_token.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}

/// Gets an environment variable or returns a default value if not found or cannot be parsed
fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}
