/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # sf-client
//!
//! A lightweight client for the Salesforce REST API.
//!
//! The crate covers password-grant OAuth authentication and the basic record
//! operations: SOQL query, SOSL search, create, partial update and delete.
//!
//! # Example
//! ```ignore
//! use sf_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config).await?;
//!
//! let contacts = client.query("SELECT Id, LastName FROM Contact").await;
//! ```

/// Authentication and session management
pub mod auth;
/// Salesforce REST API client
pub mod client;
/// Client configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Utility modules
pub mod utils;

/// Library version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
