/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/11/25
******************************************************************************/

//! # sf-client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the library.
//!
//! ## Usage
//!
//! ```rust
//! use sf_client::prelude::*;
//!
//! let config = Config::with_credentials(
//!     "https://example.my.salesforce.com",
//!     "client-id",
//!     "client-secret",
//!     "user@example.com",
//!     "password",
//!     "TOKEN",
//! );
//! let client = Client::new_lazy(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Salesforce API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// REST API client
pub use crate::client::Client;

/// Authentication manager
pub use crate::auth::Auth;

/// Decoded token endpoint response
pub use crate::model::auth::TokenResponse;

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{QueryParams, TokenRequest};

/// Response models
pub use crate::model::responses::{CreateRecordResponse, QueryResponse, SearchResponse};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use tracing::{debug, error, info, warn};
