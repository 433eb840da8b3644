/// User agent string used in HTTP requests to identify this client to the Salesforce API
pub const USER_AGENT: &str = "sf-client/0.1.0";
/// Path of the OAuth2 token endpoint
pub const OAUTH_TOKEN_PATH: &str = "/services/oauth2/token";
/// Fixed version prefix of the data services endpoints
pub const SERVICES_DATA_PATH: &str = "/services/data/v56.0";
/// Content type for JSON request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Content type for form-urlencoded request bodies
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
