/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Token endpoint response model
pub mod auth;
/// HTTP request utilities shared by the client and the authenticator
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
