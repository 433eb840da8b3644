use mockito::Matcher;
use sf_client::prelude::*;

fn test_config(base_url: &str) -> Config {
    Config::with_credentials(
        base_url,
        "client-id",
        "client-secret",
        "user@example.com",
        "hunter2",
        "TOKEN123",
    )
}

const TOKEN_BODY: &str = r#"{
    "access_token": "00Dxx0000001gPL!AR8AQP",
    "instance_url": "https://example.my.salesforce.com",
    "id": "https://login.salesforce.com/id/00Dxx0000001gPLEAY/005xx000001Sv6AAAS",
    "token_type": "Bearer",
    "issued_at": "1632494983789",
    "signature": "SSSbLO/gBhmmyNUvN18ODBDFYHzakxOMgqYtu+hDPsc="
}"#;

#[tokio::test]
async fn authenticate_stores_access_token() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/services/oauth2/token")
        .match_header("content-type", CONTENT_TYPE_FORM)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "password".into()),
            Matcher::UrlEncoded("client_id".into(), "client-id".into()),
            Matcher::UrlEncoded("client_secret".into(), "client-secret".into()),
            Matcher::UrlEncoded("username".into(), "user@example.com".into()),
            // security token appended to the password, no delimiter
            Matcher::UrlEncoded("password".into(), "hunter2TOKEN123".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TOKEN_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server.url()));
    assert!(client.session().await.is_none());
    assert_eq!(client.auth().access_token().await, "");

    let token = client.authenticate().await.expect("authentication");
    assert_eq!(token.access_token, "00Dxx0000001gPL!AR8AQP");
    assert_eq!(token.token_type.as_deref(), Some("Bearer"));

    let session = client.session().await.expect("session");
    assert_eq!(session.access_token, "00Dxx0000001gPL!AR8AQP");
    assert_eq!(client.auth().access_token().await, "00Dxx0000001gPL!AR8AQP");
    assert_eq!(
        session.instance_url.as_deref(),
        Some("https://example.my.salesforce.com")
    );

    mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_without_bearer_header() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/services/oauth2/token")
        .match_header("authorization", Matcher::Missing)
        .with_body(TOKEN_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server.url()));
    client.authenticate().await.expect("authentication");

    mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_surfaces_remote_error() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/services/oauth2/token")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_grant","error_description":"bad creds"}"#)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server.url()));
    let err = client.authenticate().await.expect_err("rejected grant");

    assert_eq!(err.error, "invalid_grant");
    assert_eq!(err.error_description, "bad creds");
    let message = err.to_string();
    assert!(message.contains("invalid_grant"));
    assert!(message.contains("bad creds"));

    // A failed grant leaves no session behind.
    assert!(client.session().await.is_none());
}

#[tokio::test]
async fn authenticate_rejects_empty_access_token() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/services/oauth2/token")
        .with_body(r#"{"access_token":""}"#)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server.url()));
    let err = client.authenticate().await.expect_err("empty token");
    assert_eq!(err.error, "");
    assert_eq!(err.error_description, "");
}

#[tokio::test]
async fn authenticate_turns_transport_failure_into_auth_error() {
    setup_logger();
    // Bind and drop a port so the request fails with ECONNREFUSED.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new_lazy(test_config(&format!("http://{addr}")));
    let err = client.authenticate().await.expect_err("dead endpoint");

    assert_eq!(err, AuthError::new("", ""));
    assert!(err.to_string().contains("failed to authenticate"));
}

#[tokio::test]
async fn reauthentication_overwrites_session() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    let first = server
        .mock("POST", "/services/oauth2/token")
        .with_body(r#"{"access_token":"TOKEN_A","token_type":"Bearer"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server.url()));
    client.authenticate().await.expect("first authentication");
    assert_eq!(client.session().await.unwrap().access_token, "TOKEN_A");

    first.assert_async().await;
    first.remove_async().await;

    let second = server
        .mock("POST", "/services/oauth2/token")
        .with_body(r#"{"access_token":"TOKEN_B","token_type":"Bearer"}"#)
        .expect(1)
        .create_async()
        .await;

    client.authenticate().await.expect("second authentication");
    assert_eq!(client.session().await.unwrap().access_token, "TOKEN_B");
    second.assert_async().await;

    // Subsequent authenticated calls carry the newest token.
    let query = server
        .mock("GET", "/services/data/v56.0/query")
        .match_query(Matcher::UrlEncoded("q".into(), "SELECT Id FROM Contact".into()))
        .match_header("authorization", "Bearer TOKEN_B")
        .with_body(r#"{"totalSize":0,"done":true,"records":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let result = client.query("SELECT Id FROM Contact").await;
    assert!(result.is_some());
    query.assert_async().await;
}

#[tokio::test]
async fn new_authenticates_immediately() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/services/oauth2/token")
        .with_body(TOKEN_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(test_config(&server.url()))
        .await
        .expect("eager construction");
    assert!(client.session().await.is_some());

    mock.assert_async().await;
}

#[tokio::test]
async fn new_propagates_authentication_failure() {
    setup_logger();
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/services/oauth2/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_client_id","error_description":"client identifier invalid"}"#)
        .create_async()
        .await;

    let err = Client::new(test_config(&server.url()))
        .await
        .err()
        .expect("construction fails");
    assert_eq!(err.error, "invalid_client_id");
}
