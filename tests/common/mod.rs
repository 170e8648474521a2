use httpmock::MockServer;
use improvmx_client::Session;

/// Session pointed at a mock server, authenticated with the token "token".
pub fn session(server: &MockServer) -> Session {
    Session::builder("token")
        .base_url(server.base_url())
        .build()
        .expect("session builds without network access")
}

/// The error envelope the service sends when a call fails.
pub fn error_body() -> serde_json::Value {
    serde_json::json!({ "error": "fake error", "code": 420, "success": false })
}
