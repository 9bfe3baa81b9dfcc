// Mock Payment Gateway
//
// Wraps a wiremock server mounted under an `/api` prefix so that request
// paths match what the client builds from a base URL with a path segment.

use paygate::{ClientOptions, Credentials, GatewayClient};
use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const CONSUMER_KEY: &str = "key";
pub const CONSUMER_SECRET: &str = "secret";
pub const TOKEN: &str = "tok";

/// Local stand-in for the gateway REST API
pub struct MockGateway {
    pub server: MockServer,
}

impl MockGateway {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL the client should be configured with
    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Client pointed at this server with the test credentials
    pub fn client(&self) -> GatewayClient {
        GatewayClient::new(
            self.base_url(),
            Credentials::new(CONSUMER_KEY, CONSUMER_SECRET),
        )
        .expect("client should build")
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> GatewayClient {
        GatewayClient::with_options(
            self.base_url(),
            Credentials::new(CONSUMER_KEY, CONSUMER_SECRET),
            ClientOptions {
                timeout: Some(timeout),
            },
        )
        .expect("client should build")
    }

    /// Answer `verb /api{endpoint}` with the given status and JSON body
    pub async fn respond_json(&self, verb: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", endpoint)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb /api{endpoint}` with the given status and raw text body
    pub async fn respond_text(&self, verb: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", endpoint)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Every request the server has seen so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled by default")
    }

    /// The only request the server has seen
    pub async fn single_request(&self) -> Request {
        let mut requests = self.requests().await;
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}

/// Base URL on which nothing is listening
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}
