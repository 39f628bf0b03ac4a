//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use banking_client::services::api::ApiClient;
use banking_client::session::SessionStorage;
use banking_client::{App, ClientConfig, OrderingPolicy};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Successful envelope around `data`.
pub fn envelope(data: Value) -> Value {
    json!({"status": "success", "success": true, "data": data})
}

/// Logical failure envelope.
pub fn failure(message: &str) -> Value {
    json!({"status": "error", "success": false, "message": message})
}

pub fn user_json() -> Value {
    json!({
        "id": "42",
        "first_name": "Ada",
        "last_name": "Obi",
        "email": "ada@example.com",
        "phone_number": "08031234567",
        "kyc_tier": 2
    })
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        api_base_url: format!("{}/api", server.uri()),
        request_timeout: Some(Duration::from_secs(5)),
        ..Default::default()
    }
}

/// App against `server`, using the real reqwest executor.
pub fn app(server: &MockServer, storage: Arc<dyn SessionStorage>) -> App {
    app_with_ordering(server, storage, OrderingPolicy::default())
}

pub fn app_with_ordering(server: &MockServer, storage: Arc<dyn SessionStorage>, ordering: OrderingPolicy) -> App {
    let config = ClientConfig {
        ordering,
        ..config_for(server)
    };
    let executor = Arc::new(ApiClient::new(&config).expect("Client should build in test"));
    App::with_parts(executor, storage, &config)
}

/// A local URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Bind should succeed in test");
    let port = listener.local_addr().expect("Listener should have an address").port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}
