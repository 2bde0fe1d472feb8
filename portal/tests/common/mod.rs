#![allow(dead_code)]
use std::{net::SocketAddr, sync::Arc, time::Duration};

use customer_portal::{
    client::HttpCustomerApi,
    models::CustomerDraft,
    web::{self, registry::FormRegistry},
    AppState,
};

/// Application state talking to the customer API at `api_base`.
pub fn portal_state(api_base: &str) -> AppState {
    let api = HttpCustomerApi::new(api_base).expect("Failed to build customer API client");
    AppState {
        api: Arc::new(api),
        forms: Arc::new(FormRegistry::new(Duration::from_secs(600))),
    }
}

/// Spin up the portal on a random port, talking to the customer API at `api_base`.
pub async fn setup_portal(api_base: &str) -> SocketAddr {
    let app = web::router(portal_state(api_base));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Build a reqwest client (reusable across requests in a test).
pub fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Open a fresh form instance and return its URL.
pub async fn open_form(client: &reqwest::Client, addr: SocketAddr) -> String {
    let resp = client
        .get(format!("http://{}/create-customer", addr))
        .send()
        .await
        .expect("Open form request failed");
    assert_eq!(resp.status(), 200, "Opening a form should land on the form page");
    resp.url().to_string()
}

/// The minimal valid customer, as the browser posts it.
pub fn valid_customer_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("customer_code", ""),
        ("name", "Acme"),
        ("customer_type", ""),
        ("division", ""),
        ("contact_name", "J Doe"),
        ("mobile_number", "9876543210"),
        ("email", "j@acme.com"),
        ("alt_mobile", ""),
        ("alt_email", ""),
        ("credit_limit", ""),
        ("address_line1", "123 Main St"),
        ("pincode", "700001"),
        ("city", "Kolkata"),
        ("state", "West Bengal"),
        ("country", "India"),
        ("gst_number", "27AABCT1234G1Z0"),
        ("action", "create"),
    ]
}

/// The JSON body the backend should receive for [`valid_customer_form`].
pub fn valid_customer_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Acme",
        "gst_number": "27AABCT1234G1Z0",
        "address_line1": "123 Main St",
        "pincode": "700001",
        "city": "Kolkata",
        "state": "West Bengal",
        "country": "India",
        "contact_name": "J Doe",
        "mobile_number": "9876543210",
        "email": "j@acme.com",
        "doc_gst_cert": false,
        "doc_pan": false,
    })
}

pub fn valid_draft() -> CustomerDraft {
    CustomerDraft {
        name: "Acme".into(),
        gst_number: "27AABCT1234G1Z0".into(),
        address_line1: "123 Main St".into(),
        pincode: "700001".into(),
        city: "Kolkata".into(),
        state: "West Bengal".into(),
        contact_name: "J Doe".into(),
        mobile_number: "9876543210".into(),
        email: "j@acme.com".into(),
        ..CustomerDraft::default()
    }
}
