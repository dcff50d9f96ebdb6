use std::{net::SocketAddr, path::Path};

use embassy::environment;
use embassy_config::{Config, DEFAULT_CONFIG_PATH};
use embassy_demo::{
    contact::{
        BOT_JSON, EMBASSY_NAME, JANE_FORM_AR, JANE_JSON, JANE_MULTIPART,
        JANE_MULTIPART_CONTENT_TYPE, RECIPIENT, SENDER_ADDRESS,
    },
    CLIENT_KEY1, CLIENT_KEY2,
};
use embassy_testing::resend::ResendServer;
use pretty_assertions::assert_eq;
use reqwest::{header, redirect, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const API_KEY: &str = "re_test_key";

struct TestServer {
    addr: SocketAddr,
    resend: ResendServer,
    client: reqwest::Client,
}

impl TestServer {
    async fn spawn(api_key: Option<&str>) -> Self {
        let resend = ResendServer::spawn(API_KEY).await.unwrap();

        let mut config = load_config(api_key);
        config.email.endpoint_override = Some(resend.endpoint().clone());

        let server = environment::rest_server(&config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(server.serve_with_listener(listener));

        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            addr,
            resend,
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn post_json(&self, client_key: &str, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.url("/api/contact"))
            .header("X-Forwarded-For", client_key)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }
}

fn load_config(api_key: Option<&str>) -> Config {
    embassy_config::load_with_env(&[Path::new(DEFAULT_CONFIG_PATH)], |key| {
        (key == "RESEND_API_KEY")
            .then(|| api_key.map(Into::into))
            .flatten()
    })
    .unwrap()
}

#[tokio::test]
async fn submit_json() {
    // Arrange
    let server = TestServer::spawn(Some(API_KEY)).await;

    // Act
    let response = server.post_json(CLIENT_KEY1, JANE_JSON).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-Request-Id"));
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"message": "Your message has been sent successfully."})
    );

    let sent = server.resend.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, [RECIPIENT]);
    assert_eq!(sent[0].reply_to.as_deref(), Some("jane@example.com"));
    assert_eq!(sent[0].subject, "[Embassy Contact] Visa question");
    assert_eq!(sent[0].from, format!("{EMBASSY_NAME} <{SENDER_ADDRESS}>"));
    assert!(sent[0]
        .text
        .as_deref()
        .unwrap()
        .contains("Please advise on transit visa."));
}

#[tokio::test]
async fn submit_form_redirects() {
    // Arrange
    let server = TestServer::spawn(Some(API_KEY)).await;

    // Act
    let response = server
        .client
        .post(server.url("/api/contact"))
        .header("X-Forwarded-For", CLIENT_KEY1)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .body(JANE_FORM_AR)
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        "/ar/contact?contactStatus=success"
    );
    assert_eq!(server.resend.sent_emails().await.len(), 1);
}

#[tokio::test]
async fn submit_multipart() {
    // Arrange
    let server = TestServer::spawn(Some(API_KEY)).await;

    // Act
    let response = server
        .client
        .post(server.url("/api/contact"))
        .header("X-Forwarded-For", CLIENT_KEY1)
        .header(header::CONTENT_TYPE, JANE_MULTIPART_CONTENT_TYPE)
        .body(JANE_MULTIPART)
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"message": "Your message has been sent successfully."})
    );

    let sent = server.resend.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to.as_deref(), Some("jane@example.com"));
    assert_eq!(sent[0].subject, "[Embassy Contact] Visa question");
}

#[tokio::test]
async fn honeypot_is_silently_dropped() {
    // Arrange
    let server = TestServer::spawn(Some(API_KEY)).await;

    // Act
    let response = server.post_json(CLIENT_KEY1, BOT_JSON).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"message": "Your message has been sent successfully."})
    );
    assert!(server.resend.sent_emails().await.is_empty());
}

#[tokio::test]
async fn rate_limited() {
    // Arrange
    let server = TestServer::spawn(Some(API_KEY)).await;

    // Act
    let mut statuses = Vec::new();
    for _ in 0..6 {
        statuses.push(server.post_json(CLIENT_KEY1, JANE_JSON).await.status());
    }
    let other = server.post_json(CLIENT_KEY2, JANE_JSON).await;

    // Assert
    assert_eq!(
        statuses,
        [
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::TOO_MANY_REQUESTS,
        ]
    );
    assert_eq!(other.status(), StatusCode::OK);
    assert_eq!(server.resend.sent_emails().await.len(), 6);
}

#[tokio::test]
async fn not_configured() {
    // Arrange
    let server = TestServer::spawn(None).await;

    // Act
    let health = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap();
    let response = server.post_json(CLIENT_KEY1, JANE_JSON).await;

    // Assert
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(
        health.json::<Value>().await.unwrap(),
        json!({"http": true, "email": false})
    );
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(server.resend.sent_emails().await.is_empty());
}

#[tokio::test]
async fn health() {
    // Arrange
    let server = TestServer::spawn(Some(API_KEY)).await;

    // Act
    let response = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({"http": true, "email": true})
    );
}

#[tokio::test]
async fn news_archive() {
    // Arrange
    let server = TestServer::spawn(None).await;

    // Act
    let response = server
        .client
        .get(server.url("/api/news?locale=ar&page=99"))
        .send()
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let page = response.json::<Value>().await.unwrap();
    assert_eq!(page["locale"], "ar");
    assert_eq!(page["dir"], "rtl");
    assert_eq!(page["page"], 2);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
}
