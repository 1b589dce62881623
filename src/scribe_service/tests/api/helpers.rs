use reqwest::{Client, Response};
use scribe_adapters::{
    Argon2Hasher, HashMapResetTokenStore, InMemoryCollection, InMemoryDatabase, MockEmailClient,
    ResetEmailNotifier, ResetTokenBackend,
    config::{AdminSettings, JwtSettings, constants::test},
    http::Ports,
};
use scribe_service::{DocumentPorts, ScribeService, seed_admin};
use secrecy::Secret;
use serde::Serialize;
use serde_json::{Value, json};

pub const ADMIN_EMAIL: &str = "admin@scribe.test";
pub const ADMIN_PASSWORD: &str = "admin-password";
pub const BASE_URL: &str = "http://scribe.test";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub outbox: MockEmailClient,
}

impl TestApp {
    pub async fn new() -> Self {
        let database = InMemoryDatabase::new();
        let outbox = MockEmailClient::new();

        let ports: DocumentPorts<InMemoryCollection, MockEmailClient> = DocumentPorts::build(
            &database,
            ResetTokenBackend::InMemory(HashMapResetTokenStore::new()),
            Argon2Hasher::new(1024, 1, 1),
            &jwt_settings(),
            ResetEmailNotifier::new(outbox.clone(), BASE_URL),
        )
        .await
        .expect("Failed to build ports");

        assert!(ports.users_were_empty());
        seed_admin(ports.users(), ports.hasher(), &admin_settings())
            .await
            .expect("Failed to seed the administrator");

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind a random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move { ScribeService::new(ports).run(listener, &[]).await });

        Self {
            address,
            http_client: Client::new(),
            outbox,
        }
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}{path}", self.address))
            .json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B, token: &str) -> Response {
        self.http_client
            .put(format!("{}{path}", self.address))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{path}", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Response {
        let mut request = self.http_client.delete(format!("{}{path}", self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post("/login", &json!({ "email": email, "password": password }), None)
            .await
    }

    /// Access and refresh token of a successful login.
    pub async fn tokens_for(&self, email: &str, password: &str) -> (String, String) {
        let response = self.login(email, password).await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        (
            body["access_token"].as_str().unwrap().to_owned(),
            body["refresh_token"].as_str().unwrap().to_owned(),
        )
    }

    pub async fn admin_token(&self) -> String {
        self.tokens_for(ADMIN_EMAIL, ADMIN_PASSWORD).await.0
    }

    /// Registers a member through the admin route and returns its JSON.
    pub async fn create_member(&self, email: &str, password: &str) -> Value {
        let admin = self.admin_token().await;
        let response = self
            .post("/users", &member_body(email, password), Some(&admin))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response.json().await.unwrap()
    }
}

pub fn member_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "password": password,
        "telegram_username": format!("@{}", email.split('@').next().unwrap_or_default()),
        "first_name": "Grace",
        "last_name": "Hopper",
        "phone_number": phone_number_for(email),
    })
}

/// A phone number derived from the email, so every member's is distinct.
pub fn phone_number_for(email: &str) -> String {
    let digits = email
        .bytes()
        .fold(0u64, |acc, b| (acc * 31 + u64::from(b)) % 10_000_000);
    format!("+1555{digits:07}")
}

/// Path and query of the reset link in a sent email, as the recipient would follow it.
pub fn reset_link_path(content: &str) -> String {
    let start = content
        .find("/reset-password?")
        .expect("reset link missing from email");
    content[start..]
        .chars()
        .take_while(|c| !matches!(c, '"' | '<' | ' ' | '\n'))
        .collect()
}

/// Pulls a query parameter out of the reset link in a sent email.
pub fn link_parameter(content: &str, name: &str) -> String {
    let marker = format!("{name}=");
    let start = content.find(&marker).expect("parameter missing from link") + marker.len();
    content[start..]
        .chars()
        .take_while(|c| !matches!(c, '&' | '"' | '<' | ' ' | '\n'))
        .collect()
}

fn jwt_settings() -> JwtSettings {
    JwtSettings {
        secret: Secret::new("integration-test-secret".to_owned()),
        issuer: "scribe".to_owned(),
        access_ttl_in_seconds: 60,
        refresh_ttl_in_seconds: 120,
    }
}

fn admin_settings() -> AdminSettings {
    AdminSettings {
        email: ADMIN_EMAIL.to_owned(),
        password: Secret::new(ADMIN_PASSWORD.to_owned()),
        telegram_username: "@admin".to_owned(),
        phone_number: "+15550000".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    }
}
