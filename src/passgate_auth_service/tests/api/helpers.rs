use passgate_adapters::{
    auth_validation::{JwtAuthConfig, JwtTokenService},
    config::test,
    hashing::Argon2PasswordHasher,
    persistence::SqliteUserStore,
};
use passgate_auth_service::{AuthService, configure_sqlite};
use secrecy::Secret;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const TOKEN_TTL_IN_SECONDS: i64 = 600;

#[derive(Clone)]
pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub jwt_config: JwtAuthConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = configure_sqlite(test::DATABASE_URL).await.unwrap();
        let jwt_config = JwtAuthConfig {
            jwt_secret: Secret::from(Uuid::new_v4().to_string()),
            token_ttl_in_seconds: TOKEN_TTL_IN_SECONDS,
        };

        let service = AuthService::new(
            SqliteUserStore::new(pool),
            Argon2PasswordHasher::default(),
            JwtTokenService::new(jwt_config.clone()).unwrap(),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            jwt_config,
        }
    }

    pub fn token_service(&self) -> JwtTokenService {
        JwtTokenService::new(self.jwt_config.clone()).unwrap()
    }

    pub fn token_service_with_ttl(&self, ttl: i64) -> JwtTokenService {
        JwtTokenService::new(JwtAuthConfig {
            token_ttl_in_seconds: ttl,
            ..self.jwt_config.clone()
        })
        .unwrap()
    }

    pub async fn get_root(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_register<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.post_json("/auth/register", body).await
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.post_json("/auth/login", body).await
    }

    pub async fn post_verify_token<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.post_json("/auth/verify-token", body).await
    }

    pub async fn get_me(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/auth/me", &self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    async fn post_json<Body: Serialize>(&self, path: &str, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn credentials(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn error_message(response: reqwest::Response) -> String {
    response
        .json::<passgate_adapters::http::routes::ErrorResponse>()
        .await
        .expect("Could not deserialize response body to ErrorResponse")
        .error
}
