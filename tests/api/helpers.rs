use async_trait::async_trait;
use contact_submissions::configuration::get_configuration;
use contact_submissions::models::Submission;
use contact_submissions::startup::Application;
use contact_submissions::store::{InMemorySubmissionStore, SubmissionStore};
use contact_submissions::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::sync::Arc;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to install the tracing subscriber.");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to install the tracing subscriber.");
    }
});

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_path(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_submission(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/submissions", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_submission(&self, body: impl Into<String>) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/submissions", &self.address))
            .header("Content-Type", "application/json")
            .body(body.into())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn preflight(&self, path: &str, origin: &str) -> reqwest::Response {
        self.api_client
            .request(
                reqwest::Method::OPTIONS,
                &format!("{}{}", &self.address, path),
            )
            .header("Origin", origin)
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_with_origin(&self, path: &str, origin: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .header("Origin", origin)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_submissions(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/api/submissions", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_submission(&self, id: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/api/submissions/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_submission(&self, id: &str) -> reqwest::Response {
        self.api_client
            .delete(&format!("{}/api/submissions/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Creates a submission and returns the stored record.
    pub async fn create_submission(&self, body: &serde_json::Value) -> Submission {
        let response = self
            .post_submission(body)
            .await
            .error_for_status()
            .expect("Submission was rejected.");
        let created: serde_json::Value = response.json().await.unwrap();
        serde_json::from_value(created["data"].clone()).expect("Malformed submission.")
    }

    pub async fn list_submissions(&self) -> Vec<Submission> {
        self.get_submissions()
            .await
            .error_for_status()
            .expect("Listing submissions failed.")
            .json()
            .await
            .expect("Malformed submission list.")
    }
}

pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "fullname": "Jane Doe",
        "email": "jane@x.com",
        "phone": "555-1234",
        "service": "consulting",
        "message": "hello"
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(InMemorySubmissionStore::new())).await
}

pub async fn spawn_app_with_store(store: Arc<dyn SubmissionStore>) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = None;
        c
    };

    let app = Application::build(&configuration.application, store)
        .await
        .expect("Failed to build application.");
    let mut port = app.port;
    let _ = tokio::spawn(app.server.launch());
    let port = port.get().await.expect("Server failed to start.");

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        api_client: reqwest::Client::new(),
    }
}

/// A store whose backend is never reachable.
pub struct UnreachableStore;

#[async_trait]
impl SubmissionStore for UnreachableStore {
    async fn insert(&self, _: Submission) -> anyhow::Result<Submission> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn list(&self) -> anyhow::Result<Vec<Submission>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn find(&self, _: Uuid) -> anyhow::Result<Option<Submission>> {
        Err(anyhow::anyhow!("connection refused"))
    }

    async fn delete(&self, _: Uuid) -> anyhow::Result<bool> {
        Err(anyhow::anyhow!("connection refused"))
    }
}
