use std::{env, io, sync};

use fdlimit::raise_fd_limit;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use klikkit::configuration::Settings;
use klikkit::startup::Application;
use klikkit::telemetry::{get_subscriber, init_subscriber};

/// Ensure the tracing stack is initialized only once
static TRACING: sync::LazyLock<()> = sync::LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            io::sink,
        ));
    };
});

/// Test application data
pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up a test application and return its data
    pub async fn spawn() -> Self {
        // Initialize logging
        sync::LazyLock::force(&TRACING);

        // Raise file descriptors limit to avoid "Too many open files" error
        raise_fd_limit().expect("Failed to raise fd limit");

        // Launch a mock server to stand in for Resend's API
        let email_server = MockServer::start().await;

        // Get settings and modify them for testing
        let config = {
            let mut c = Settings::get_config().expect("Failed to read configuration");
            // Listen on a random TCP port
            c.application.app_port = 0;
            // Use the mock server as email API
            c.email_client.base_url = email_server.uri();
            c.contact.recipient_email = "inbox@klikkit.co.uk".into();
            c
        };

        // Build the application and get its address
        let app = Application::build(config).expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", app.port());

        // Run the application and return its data
        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run_until_stopped());
        Self {
            address,
            email_server,
            api_client: reqwest::Client::new(),
        }
    }

    /// POST a JSON body to the contact endpoint
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// POST a raw body to the contact endpoint
    pub async fn post_contact_raw(
        &self,
        content_type: &str,
        body: &'static str,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    /// Mount a mock Resend endpoint that expects exactly `n` emails
    pub async fn expect_emails(&self, n: u64) {
        Mock::given(path("/emails"))
            .and(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg_123"})),
            )
            .expect(n)
            .mount(&self.email_server)
            .await;
    }

    /// Parse the single email request received by the mock Resend server
    pub async fn sent_email(&self) -> serde_json::Value {
        let requests = self.email_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "Expected exactly one email to be sent");
        serde_json::from_slice(&requests[0].body).unwrap()
    }
}

/// A submission that passes validation
pub fn valid_submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Ann",
        "email": "ann@x.com",
        "service": "web-design",
        "budget": "2k-5k",
        "message": "Hi"
    })
}
