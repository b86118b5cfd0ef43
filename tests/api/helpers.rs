use once_cell::sync::Lazy;
use secrecy::Secret;
use sunrise_screening::configuration::get_configuration;
use sunrise_screening::startup::Application;
use sunrise_screening::telemetry::get_subscriber;
use sunrise_screening::telemetry::init_subscriber;
use wiremock::MockServer;

/// Init a static subscriber once for the whole test binary.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber);
        }
    };
});

pub struct TestApp {
    pub addr: String,
    /// Stands in for the email provider's API
    pub email_server: MockServer,
}

impl TestApp {
    /// `POST` a raw JSON body to the submission endpoint.
    pub async fn post_contact(
        &self,
        body: String,
    ) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/contact", self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("execute request")
    }

    /// Hit the submission endpoint with an arbitrary method and no body.
    pub async fn request_contact(
        &self,
        method: reqwest::Method,
    ) -> reqwest::Response {
        reqwest::Client::new()
            .request(method, format!("{}/api/contact", self.addr))
            .send()
            .await
            .expect("execute request")
    }
}

/// Spawn the app on a random port, pointed at a wiremock email provider.
/// The provider credential is set so dispatch is actually exercised; use
/// `spawn_app_without_email_provider` for the unconfigured case.
pub async fn spawn_app() -> TestApp {
    spawn_with_token(Some(Secret::new("test-token".to_string()))).await
}

/// Like `spawn_app`, but with no provider credential configured: the
/// notifier must skip dispatch without calling out.
pub async fn spawn_app_without_email_provider() -> TestApp {
    spawn_with_token(None).await
}

async fn spawn_with_token(authorization_token: Option<Secret<String>>) -> TestApp {
    // init the tracing subscriber once only
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let cfg = {
        let mut cfg = get_configuration().unwrap();
        // port 0 gets a random available port from the OS
        cfg.application.port = 0;
        cfg.email_client.base_url = email_server.uri();
        cfg.email_client.authorization_token = authorization_token;
        cfg
    };

    let app = Application::build(cfg).await.unwrap();
    let addr = format!("http://localhost:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    TestApp { addr, email_server }
}
