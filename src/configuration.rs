use std::env;
use std::env::current_dir;
use std::fmt::Display;
use std::time::Duration;

use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::NotificationEmail;
use crate::email_client::EmailClient;

/// Where quote notifications go when no operator address is configured.
pub const DEFAULT_NOTIFICATION_EMAIL: &str = "info@sunrisescreening.com";

/// Global configuration, loaded from the `configuration` directory. See
/// `get_configuration`.
#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

/// Server configuration
#[derive(Deserialize)]
pub struct ApplicationSettings {
    /// Should be localhost on a dev machine, 0.0.0.0 in prod
    pub host: String,

    /// Tests set this to 0 to get an OS-assigned port
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Outbound email configuration. The authorization token is optional on
/// purpose: without one, the notifier reports every dispatch as skipped
/// instead of failing, so the service works in environments with no email
/// set up at all.
#[derive(Deserialize)]
pub struct EmailClientSettings {
    /// Provider API root, e.g. `https://api.postmarkapp.com`
    pub base_url: String,
    pub sender_email: String,

    /// Operator inbox for quote notifications; falls back to
    /// `DEFAULT_NOTIFICATION_EMAIL` when unset
    pub notification_email: Option<String>,

    /// Provider credential; usually injected as
    /// `APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN` rather than committed to a
    /// config file
    pub authorization_token: Option<Secret<String>>,

    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<NotificationEmail, String> {
        NotificationEmail::parse(self.sender_email.clone())
    }

    pub fn recipient(&self) -> Result<NotificationEmail, String> {
        NotificationEmail::parse(
            self.notification_email
                .clone()
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_EMAIL.to_string()),
        )
    }

    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_milliseconds) }

    /// Build the `EmailClient` this configuration describes. Fails only on
    /// an unparseable sender/recipient address, i.e. at startup.
    pub fn client(self) -> Result<EmailClient, String> {
        let sender = self.sender()?;
        let recipient = self.recipient()?;
        let timeout = self.timeout();
        Ok(EmailClient::new(
            self.base_url,
            sender,
            recipient,
            self.authorization_token,
            timeout,
        ))
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Display for Environment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Environment::Local => "local",
                Environment::Production => "production",
            }
        )?;
        Ok(())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            e => Err(format!("Invalid: {e}")),
        }
    }
}

/// Load yaml configuration files at `<project_root>/configuration`:
/// `base.yaml`, then the environment file selected by `APP_ENVIRONMENT`
/// (default `local`), then `APP_*` env var overrides, e.g.
/// `APP_APPLICATION__PORT=5001` -> `Settings.application.port`.
///
/// All non-optional fields must be present, otherwise initialisation fails
/// immediately and the server does not start.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let cfg_dir = current_dir()
        .expect("could not get current dir")
        .join("configuration");

    let env: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or("local".to_string())
        .try_into()
        .expect("could not initiate Environment struct");

    let settings = Config::builder()
        .add_source(config::File::from(cfg_dir.join("base.yaml")))
        .add_source(config::File::from(cfg_dir.join(format!("{env}.yaml"))))
        .add_source(
            // env vars are always parsed as String; `serde-aux` handles the
            // numeric fields
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
