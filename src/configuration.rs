use std::{env, time};

use config::{Config, ConfigError, Environment, File};
use secrecy::SecretString;
use url::{ParseError, Url};

use crate::dispatcher::Dispatcher;
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;

/// Settings
#[derive(Clone, serde::Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

impl Settings {
    /// Get settings from configuration files
    pub fn get_config() -> Result<Self, ConfigError> {
        let path = env::current_dir().expect("Failed to determine the current directory");
        let config_dir = path.join("config");

        // Detect the running environment (default: `dev`)
        let env: Env = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "dev".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        // Read the configuration from files and environment variables
        Config::builder()
            // Base configuration file
            .add_source(File::from(config_dir.join("base.yaml")).required(true))
            // Environment-specific configuration file
            .add_source(File::from(config_dir.join(env.as_str())).required(true))
            // Environment variables (e.g., `KLIKKIT__EMAIL_CLIENT__API_KEY=re_123`
            // would set Settings.email_client.api_key to re_123)
            .add_source(Environment::with_prefix("KLIKKIT").separator("__"))
            .build()?
            .try_deserialize()
    }
}

/// Application settings
#[derive(Clone, serde::Deserialize)]
pub struct ApplicationSettings {
    pub app_host: String,
    pub app_port: u16,
}

/// Email client settings
#[derive(Clone, serde::Deserialize)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub sender_name: String,
    pub api_key: SecretString,
    pub timeout_millis: u64,
}

impl EmailClientSettings {
    /// Build the email client
    pub fn client(self) -> anyhow::Result<EmailClient> {
        let base_url = self.base_url()?;
        let sender_email = self.sender_email().map_err(anyhow::Error::msg)?;
        let timeout = self.timeout();
        Ok(EmailClient::new(
            base_url,
            &sender_email,
            &self.sender_name,
            self.api_key,
            timeout,
        ))
    }

    /// Parse base URL
    pub fn base_url(&self) -> Result<Url, ParseError> {
        Url::parse(&self.base_url)
    }

    /// Parse sender email
    pub fn sender_email(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    /// Get configured timeout
    pub const fn timeout(&self) -> time::Duration {
        time::Duration::from_millis(self.timeout_millis)
    }
}

/// Contact form settings
#[derive(Clone, serde::Deserialize)]
pub struct ContactSettings {
    pub recipient_email: String,
    pub brand_name: String,
}

impl ContactSettings {
    /// Parse recipient email
    pub fn recipient_email(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.recipient_email.clone())
    }

    /// Build the dispatcher that delivers submissions through `email_client`
    pub fn dispatcher(self, email_client: EmailClient) -> anyhow::Result<Dispatcher> {
        let recipient = self.recipient_email().map_err(anyhow::Error::msg)?;
        Ok(Dispatcher::new(email_client, recipient, self.brand_name))
    }
}

/// Available runtime environments
#[derive(Debug)]
pub enum Env {
    Development,
    Production,
}

impl Env {
    /// Represent environment as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prd",
        }
    }
}

impl TryFrom<String> for Env {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "dev" => Ok(Self::Development),
            "prd" => Ok(Self::Production),
            other => Err(format!(
                "`{other}` is not a supported environment. Use either `dev` or `prd`"
            )),
        }
    }
}
