use chrono::Duration;
use custos_application::AuthConfig;
use custos_core::EmailAddress;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Full process configuration: defaults, then an optional `configuration`
/// file, then `CUSTOS__`-prefixed environment variables, last one wins.
/// `CUSTOS__AUTH__SITE_URL=accounts.example.com` overrides `auth.site_url`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
    pub email: EmailSettings,
    pub database: Option<DatabaseSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Host part of the public site, used in emailed links.
    pub site_url: String,
    pub use_https: bool,
    pub session_lifetime_hours: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub sender: EmailAddress,
    pub postmark_base_url: String,
    pub postmark_auth_token: Option<Secret<String>>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 3000)?
            .set_default("auth.site_url", "localhost:3000")?
            .set_default("auth.use_https", false)?
            // a week
            .set_default("auth.session_lifetime_hours", 168)?
            .set_default("email.sender", "no-reply@custos.local")?
            .set_default("email.postmark_base_url", "https://api.postmarkapp.com/")?
            .set_default("email.timeout_secs", 10)?
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("CUSTOS").separator("__"))
            .build()?;

        Ok(settings.try_deserialize::<Settings>()?)
    }

    /// The injected configuration the application components run on.
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            site_url: self.auth.site_url.clone(),
            use_https: self.auth.use_https,
            sender: self.email.sender.clone(),
            session_lifetime: Duration::hours(self.auth.session_lifetime_hours),
        }
    }
}
