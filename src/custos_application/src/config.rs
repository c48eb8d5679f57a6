use chrono::Duration;
use custos_core::EmailAddress;

/// Process-wide settings, constructed once at startup and injected into the
/// components that need them. Nothing in this workspace reads them from
/// ambient globals.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Host part of the public site, e.g. `accounts.example.com`.
    pub site_url: String,
    pub use_https: bool,
    /// Sender identity for outbound account email.
    pub sender: EmailAddress,
    /// Lifetime of a newly created session.
    pub session_lifetime: Duration,
}

impl AuthConfig {
    /// `<scheme>://<site_host>`, the prefix of every emailed action link.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{scheme}://{}", self.site_url)
    }
}
