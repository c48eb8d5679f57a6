//! Message templates for the two email-driven account flows.
//!
//! The emailed link carries the authenticator secret as its only
//! credential: `<scheme>://<site_host>/<verb>?a=<secret>`.

use custos_core::{EmailAction, OutboundEmail, TemporaryAuthenticator, User};

use crate::config::AuthConfig;

const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn action_email(
    action: EmailAction,
    user: &User,
    authenticator: &TemporaryAuthenticator,
    config: &AuthConfig,
) -> OutboundEmail {
    let link = format!(
        "{}/{}?a={}",
        config.base_url(),
        action.verb(),
        authenticator.secret()
    );
    let expires_at = authenticator.expires_at().format(EXPIRY_FORMAT);

    match action {
        EmailAction::Verify => OutboundEmail {
            from: config.sender.clone(),
            to: user.email().clone(),
            subject: format!(
                "Verify your e-mail to finish signing up for {}",
                config.site_url
            ),
            text_body: format!(
                "Hello {username}, please use this link to verify your email address on \
                 {site_url}: {link} This link will expire on {expires_at} UTC. Thank you for \
                 using {site_url}!",
                username = user.username(),
                site_url = config.site_url,
            ),
            html_body: format!(
                "<p>Hello {username}:</p><p><br></p><p>Please use the following link to verify \
                 your email address on {site_url}</p><p>{link}</p><p>This link will expire on \
                 {expires_at} UTC</p><p>Thank you for using {site_url}!</p>",
                username = user.username(),
                site_url = config.site_url,
            ),
        },
        EmailAction::Reset => OutboundEmail {
            from: config.sender.clone(),
            to: user.email().clone(),
            subject: format!("Reset your password on {}", config.site_url),
            text_body: format!(
                "Hello {username}, a request has been received to change the password for your \
                 account on {site_url}. Please follow this link to reset your password: {link}. \
                 This link will expire on {expires_at} UTC. If you did not initiate this \
                 request, please ignore this email.",
                username = user.username(),
                site_url = config.site_url,
            ),
            html_body: format!(
                "<p>Hello {username},</p><p><br></p><p>A request has been received to change \
                 the password for your account on {site_url}</p><p>Please follow this link to \
                 reset your password: {link}</p><p>This link will expire on {expires_at} \
                 UTC</p><p>If you did not initiate this request, please ignore this email. </p>",
                username = user.username(),
                site_url = config.site_url,
            ),
        },
    }
}
