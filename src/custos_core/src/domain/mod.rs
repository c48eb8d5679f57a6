pub mod authenticator;
pub mod email_action;
pub mod email_address;
pub mod outbound_email;
pub mod password;
pub mod session;
pub mod session_token;
pub mod user;
pub mod username;

use base64ct::{Base64UrlUnpadded, Encoding};
use rand::RngCore;

/// Generates a URL-safe secret carrying `strength` bytes of entropy.
///
/// Session keys and temporary authenticators are bearer capabilities: the
/// string itself is the credential, so it is never derived from anything
/// guessable.
pub(crate) fn urlsafe_secret(strength: usize) -> String {
    let mut bytes = vec![0u8; strength];
    rand::rng().fill_bytes(&mut bytes);
    Base64UrlUnpadded::encode_string(&bytes)
}
