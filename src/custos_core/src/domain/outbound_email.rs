use super::email_address::EmailAddress;

/// A fully rendered message handed to the email sink.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}
