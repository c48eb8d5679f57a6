use serde::{Deserialize, Serialize};

/// The two account actions that are driven over email.
///
/// Each action gets its own message template and link verb; the
/// authenticator embedded in the link authorizes exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailAction {
    /// Confirm ownership of the registered email address.
    Verify,
    /// Set a new password.
    Reset,
}

impl EmailAction {
    /// The path segment used in the emailed link.
    pub fn verb(self) -> &'static str {
        match self {
            EmailAction::Verify => "verify",
            EmailAction::Reset => "reset",
        }
    }
}

impl std::fmt::Display for EmailAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}
