pub mod config;
pub mod email;
pub mod hashing;
pub mod persistence;

pub use config::{Settings, SettingsError};
pub use email::{MockEmailClient, PostmarkEmailClient};
pub use hashing::Argon2PasswordHasher;
pub use persistence::{
    HashMapAuthenticatorStore, HashMapSessionStore, HashMapUserStore, PostgresAuthenticatorStore,
    PostgresSessionStore, PostgresUserStore,
};
