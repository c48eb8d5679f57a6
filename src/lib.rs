//! # Custos - User Identity & Session Authentication Library
//!
//! This is a facade crate that re-exports all public APIs from the custos components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! custos = { path = "../custos" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `EmailAddress`, `Password`, `User`, `Session`, etc.
//! - **Repository traits**: `UserStore`, `SessionStore`, `AuthenticatorStore`
//! - **Application services**: `AccountService`, `SessionManager`, `AuthGuard`, etc.
//! - **Adapters**: `PostgresUserStore`, `Argon2PasswordHasher`, `PostmarkEmailClient`, etc.
//! - **Service**: the composition root wiring everything behind an axum router

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use custos_core::*;
}

// Re-export most commonly used core types at the root level
pub use custos_core::{
    EmailAction, EmailAddress, Password, Session, SessionToken, TemporaryAuthenticator, TokenClaims,
    User, Username,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use custos_core::{
        AuthenticatorStore, AuthenticatorStoreError, SessionStore, SessionStoreError, UserStore,
        UserStoreError,
    };
}

// Re-export repository traits at root level
pub use custos_core::{
    AuthenticatorStore, AuthenticatorStoreError, EmailClient, PasswordHasher, SessionStore,
    SessionStoreError, UserStore, UserStoreError,
};

// ============================================================================
// Application Services
// ============================================================================

/// Application services
pub mod services {
    pub use custos_application::*;
}

// Re-export services at root level
pub use custos_application::{
    AccountError, AccountService, AuthConfig, AuthGuard, AuthenticatedUser, AuthenticatorIssuer,
    CompletionRequest, SessionManager,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use custos_adapters::{
            HashMapAuthenticatorStore, HashMapSessionStore, HashMapUserStore,
            PostgresAuthenticatorStore, PostgresSessionStore, PostgresUserStore,
        };
    }

    /// Email client implementations
    pub mod email {
        pub use custos_adapters::{MockEmailClient, PostmarkEmailClient};
    }

    /// Password hashing
    pub mod hashing {
        pub use custos_adapters::Argon2PasswordHasher;
    }

    /// Configuration
    pub mod config {
        pub use custos_adapters::{Settings, SettingsError};
    }
}

// Re-export commonly used adapters at root level
pub use custos_adapters::{
    Argon2PasswordHasher, HashMapAuthenticatorStore, HashMapSessionStore, HashMapUserStore,
    MockEmailClient, PostgresAuthenticatorStore, PostgresSessionStore, PostgresUserStore,
    PostmarkEmailClient,
};

// ============================================================================
// HTTP Surface & Composition Root (Main Entry Points)
// ============================================================================

/// axum router and request/response types
pub use custos_axum::{AppState, router};

/// Ready-made wirings and the runnable application
pub use custos_service::{Application, build_state, in_memory_state, migrate, postgres_state};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
