//! Composition root: wires stores, hasher and mailer into the account
//! service and serves the router.

use axum::Router;
use custos_adapters::{
    Argon2PasswordHasher, HashMapAuthenticatorStore, HashMapSessionStore, HashMapUserStore,
    MockEmailClient, PostgresAuthenticatorStore, PostgresSessionStore, PostgresUserStore,
    PostmarkEmailClient,
};
use custos_application::{
    AccountService, AuthConfig, AuthGuard, AuthenticatorIssuer, SessionManager,
};
use custos_axum::AppState;
use custos_core::{AuthenticatorStore, EmailClient, PasswordHasher, SessionStore, UserStore};
use sqlx::PgPool;
use tokio::net::TcpListener;

pub type InMemoryState = AppState<
    HashMapUserStore,
    HashMapSessionStore,
    HashMapAuthenticatorStore,
    Argon2PasswordHasher,
    MockEmailClient,
>;

pub type PostgresState = AppState<
    PostgresUserStore,
    PostgresSessionStore,
    PostgresAuthenticatorStore,
    Argon2PasswordHasher,
    PostmarkEmailClient,
>;

/// Wires any combination of stores and capabilities into an [`AppState`].
pub fn build_state<U, S, A, H, E>(
    users: U,
    sessions: S,
    authenticators: A,
    hasher: H,
    mailer: E,
    config: AuthConfig,
) -> AppState<U, S, A, H, E>
where
    U: UserStore + Clone,
    S: SessionStore + Clone,
    A: AuthenticatorStore + Clone,
    H: PasswordHasher + Clone,
    E: EmailClient + Clone,
{
    let session_manager = SessionManager::new(users.clone(), sessions, config.clone());
    let guard = AuthGuard::new(session_manager.clone());
    let accounts = AccountService::new(
        users,
        session_manager,
        AuthenticatorIssuer::new(authenticators),
        hasher,
        mailer,
        config,
    );

    AppState { accounts, guard }
}

/// Self-contained wiring for local development and tests. Emails are
/// recorded on the returned mock client instead of being delivered.
pub fn in_memory_state(config: AuthConfig) -> (InMemoryState, MockEmailClient) {
    let mailer = MockEmailClient::new();
    let state = build_state(
        HashMapUserStore::new(),
        HashMapSessionStore::new(),
        HashMapAuthenticatorStore::new(),
        Argon2PasswordHasher::new(),
        mailer.clone(),
        config,
    );
    (state, mailer)
}

/// Production wiring: Postgres-backed stores and the Postmark sink.
pub fn postgres_state(pool: PgPool, mailer: PostmarkEmailClient, config: AuthConfig) -> PostgresState {
    build_state(
        PostgresUserStore::new(pool.clone()),
        PostgresSessionStore::new(pool.clone()),
        PostgresAuthenticatorStore::new(pool),
        Argon2PasswordHasher::new(),
        mailer,
        config,
    )
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../custos_adapters/migrations").run(pool).await
}

/// A bound listener plus the router it will serve.
pub struct Application {
    router: Router,
    listener: TcpListener,
}

impl Application {
    pub async fn build(router: Router, address: &str) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(address).await?;
        Ok(Self { router, listener })
    }

    pub fn local_addr(&self) -> Result<std::net::SocketAddr, std::io::Error> {
        self.listener.local_addr()
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        axum::serve(self.listener, self.router).await
    }
}
