use custos_application::{AccountService, AuthGuard};

/// Shared state handed to every route.
///
/// The stores inside the service and the guard are `Clone` via internal
/// `Arc`s (or pooled connections), so cloning the state per request is
/// cheap.
#[derive(Clone)]
pub struct AppState<U, S, A, H, E> {
    pub accounts: AccountService<U, S, A, H, E>,
    pub guard: AuthGuard<U, S>,
}
