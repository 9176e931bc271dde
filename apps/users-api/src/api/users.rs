//! Users domain wiring: repository + service + router.

use axum::Router;
use domain_users::{PgUserRepository, UserService, UuidGenerator, handlers};

/// Build the users router backed by PostgreSQL.
///
/// Only Arc pointer clones happen here; the connection pool is shared.
pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    let service = UserService::new(repository, UuidGenerator::new());
    handlers::router(service)
}
