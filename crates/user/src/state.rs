use crate::di::DependenciesInject;
use shared::config::ConnectionPool;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool, context_timeout: Duration) -> Self {
        let di_container = DependenciesInject::new(pool, context_timeout);

        Self { di_container }
    }
}
