use crate::{
    abstract_trait::user::{
        repository::{DynUserCommandRepository, DynUserQueryRepository},
        service::{DynUserCommandService, DynUserQueryService},
    },
    repository::{command::UserCommandRepository, query::UserQueryRepository},
    service::{command::UserCommandService, query::UserQueryService},
};
use shared::config::ConnectionPool;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_query: DynUserQueryService,
    pub user_command: DynUserCommandService,
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, context_timeout: Duration) -> Self {
        let query_repo: DynUserQueryRepository = Arc::new(UserQueryRepository::new(pool.clone()));
        let command_repo: DynUserCommandRepository = Arc::new(UserCommandRepository::new(pool));

        let user_query: DynUserQueryService =
            Arc::new(UserQueryService::new(query_repo, context_timeout));
        let user_command: DynUserCommandService =
            Arc::new(UserCommandService::new(command_repo, context_timeout));

        Self {
            user_query,
            user_command,
        }
    }
}
