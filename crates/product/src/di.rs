use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
    service::{command::ProductCommandService, query::ProductQueryService},
};
use shared::config::ConnectionPool;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, context_timeout: Duration) -> Self {
        let query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(query_repo, context_timeout));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(command_repo, context_timeout));

        Self {
            product_query,
            product_command,
        }
    }
}
