use crate::{
    abstract_trait::{
        http_client::DynProductHttpClient,
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
    },
    repository::{command::OrderCommandRepository, query::OrderQueryRepository},
    service::{command::OrderCommandService, query::OrderQueryService},
};
use shared::config::ConnectionPool;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl DependenciesInject {
    pub fn new(
        pool: ConnectionPool,
        product_client: DynProductHttpClient,
        context_timeout: Duration,
    ) -> Self {
        let query_repo: DynOrderQueryRepository = Arc::new(OrderQueryRepository::new(pool.clone()));
        let command_repo: DynOrderCommandRepository = Arc::new(OrderCommandRepository::new(pool));

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(query_repo, context_timeout));
        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            product_client,
            command_repo,
            context_timeout,
        ));

        Self {
            order_query,
            order_command,
        }
    }
}
