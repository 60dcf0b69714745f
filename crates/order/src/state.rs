use crate::{
    abstract_trait::http_client::DynProductHttpClient, config::ProductClientConfig,
    di::DependenciesInject, http_client::ProductHttpClient,
};
use shared::config::ConnectionPool;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(
        pool: ConnectionPool,
        client_config: &ProductClientConfig,
        context_timeout: Duration,
    ) -> Self {
        let product_client: DynProductHttpClient =
            Arc::new(ProductHttpClient::new(client_config.base_url.clone()));

        let di_container = DependenciesInject::new(pool, product_client, context_timeout);

        Self { di_container }
    }
}
