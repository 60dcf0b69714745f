use crate::{
    abstract_trait::{
        http_client::DynProductHttpClient,
        order::{repository::DynOrderCommandRepository, service::OrderCommandServiceTrait},
    },
    domain::requests::order::CreateOrderRequest,
    domain::response::order::OrderResponse,
    model::order::Order as OrderModel,
};
use async_trait::async_trait;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ReservationError, ServiceError},
};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandService {
    product_client: DynProductHttpClient,
    command: DynOrderCommandRepository,
    context_timeout: Duration,
}

impl OrderCommandService {
    pub fn new(
        product_client: DynProductHttpClient,
        command: DynOrderCommandRepository,
        context_timeout: Duration,
    ) -> Self {
        Self {
            product_client,
            command,
            context_timeout,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🏗️ Placing order: product_id={} qty={} user_id={}",
            req.product_id, req.qty, req.user_id
        );

        let product_client = self.product_client.clone();
        let command = self.command.clone();
        let context_timeout = self.context_timeout;
        let req = req.clone();

        // Runs detached: once stock has been reserved, a dropped request
        // future must not abandon the persist/compensate tail.
        let workflow = tokio::spawn(async move {
            reserve_and_persist(product_client, command, context_timeout, req).await
        });

        let order = workflow
            .await
            .map_err(|e| ServiceError::Internal(format!("order workflow task failed: {e}")))??;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: OrderResponse::from(order),
        })
    }
}

/// One reservation invocation:
/// `Start -> StockChecked -> StockReserved -> OrderPersisted`.
///
/// The decision in step 2 is made on the snapshot read in step 1; concurrent
/// invocations for the same product may interleave between the read and the
/// write. The product store's own stock constraint still rules out a negative
/// persisted value.
async fn reserve_and_persist(
    product_client: DynProductHttpClient,
    command: DynOrderCommandRepository,
    context_timeout: Duration,
    req: CreateOrderRequest,
) -> Result<OrderModel, ReservationError> {
    // 1. snapshot the product
    let product = match timeout(context_timeout, product_client.find_by_id(req.product_id)).await {
        Err(_) => return Err(ReservationError::Timeout),
        Ok(Err(RepositoryError::NotFound)) => return Err(ReservationError::ProductNotFound),
        Ok(Err(e)) => {
            error!("❌ Product lookup failed for {}: {e:?}", req.product_id);
            return Err(ReservationError::StockUpdateFailed(e));
        }
        Ok(Ok(product)) => product,
    };

    // 2. decide on the snapshot
    let remaining = product.stock - req.qty;
    if remaining < 0 {
        info!(
            "🚫 Insufficient stock for product {}: requested {}, available {}",
            req.product_id, req.qty, product.stock
        );
        return Err(ReservationError::InsufficientStock {
            requested: req.qty,
            available: product.stock,
        });
    }

    // 3. reserve
    match timeout(
        context_timeout,
        product_client.update_stock(req.product_id, remaining),
    )
    .await
    {
        Err(_) => return Err(ReservationError::Timeout),
        Ok(Err(e)) => {
            error!(
                "❌ Stock reservation failed for product {}: {e:?}",
                req.product_id
            );
            return Err(ReservationError::StockUpdateFailed(e));
        }
        Ok(Ok(())) => {
            info!(
                "📦 Reserved {} units of product {} ({} -> {})",
                req.qty, req.product_id, product.stock, remaining
            );
        }
    }

    // 4. persist the order; a timed-out insert is treated as failed and
    //    compensated like any other persist failure
    let persist_err = match timeout(context_timeout, command.create_order(&req)).await {
        Ok(Ok(order)) => {
            info!(
                "✅ Order {} persisted for product {}",
                order.order_id, req.product_id
            );
            return Ok(order);
        }
        Ok(Err(e)) => Some(e),
        Err(_) => None,
    };

    error!(
        "❌ Order persist failed for product {}, restoring stock to {}",
        req.product_id, product.stock
    );

    match timeout(
        context_timeout,
        product_client.update_stock(req.product_id, product.stock),
    )
    .await
    {
        Err(_) => Err(ReservationError::CompensationFailed {
            product_id: req.product_id,
            expected_stock: product.stock,
            detail: "stock restore timed out".to_string(),
        }),
        Ok(Err(rollback_err)) => {
            error!(
                "💀 Compensation failed for product {}: {rollback_err:?}",
                req.product_id
            );
            Err(ReservationError::CompensationFailed {
                product_id: req.product_id,
                expected_stock: product.stock,
                detail: rollback_err.to_string(),
            })
        }
        Ok(Ok(())) => {
            info!(
                "↩️ Stock restored to {} for product {}",
                product.stock, req.product_id
            );
            match persist_err {
                Some(e) => Err(ReservationError::OrderPersistFailed(e)),
                None => Err(ReservationError::Timeout),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::http_client::ProductHttpClientTrait;
    use crate::abstract_trait::order::repository::OrderCommandRepositoryTrait;
    use crate::domain::response::product::ProductResponse;
    use std::collections::HashMap;
    use std::sync::{
        Mutex,
        atomic::{AtomicI32, AtomicUsize, Ordering},
    };
    use std::sync::Arc;

    const TEST_TIMEOUT: Duration = Duration::from_millis(100);

    /// In-memory product store with failure injection on the Nth stock write.
    struct MockProductStore {
        stock: Mutex<HashMap<i32, i32>>,
        update_calls: AtomicUsize,
        fail_updates_from_call: Option<usize>,
        find_delay: Option<Duration>,
    }

    impl MockProductStore {
        fn with_stock(id: i32, stock: i32) -> Self {
            Self {
                stock: Mutex::new(HashMap::from([(id, stock)])),
                update_calls: AtomicUsize::new(0),
                fail_updates_from_call: None,
                find_delay: None,
            }
        }

        fn empty() -> Self {
            Self {
                stock: Mutex::new(HashMap::new()),
                update_calls: AtomicUsize::new(0),
                fail_updates_from_call: None,
                find_delay: None,
            }
        }

        /// Fails the reservation write (first stock update).
        fn failing_reserve(mut self) -> Self {
            self.fail_updates_from_call = Some(1);
            self
        }

        /// Lets the reservation through, then fails the compensation write.
        fn failing_restore(mut self) -> Self {
            self.fail_updates_from_call = Some(2);
            self
        }

        fn stalled_reads(mut self, delay: Duration) -> Self {
            self.find_delay = Some(delay);
            self
        }

        fn stock_of(&self, id: i32) -> Option<i32> {
            self.stock.lock().unwrap().get(&id).copied()
        }

        fn stock_writes(&self) -> usize {
            self.update_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductHttpClientTrait for MockProductStore {
        async fn find_by_id(&self, id: i32) -> Result<ProductResponse, RepositoryError> {
            if let Some(delay) = self.find_delay {
                tokio::time::sleep(delay).await;
            }

            let stock = self.stock.lock().unwrap().get(&id).copied();
            match stock {
                Some(stock) => Ok(ProductResponse {
                    id,
                    name: "widget".into(),
                    price: 1000,
                    stock,
                    created_at: None,
                    updated_at: None,
                }),
                None => Err(RepositoryError::NotFound),
            }
        }

        async fn update_stock(&self, id: i32, stock: i32) -> Result<(), RepositoryError> {
            let call = self.update_calls.fetch_add(1, Ordering::SeqCst) + 1;

            if let Some(failing_from) = self.fail_updates_from_call {
                if call >= failing_from {
                    return Err(RepositoryError::Custom("injected store failure".into()));
                }
            }

            let mut map = self.stock.lock().unwrap();
            match map.get_mut(&id) {
                Some(current) => {
                    *current = stock;
                    Ok(())
                }
                None => Err(RepositoryError::NotFound),
            }
        }
    }

    /// In-memory order store; assigns sequential ids like a serial column.
    struct MockOrderStore {
        orders: Mutex<Vec<OrderModel>>,
        next_id: AtomicI32,
        fail_create: bool,
        create_delay: Option<Duration>,
    }

    impl MockOrderStore {
        fn new() -> Self {
            Self {
                orders: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
                fail_create: false,
                create_delay: None,
            }
        }

        fn failing_create(mut self) -> Self {
            self.fail_create = true;
            self
        }

        fn stalled_create(mut self, delay: Duration) -> Self {
            self.create_delay = Some(delay);
            self
        }

        fn order_count(&self) -> usize {
            self.orders.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for MockOrderStore {
        async fn create_order(
            &self,
            req: &CreateOrderRequest,
        ) -> Result<OrderModel, RepositoryError> {
            if let Some(delay) = self.create_delay {
                tokio::time::sleep(delay).await;
            }

            if self.fail_create {
                return Err(RepositoryError::Custom("injected insert failure".into()));
            }

            let order = OrderModel {
                order_id: self.next_id.fetch_add(1, Ordering::SeqCst),
                product_id: req.product_id,
                user_id: req.user_id,
                qty: req.qty,
                created_at: None,
                updated_at: None,
            };
            self.orders.lock().unwrap().push(order.clone());
            Ok(order)
        }
    }

    fn request(product_id: i32, qty: i32) -> CreateOrderRequest {
        CreateOrderRequest {
            product_id,
            user_id: 1,
            qty,
        }
    }

    async fn run_workflow(
        products: &Arc<MockProductStore>,
        orders: &Arc<MockOrderStore>,
        req: CreateOrderRequest,
    ) -> Result<OrderModel, ReservationError> {
        reserve_and_persist(
            products.clone() as DynProductHttpClient,
            orders.clone() as DynOrderCommandRepository,
            TEST_TIMEOUT,
            req,
        )
        .await
    }

    #[tokio::test]
    async fn places_order_and_decrements_stock() {
        let products = Arc::new(MockProductStore::with_stock(7, 10));
        let orders = Arc::new(MockOrderStore::new());

        let order = run_workflow(&products, &orders, request(7, 4))
            .await
            .expect("reservation should succeed");

        assert_eq!(order.order_id, 1);
        assert_eq!(order.qty, 4);
        assert_eq!(products.stock_of(7), Some(6));
        assert_eq!(orders.order_count(), 1);
    }

    #[tokio::test]
    async fn rejects_insufficient_stock_without_mutation() {
        let products = Arc::new(MockProductStore::with_stock(7, 3));
        let orders = Arc::new(MockOrderStore::new());

        let err = run_workflow(&products, &orders, request(7, 4))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ReservationError::InsufficientStock {
                requested: 4,
                available: 3
            }
        ));
        assert_eq!(products.stock_of(7), Some(3));
        assert_eq!(products.stock_writes(), 0);
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn exact_quantity_drains_stock_to_zero() {
        let products = Arc::new(MockProductStore::with_stock(3, 5));
        let orders = Arc::new(MockOrderStore::new());

        run_workflow(&products, &orders, request(3, 5))
            .await
            .expect("reserving the full stock should succeed");

        assert_eq!(products.stock_of(3), Some(0));
    }

    #[tokio::test]
    async fn zero_stock_always_rejects() {
        let products = Arc::new(MockProductStore::with_stock(3, 0));
        let orders = Arc::new(MockOrderStore::new());

        let err = run_workflow(&products, &orders, request(3, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::InsufficientStock { .. }));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn missing_product_fails_with_not_found() {
        let products = Arc::new(MockProductStore::empty());
        let orders = Arc::new(MockOrderStore::new());

        let err = run_workflow(&products, &orders, request(99, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::ProductNotFound));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn reservation_failure_aborts_before_order_write() {
        let products = Arc::new(MockProductStore::with_stock(7, 10).failing_reserve());
        let orders = Arc::new(MockOrderStore::new());

        let err = run_workflow(&products, &orders, request(7, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::StockUpdateFailed(_)));
        assert_eq!(products.stock_of(7), Some(10));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn compensates_when_order_persist_fails() {
        let products = Arc::new(MockProductStore::with_stock(7, 10));
        let orders = Arc::new(MockOrderStore::new().failing_create());

        let err = run_workflow(&products, &orders, request(7, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::OrderPersistFailed(_)));
        // reserve then restore
        assert_eq!(products.stock_writes(), 2);
        assert_eq!(products.stock_of(7), Some(10));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn failed_compensation_is_surfaced_distinctly() {
        let products = Arc::new(MockProductStore::with_stock(7, 10).failing_restore());
        let orders = Arc::new(MockOrderStore::new().failing_create());

        let err = run_workflow(&products, &orders, request(7, 4))
            .await
            .unwrap_err();

        match err {
            ReservationError::CompensationFailed {
                product_id,
                expected_stock,
                ..
            } => {
                assert_eq!(product_id, 7);
                assert_eq!(expected_stock, 10);
            }
            other => panic!("expected CompensationFailed, got {other:?}"),
        }
        // the reservation stuck: stock stays decremented with no order
        assert_eq!(products.stock_of(7), Some(6));
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn repeated_requests_double_decrement() {
        let products = Arc::new(MockProductStore::with_stock(7, 10));
        let orders = Arc::new(MockOrderStore::new());

        let first = run_workflow(&products, &orders, request(7, 3))
            .await
            .expect("first call should succeed");
        let second = run_workflow(&products, &orders, request(7, 3))
            .await
            .expect("second call should succeed");

        // not idempotent: each call is its own order and its own decrement
        assert_ne!(first.order_id, second.order_id);
        assert_eq!(products.stock_of(7), Some(4));
        assert_eq!(orders.order_count(), 2);
    }

    #[tokio::test]
    async fn stalled_product_store_times_out_before_any_write() {
        let products = Arc::new(
            MockProductStore::with_stock(7, 10).stalled_reads(Duration::from_secs(5)),
        );
        let orders = Arc::new(MockOrderStore::new());

        let err = run_workflow(&products, &orders, request(7, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::Timeout));
        assert_eq!(products.stock_writes(), 0);
        assert_eq!(orders.order_count(), 0);
    }

    #[tokio::test]
    async fn persist_timeout_still_compensates() {
        let products = Arc::new(MockProductStore::with_stock(7, 10));
        let orders = Arc::new(MockOrderStore::new().stalled_create(Duration::from_secs(5)));

        let err = run_workflow(&products, &orders, request(7, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, ReservationError::Timeout));
        // the decrement was rolled back even though the insert timed out
        assert_eq!(products.stock_writes(), 2);
        assert_eq!(products.stock_of(7), Some(10));
    }

    #[tokio::test]
    async fn service_wraps_workflow_result_into_response() {
        let products = Arc::new(MockProductStore::with_stock(7, 10));
        let orders = Arc::new(MockOrderStore::new());

        let service = OrderCommandService::new(
            products.clone() as DynProductHttpClient,
            orders.clone() as DynOrderCommandRepository,
            TEST_TIMEOUT,
        );

        let response = service
            .create_order(&request(7, 4))
            .await
            .expect("order placement should succeed");

        assert_eq!(response.status, "success");
        assert_eq!(response.data.product_id, 7);
        assert_eq!(response.data.qty, 4);
        assert_eq!(products.stock_of(7), Some(6));
    }

    #[tokio::test]
    async fn service_maps_insufficient_stock_error() {
        let products = Arc::new(MockProductStore::with_stock(7, 3));
        let orders = Arc::new(MockOrderStore::new());

        let service = OrderCommandService::new(
            products as DynProductHttpClient,
            orders as DynOrderCommandRepository,
            TEST_TIMEOUT,
        );

        let err = service.create_order(&request(7, 4)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Reservation(ReservationError::InsufficientStock { .. })
        ));
    }

    #[tokio::test]
    async fn dropped_caller_does_not_abandon_the_workflow() {
        let products = Arc::new(MockProductStore::with_stock(7, 10));
        let orders =
            Arc::new(MockOrderStore::new().stalled_create(Duration::from_millis(30)));

        let service = OrderCommandService::new(
            products.clone() as DynProductHttpClient,
            orders.clone() as DynOrderCommandRepository,
            TEST_TIMEOUT,
        );

        // Drop the request future right after the reservation has been
        // written, mid order-persist, as a disconnecting client would.
        let req = request(7, 4);
        let call = service.create_order(&req);
        let _ = timeout(Duration::from_millis(10), call).await;

        // the spawned workflow keeps running to completion
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(orders.order_count(), 1);
        assert_eq!(products.stock_of(7), Some(6));
    }
}
