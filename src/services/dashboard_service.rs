// src/services/dashboard_service.rs

use chrono::Datelike;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::DashboardSource,
    models::dashboard::{DashboardOverview, DashboardSnapshot, GraphEntry, PaidOrder},
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Soma do preço atual de cada item de cada pedido pago da loja.
    /// Loja inexistente ou sem pedidos pagos dá zero; falha de acesso sobe como está.
    pub async fn total_revenue(&self, store_id: Uuid) -> Result<Decimal, AppError> {
        let orders = self.source.find_paid_orders(store_id).await?;
        Ok(sum_revenue(&orders))
    }

    pub async fn graph_revenue(&self, store_id: Uuid) -> Result<Vec<GraphEntry>, AppError> {
        let orders = self.source.find_paid_orders(store_id).await?;
        Ok(monthly_revenue(&orders))
    }

    // Os cards e o gráfico saem de um único snapshot.
    pub async fn overview(&self, store_id: Uuid) -> Result<DashboardOverview, AppError> {
        let DashboardSnapshot { orders, stock_count } = self.source.load_snapshot(store_id).await?;

        Ok(DashboardOverview {
            total_revenue: sum_revenue(&orders),
            sales_count: orders.len() as i64,
            stock_count,
            graph_revenue: monthly_revenue(&orders),
        })
    }
}

fn sum_revenue(orders: &[PaidOrder]) -> Decimal {
    orders.iter().map(PaidOrder::revenue).sum()
}

/// Doze meses, Jan..Dec, agrupando pelo mês de criação do pedido (qualquer ano).
fn monthly_revenue(orders: &[PaidOrder]) -> Vec<GraphEntry> {
    let mut totals = [Decimal::ZERO; 12];
    for order in orders {
        totals[order.created_at.month0() as usize] += order.revenue();
    }

    MONTHS
        .iter()
        .zip(totals)
        .map(|(name, total)| GraphEntry { name: name.to_string(), total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::PaidOrderLine;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::RwLock;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    struct OrderRecord {
        id: Uuid,
        store_id: Uuid,
        is_paid: bool,
        created_at: DateTime<Utc>,
        product_ids: Vec<Uuid>,
    }

    /// Banco em memória: preços são lidos no momento da consulta, como no JOIN.
    #[derive(Default)]
    struct InMemorySource {
        prices: RwLock<HashMap<Uuid, Decimal>>,
        orders: RwLock<Vec<OrderRecord>>,
        archived: RwLock<Vec<Uuid>>,
        store_of_product: RwLock<HashMap<Uuid, Uuid>>,
    }

    impl InMemorySource {
        fn product(&self, store_id: Uuid, price: &str) -> Uuid {
            let id = Uuid::new_v4();
            self.prices.write().unwrap().insert(id, dec(price));
            self.store_of_product.write().unwrap().insert(id, store_id);
            id
        }

        fn order_at(&self, store_id: Uuid, is_paid: bool, created_at: DateTime<Utc>, prices: &[&str]) {
            let product_ids = prices.iter().map(|p| self.product(store_id, p)).collect();
            self.orders.write().unwrap().push(OrderRecord {
                id: Uuid::new_v4(),
                store_id,
                is_paid,
                created_at,
                product_ids,
            });
        }

        fn order(&self, store_id: Uuid, is_paid: bool, prices: &[&str]) {
            self.order_at(store_id, is_paid, Utc::now(), prices);
        }

        fn set_price(&self, product_id: Uuid, price: &str) {
            self.prices.write().unwrap().insert(product_id, dec(price));
        }
    }

    impl InMemorySource {
        fn paid_orders(&self, store_id: Uuid) -> Vec<PaidOrder> {
            let prices = self.prices.read().unwrap();
            self.orders
                .read()
                .unwrap()
                .iter()
                .filter(|o| o.store_id == store_id && o.is_paid)
                .map(|o| PaidOrder {
                    id: o.id,
                    created_at: o.created_at,
                    items: o
                        .product_ids
                        .iter()
                        .map(|id| PaidOrderLine { price: prices[id] })
                        .collect(),
                })
                .collect()
        }

        fn stock(&self, store_id: Uuid) -> i64 {
            let archived = self.archived.read().unwrap();
            self.store_of_product
                .read()
                .unwrap()
                .iter()
                .filter(|(id, store)| **store == store_id && !archived.contains(*id))
                .count() as i64
        }
    }

    #[async_trait]
    impl DashboardSource for InMemorySource {
        async fn find_paid_orders(&self, store_id: Uuid) -> Result<Vec<PaidOrder>, AppError> {
            Ok(self.paid_orders(store_id))
        }

        async fn load_snapshot(&self, store_id: Uuid) -> Result<DashboardSnapshot, AppError> {
            Ok(DashboardSnapshot {
                orders: self.paid_orders(store_id),
                stock_count: self.stock(store_id),
            })
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DashboardSource for FailingSource {
        async fn find_paid_orders(&self, _store_id: Uuid) -> Result<Vec<PaidOrder>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
        }

        async fn load_snapshot(&self, _store_id: Uuid) -> Result<DashboardSnapshot, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
        }
    }

    // Só responde pelo snapshot; leituras avulsas falham.
    struct SnapshotOnlySource(DashboardSnapshot);

    #[async_trait]
    impl DashboardSource for SnapshotOnlySource {
        async fn find_paid_orders(&self, _store_id: Uuid) -> Result<Vec<PaidOrder>, AppError> {
            Err(AppError::DatabaseError(sqlx::Error::PoolClosed))
        }

        async fn load_snapshot(&self, _store_id: Uuid) -> Result<DashboardSnapshot, AppError> {
            Ok(self.0.clone())
        }
    }

    fn service(source: Arc<InMemorySource>) -> DashboardService {
        DashboardService::new(source)
    }

    #[tokio::test]
    async fn store_without_orders_has_zero_revenue() {
        let svc = service(Arc::new(InMemorySource::default()));
        assert_eq!(svc.total_revenue(Uuid::new_v4()).await.unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn unpaid_orders_do_not_count() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, false, &["99.99", "10.00"]);

        let svc = service(source);
        assert_eq!(svc.total_revenue(store).await.unwrap(), Decimal::ZERO);
        assert_eq!(svc.overview(store).await.unwrap().sales_count, 0);
    }

    #[tokio::test]
    async fn single_paid_order_sums_its_items() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, true, &["10.00", "5.50"]);

        let total = service(source).total_revenue(store).await.unwrap();
        assert_eq!(total, dec("15.50"));
        assert_eq!(total.to_string(), "15.50");
    }

    #[tokio::test]
    async fn paid_orders_are_summed_together() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, true, &["10.00"]);
        source.order(store, true, &["2.25", "2.25"]);
        source.order(store, false, &["1000.00"]);

        let svc = service(source);
        assert_eq!(svc.total_revenue(store).await.unwrap(), dec("14.50"));
        assert_eq!(svc.overview(store).await.unwrap().sales_count, 2);
    }

    #[tokio::test]
    async fn other_stores_never_contribute() {
        let source = Arc::new(InMemorySource::default());
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        source.order(a, true, &["3.00"]);
        source.order(b, true, &["500.00", "250.00"]);

        let svc = service(source);
        assert_eq!(svc.total_revenue(a).await.unwrap(), dec("3.00"));
        assert_eq!(svc.total_revenue(b).await.unwrap(), dec("750.00"));
    }

    #[tokio::test]
    async fn repeated_calls_on_same_snapshot_agree() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, true, &["7.77", "0.01"]);

        let svc = service(source);
        let first = svc.total_revenue(store).await.unwrap();
        let second = svc.total_revenue(store).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn decimal_sums_are_exact() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, true, &["0.10", "0.20"]);

        let total = service(source).total_revenue(store).await.unwrap();
        assert_eq!(total, dec("0.30"));
    }

    // Comportamento atual, não regra de negócio garantida: a receita usa o
    // preço vigente do produto, então editar o preço muda pedidos já pagos.
    #[tokio::test]
    async fn revenue_follows_current_product_price() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, true, &["10.00"]);
        let product_id = source.orders.read().unwrap()[0].product_ids[0];

        let svc = service(source.clone());
        assert_eq!(svc.total_revenue(store).await.unwrap(), dec("10.00"));

        source.set_price(product_id, "12.50");
        assert_eq!(svc.total_revenue(store).await.unwrap(), dec("12.50"));
    }

    #[tokio::test]
    async fn data_access_failures_propagate() {
        let svc = DashboardService::new(Arc::new(FailingSource));
        let err = svc.total_revenue(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(sqlx::Error::PoolTimedOut)));
        assert!(svc.overview(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn graph_buckets_revenue_by_month_of_any_year() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        let at = |y, m| Utc.with_ymd_and_hms(y, m, 10, 0, 0, 0).unwrap();
        source.order_at(store, true, at(2025, 1), &["10.00"]);
        source.order_at(store, true, at(2026, 1), &["5.00"]);
        source.order_at(store, true, at(2026, 12), &["1.25"]);
        source.order_at(store, false, at(2026, 3), &["99.00"]);

        let graph = service(source).graph_revenue(store).await.unwrap();

        assert_eq!(graph.len(), 12);
        assert_eq!(graph[0], GraphEntry { name: "Jan".into(), total: dec("15.00") });
        assert_eq!(graph[2].total, Decimal::ZERO);
        assert_eq!(graph[11], GraphEntry { name: "Dec".into(), total: dec("1.25") });
    }

    #[tokio::test]
    async fn overview_combines_all_cards() {
        let source = Arc::new(InMemorySource::default());
        let store = Uuid::new_v4();
        source.order(store, true, &["10.00", "5.50"]);
        source.order(store, false, &["3.00"]);
        let archived = source.product(store, "8.00");
        source.archived.write().unwrap().push(archived);

        let overview = service(source).overview(store).await.unwrap();

        assert_eq!(overview.total_revenue, dec("15.50"));
        assert_eq!(overview.sales_count, 1);
        assert_eq!(overview.stock_count, 3);
        assert_eq!(overview.graph_revenue.len(), 12);
    }

    #[tokio::test]
    async fn overview_cards_come_from_one_snapshot() {
        let snapshot = DashboardSnapshot {
            orders: vec![PaidOrder {
                id: Uuid::new_v4(),
                created_at: Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
                items: vec![PaidOrderLine { price: dec("4.00") }, PaidOrderLine { price: dec("6.00") }],
            }],
            stock_count: 7,
        };
        let svc = DashboardService::new(Arc::new(SnapshotOnlySource(snapshot)));

        let overview = svc.overview(Uuid::new_v4()).await.unwrap();

        assert_eq!(overview.total_revenue, dec("10.00"));
        assert_eq!(overview.sales_count, 1);
        assert_eq!(overview.stock_count, 7);
        assert_eq!(overview.graph_revenue[9].total, dec("10.00"));
    }
}
