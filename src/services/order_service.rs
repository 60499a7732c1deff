// src/services/order_service.rs

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::{
        error::{AppError, Resource},
        format::{format_date, format_price},
    },
    db::OrderStore,
    models::order::{Order, OrderColumn, OrderDetail, OrderLineRow},
};

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Cria um pedido não pago com um item por produto informado.
    /// Ids repetidos viram itens separados.
    pub async fn checkout(&self, store_id: Uuid, product_ids: &[Uuid]) -> Result<OrderDetail, AppError> {
        let mut tx = self.store.begin().await?;

        let wanted: HashSet<Uuid> = product_ids.iter().copied().collect();
        let unique: Vec<Uuid> = wanted.iter().copied().collect();
        let found = tx.existing_product_ids(store_id, &unique).await?;
        ensure_all_found(&wanted, &found)?;

        let order = tx.create_order(store_id).await?;

        let mut items = Vec::with_capacity(product_ids.len());
        for product_id in product_ids {
            items.push(tx.add_item(order.id, *product_id).await?);
        }

        tx.commit().await?;

        tracing::info!("🧾 Pedido {} criado na loja {} com {} itens.", order.id, store_id, items.len());
        Ok(OrderDetail { order, items })
    }

    /// Marca o pedido como pago e arquiva os produtos vendidos, tudo ou nada.
    /// Pedido já pago não é alterado de novo.
    pub async fn pay(
        &self,
        store_id: Uuid,
        order_id: Uuid,
        phone: &str,
        address: &str,
    ) -> Result<Order, AppError> {
        let mut tx = self.store.begin().await?;

        let Some(order) = tx.mark_paid(store_id, order_id, phone, address).await? else {
            return match tx.find_order(store_id, order_id).await? {
                Some(_) => Err(AppError::ResourceInUse(Resource::Order)),
                None => Err(AppError::NotFound(Resource::Order)),
            };
        };

        let product_ids = tx.item_product_ids(order_id).await?;
        let archived = tx.archive_products(store_id, &product_ids).await?;

        tx.commit().await?;

        tracing::info!("💰 Pedido {} pago; {} produtos arquivados.", order.id, archived);
        Ok(order)
    }

    pub async fn list_columns(&self, store_id: Uuid) -> Result<Vec<OrderColumn>, AppError> {
        let rows = self.store.list_lines(store_id).await?;
        Ok(group_order_rows(rows))
    }
}

/// Todo id pedido precisa existir na loja.
fn ensure_all_found(wanted: &HashSet<Uuid>, found: &[Uuid]) -> Result<(), AppError> {
    let found: HashSet<&Uuid> = found.iter().collect();
    if wanted.iter().all(|id| found.contains(id)) {
        Ok(())
    } else {
        Err(AppError::NotFound(Resource::Product))
    }
}

/// Uma linha formatada por pedido; o total usa o preço atual dos produtos.
pub(crate) fn group_order_rows(rows: Vec<OrderLineRow>) -> Vec<OrderColumn> {
    struct Pending {
        row: OrderLineRow,
        names: Vec<String>,
        total: Decimal,
    }

    let mut pending: Vec<Pending> = Vec::new();

    for row in rows {
        let name = row.product_name.clone();
        let price = row.price.unwrap_or(Decimal::ZERO);

        match pending.last_mut() {
            Some(current) if current.row.id == row.id => {
                current.names.extend(name);
                current.total += price;
            }
            _ => pending.push(Pending {
                names: name.into_iter().collect(),
                total: price,
                row,
            }),
        }
    }

    pending
        .into_iter()
        .map(|p| OrderColumn {
            id: p.row.id,
            phone: p.row.phone,
            address: p.row.address,
            products: p.names.join(", "),
            total_price: format_price(p.total),
            is_paid: p.row.is_paid,
            created_at: format_date(p.row.created_at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::order_repo::OrderTransaction;
    use crate::models::order::OrderItem;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::Mutex;

    fn line(id: Uuid, product: Option<(&str, &str)>) -> OrderLineRow {
        OrderLineRow {
            id,
            phone: "555-0100".into(),
            address: "Rua A, 1".into(),
            is_paid: true,
            created_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
            product_name: product.map(|(n, _)| n.to_string()),
            price: product.map(|(_, p)| Decimal::from_str(p).unwrap()),
        }
    }

    #[test]
    fn order_rows_join_product_names_and_sum_prices() {
        let id = Uuid::new_v4();
        let columns = group_order_rows(vec![
            line(id, Some(("Basic tee", "10.00"))),
            line(id, Some(("Cap", "5.50"))),
        ]);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].products, "Basic tee, Cap");
        assert_eq!(columns[0].total_price, "$15.50");
        assert_eq!(columns[0].created_at, "October 16th, 2026");
    }

    #[test]
    fn each_order_gets_its_own_row_in_query_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let columns = group_order_rows(vec![
            line(a, Some(("Tee", "1.00"))),
            line(b, None),
        ]);

        assert_eq!(columns.iter().map(|c| c.id).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(columns[1].products, "");
        assert_eq!(columns[1].total_price, "$0.00");
    }

    #[test]
    fn every_requested_product_must_be_found() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let wanted: HashSet<Uuid> = [a, b].into_iter().collect();

        assert!(ensure_all_found(&wanted, &[b, a]).is_ok());
        assert!(matches!(
            ensure_all_found(&wanted, &[a]),
            Err(AppError::NotFound(Resource::Product))
        ));
    }

    #[test]
    fn repeated_ids_need_to_be_found_once() {
        let a = Uuid::new_v4();
        let wanted: HashSet<Uuid> = [a, a, a].into_iter().collect();

        assert!(ensure_all_found(&wanted, &[a]).is_ok());
    }

    // --- Banco em memória ---

    #[derive(Debug, Clone, Default)]
    struct Tables {
        // produto -> (loja, arquivado)
        products: HashMap<Uuid, (Uuid, bool)>,
        orders: Vec<Order>,
        items: Vec<OrderItem>,
    }

    #[derive(Default)]
    struct InMemoryOrders {
        committed: Arc<Mutex<Tables>>,
    }

    impl InMemoryOrders {
        fn product(&self, store_id: Uuid) -> Uuid {
            let id = Uuid::new_v4();
            self.committed.lock().unwrap().products.insert(id, (store_id, false));
            id
        }

        fn snapshot(&self) -> Tables {
            self.committed.lock().unwrap().clone()
        }
    }

    // Trabalha numa cópia; só o commit publica.
    struct InMemoryTx {
        staged: Tables,
        committed: Arc<Mutex<Tables>>,
    }

    #[async_trait]
    impl OrderStore for InMemoryOrders {
        async fn begin(&self) -> Result<Box<dyn OrderTransaction>, AppError> {
            Ok(Box::new(InMemoryTx {
                staged: self.snapshot(),
                committed: self.committed.clone(),
            }))
        }

        async fn list_lines(&self, _store_id: Uuid) -> Result<Vec<OrderLineRow>, AppError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl OrderTransaction for InMemoryTx {
        async fn existing_product_ids(&mut self, store_id: Uuid, ids: &[Uuid]) -> Result<Vec<Uuid>, AppError> {
            Ok(ids
                .iter()
                .copied()
                .filter(|id| matches!(self.staged.products.get(id), Some((s, _)) if *s == store_id))
                .collect())
        }

        async fn create_order(&mut self, store_id: Uuid) -> Result<Order, AppError> {
            let now = Utc::now();
            let order = Order {
                id: Uuid::new_v4(),
                store_id,
                is_paid: false,
                phone: String::new(),
                address: String::new(),
                created_at: now,
                updated_at: now,
            };
            self.staged.orders.push(order.clone());
            Ok(order)
        }

        async fn add_item(&mut self, order_id: Uuid, product_id: Uuid) -> Result<OrderItem, AppError> {
            let item = OrderItem { id: Uuid::new_v4(), order_id, product_id };
            self.staged.items.push(item.clone());
            Ok(item)
        }

        async fn find_order(&mut self, store_id: Uuid, order_id: Uuid) -> Result<Option<Order>, AppError> {
            Ok(self
                .staged
                .orders
                .iter()
                .find(|o| o.store_id == store_id && o.id == order_id)
                .cloned())
        }

        async fn mark_paid(
            &mut self,
            store_id: Uuid,
            order_id: Uuid,
            phone: &str,
            address: &str,
        ) -> Result<Option<Order>, AppError> {
            let Some(order) = self
                .staged
                .orders
                .iter_mut()
                .find(|o| o.store_id == store_id && o.id == order_id && !o.is_paid)
            else {
                return Ok(None);
            };
            order.is_paid = true;
            order.phone = phone.to_string();
            order.address = address.to_string();
            Ok(Some(order.clone()))
        }

        async fn item_product_ids(&mut self, order_id: Uuid) -> Result<Vec<Uuid>, AppError> {
            Ok(self
                .staged
                .items
                .iter()
                .filter(|i| i.order_id == order_id)
                .map(|i| i.product_id)
                .collect())
        }

        async fn archive_products(&mut self, store_id: Uuid, ids: &[Uuid]) -> Result<u64, AppError> {
            let mut archived = 0;
            for (id, (owner, is_archived)) in self.staged.products.iter_mut() {
                if *owner == store_id && ids.contains(id) {
                    *is_archived = true;
                    archived += 1;
                }
            }
            Ok(archived)
        }

        async fn commit(self: Box<Self>) -> Result<(), AppError> {
            *self.committed.lock().unwrap() = self.staged;
            Ok(())
        }
    }

    fn service_over(db: &Arc<InMemoryOrders>) -> OrderService {
        OrderService::new(db.clone())
    }

    #[tokio::test]
    async fn checkout_keeps_one_item_per_requested_id() {
        let db = Arc::new(InMemoryOrders::default());
        let store = Uuid::new_v4();
        let (tee, cap) = (db.product(store), db.product(store));

        let detail = service_over(&db).checkout(store, &[tee, cap, tee]).await.unwrap();

        assert!(!detail.order.is_paid);
        let ids: Vec<Uuid> = detail.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![tee, cap, tee]);
        assert_eq!(db.snapshot().items.len(), 3);
    }

    #[tokio::test]
    async fn checkout_rejects_products_of_another_store_without_writing() {
        let db = Arc::new(InMemoryOrders::default());
        let (store, other) = (Uuid::new_v4(), Uuid::new_v4());
        let own = db.product(store);
        let foreign = db.product(other);

        let err = service_over(&db).checkout(store, &[own, foreign]).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Product)));

        let err = service_over(&db).checkout(store, &[Uuid::new_v4()]).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Product)));

        let tables = db.snapshot();
        assert!(tables.orders.is_empty());
        assert!(tables.items.is_empty());
    }

    #[tokio::test]
    async fn paying_archives_the_ordered_products_only() {
        let db = Arc::new(InMemoryOrders::default());
        let store = Uuid::new_v4();
        let (sold, kept) = (db.product(store), db.product(store));
        let svc = service_over(&db);

        let detail = svc.checkout(store, &[sold]).await.unwrap();
        let paid = svc.pay(store, detail.order.id, "555-0100", "Rua A, 1").await.unwrap();

        assert!(paid.is_paid);
        assert_eq!(paid.phone, "555-0100");
        let tables = db.snapshot();
        assert_eq!(tables.products[&sold], (store, true));
        assert_eq!(tables.products[&kept], (store, false));
        assert!(tables.orders[0].is_paid);
    }

    #[tokio::test]
    async fn paid_order_cannot_be_paid_again() {
        let db = Arc::new(InMemoryOrders::default());
        let store = Uuid::new_v4();
        let product = db.product(store);
        let svc = service_over(&db);

        let detail = svc.checkout(store, &[product]).await.unwrap();
        svc.pay(store, detail.order.id, "555-0100", "Rua A, 1").await.unwrap();

        let err = svc.pay(store, detail.order.id, "555-9999", "Outra rua").await.unwrap_err();
        assert!(matches!(err, AppError::ResourceInUse(Resource::Order)));
        assert_eq!(db.snapshot().orders[0].phone, "555-0100");
    }

    #[tokio::test]
    async fn paying_unknown_or_foreign_order_is_not_found() {
        let db = Arc::new(InMemoryOrders::default());
        let (store, other) = (Uuid::new_v4(), Uuid::new_v4());
        let product = db.product(store);
        let svc = service_over(&db);
        let detail = svc.checkout(store, &[product]).await.unwrap();

        let err = svc.pay(other, detail.order.id, "1", "a").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Order)));

        let err = svc.pay(store, Uuid::new_v4(), "1", "a").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::Order)));
        assert!(!db.snapshot().products[&product].1);
    }
}
