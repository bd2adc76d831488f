use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::sale::model::Sale;
use business::domain::sale::repository::SaleRepository;
use business::domain::sale::value_objects::SaleStatus;

use super::entity::{SaleEntity, SaleItemEntity, assemble_sales};
use crate::errors::map_db_error;

const SELECT_ITEMS: &str = r#"SELECT si.id, si.sale_id, si.product_id, p.name AS product_name,
        si.quantity, si.unit_price, si.subtotal
    FROM sale_items si
    LEFT JOIN products p ON p.id = si.product_id
    WHERE si.sale_id = ANY($1)
    ORDER BY si.sale_id, si.position"#;

pub struct SaleRepositoryPostgres {
    pool: PgPool,
}

impl SaleRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, sale_ids: &[Uuid]) -> Result<Vec<SaleItemEntity>, RepositoryError> {
        if sale_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, SaleItemEntity>(SELECT_ITEMS)
            .bind(sale_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl SaleRepository for SaleRepositoryPostgres {
    async fn get_all(&self, status: Option<SaleStatus>) -> Result<Vec<Sale>, RepositoryError> {
        let sales = sqlx::query_as::<_, SaleEntity>(
            r#"SELECT id, customer_name, status, total_amount, created_at FROM sales
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC"#,
        )
        .bind(status.map(|s| s.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<Uuid> = sales.iter().map(|s| s.id).collect();
        let items = self.load_items(&ids).await?;

        Ok(assemble_sales(sales, items))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Sale, RepositoryError> {
        let sale = sqlx::query_as::<_, SaleEntity>(
            "SELECT id, customer_name, status, total_amount, created_at FROM sales WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(RepositoryError::NotFound)?;

        let items = self.load_items(&[id]).await?;

        assemble_sales(vec![sale], items)
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, sale: &Sale) -> Result<(), RepositoryError> {
        // Sale row and line items commit together; dropping the transaction
        // on error rolls back both, including any stock already taken.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"INSERT INTO sales (id, customer_name, status, total_amount, created_at)
            VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(sale.id)
        .bind(&sale.customer_name)
        .bind(sale.status.to_string())
        .bind(sale.total_amount.minor_units())
        .bind(sale.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for (position, item) in sale.items.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO sale_items (id, sale_id, product_id, position, quantity, unit_price, subtotal)
                VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(item.id)
            .bind(sale.id)
            .bind(item.product_id)
            .bind(position as i32)
            .bind(item.quantity)
            .bind(item.unit_price.minor_units())
            .bind(item.subtotal.minor_units())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    async fn mark_fulfilled(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE sales SET status = $2 WHERE id = $1 AND status = $3",
        )
        .bind(id)
        .bind(SaleStatus::Fulfilled.to_string())
        .bind(SaleStatus::NotFulfilled.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
