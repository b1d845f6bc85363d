use chrono::Utc;
use log::debug;
use sqlx::sqlite::SqlitePool;
use sqlx::Error as SqlxError;

use super::models::{LogRecord, NewOrder, OrderRecord};

/// 주문 저장소 (추가 전용)
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 주문 저장
    ///
    /// INSERT 한 건을 단일 트랜잭션으로 커밋한다.
    /// 커밋 전 오류가 나면 트랜잭션이 drop되면서 롤백된다.
    pub async fn save(&self, order: &NewOrder) -> Result<i64, SqlxError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            "INSERT INTO orders
             (sender_pk, receiver_pk, buy_currency, sell_currency, buy_amount, sell_amount, signature)
             VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&order.sender_pk)
        .bind(&order.receiver_pk)
        .bind(&order.buy_currency)
        .bind(&order.sell_currency)
        .bind(&order.buy_amount)
        .bind(&order.sell_amount)
        .bind(&order.signature)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!("주문 저장 완료: id={}", id);

        Ok(id)
    }

    /// 전체 주문 조회 (삽입 순서)
    pub async fn find_all(&self) -> Result<Vec<OrderRecord>, SqlxError> {
        let orders = sqlx::query_as::<_, OrderRecord>(
            "SELECT id, sender_pk, receiver_pk, buy_currency, sell_currency, buy_amount, sell_amount, signature
             FROM orders
             ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

}

/// 거부 로그 저장소 (추가 전용)
#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: SqlitePool,
}

impl LogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 로그 기록 (logtime은 쓰기 시점)
    pub async fn save(&self, message: &str) -> Result<i64, SqlxError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query("INSERT INTO logs (logtime, message) VALUES (?, ?)")
            .bind(Utc::now())
            .bind(message)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        tx.commit().await?;
        debug!("거부 로그 저장 완료: id={}", id);

        Ok(id)
    }

    /// 전체 로그 조회 (삽입 순서)
    pub async fn find_all(&self) -> Result<Vec<LogRecord>, SqlxError> {
        let logs = sqlx::query_as::<_, LogRecord>(
            "SELECT id, logtime, message
             FROM logs
             ORDER BY id ASC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

}
